//! SPARQL `DESCRIBE` client for graphform
//!
//! Fetches the Turtle description of a resource from a SPARQL endpoint.
//! The query shape is fixed - a single `DESCRIBE <iri>` - and the
//! response body is returned as raw Turtle text; parsing it into a
//! `StatementSet` is the caller's concern.
//!
//! # Transport
//!
//! The request goes out as GET with the query in the URL and
//! `Accept: text/turtle`. Some endpoints reject long or GET-borne
//! queries, so a non-success status triggers exactly one retry as a
//! form-encoded POST. A non-success status on the fallback surfaces as
//! [`ClientError::Status`] with the code; transport failures surface as
//! [`ClientError::Http`]. There is no retry beyond the single fallback.
//!
//! Dropping the returned future cancels the in-flight request, which is
//! how callers supersede a fetch when the target resource changes.
//!
//! # Example
//!
//! ```ignore
//! use graphform_client::DescribeClient;
//!
//! let client = DescribeClient::new("https://dbpedia.org/sparql");
//! let turtle = client.describe("http://dbpedia.org/resource/Paris").await?;
//! ```

mod error;

pub use error::{ClientError, Result};

use std::time::Duration;

/// Configuration for a [`DescribeClient`]
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// SPARQL endpoint URL
    pub endpoint: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with default timeouts
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// HTTP client for the fixed `DESCRIBE <iri>` query shape
pub struct DescribeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DescribeClient {
    /// Create a client with default timeouts
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(endpoint))
    }

    /// Create a client from configuration
    pub fn from_config(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint,
        }
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the Turtle description of `iri`
    ///
    /// Returns the raw Turtle response body. GET first, one POST
    /// fallback on non-success status, then the status is surfaced.
    pub async fn describe(&self, iri: &str) -> Result<String> {
        let query = describe_query(iri);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query.as_str())])
            .header(reqwest::header::ACCEPT, "text/turtle")
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.text().await?);
        }

        tracing::debug!(
            status = response.status().as_u16(),
            iri,
            "DESCRIBE via GET rejected, retrying as POST"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("query", query.as_str())])
            .header(reqwest::header::ACCEPT, "text/turtle")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            tracing::warn!(status = status.as_u16(), iri, "DESCRIBE failed");
            Err(ClientError::status(status.as_u16()))
        }
    }
}

/// Build the fixed `DESCRIBE <iri>` query string
fn describe_query(iri: &str) -> String {
    format!("DESCRIBE <{}>", iri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PARIS: &str = "http://example.org/Paris";
    const TURTLE: &str = "<http://example.org/Paris> <http://example.org/name> \"Paris\" .";

    #[test]
    fn test_describe_query_shape() {
        assert_eq!(
            describe_query(PARIS),
            "DESCRIBE <http://example.org/Paris>"
        );
    }

    #[tokio::test]
    async fn test_describe_via_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("query", describe_query(PARIS)))
            .and(header("accept", "text/turtle"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TURTLE))
            .mount(&server)
            .await;

        let client = DescribeClient::new(server.uri());
        let body = client.describe(PARIS).await.unwrap();
        assert_eq!(body, TURTLE);
    }

    #[tokio::test]
    async fn test_get_failure_falls_back_to_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(405))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains("DESCRIBE"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TURTLE))
            .mount(&server)
            .await;

        let client = DescribeClient::new(server.uri());
        let body = client.describe(PARIS).await.unwrap();
        assert_eq!(body, TURTLE);
    }

    #[tokio::test]
    async fn test_fallback_failure_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = DescribeClient::new(server.uri());
        let err = client.describe(PARIS).await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_successful_get_sends_no_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TURTLE))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TURTLE))
            .expect(0)
            .mount(&server)
            .await;

        let client = DescribeClient::new(server.uri());
        client.describe(PARIS).await.unwrap();
    }
}
