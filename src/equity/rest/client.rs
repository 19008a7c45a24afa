//! Trading212 Equity REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, StaticCredentials};
use crate::error::{ApiError, Trading212Error};
use crate::types::Environment;

/// The Trading212 Equity REST API client.
///
/// This client provides access to all documented Trading212 Equity REST
/// endpoints. Every endpoint requires an API key, which is sent verbatim in
/// the `Authorization` header of each request. The client performs exactly
/// one HTTP exchange per method call: no retries, no caching, no rate
/// limiting.
///
/// # Example
///
/// ```rust,no_run
/// use trading212_api_client::equity::rest::EquityRestClient;
/// use trading212_api_client::types::Environment;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = EquityRestClient::new("my_api_key", Environment::Demo)?;
///
///     let cash = client.get_account_cash().await?;
///     println!("Free cash: {}", cash.free);
///
///     Ok(())
/// }
/// ```
///
/// For more control, use the builder:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use trading212_api_client::auth::EnvCredentials;
/// use trading212_api_client::equity::rest::EquityRestClient;
/// use trading212_api_client::types::Environment;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = EquityRestClient::builder()
///         .environment(Environment::Live)
///         .credentials(Arc::new(EnvCredentials::from_env()))
///         .build()?;
///
///     let portfolio = client.get_portfolio().await?;
///     println!("{} open positions", portfolio.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct EquityRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
}

impl EquityRestClient {
    /// Create a new client for the given environment.
    ///
    /// Fails with [`Trading212Error::Config`] if the API key is empty.
    pub fn new(
        api_key: impl Into<String>,
        environment: Environment,
    ) -> Result<Self, Trading212Error> {
        Self::builder()
            .api_key(api_key)
            .environment(environment)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> EquityRestClientBuilder {
        EquityRestClientBuilder::new()
    }

    /// Make a GET request.
    pub(crate) async fn get<T>(&self, endpoint: &str) -> Result<T, Trading212Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, self.api_key())
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, Trading212Error>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| Trading212Error::Config(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };
        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, self.api_key())
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, Trading212Error>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, self.api_key())
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<(), Trading212Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .delete(&url)
            .header(AUTHORIZATION, self.api_key())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Trading212 API request failed");
            return Err(Trading212Error::Api(ApiError::new(status.as_u16(), body)));
        }
        Ok(())
    }

    /// Parse a response from the Trading212 API.
    ///
    /// Trading212 signals errors through the HTTP status code; the body of an
    /// error response is kept verbatim for the caller to inspect.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, Trading212Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "Trading212 API request failed");
            return Err(Trading212Error::Api(ApiError::new(status.as_u16(), body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            Trading212Error::Decode(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }

    fn api_key(&self) -> String {
        self.credentials.get_credentials().expose_key().to_owned()
    }
}

impl std::fmt::Debug for EquityRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquityRestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.credentials.get_credentials().masked())
            .finish()
    }
}

/// Builder for [`EquityRestClient`].
pub struct EquityRestClientBuilder {
    environment: Environment,
    base_url: Option<String>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl EquityRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            credentials: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Select the live or demo environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL (useful for testing with a mock server).
    ///
    /// Takes precedence over [`environment`](Self::environment).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key directly.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials = Some(Arc::new(StaticCredentials::new(api_key)));
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a request timeout on the underlying transport.
    ///
    /// Without this the transport's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Trading212Error::Config`] if no API key was supplied or
    /// the key is empty, and with [`Trading212Error::Url`] if a base URL
    /// override does not parse.
    pub fn build(self) -> Result<EquityRestClient, Trading212Error> {
        let credentials = self
            .credentials
            .ok_or_else(|| Trading212Error::Config("API key is required".to_string()))?;
        if credentials.get_credentials().is_empty() {
            return Err(Trading212Error::Config(
                "API key must not be empty".to_string(),
            ));
        }

        let base_url = match self.base_url {
            Some(url) => {
                url::Url::parse(&url)?;
                url.trim_end_matches('/').to_string()
            }
            None => self.environment.base_url().to_string(),
        };

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("trading212-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("trading212-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        // Tracing middleware only: every method call maps to exactly one
        // transport request.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(EquityRestClient {
            http_client: client,
            base_url,
            credentials,
        })
    }
}

impl Default for EquityRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_api_key() {
        let result = EquityRestClient::builder().build();
        assert!(matches!(result, Err(Trading212Error::Config(_))));
    }

    #[test]
    fn test_build_rejects_empty_api_key() {
        let result = EquityRestClient::builder().api_key("").build();
        assert!(matches!(result, Err(Trading212Error::Config(_))));
    }

    #[test]
    fn test_environment_selects_base_url() {
        let live = EquityRestClient::new("key", Environment::Live).unwrap();
        assert_eq!(live.base_url, "https://live.trading212.com");

        let demo = EquityRestClient::new("key", Environment::Demo).unwrap();
        assert_eq!(demo.base_url, "https://demo.trading212.com");
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = EquityRestClient::builder()
            .api_key("key")
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_build_rejects_invalid_base_url() {
        let result = EquityRestClient::builder()
            .api_key("key")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(Trading212Error::Url(_))));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let client = EquityRestClient::new("12345678secretKey", Environment::Demo).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("12345678secretKey"));
        assert!(debug_str.contains("****tKey"));
    }
}
