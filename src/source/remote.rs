//! HTTP(S) record source.
//!
//! One blocking GET per fetch. No pagination parameters are sent: every fetch
//! asks for the complete collection.

use crate::model::error::InputError;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Remote endpoint returning a JSON array of records.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: Url,
    client: Client,
}

impl RemoteSource {
    /// Create a source for `url` whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidUrl` if the URL does not parse, and
    /// `InputError::Network` if the HTTP client cannot be built.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, InputError> {
        let parsed = Url::parse(url).map_err(|e| InputError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InputError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            url: parsed,
            client,
        })
    }

    /// Endpoint being fetched.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// GET the collection and return the body as text.
    ///
    /// # Errors
    ///
    /// `InputError::Network` for transport failures, `InputError::Http` for
    /// non-2xx responses.
    pub fn fetch(&self) -> Result<String, InputError> {
        debug!(url = %self.url, "GET record collection");

        let network = |e: reqwest::Error| InputError::Network {
            url: self.url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(self.url.clone()).send().map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(InputError::Http {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        response.text().map_err(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_relative_url() {
        let result = RemoteSource::new("members.json", Duration::from_secs(1));
        assert!(matches!(result, Err(InputError::InvalidUrl { .. })));
    }

    #[test]
    fn fetch_reports_network_error_for_closed_port() {
        // Port 1 on loopback is never listening in test environments.
        let source = RemoteSource::new("http://127.0.0.1:1/members.json", Duration::from_secs(2))
            .unwrap();

        let err = source.fetch().unwrap_err();

        match err {
            InputError::Network { url, .. } => {
                assert_eq!(url, "http://127.0.0.1:1/members.json");
            }
            other => panic!("Expected Network error, got: {:?}", other),
        }
    }
}
