use crate::utils::random_delay;
use crate::{Error, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A GET request for one page of a listing API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl PageRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.push((key.to_string(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Fetches the body of a page. Any non-success outcome is an error.
pub trait Transport {
    fn get(&self, request: &PageRequest) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &PageRequest) -> Result<String> {
        (**self).get(request)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    client: Client,
    throttle: bool,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            throttle: false,
        })
    }

    /// Sleeps a short random interval before every request.
    pub fn with_throttle(mut self, throttle: bool) -> Self {
        self.throttle = throttle;
        self
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &PageRequest) -> Result<String> {
        if self.throttle {
            random_delay();
        }

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        debug!(url = %request.url, query = ?request.query, "GET");

        let response = builder.send().map_err(|source| Error::Request {
            url: request.url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| Error::Request {
            url: request.url.clone(),
            source,
        })
    }
}
