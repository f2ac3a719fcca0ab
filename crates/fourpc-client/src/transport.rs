//! HTTP transport behind the client.
//!
//! The client only ever issues GET requests, either reading the whole body
//! or holding the connection open and reading it line by line. [`Transport`]
//! captures exactly that so tests can swap in an in-memory implementation.

use std::io::{BufRead, BufReader};
use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::error::{Error, Result};

/// Blocking GET transport.
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the full response body.
    ///
    /// Non-success statuses are errors; an empty body is returned as-is.
    fn get(&self, url: &str) -> Result<String>;

    /// Open `url` for line-oriented reading. The connection stays open until
    /// the returned reader is dropped or the server closes it.
    fn open(&self, url: &str) -> Result<Box<dyn BufRead + Send>>;
}

/// [`Transport`] backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    timeout: Duration,
    stream_timeout: Option<Duration>,
}

impl HttpTransport {
    /// Create a transport sending `user_agent` on every request.
    ///
    /// `timeout` bounds each action request; `stream_timeout`, when set,
    /// bounds the lifetime of a stream connection.
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        stream_timeout: Option<Duration>,
    ) -> Result<Self> {
        // No client-wide timeout: stream requests must be able to stay open.
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(None)
            .build()?;

        Ok(Self {
            http,
            timeout,
            stream_timeout,
        })
    }

    /// Turn a non-success response into [`Error::Api`].
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).timeout(self.timeout).send()?;
        let response = Self::check_status(response)?;
        Ok(response.text()?)
    }

    fn open(&self, url: &str) -> Result<Box<dyn BufRead + Send>> {
        let mut request = self.http.get(url);
        if let Some(timeout) = self.stream_timeout {
            request = request.timeout(timeout);
        }

        // Both failures go through `Error`'s Display, which never includes the URL.
        let response = request.send().map_err(|e| Error::Connection {
            reason: Error::from(e).to_string(),
        })?;

        let response = Self::check_status(response).map_err(|e| Error::Connection {
            reason: e.to_string(),
        })?;

        Ok(Box::new(BufReader::new(response)))
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }

    fn open(&self, url: &str) -> Result<Box<dyn BufRead + Send>> {
        (**self).open(url)
    }
}
