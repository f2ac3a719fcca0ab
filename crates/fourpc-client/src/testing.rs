//! In-memory transport for unit tests.

use std::io::{BufRead, Cursor};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Records every requested URL and replies with a canned outcome.
pub(crate) struct RecordingTransport {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

enum Reply {
    Body(String),
    Status(u16),
}

impl RecordingTransport {
    pub(crate) fn ok() -> Self {
        Self::with_body("ok")
    }

    pub(crate) fn with_body(body: &str) -> Self {
        Self {
            reply: Reply::Body(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_status(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, url: &str) {
        self.requests.lock().unwrap().push(url.to_string());
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> String {
        self.requests().pop().expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str) -> Result<String> {
        self.record(url);
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status) => Err(Error::Api {
                status: *status,
                body: String::new(),
            }),
        }
    }

    fn open(&self, url: &str) -> Result<Box<dyn BufRead + Send>> {
        self.record(url);
        match &self.reply {
            Reply::Body(body) => Ok(Box::new(Cursor::new(body.clone().into_bytes()))),
            Reply::Status(status) => Err(Error::Connection {
                reason: format!("HTTP {status}"),
            }),
        }
    }
}
