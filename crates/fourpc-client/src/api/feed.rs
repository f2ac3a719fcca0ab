//! Live game stream.

use crate::client::FourPlayerChess;
use crate::error::Result;
use crate::stream::LineStream;

impl FourPlayerChess {
    /// Open the live stream.
    ///
    /// Fails with [`Error::Connection`](crate::Error::Connection) when the
    /// connection cannot be established. The returned [`LineStream`] blocks
    /// on each `next()` until a line arrives and ends when the server
    /// closes the connection.
    pub fn stream(&self) -> Result<LineStream> {
        let reader = self.inner().transport.open(self.endpoints().stream_url())?;
        tracing::info!(tier = %self.tier(), "stream opened");
        Ok(LineStream::new(reader))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::RecordingTransport;
    use crate::{Error, FourPlayerChess};

    #[test]
    fn test_stream_yields_lines() {
        let transport = Arc::new(RecordingTransport::with_body("{\"a\":1}\r\n{\"b\":2}\n"));
        let client = FourPlayerChess::builder()
            .token("tok")
            .transport(Arc::clone(&transport))
            .build()
            .unwrap();

        let lines: Vec<String> = client.stream().unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}"]);
        assert_eq!(
            transport.last_request(),
            "https://4player-beta.chess.com/bot?token=tok&stream=1"
        );
    }

    #[test]
    fn test_stream_open_failure() {
        let client = FourPlayerChess::builder()
            .token("tok")
            .transport(RecordingTransport::with_status(502))
            .build()
            .unwrap();

        let err = client.stream().unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
    }
}
