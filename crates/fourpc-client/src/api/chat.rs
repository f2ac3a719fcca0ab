//! Game chat.

use crate::client::FourPlayerChess;
use crate::error::Result;

impl FourPlayerChess {
    /// Post `message` to the game chat. The message is form-encoded.
    pub fn chat(&self, message: &str) -> bool {
        Self::accepted("chat", self.try_chat(message))
    }

    /// Like [`chat`](Self::chat), returning the response body or the failure.
    pub fn try_chat(&self, message: &str) -> Result<String> {
        let url = self.endpoints().chat_url(message);
        self.send("chat", &url)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::RecordingTransport;
    use crate::FourPlayerChess;

    #[test]
    fn test_chat_encodes_message() {
        let transport = Arc::new(RecordingTransport::ok());
        let client = FourPlayerChess::builder()
            .token("tok")
            .transport(Arc::clone(&transport))
            .build()
            .unwrap();

        assert!(client.chat("hello world"));
        assert_eq!(
            transport.last_request(),
            "https://4player-beta.chess.com/bot?token=tok&chat=hello+world"
        );

        assert!(client.chat("50/50?"));
        assert!(transport.last_request().ends_with("chat=50%2F50%3F"));
    }

    #[test]
    fn test_chat_returns_body() {
        let transport = RecordingTransport::with_body("sent");
        let client = FourPlayerChess::builder()
            .token("tok")
            .transport(transport)
            .build()
            .unwrap();

        assert_eq!(client.try_chat("gl").unwrap(), "sent");
    }
}
