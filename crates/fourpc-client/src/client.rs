//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};
use crate::types::{AccessTier, Endpoints};

/// Default timeout for action requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    "CrystalChessApiConsole/v01.0.0 (https://github.com/crystal-chess)";

/// Four-player chess bot API client.
///
/// Every action is a single blocking GET. The `bool` methods report whether
/// the server accepted the action; each has a `try_` twin that returns the
/// response body or the reason for failure.
///
/// # Example
///
/// ```no_run
/// use fourpc_client::{AccessTier, FourPlayerChess};
///
/// # fn example() -> fourpc_client::Result<()> {
/// let client = FourPlayerChess::builder()
///     .token("my-bot-token")
///     .tier(AccessTier::Main)
///     .build()?;
///
/// if client.play("e2", "e4") {
///     client.chat("good luck");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FourPlayerChess {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// Transport used for every request.
    pub(crate) transport: Box<dyn Transport>,
    /// Endpoint table rendered for the configured host and token.
    pub(crate) endpoints: Endpoints,
    /// Access tier the client was built for.
    pub(crate) tier: AccessTier,
    /// User agent sent by the default transport.
    pub(crate) user_agent: String,
}

impl FourPlayerChess {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the beta tier with the default user agent.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// The rendered endpoint table.
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// The access tier this client was built for.
    pub fn tier(&self) -> AccessTier {
        self.inner.tier
    }

    /// The configured user agent.
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Send an action request. An empty body counts as a rejection.
    pub(crate) fn send(&self, action: &'static str, url: &str) -> Result<String> {
        tracing::debug!(action, "sending bot action");
        let body = self.inner.transport.get(url)?;
        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(body)
    }

    /// Collapse an action result to the success flag, logging the failure.
    pub(crate) fn accepted(action: &'static str, result: Result<String>) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(action, error = %e, "bot action failed");
                false
            }
        }
    }
}

impl fmt::Debug for FourPlayerChess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The endpoint table embeds the token.
        f.debug_struct("FourPlayerChess")
            .field("tier", &self.inner.tier)
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [`FourPlayerChess`] client.
pub struct ClientBuilder {
    token: Option<String>,
    tier: AccessTier,
    host: Option<String>,
    user_agent: Option<String>,
    timeout: Duration,
    stream_timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            tier: AccessTier::default(),
            host: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            stream_timeout: None,
            transport: None,
        }
    }

    /// Set the bot token. Surrounding whitespace is trimmed.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Select the beta or main API host.
    pub fn tier(mut self, tier: AccessTier) -> Self {
        self.tier = tier;
        self
    }

    /// Override the tier host, e.g. `http://127.0.0.1:8080`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set a custom user agent. An empty string keeps the default.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the action request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bound the lifetime of stream connections. Unbounded by default.
    pub fn stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = Some(timeout);
        self
    }

    /// Use a custom transport instead of HTTP. The user agent and timeouts
    /// are then the transport's concern.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FourPlayerChess> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config("token is required".to_string()))?
            .to_string();

        let base = match &self.host {
            Some(host) => {
                let host = host.trim().trim_end_matches('/');
                if host.is_empty() {
                    return Err(Error::Config("host must not be empty".to_string()));
                }
                url::Url::parse(host)
                    .map_err(|e| Error::Config(format!("invalid host '{host}': {e}")))?;
                host.to_string()
            }
            None => self.tier.host().to_string(),
        };

        let user_agent = self
            .user_agent
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(
                &user_agent,
                self.timeout,
                self.stream_timeout,
            )?),
        };

        Ok(FourPlayerChess {
            inner: Arc::new(ClientInner {
                transport,
                endpoints: Endpoints::new(&base, &token),
                tier: self.tier,
                user_agent,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("tier", &self.tier)
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("stream_timeout", &self.stream_timeout)
            .finish_non_exhaustive()
    }
}
