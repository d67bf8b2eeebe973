//! Host Boundary
//!
//! The contract the display core consumes from its surrounding host
//! process. The host owns content production and transport; the core only
//! sees two things: a one-shot initial content fetch (this trait) and the
//! update-event channel handed out by the controller.
//!
//! Implementations over a real IPC mechanism live with the host;
//! [`FixedHost`] is the in-process implementation used by the headless
//! shell and by tests.

use async_trait::async_trait;
use thiserror::Error;

/// Errors the host boundary can surface.
///
/// All of them degrade silently: the controller logs the failure and
/// keeps showing its last-known-good state. Nothing here is fatal.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host is not reachable at all.
    #[error("host unavailable: {0}")]
    Unavailable(String),
    /// The host was reached but the fetch failed.
    #[error("content fetch failed: {0}")]
    Fetch(String),
    /// IO error from the underlying mechanism.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The initial-content side of the host contract.
///
/// A single no-argument asynchronous fetch, invoked once at controller
/// activation. An empty result and a failed fetch are treated
/// identically: the widget keeps its placeholder.
#[async_trait]
pub trait ContentHost: Send + Sync {
    /// Fetch the content the widget should show at startup.
    async fn initial_content(&self) -> Result<String, HostError>;
}

/// In-process host serving a fixed initial content string.
#[derive(Clone, Debug, Default)]
pub struct FixedHost {
    content: String,
}

impl FixedHost {
    /// Host that serves the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Host that serves an empty string, leaving the placeholder in place.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentHost for FixedHost {
    async fn initial_content(&self) -> Result<String, HostError> {
        Ok(self.content.clone())
    }
}
