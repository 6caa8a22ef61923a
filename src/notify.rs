// --- File: src/notify.rs ---
//! Service-availability notices.
//!
//! The backend runs on free-tier hosting and hibernates when idle. While it
//! wakes up it answers 503, and the first request can take up to 50 seconds.
//! Presentation code usually wants to tell the user to retry in a minute, so
//! the client exposes that moment as a callback instead of rendering anything
//! itself.

use tracing::warn;

/// Sink for backend-availability notices.
pub trait ServiceNotice: Send + Sync {
    /// Invoked exactly once per 503 response, before the error reaches the
    /// caller. Implementations may block (e.g. a modal dialog); the request
    /// has already completed by the time this runs.
    fn backend_waking(&self);
}

/// Default sink: logs the advisory instead of surfacing any UI.
pub struct LogNotice;

impl ServiceNotice for LogNotice {
    fn backend_waking(&self) {
        warn!(
            "backend is waking from hibernation; the first request can take \
             up to 50 seconds, retry in a minute"
        );
    }
}
