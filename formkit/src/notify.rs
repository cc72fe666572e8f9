//! Transient success notification.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How long a notification stays visible before auto-dismissing.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Default)]
struct NotifierInner {
    visible: bool,
    timer: Option<CancellationToken>,
}

/// Parent-owned transient confirmation.
///
/// [`signal`](Self::signal) shows the affordance and arms an auto-dismiss
/// timer; a second signal while visible restarts the window rather than
/// queueing. Only one notification is representable at a time. The pending
/// timer is cancelled on drop so it never fires against torn-down state.
///
/// Must be used within a tokio runtime.
#[derive(Debug)]
pub struct Notifier {
    inner: Arc<RwLock<NotifierInner>>,
    duration: Duration,
}

impl Notifier {
    /// Create a notifier with the default dismiss window.
    pub fn new() -> Self {
        Self::with_duration(NOTICE_DURATION)
    }

    /// Create a notifier with a custom dismiss window.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NotifierInner::default())),
            duration,
        }
    }

    /// Whether the confirmation affordance is currently shown.
    pub fn is_visible(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.visible)
            .unwrap_or(false)
    }

    /// Show the affordance and (re)arm the auto-dismiss timer.
    pub fn signal(&self) {
        let token = CancellationToken::new();
        {
            let Ok(mut inner) = self.inner.write() else {
                return;
            };
            if let Some(previous) = inner.timer.take() {
                previous.cancel();
            }
            inner.visible = true;
            inner.timer = Some(token.clone());
        }

        let inner = Arc::clone(&self.inner);
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::select! {
                // Cancellation wins ties so a restarted window can never be
                // cleared by its predecessor's timer.
                biased;
                () = token.cancelled() => {}
                () = tokio::time::sleep(duration) => {
                    if let Ok(mut inner) = inner.write()
                        && !token.is_cancelled()
                    {
                        inner.visible = false;
                        inner.timer = None;
                    }
                }
            }
        });
    }

    /// Hide the affordance immediately and cancel the pending timer.
    pub fn dismiss(&self) {
        if let Ok(mut inner) = self.inner.write() {
            if let Some(timer) = inner.timer.take() {
                timer.cancel();
            }
            inner.visible = false;
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        // A timer pending past teardown would fire against dropped state.
        if let Ok(mut inner) = self.inner.write()
            && let Some(timer) = inner.timer.take()
        {
            timer.cancel();
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
