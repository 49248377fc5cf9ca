//! Ports the mutation layer talks to, plus their browser adapters.
//!
//! Nothing here is ambient: components get the adapters from app context and
//! tests substitute in-memory fakes.

mod confirm;
mod progress;
mod toast;

pub(crate) use confirm::BrowserConfirm;
pub(crate) use progress::Progress;
pub(crate) use toast::{Toast, Toasts};

use crate::cache::{QueryClient, QueryKey};
use crate::models::Severity;

/// Global in-flight indicator. `start` is idempotent.
pub(crate) trait ProgressSignal {
    fn start(&self);
    fn done(&self);
}

pub(crate) trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

pub(crate) trait CacheInvalidator {
    fn invalidate(&self, keys: &[QueryKey]);
}

/// Blocking yes/no prompt.
pub(crate) trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

impl CacheInvalidator for QueryClient {
    fn invalidate(&self, keys: &[QueryKey]) {
        self.invalidate_queries(keys);
    }
}
