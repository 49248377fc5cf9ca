use super::Notifier;
use crate::models::Severity;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub(crate) const TOAST_TIMEOUT_MS: i32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub(crate) struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub(crate) fn push(&mut self, message: &str, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.to_string(),
            severity,
        });
        id
    }

    pub(crate) fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub(crate) fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Reactive toast stack, rendered by `Toaster`.
#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub(crate) fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub(crate) fn items(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub(crate) fn dismiss(&self, id: u64) {
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    /// Adds a toast without arming its timeout.
    fn push(&self, message: &str, severity: Severity) -> u64 {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));
        id
    }

    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || this.dismiss(id))
                .as_ref()
                .unchecked_ref(),
            TOAST_TIMEOUT_MS,
        );
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, severity: Severity) {
        log::debug!("toast ({severity}): {message}");
        let id = self.push(message, severity);
        self.schedule_dismiss(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut q = ToastQueue::default();
        let a = q.push("one", Severity::Success);
        let b = q.push("two", Severity::Error);
        assert!(b > a);
        assert_eq!(q.items().len(), 2);
        assert_eq!(q.items()[0].message, "one");
        assert_eq!(q.items()[1].severity, Severity::Error);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut q = ToastQueue::default();
        let a = q.push("one", Severity::Success);
        let b = q.push("two", Severity::Warning);

        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);

        // Unknown ids are a no-op.
        q.dismiss(999);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_toasts_push_and_dismiss_through_signal() {
        let toasts = Toasts::new();
        let first = toasts.push("Note created successfully", Severity::Success);
        let second = toasts.push("Request failed with status code 502", Severity::Error);

        let items = toasts.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].message, "Note created successfully");
        assert_eq!(items[1].severity, Severity::Error);

        toasts.dismiss(first);
        let items = toasts.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second);
    }
}
