use super::ProgressSignal;
use leptos::prelude::*;

/// Top-of-page progress bar state.
#[derive(Clone, Copy)]
pub(crate) struct Progress {
    active: RwSignal<bool>,
}

impl Progress {
    pub(crate) fn new() -> Self {
        Self {
            active: RwSignal::new(false),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSignal for Progress {
    fn start(&self) {
        if !self.active.get_untracked() {
            self.active.set(true);
        }
    }

    fn done(&self) {
        self.active.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent_and_done_clears() {
        let progress = Progress::new();
        assert!(!progress.is_active());

        progress.start();
        progress.start();
        assert!(progress.is_active());

        progress.done();
        assert!(!progress.is_active());

        // Done without a start stays idle.
        progress.done();
        assert!(!progress.is_active());
    }
}
