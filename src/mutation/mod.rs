use crate::api::{ApiError, ApiResult};
use crate::cache::QueryKey;
use crate::models::Severity;
use crate::services::{CacheInvalidator, Notifier, ProgressSignal};
use std::future::Future;

/// Per-mutation constants: what it invalidates and what the user sees on success.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MutationOptions {
    pub name: &'static str,
    pub invalidates: &'static [QueryKey],
    pub success_message: &'static str,
    pub success_severity: Severity,
}

/// Start/success/error wrapper around a network mutation.
///
/// - start: progress on
/// - success: progress off, invalidate queries, caller follow-up, notify
/// - error: progress off, caller follow-up, notify with the extracted message
///
/// No retries. Concurrent runs are not serialized.
#[derive(Clone, Copy)]
pub(crate) struct MutationLifecycle<P, N, C> {
    progress: P,
    notifier: N,
    cache: C,
}

impl<P, N, C> MutationLifecycle<P, N, C>
where
    P: ProgressSignal,
    N: Notifier,
    C: CacheInvalidator,
{
    pub(crate) fn new(progress: P, notifier: N, cache: C) -> Self {
        Self {
            progress,
            notifier,
            cache,
        }
    }

    pub(crate) fn on_start(&self, opts: &MutationOptions) {
        log::debug!("{}: started", opts.name);
        self.progress.start();
    }

    pub(crate) fn on_success(&self, opts: &MutationOptions, follow_up: impl FnOnce()) {
        log::info!("{}: succeeded", opts.name);
        self.progress.done();
        self.cache.invalidate(opts.invalidates);
        follow_up();
        self.notifier.notify(opts.success_message, opts.success_severity);
    }

    pub(crate) fn on_error(
        &self,
        opts: &MutationOptions,
        err: &ApiError,
        follow_up: impl FnOnce(),
    ) {
        log::warn!("{}: failed (status {:?}): {err}", opts.name, err.status);
        self.progress.done();
        follow_up();
        self.notifier.notify(&err.user_message(), Severity::Error);
    }

    /// Runs `request` through all three phases. `follow_up` runs once, on
    /// either outcome, before the notification.
    pub(crate) async fn run<T>(
        &self,
        opts: &MutationOptions,
        request: impl Future<Output = ApiResult<T>>,
        follow_up: impl FnOnce(),
    ) -> ApiResult<T> {
        self.on_start(opts);
        let result = request.await;
        match &result {
            Ok(_) => self.on_success(opts, follow_up),
            Err(e) => self.on_error(opts, e, follow_up),
        }
        result
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Event, Recorder};
    use super::*;
    use crate::cache::NOTES_QUERY;
    use futures::executor::block_on;

    const OPTS: MutationOptions = MutationOptions {
        name: "test",
        invalidates: &[NOTES_QUERY],
        success_message: "done",
        success_severity: Severity::Success,
    };

    #[test]
    fn test_success_phases_in_order() {
        let rec = Recorder::default();
        let lc = rec.lifecycle();
        let follow = rec.clone();

        let out = block_on(lc.run(&OPTS, async { Ok::<_, ApiError>(7) }, move || {
            follow.push(Event::FollowUp)
        }));

        assert_eq!(out.expect("should succeed"), 7);
        assert_eq!(
            rec.events(),
            vec![
                Event::ProgressStart,
                Event::ProgressDone,
                Event::Invalidate("getNotes"),
                Event::FollowUp,
                Event::Notify("done".to_string(), Severity::Success),
            ]
        );
    }

    #[test]
    fn test_error_skips_invalidation_and_reports_message() {
        let rec = Recorder::default();
        let lc = rec.lifecycle();
        let follow = rec.clone();

        let out = block_on(lc.run(
            &OPTS,
            async { Err::<(), _>(ApiError::http(500, r#"{"detail":"boom"}"#)) },
            move || follow.push(Event::FollowUp),
        ));

        assert!(out.is_err());
        assert_eq!(
            rec.events(),
            vec![
                Event::ProgressStart,
                Event::ProgressDone,
                Event::FollowUp,
                Event::Notify("boom".to_string(), Severity::Error),
            ]
        );
    }
}
