use crate::api::ApiClient;
use crate::cache::QueryClient;
use crate::mutation::MutationLifecycle;
use crate::services::{Progress, Toasts};

pub(crate) type AppMutations = MutationLifecycle<Progress, Toasts, QueryClient>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: ApiClient,

    /// Read-query versions; `"getNotes"` drives the list refetch.
    pub queries: QueryClient,

    /// Global UI state.
    pub progress: Progress,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::from_env(),
            queries: QueryClient::new(),
            progress: Progress::new(),
            toasts: Toasts::new(),
        }
    }

    pub(crate) fn mutations(&self) -> AppMutations {
        MutationLifecycle::new(self.progress, self.toasts, self.queries)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
