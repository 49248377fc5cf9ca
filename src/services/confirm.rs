use super::Confirmer;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserConfirm;

impl Confirmer for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        // A blocked or failed dialog counts as "no".
        window().confirm_with_message(prompt).unwrap_or(false)
    }
}
