mod api;
mod app;
mod cache;
mod components;
mod display;
mod logging;
mod menu;
mod models;
mod mutation;
mod notes;
mod pages;
mod services;
mod state;
mod validation;

pub use app::App;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("noteboard starting");
    mount_to_body(App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{ApiClient, EnvConfig};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_env_config_defaults_without_window_env() {
        let cfg = EnvConfig::new();
        assert_eq!(cfg.api_url, EnvConfig::DEFAULT_API_URL);
    }

    #[wasm_bindgen_test]
    fn test_env_config_reads_window_env_api_url() {
        let window = web_sys::window().expect("window");
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://example.test/api/".into())
            .expect("set API_URL");
        js_sys::Reflect::set(&window, &"ENV".into(), &env).expect("set ENV");

        let client = ApiClient::from_env();
        assert_eq!(client.base_url, "http://example.test/api");

        js_sys::Reflect::delete_property(&window, &"ENV".into()).expect("delete ENV");
    }
}
