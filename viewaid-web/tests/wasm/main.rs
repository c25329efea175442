//! Browser tests: mount the widget and drive it through real DOM events.
#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod widget_tests;
