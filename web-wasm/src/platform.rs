//! ブラウザ環境

use estate_common::Platform;

/// `window` 経由で画面幅・スクロールを扱う
#[derive(Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn viewport_width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// 詳細ページへ遷移
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            web_sys::console::error_1(&err);
        }
    }
}

/// 確認ダイアログ（取得できない環境では false）
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use estate_common::platform::grid_columns;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_viewport_width_is_available() {
        let width = BrowserPlatform.viewport_width();
        assert!(width.is_some());
        assert!((1..=3).contains(&grid_columns(width)));
    }
}
