//! Telegram WebApp Bindings
//!
//! Thin wrappers around `window.Telegram.WebApp`, the object injected by
//! `telegram-web-app.js` when a page runs as a Telegram Mini App.
//! Outside of Telegram the object is missing and [`WebApp::get`] returns `None`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Base of Telegram's share dialog link
pub const SHARE_ENDPOINT: &str = "https://t.me/share/url";

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`
    #[derive(Clone, Debug)]
    pub type WebApp;

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method)]
    fn ready(this: &WebApp);

    #[wasm_bindgen(method, js_name = openTelegramLink)]
    fn open_telegram_link(this: &WebApp, url: &str);

    #[wasm_bindgen(method, getter, js_name = colorScheme)]
    fn color_scheme(this: &WebApp) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = MainButton)]
    fn main_button(this: &WebApp) -> MainButton;

    /// `Telegram.WebApp.MainButton`
    #[derive(Clone, Debug)]
    pub type MainButton;

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &MainButton, text: &str);

    #[wasm_bindgen(method, js_name = onClick)]
    fn on_click(this: &MainButton, callback: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn show(this: &MainButton);

    #[wasm_bindgen(method)]
    fn hide(this: &MainButton);
}

impl WebApp {
    /// Look up the host object, `None` when not running inside Telegram
    pub fn get() -> Option<WebApp> {
        let window = web_sys::window()?;
        let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        if !telegram.is_object() {
            return None;
        }
        let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if !web_app.is_object() {
            return None;
        }
        Some(web_app.unchecked_into::<WebApp>())
    }

    /// Expand to full height, then tell the host the page is ready to show
    pub fn init(&self) {
        self.expand();
        self.ready();
        web_sys::console::log_1(&"[TELEGRAM] expanded and ready".into());
    }

    /// "light" or "dark", if the host reports it
    pub fn theme(&self) -> Option<String> {
        self.color_scheme()
    }

    /// Set the main button label and make it visible
    pub fn show_main_button(&self, text: &str) {
        let button = self.main_button();
        button.set_text(text);
        button.show();
    }

    pub fn hide_main_button(&self) {
        self.main_button().hide();
    }

    /// Register a main button click handler.
    ///
    /// The host keeps every registered handler, so call this once per page.
    pub fn on_main_button_click(&self, handler: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut()>::new(handler);
        self.main_button().on_click(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Open Telegram's "share to chat" dialog
    pub fn share(&self, url: &str, text: &str) {
        let link = share_link(url, text);
        web_sys::console::log_1(&format!("[TELEGRAM] share {}", link).into());
        self.open_telegram_link(&link);
    }
}

/// Build a `t.me/share/url` link with both parameters percent-encoded
pub fn share_link(url: &str, text: &str) -> String {
    format!(
        "{}?url={}&text={}",
        SHARE_ENDPOINT,
        utf8_percent_encode(url, NON_ALPHANUMERIC),
        utf8_percent_encode(text, NON_ALPHANUMERIC),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link_encodes_params() {
        let link = share_link("https://ezhik.app", "a b&c");
        assert_eq!(
            link,
            "https://t.me/share/url?url=https%3A%2F%2Fezhik%2Eapp&text=a%20b%26c"
        );
    }

    #[test]
    fn test_share_link_cyrillic() {
        let link = share_link("", "ёж");
        // UTF-8 bytes of "ёж"
        assert!(link.ends_with("&text=%D1%91%D0%B6"));
        assert!(link.contains("?url=&"));
    }
}
