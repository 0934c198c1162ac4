//! Dialog Bindings
//!
//! Blocking yes/no prompts.

/// A blocking yes/no question put to the user
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
