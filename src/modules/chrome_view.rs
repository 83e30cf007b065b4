// Widget contract for the browser chrome: the address field, the two
// navigation buttons, and the container the tab's web view is attached to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavButton {
    Back,
    Forward,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClickTarget {
    Button(NavButton),
    Other,
}

pub trait ChromeView {
    fn address_text(&self) -> String;
    fn set_address_text(&mut self, text: &str);
    /// Select the whole address text so typing replaces it.
    fn select_address_text(&mut self);

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool);

    /// Whether the frame container still carries its "empty" marker.
    fn frame_marked_empty(&self) -> bool;
    fn unmark_frame_empty(&mut self);
    fn attach_webview(&mut self, label: &str);
}
