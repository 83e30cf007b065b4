// Tab collaborator contract.
// The web view behind a tab lives outside this crate; the controller only
// drives it through these traits and hears back through `TabEvents`.

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::modules::events::{ChromeEvent, WeakChromeSender};

/// Lifecycle notifications a tab reports to whoever opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabEvent {
    LocationChanged,
    TitleChanged,
    LoadEnded,
}

/// A navigable surface backed by an embedded web view.
pub trait Tab {
    /// Current location, if the tab has one yet.
    fn url(&self) -> Option<String>;
    /// Current page title, if the tab has one yet.
    fn title(&self) -> Option<String>;
    /// Label of the renderable surface the view should attach.
    fn webview_label(&self) -> String;

    fn go_to_url(&mut self, url: &str);
    fn reload(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);

    fn can_go_back(&self) -> BoxFuture<'static, bool>;
    fn can_go_forward(&self) -> BoxFuture<'static, bool>;
}

/// Builds tabs. Each tab gets its own `TabEvents` handle; notifications sent
/// through it reach only the controller that opened the tab.
pub trait TabFactory {
    type Tab: Tab;

    fn open(&mut self, url: &str, events: TabEvents) -> Self::Tab;
}

/// Subscription handle scoped to a single tab. Holds the channel weakly, so a
/// live tab never keeps a finished event loop running.
#[derive(Clone)]
pub struct TabEvents {
    sender: WeakChromeSender,
}

impl TabEvents {
    pub(crate) fn new(sender: WeakChromeSender) -> Self {
        Self { sender }
    }

    /// Returns false once the controller's event loop has gone away.
    pub fn emit(&self, event: TabEvent) -> bool {
        match self.sender.upgrade() {
            Some(sender) => sender.send(ChromeEvent::Tab(event)).is_ok(),
            None => false,
        }
    }
}
