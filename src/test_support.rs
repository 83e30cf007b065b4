// Test doubles for the tab and chrome widget contracts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures_util::future::{self, BoxFuture};

use crate::modules::chrome_view::{ChromeView, NavButton};
use crate::modules::tabs::{Tab, TabEvents, TabFactory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabCall {
    GoToUrl(String),
    Reload,
    GoBack,
    GoForward,
}

#[derive(Debug, Default)]
struct FakeTabState {
    url: Option<String>,
    title: Option<String>,
    can_go_back: bool,
    can_go_forward: bool,
    calls: Vec<TabCall>,
}

/// Lets a test change what a tab reports after the controller owns it.
#[derive(Debug, Clone, Default)]
pub struct TabHandle(Arc<Mutex<FakeTabState>>);

impl TabHandle {
    pub fn set_url(&self, url: &str) {
        self.0.lock().unwrap().url = Some(url.to_string());
    }

    pub fn set_title(&self, title: &str) {
        self.0.lock().unwrap().title = Some(title.to_string());
    }

    pub fn set_history(&self, can_go_back: bool, can_go_forward: bool) {
        let mut state = self.0.lock().unwrap();
        state.can_go_back = can_go_back;
        state.can_go_forward = can_go_forward;
    }
}

pub struct FakeTab {
    label: String,
    state: TabHandle,
    events: TabEvents,
}

impl FakeTab {
    pub fn calls(&self) -> Vec<TabCall> {
        self.state.0.lock().unwrap().calls.clone()
    }

    pub fn events(&self) -> &TabEvents {
        &self.events
    }

    fn record(&self, call: TabCall) {
        self.state.0.lock().unwrap().calls.push(call);
    }
}

impl Tab for FakeTab {
    fn url(&self) -> Option<String> {
        self.state.0.lock().unwrap().url.clone()
    }

    fn title(&self) -> Option<String> {
        self.state.0.lock().unwrap().title.clone()
    }

    fn webview_label(&self) -> String {
        self.label.clone()
    }

    fn go_to_url(&mut self, url: &str) {
        self.record(TabCall::GoToUrl(url.to_string()));
    }

    fn reload(&mut self) {
        self.record(TabCall::Reload);
    }

    fn go_back(&mut self) {
        self.record(TabCall::GoBack);
    }

    fn go_forward(&mut self) {
        self.record(TabCall::GoForward);
    }

    fn can_go_back(&self) -> BoxFuture<'static, bool> {
        let value = self.state.0.lock().unwrap().can_go_back;
        Box::pin(future::ready(value))
    }

    fn can_go_forward(&self) -> BoxFuture<'static, bool> {
        let value = self.state.0.lock().unwrap().can_go_forward;
        Box::pin(future::ready(value))
    }
}

#[derive(Default)]
pub struct FakeTabFactory {
    /// URLs passed to `open`, in order.
    pub opened: Vec<String>,
    history: (bool, bool),
    handles: Vec<TabHandle>,
}

impl FakeTabFactory {
    /// New tabs start with this back/forward availability.
    pub fn with_history(can_go_back: bool, can_go_forward: bool) -> Self {
        Self {
            history: (can_go_back, can_go_forward),
            ..Self::default()
        }
    }

    pub fn tab_state(&self, index: usize) -> TabHandle {
        self.handles[index].clone()
    }
}

impl TabFactory for FakeTabFactory {
    type Tab = FakeTab;

    fn open(&mut self, url: &str, events: TabEvents) -> FakeTab {
        self.opened.push(url.to_string());

        let state = TabHandle::default();
        state.set_url(url);
        state.set_history(self.history.0, self.history.1);
        self.handles.push(state.clone());

        FakeTab {
            label: format!("webview-{}", self.opened.len()),
            state,
            events,
        }
    }
}

#[derive(Debug)]
pub struct RecordingView {
    pub text: String,
    pub selected_all: bool,
    pub disabled: HashMap<NavButton, bool>,
    pub frame_empty: bool,
    pub attached: Vec<String>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            text: String::new(),
            selected_all: false,
            disabled: HashMap::new(),
            frame_empty: true,
            attached: Vec::new(),
        }
    }
}

impl ChromeView for RecordingView {
    fn address_text(&self) -> String {
        self.text.clone()
    }

    fn set_address_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selected_all = false;
    }

    fn select_address_text(&mut self) {
        self.selected_all = true;
    }

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool) {
        self.disabled.insert(button, disabled);
    }

    fn frame_marked_empty(&self) -> bool {
        self.frame_empty
    }

    fn unmark_frame_empty(&mut self) {
        self.frame_empty = false;
    }

    fn attach_webview(&mut self, label: &str) {
        self.attached.push(label.to_string());
    }
}
