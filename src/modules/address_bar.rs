// Address bar controller.
// Maps user input on the chrome to tab actions, and tab notifications back
// onto the chrome widgets. No UI toolkit imports: the widgets and the tab are
// reached only through `ChromeView` and `Tab`.

use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};

use crate::modules::chrome_view::{ChromeView, ClickTarget, NavButton};
use crate::modules::events::{ChromeEvent, ChromeSender, WeakChromeSender};
use crate::modules::navigation::resolve_address_input;
use crate::modules::tabs::{Tab, TabEvent, TabEvents, TabFactory};
use crate::settings::{SearchEngine, Settings};
use crate::state::Session;

/// Empty strings count as "not known yet".
fn known(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub struct AddressBarController<V, F: TabFactory> {
    view: V,
    factory: F,
    session: Session<F::Tab>,
    search_engine: SearchEngine,
    // Weak so the run loop still ends once the host drops its senders.
    events: WeakChromeSender,
    availability: FuturesUnordered<BoxFuture<'static, ChromeEvent>>,
}

impl<V, F> AddressBarController<V, F>
where
    V: ChromeView,
    F: TabFactory,
{
    /// `events` must feed the loop that drives this controller; notifications
    /// from the tab it opens come back through it.
    pub fn new(view: V, factory: F, settings: &Settings, events: &ChromeSender) -> Self {
        Self {
            view,
            factory,
            session: Session::default(),
            search_engine: settings.search_engine.clone(),
            events: events.downgrade(),
            availability: FuturesUnordered::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn current_tab(&self) -> Option<&F::Tab> {
        self.session.current_tab.as_ref()
    }

    pub fn session(&self) -> &Session<F::Tab> {
        &self.session
    }

    /// Availability queries issued on load end that have not reported yet.
    pub fn pending_queries(&self) -> usize {
        self.availability.len()
    }

    pub fn handle(&mut self, event: ChromeEvent) {
        match event {
            ChromeEvent::AddressFocused => self.focus(),
            ChromeEvent::AddressBlurred => self.blur(),
            ChromeEvent::Submitted => self.submit(),
            ChromeEvent::Clicked(target) => self.click(target),
            ChromeEvent::Tab(event) => self.tab_event(event),
            ChromeEvent::AvailabilityResolved {
                generation,
                button,
                available,
            } => self.availability_resolved(generation, button, available),
            ChromeEvent::Close => {}
        }
    }

    /// Next finished availability query, or `None` when nothing is in flight.
    pub(crate) async fn next_availability(&mut self) -> Option<ChromeEvent> {
        self.availability.next().await
    }

    /// Wait for every in-flight availability query and apply its result.
    pub async fn settle(&mut self) {
        while let Some(event) = self.next_availability().await {
            self.handle(event);
        }
    }

    /// Switch the field to edit mode: show the raw URL, fully selected.
    pub fn focus(&mut self) {
        let Some(url) = self.session.current_tab.as_ref().and_then(|tab| known(tab.url())) else {
            return;
        };

        self.view.set_address_text(&url);
        self.view.select_address_text();
    }

    /// Commit what the user typed, then switch back to display mode.
    pub fn blur(&mut self) {
        self.session.pending_input = Some(self.view.address_text());

        if let Some(title) = self.session.current_tab.as_ref().and_then(|tab| known(tab.title())) {
            self.view.set_address_text(&title);
        }
    }

    /// Act on the committed input, never on the live field text.
    pub fn submit(&mut self) {
        let Some(input) = self.session.submittable_input().map(str::to_string) else {
            log::debug!("[AddressBar] Ignoring blank submission");
            return;
        };

        if self.view.frame_marked_empty() {
            self.view.unmark_frame_empty();
        }

        let url = resolve_address_input(&input, self.search_engine.template());

        match self.session.current_tab.as_mut() {
            None => {
                log::info!("[AddressBar] Opening tab at {}", url);
                let tab = self.factory.open(&url, TabEvents::new(self.events.clone()));
                self.view.attach_webview(&tab.webview_label());
                self.session.current_tab = Some(tab);
            }
            // Re-submitting the untouched title means "load this page again".
            Some(tab) if self.session.pending_input.as_deref() == tab.title().as_deref() => {
                log::info!("[AddressBar] Reloading current tab");
                tab.reload();
            }
            Some(tab) => {
                log::info!("[AddressBar] Navigating to {}", url);
                tab.go_to_url(&url);
            }
        }
    }

    pub fn click(&mut self, target: ClickTarget) {
        let ClickTarget::Button(button) = target else {
            return;
        };
        let Some(tab) = self.session.current_tab.as_mut() else {
            log::debug!("[AddressBar] {:?} clicked with no tab open", button);
            return;
        };

        match button {
            NavButton::Back => tab.go_back(),
            NavButton::Forward => tab.go_forward(),
        }
    }

    pub fn tab_event(&mut self, event: TabEvent) {
        let Some(tab) = self.session.current_tab.as_ref() else {
            return;
        };

        match event {
            TabEvent::LocationChanged => {
                self.session.pending_input = tab.url();
            }
            TabEvent::TitleChanged => {
                // No focus guard: a title change while editing replaces the edit.
                self.view.set_address_text(&tab.title().unwrap_or_default());
            }
            TabEvent::LoadEnded => {
                self.session.load_generation += 1;
                let generation = self.session.load_generation;

                let queries = [
                    (NavButton::Back, tab.can_go_back()),
                    (NavButton::Forward, tab.can_go_forward()),
                ];
                for (button, query) in queries {
                    self.availability.push(Box::pin(async move {
                        ChromeEvent::AvailabilityResolved {
                            generation,
                            button,
                            available: query.await,
                        }
                    }));
                }
            }
        }
    }

    pub fn availability_resolved(&mut self, generation: u64, button: NavButton, available: bool) {
        if generation != self.session.load_generation {
            log::debug!(
                "[AddressBar] Dropping stale {:?} availability (generation {} < {})",
                button,
                generation,
                self.session.load_generation
            );
            return;
        }

        self.view.set_button_disabled(button, !available);
    }
}
