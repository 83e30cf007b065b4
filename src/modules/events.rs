// Chrome event channel and the cooperative loop that feeds the controller.
// Every handler runs to completion before the next event is received, so the
// controller never needs a lock.

use tokio::sync::mpsc;

use crate::modules::address_bar::AddressBarController;
use crate::modules::chrome_view::{ChromeView, ClickTarget, NavButton};
use crate::modules::tabs::{TabEvent, TabFactory};

pub type ChromeSender = mpsc::UnboundedSender<ChromeEvent>;
pub type ChromeReceiver = mpsc::UnboundedReceiver<ChromeEvent>;
pub type WeakChromeSender = mpsc::WeakUnboundedSender<ChromeEvent>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeEvent {
    AddressFocused,
    AddressBlurred,
    Submitted,
    Clicked(ClickTarget),
    Tab(TabEvent),
    /// Result of a back/forward availability query issued on load end.
    AvailabilityResolved {
        generation: u64,
        button: NavButton,
        available: bool,
    },
    Close,
}

pub fn channel() -> (ChromeSender, ChromeReceiver) {
    mpsc::unbounded_channel()
}

/// Drive `controller` until `Close` arrives or every sender is gone.
/// Availability queries issued on load end are polled alongside the channel,
/// so their results are handled between events, never inside one.
pub async fn run<V, F>(
    mut controller: AddressBarController<V, F>,
    mut receiver: ChromeReceiver,
) -> AddressBarController<V, F>
where
    V: ChromeView,
    F: TabFactory,
{
    log::debug!("[Chrome] Event loop started");

    loop {
        let event = tokio::select! {
            Some(event) = controller.next_availability(), if controller.pending_queries() > 0 => event,
            received = receiver.recv() => match received {
                Some(ChromeEvent::Close) | None => break,
                Some(event) => event,
            },
        };
        controller.handle(event);
    }

    log::debug!("[Chrome] Event loop stopped");
    controller
}
