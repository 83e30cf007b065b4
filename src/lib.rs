// Sovereign Chrome Library Entry Point
// Exposes the address bar controller and its collaborator contracts so a
// host shell can wire them to real widgets and web views.

use simplelog::{ConfigBuilder, LevelFilter, SimpleLogger};

pub mod settings;

// Session state owned by the controller
pub mod state;

// Pure logic modules (no UI toolkit imports)
pub mod modules;

#[cfg(test)]
mod test_support;

pub use modules::address_bar::AddressBarController;
pub use modules::chrome_view::{ChromeView, ClickTarget, NavButton};
pub use modules::events::{channel, run, ChromeEvent, ChromeReceiver, ChromeSender};
pub use modules::tabs::{Tab, TabEvent, TabEvents, TabFactory};
pub use settings::{SearchEngine, Settings};

/// Install the process logger. Hosts call this once at startup; debug builds
/// usually pass `LevelFilter::Info`.
pub fn init_logging(level: LevelFilter) -> Result<(), String> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    SimpleLogger::init(level, config).map_err(|e| e.to_string())
}
