// Module exports for pure logic
pub mod navigation;
pub mod tabs;          // Tab collaborator contract + scoped notifications
pub mod chrome_view;   // Address field, nav buttons, frame container
pub mod events;        // Event channel + cooperative run loop
pub mod address_bar;   // Input <-> tab wiring
