// Session state owned by a single address bar controller.
// Kept apart from the controller so it can be inspected in tests.

#[derive(Debug)]
pub struct Session<T> {
    /// The one active tab. Set on the first submission, never replaced.
    pub current_tab: Option<T>,
    /// Last committed address text: captured on blur, refreshed on
    /// location change. This, not the live field, is what gets submitted.
    pub pending_input: Option<String>,
    /// Bumped on every load end; availability results from older loads are dropped.
    pub load_generation: u64,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self {
            current_tab: None,
            pending_input: None,
            load_generation: 0,
        }
    }
}

impl<T> Session<T> {
    /// The pending input, trimmed, if there is anything to submit.
    pub fn submittable_input(&self) -> Option<&str> {
        self.pending_input
            .as_deref()
            .map(str::trim)
            .filter(|input| !input.is_empty())
    }
}
