// Pure navigation logic - no UI imports allowed.
// Resolves address bar text into something a tab can navigate to.

use url::Url;

/// Token replaced by the user's search terms inside a search template.
pub const SEARCH_TERMS_PLACEHOLDER: &str = "{searchTerms}";

/// Search template used when no other engine is configured.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://search.yahoo.com/search?p={searchTerms}";

/// Whether `input` is a valid absolute URL, the way an `<input type="url">`
/// field would judge it: it must parse on its own, without a base.
pub fn is_absolute_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Logic for turning address input into a navigable URL.
///
/// Callers pass text that is already trimmed and non-empty. Valid absolute
/// URLs come back exactly as typed (no normalization). Anything else is
/// substituted verbatim, without percent-encoding, into the first
/// `{searchTerms}` token of `search_template`.
///
/// PRIVACY NOTICE:
/// This is purely local string manipulation. It does NOT resolve hosts,
/// prefetch, or talk to suggestion servers.
pub fn resolve_address_input(input: &str, search_template: &str) -> String {
    if is_absolute_url(input) {
        return input.to_string();
    }

    search_template.replacen(SEARCH_TERMS_PLACEHOLDER, input, 1)
}
