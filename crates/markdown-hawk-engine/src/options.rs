use serde::{Deserialize, Serialize};

/// Rendering switches that persist across documents.
///
/// Deserializes from partial tables: any missing field takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Every soft line break becomes `<br />`, not just the ones ending in
    /// two spaces or a backslash.
    pub breaks_enabled: bool,
    /// Bare `http(s)://` URLs in text become anchors.
    pub urls_linked: bool,
    /// Raw HTML blocks, comments and inline tags pass through untouched.
    /// When off they are escaped like any other text.
    pub raw_html_allowed: bool,
    /// Prefix for `%Page Name%` internal links.
    pub internal_link_base_url: String,
    /// How deep quotes, list items and inline elements may nest before the
    /// rest is emitted as escaped text.
    pub max_nesting_depth: usize,
}

impl RenderOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

    #[must_use]
    pub fn with_breaks_enabled(mut self, enabled: bool) -> Self {
        self.breaks_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_urls_linked(mut self, linked: bool) -> Self {
        self.urls_linked = linked;
        self
    }

    #[must_use]
    pub fn with_raw_html_allowed(mut self, allowed: bool) -> Self {
        self.raw_html_allowed = allowed;
        self
    }

    #[must_use]
    pub fn with_internal_link_base_url(mut self, url: impl Into<String>) -> Self {
        self.internal_link_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            breaks_enabled: false,
            urls_linked: true,
            raw_html_allowed: true,
            internal_link_base_url: String::new(),
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
