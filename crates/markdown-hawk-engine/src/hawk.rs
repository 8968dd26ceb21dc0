use crate::{options::RenderOptions, render::Renderer};

/// Renders markdown documents with a fixed set of options.
///
/// A `Hawk` holds configuration only. Each [`Hawk::render`] call runs in a
/// session of its own, so reference definitions never leak from one
/// document into the next and one instance can serve many threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hawk {
    options: RenderOptions,
}

impl Hawk {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, document: &str) -> String {
        render(document, &self.options)
    }

    pub fn set_breaks_enabled(&mut self, enabled: bool) -> &mut Self {
        self.options.breaks_enabled = enabled;
        self
    }

    pub fn set_urls_linked(&mut self, linked: bool) -> &mut Self {
        self.options.urls_linked = linked;
        self
    }

    pub fn set_raw_html_allowed(&mut self, allowed: bool) -> &mut Self {
        self.options.raw_html_allowed = allowed;
        self
    }

    pub fn set_internal_link_base_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.options.internal_link_base_url = url.into();
        self
    }

    pub fn set_max_nesting_depth(&mut self, depth: usize) -> &mut Self {
        self.options.max_nesting_depth = depth;
        self
    }
}

/// Renders one document with `options`.
pub fn render(document: &str, options: &RenderOptions) -> String {
    Renderer::new(options).document(document)
}
