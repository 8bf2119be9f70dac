use url::Url;

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Reject policies carrying more than one target type key instead of
    /// taking the first one in document order.
    pub strict: bool,
    /// Base for resolving relative link hrefs (None = hrefs must be absolute)
    pub base_url: Option<Url>,
}

impl Options {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}
