use crate::avatar::Subject;
use crate::host::RenderContext;

/// Arguments of a single render-time avatar filter call.
#[derive(Debug, Clone)]
pub struct AvatarRequest<'a> {
    /// Markup the host produced so far, usually an `<img>` tag.
    pub markup: &'a str,
    pub subject: Subject,
    /// Requested pixel size, unvalidated.
    pub size: i64,
    /// Current value of the default avatar setting.
    pub default_setting: &'a str,
    /// Unused; carried for parity with the host filter.
    pub alt: &'a str,
    pub context: RenderContext,
}

impl<'a> AvatarRequest<'a> {
    pub fn new(markup: &'a str, subject: impl Into<Subject>, size: i64, default_setting: &'a str) -> Self {
        Self {
            markup,
            subject: subject.into(),
            size,
            default_setting,
            alt: "",
            context: RenderContext::front_end(),
        }
    }

    pub fn with_alt(mut self, alt: &'a str) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_context(mut self, context: RenderContext) -> Self {
        self.context = context;
        self
    }
}
