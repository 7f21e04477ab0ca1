/// Admin page that configures the site-wide default avatar.
pub const DISCUSSION_SETTINGS_PAGE: &str = "options-discussion.php";

/// Where the host is rendering an avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub is_admin: bool,
    pub page: Option<String>,
}

impl RenderContext {
    /// A public, non-admin render.
    pub fn front_end() -> Self {
        Self::default()
    }

    pub fn admin(page: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            page: Some(page.into()),
        }
    }

    /// The discussion settings page shows the unrendered default, so
    /// rewrites are suppressed there.
    pub fn is_discussion_settings(&self) -> bool {
        self.is_admin && self.page.as_deref() == Some(DISCUSSION_SETTINGS_PAGE)
    }
}
