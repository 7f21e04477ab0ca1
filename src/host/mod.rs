pub mod context;
pub mod options;

pub use context::{RenderContext, DISCUSSION_SETTINGS_PAGE};
pub use options::{AccountDirectory, NoAccounts, OptionStore};
