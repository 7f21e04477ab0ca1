pub mod config;
pub mod hooks;

pub use config::{ConfigError, VanilliconConfig};
pub use hooks::{AvatarHooks, PluginInfo, Vanillicon, PLUGIN_INFO};
