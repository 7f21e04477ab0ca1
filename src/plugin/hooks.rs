use std::collections::BTreeMap;

use crate::avatar::{AvatarRequest, AvatarUrlResolver};
use crate::host::{AccountDirectory, OptionStore};
use crate::plugin::config::{ConfigError, VanilliconConfig};

/// Static plugin metadata shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Vanillicon",
    version: env!("CARGO_PKG_VERSION"),
    description: "Set Vanillicon v1 as the default avatar. \
                  Vanillicon is an identicon generator by Vanilla Forums.",
};

/// Callbacks the host runtime invokes over the plugin's lifetime.
pub trait AvatarHooks {
    /// Point the default avatar setting at this generator.
    fn activate(&self, options: &mut dyn OptionStore);

    /// Restore the neutral default, unless an admin already moved away.
    fn deactivate(&self, options: &mut dyn OptionStore);

    /// Add this generator to the selectable default avatars.
    fn avatar_defaults(&self, defaults: BTreeMap<String, String>) -> BTreeMap<String, String>;

    /// Render-time avatar filter.
    fn get_avatar(&self, request: &AvatarRequest<'_>, accounts: &dyn AccountDirectory) -> String;
}

/// The Vanillicon plugin.
///
/// The default URL is derived once here and reused for every callback.
#[derive(Debug, Clone)]
pub struct Vanillicon {
    config: VanilliconConfig,
    resolver: AvatarUrlResolver,
    default_url: String,
}

impl Vanillicon {
    pub fn new(config: VanilliconConfig) -> Result<Self, ConfigError> {
        let resolver = AvatarUrlResolver::new(&config)?;
        let default_url = resolver.build_default_url().to_string();

        Ok(Self {
            config,
            resolver,
            default_url,
        })
    }

    /// Plugin with the stock v1 configuration.
    pub fn v1() -> Result<Self, ConfigError> {
        Self::new(VanilliconConfig::v1())
    }

    pub fn info(&self) -> PluginInfo {
        PLUGIN_INFO
    }

    pub fn config(&self) -> &VanilliconConfig {
        &self.config
    }

    pub fn resolver(&self) -> &AvatarUrlResolver {
        &self.resolver
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }
}

impl AvatarHooks for Vanillicon {
    fn activate(&self, options: &mut dyn OptionStore) {
        options.update_option(&self.config.option_key, &self.default_url);
        log::info!("Set {} to {}", self.config.option_key, self.default_url);
    }

    fn deactivate(&self, options: &mut dyn OptionStore) {
        let key = &self.config.option_key;
        match options.get_option(key) {
            Some(current) if current.starts_with(&self.config.base_url) => {
                options.update_option(key, &self.config.neutral_default);
                log::info!("Reset {key} to {}", self.config.neutral_default);
            }
            Some(current) => {
                log::info!("Leaving {key} as {current}, it no longer points at Vanillicon");
            }
            None => {
                log::info!("{key} is unset, nothing to restore");
            }
        }
    }

    fn avatar_defaults(&self, mut defaults: BTreeMap<String, String>) -> BTreeMap<String, String> {
        defaults.insert(self.default_url.clone(), self.config.label.clone());
        defaults
    }

    fn get_avatar(&self, request: &AvatarRequest<'_>, accounts: &dyn AccountDirectory) -> String {
        self.resolver.rewrite_avatar_url(request, accounts)
    }
}
