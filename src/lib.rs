//! Vanillicon v1 identicons as a site's default avatar.
//!
//! `vanillicon` derives `https://vanillicon.com/{hash}_{size}.png` URLs from
//! a user id, email, account or comment, and plugs into a host CMS through
//! the [`plugin::AvatarHooks`] callbacks: activation, deactivation, the
//! default-avatar list and the render-time avatar filter. Every derivation
//! is a pure function of its inputs.
//!
//! No images are generated or fetched here; the host embeds the URL and the
//! service does the rest.

pub mod avatar;
pub mod host;
pub mod plugin;
pub mod types;

pub use avatar::{AvatarRequest, AvatarUrlResolver, Subject};
pub use plugin::{AvatarHooks, Vanillicon, VanilliconConfig};
