pub mod request;
pub mod resolver;
pub mod subject;
pub mod url;

pub use request::AvatarRequest;
pub use resolver::{AvatarUrlResolver, ResolveError};
pub use subject::{Account, Comment, Subject};
pub use url::{AvatarUrl, Captured, DefaultPattern};
