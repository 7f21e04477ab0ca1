use thiserror::Error;

use crate::avatar::{AvatarRequest, AvatarUrl, DefaultPattern, Subject};
use crate::host::AccountDirectory;
use crate::plugin::config::{ConfigError, VanilliconConfig};
use crate::types::{IdHash, Identifier, SizeTier};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No account with id {0}")]
    AccountNotFound(u64),
}

/// Derives avatar URLs from subjects and requested sizes.
///
/// Holds no mutable state. Every method is a pure computation over its
/// arguments and the immutable configuration captured at construction.
#[derive(Debug, Clone)]
pub struct AvatarUrlResolver {
    base_url: String,
    hash_length: usize,
    default_id: u64,
    default_size: i64,
    pattern: DefaultPattern,
}

impl AvatarUrlResolver {
    pub fn new(config: &VanilliconConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pattern = DefaultPattern::new(&config.base_url)?;

        Ok(Self {
            base_url: config.base_url.clone(),
            hash_length: config.hash_length,
            default_id: config.default_id,
            default_size: config.default_size,
            pattern,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn compute_hash(&self, identifier: &Identifier) -> IdHash {
        IdHash::compute(identifier, self.hash_length)
    }

    pub fn compute_size_tier(requested: i64) -> SizeTier {
        SizeTier::from_requested(requested)
    }

    pub fn url_for(&self, identifier: &Identifier, requested: i64) -> AvatarUrl {
        AvatarUrl::new(
            self.base_url.clone(),
            self.compute_hash(identifier),
            Self::compute_size_tier(requested),
        )
    }

    /// Bootstrap URL built from the sentinel id and size.
    pub fn build_default_url(&self) -> AvatarUrl {
        self.url_for(&self.sentinel(), self.default_size)
    }

    fn sentinel(&self) -> Identifier {
        Identifier::from(self.default_id)
    }

    /// Collapse a subject into the identifier that gets hashed.
    ///
    /// Comments prefer the author email, then the author name, then the
    /// sentinel id.
    pub fn try_resolve_identifier<A>(
        &self,
        subject: &Subject,
        accounts: &A,
    ) -> Result<Identifier, ResolveError>
    where
        A: AccountDirectory + ?Sized,
    {
        let identifier = match subject {
            Subject::UserId(id) => {
                let account = accounts
                    .account_by_id(*id)
                    .ok_or(ResolveError::AccountNotFound(*id))?;
                Identifier::new(account.email)
            }
            Subject::User(account) => Identifier::from(account.email.as_str()),
            Subject::Comment(comment) => match (comment.author_email(), comment.author()) {
                (Some(email), _) => Identifier::from(email),
                (None, Some(name)) => Identifier::from(name),
                (None, None) => self.sentinel(),
            },
            Subject::Email(raw) => Identifier::from(raw.as_str()),
        };

        Ok(identifier)
    }

    /// Like [`try_resolve_identifier`](Self::try_resolve_identifier), but an
    /// unknown user id resolves to the sentinel id.
    pub fn resolve_identifier<A>(&self, subject: &Subject, accounts: &A) -> Identifier
    where
        A: AccountDirectory + ?Sized,
    {
        match self.try_resolve_identifier(subject, accounts) {
            Ok(identifier) => identifier,
            Err(ResolveError::AccountNotFound(id)) => {
                log::warn!("No account for user id {id}, using sentinel id {}", self.default_id);
                self.sentinel()
            }
        }
    }

    /// Rewrite the hash and size segments of `request.markup`.
    ///
    /// Returns the markup unchanged on the discussion settings page, or when
    /// the default setting does not point at the service.
    pub fn rewrite_avatar_url<A>(&self, request: &AvatarRequest<'_>, accounts: &A) -> String
    where
        A: AccountDirectory + ?Sized,
    {
        if request.context.is_discussion_settings() {
            log::debug!("Discussion settings page, leaving avatar markup untouched");
            return request.markup.to_string();
        }

        let Some(captured) = self.pattern.capture(request.default_setting) else {
            log::debug!("Default avatar is not a Vanillicon URL, skipping rewrite");
            return request.markup.to_string();
        };

        let identifier = self.resolve_identifier(&request.subject, accounts);
        let hash = self.compute_hash(&identifier);
        let tier = Self::compute_size_tier(request.size);

        let mut markup = request.markup.to_string();
        // An empty search string would splice the hash between every char.
        if !captured.hash.is_empty() {
            markup = markup.replace(captured.hash, hash.as_str());
        }
        markup = markup.replace(
            &format!("{}.png", captured.size),
            &format!("{}.png", tier),
        );

        log::debug!("Rewrote avatar to hash {hash} at {tier}px");
        markup
    }
}
