use serde::{Deserialize, Serialize};

/// A host user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}

impl Account {
    pub fn new(id: u64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: String::new(),
        }
    }
}

/// A host comment. Empty strings mean the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub author_email: String,
    #[serde(default)]
    pub author: String,
}

impl Comment {
    pub fn new(author_email: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            author_email: author_email.into(),
            author: author.into(),
        }
    }

    pub fn author_email(&self) -> Option<&str> {
        non_empty(&self.author_email)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Who the host is asking an avatar for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    UserId(u64),
    User(Account),
    Comment(Comment),
    /// An email address or any other opaque string, hashed as-is.
    Email(String),
}

impl Subject {
    /// Classify a raw string the way the host does: all ASCII digits means a
    /// user id, anything else is hashed as-is.
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = raw.parse::<u64>() {
                return Subject::UserId(id);
            }
        }
        Subject::Email(raw.to_string())
    }
}

impl From<u64> for Subject {
    fn from(id: u64) -> Self {
        Subject::UserId(id)
    }
}

impl From<Account> for Subject {
    fn from(account: Account) -> Self {
        Subject::User(account)
    }
}

impl From<Comment> for Subject {
    fn from(comment: Comment) -> Self {
        Subject::Comment(comment)
    }
}

impl From<&str> for Subject {
    fn from(raw: &str) -> Self {
        Subject::Email(raw.to_string())
    }
}

impl From<String> for Subject {
    fn from(raw: String) -> Self {
        Subject::Email(raw)
    }
}
