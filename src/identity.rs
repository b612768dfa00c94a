//! Current-user identity, consumed from an external auth collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId(id)
    }
}

/// Source of the current-user identity.
///
/// The auth flow itself lives outside this crate; all the quiz needs is
/// whether a user is signed in and, if so, a stable identifier.
pub trait IdentityProvider {
    /// The signed-in user, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<UserId>;
}

/// Fixed identity for in-process use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    /// An identity provider with `id` signed in.
    pub fn signed_in(id: impl Into<String>) -> Self {
        StaticIdentity {
            user: Some(UserId::new(id)),
        }
    }

    /// An identity provider with nobody signed in.
    pub fn signed_out() -> Self {
        StaticIdentity { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}
