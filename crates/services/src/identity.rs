use async_trait::async_trait;

use quiz_core::model::UserId;

/// A signed-in user, as far as the quiz flow cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: UserId,
}

/// Resolves who is taking the quiz, if anyone.
///
/// Anonymous play is the default; persistence only happens when a provider
/// reports an identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Option<UserIdentity>;
}

/// Provider that never reports a user. Results are not persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait]
impl IdentityProvider for Anonymous {
    async fn current_user(&self) -> Option<UserIdentity> {
        None
    }
}

/// Provider pinned to one known user id, e.g. from configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdentity {
    id: UserId,
}

impl FixedIdentity {
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentity {
    async fn current_user(&self) -> Option<UserIdentity> {
        Some(UserIdentity { id: self.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anonymous_reports_no_user() {
        assert_eq!(Anonymous.current_user().await, None);
    }

    #[tokio::test]
    async fn fixed_identity_reports_its_user() {
        let id = UserId::random();
        let provider = FixedIdentity::new(id);
        assert_eq!(provider.current_user().await, Some(UserIdentity { id }));
    }
}
