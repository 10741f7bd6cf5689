use async_trait::async_trait;
use contact_manager::client::{IdentityValidator, ResolvedIdentity};
use contact_manager::error::{IdentityError, IdentityResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock identity validator for testing.
///
/// Maps known tokens to identities; any other token is rejected as invalid.
/// A token can also be mapped to a specific identity-service error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockIdentityValidator {
    identities: Arc<Mutex<HashMap<String, ResolvedIdentity>>>,
    failures: Arc<Mutex<HashMap<String, IdentityError>>>,
    calls: Arc<Mutex<Vec<(String, i32)>>>,
}

#[allow(dead_code)]
impl MockIdentityValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as the caller `email`.
    pub fn with_identity(self, token: &str, email: &str) -> Self {
        self.identities.lock().unwrap().insert(
            token.to_string(),
            ResolvedIdentity {
                user_id: format!("user-{}", token),
                email: email.to_string(),
                is_valid: true,
            },
        );
        self
    }

    /// Resolve `token` but report it as not valid.
    pub fn with_invalid_flag(self, token: &str) -> Self {
        self.identities.lock().unwrap().insert(
            token.to_string(),
            ResolvedIdentity {
                user_id: String::new(),
                email: String::new(),
                is_valid: false,
            },
        );
        self
    }

    /// Fail validation of `token` with `err`.
    pub fn with_failure(self, token: &str, err: IdentityError) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(token.to_string(), err);
        self
    }

    /// Tokens and app ids seen so far.
    pub fn calls(&self) -> Vec<(String, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityValidator for MockIdentityValidator {
    async fn validate_token(&self, token: &str, app_id: i32) -> IdentityResult<ResolvedIdentity> {
        self.calls.lock().unwrap().push((token.to_string(), app_id));

        if let Some(err) = self.failures.lock().unwrap().get(token) {
            return Err(err.clone());
        }
        self.identities
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(IdentityError::InvalidToken)
    }
}
