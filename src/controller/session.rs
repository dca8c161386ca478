//! Member session: the stored ParPass code and what it resolves to.
//!
//! A session is either signed out or holds a member *and* their usage.
//! There is no state in between.

use std::collections::HashMap;
use tracing::{info, warn};

use crate::controller::api::ParPassApi;
use crate::error::ParPassError;
use crate::model::{Member, Usage};

/// Name the credential is persisted under.
pub const CREDENTIAL_KEY: &str = "parpass_code";
pub const DEFAULT_HOLES: u32 = 18;

/// Where the member's code lives between requests.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn store(&mut self, code: &str);
    fn clear(&mut self);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryCredentials {
    values: HashMap<String, String>,
}

impl MemoryCredentials {
    #[must_use]
    pub fn with_code(code: &str) -> Self {
        let mut store = Self::default();
        store.store(code);
        store
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.values.get(CREDENTIAL_KEY).cloned()
    }

    fn store(&mut self, code: &str) {
        self.values
            .insert(CREDENTIAL_KEY.to_string(), code.to_string());
    }

    fn clear(&mut self) {
        self.values.remove(CREDENTIAL_KEY);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub member: Member,
    pub usage: Usage,
}

impl SignedIn {
    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.usage.rounds_remaining(&self.member)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    signed_in: Option<SignedIn>,
}

#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

async fn resolve(api: &dyn ParPassApi, code: &str) -> Result<SignedIn, ParPassError> {
    let member = api.member_by_code(code).await?;
    let usage = api.member_usage(&member.id).await?;
    Ok(SignedIn { member, usage })
}

impl SessionContext {
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Resolve the stored code. Any failure clears the stored code and yields
    /// a signed-out session.
    pub async fn load(api: &dyn ParPassApi, store: &mut dyn CredentialStore) -> Self {
        let Some(code) = store.load().filter(|c| !c.trim().is_empty()) else {
            return Self::signed_out();
        };
        match resolve(api, &code).await {
            Ok(signed_in) => Self {
                signed_in: Some(signed_in),
            },
            Err(err) => {
                warn!(%err, "stored ParPass code did not resolve, clearing it");
                store.clear();
                Self::signed_out()
            }
        }
    }

    /// Look up `code` (upper-cased) and remember it only once both the member
    /// and their usage resolved.
    ///
    /// # Errors
    ///
    /// Returns the lookup error; the store and the session are left untouched.
    pub async fn sign_in(
        &mut self,
        api: &dyn ParPassApi,
        store: &mut dyn CredentialStore,
        code: &str,
    ) -> Result<&SignedIn, ParPassError> {
        let code = normalize_code(code);
        let signed_in = resolve(api, &code).await?;
        store.store(&code);
        info!(member_id = %signed_in.member.id, "member signed in");
        Ok(&*self.signed_in.insert(signed_in))
    }

    pub fn sign_out(&mut self, store: &mut dyn CredentialStore) {
        store.clear();
        self.signed_in = None;
    }

    /// # Errors
    ///
    /// Returns `SignedOut` without a member, otherwise the usage lookup error.
    pub async fn refresh_usage(&mut self, api: &dyn ParPassApi) -> Result<Usage, ParPassError> {
        let signed_in = self.signed_in.as_mut().ok_or(ParPassError::SignedOut)?;
        signed_in.usage = api.member_usage(&signed_in.member.id).await?;
        Ok(signed_in.usage)
    }

    /// Record a round at `course_id` and reload usage. Once the round is
    /// recorded the call succeeds; a failed reload keeps the previous usage.
    ///
    /// # Errors
    ///
    /// Returns `SignedOut` without a member, or the collaborator's rejection.
    pub async fn check_in(
        &mut self,
        api: &dyn ParPassApi,
        course_id: &str,
        holes_played: u32,
    ) -> Result<Usage, ParPassError> {
        let member_id = self
            .member()
            .map(|m| m.id.clone())
            .ok_or(ParPassError::SignedOut)?;
        api.check_in(&member_id, course_id, holes_played).await?;
        info!(%member_id, course_id, holes_played, "checked in");
        match self.refresh_usage(api).await {
            Ok(usage) => Ok(usage),
            Err(err) => {
                warn!(%err, %member_id, "usage reload failed after check-in");
                Ok(self.usage().copied().unwrap_or_default())
            }
        }
    }

    #[must_use]
    pub fn signed_in(&self) -> Option<&SignedIn> {
        self.signed_in.as_ref()
    }

    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        self.signed_in.as_ref().map(|s| &s.member)
    }

    #[must_use]
    pub fn usage(&self) -> Option<&Usage> {
        self.signed_in.as_ref().map(|s| &s.usage)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.signed_in.is_some()
    }
}
