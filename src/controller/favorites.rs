//! Optimistic favorite toggling.
//!
//! The displayed state flips as soon as a toggle begins. When the
//! collaborator answers, the toggle is settled: success keeps the flip,
//! failure restores the state the toggle started from. Every toggle takes a
//! fresh per-course token and only the newest token for a course may settle
//! it, so a slow response to an older toggle can never overwrite a newer one.

use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::controller::api::ParPassApi;
use crate::controller::session::SessionContext;
use crate::error::ParPassError;
use crate::model::Course;

#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    course_ids: HashSet<String>,
    latest_token: HashMap<String, u64>,
    next_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub course_id: String,
    pub token: u64,
    pub prior: bool,
    pub desired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Confirmed,
    Reverted,
    /// A newer toggle for the same course was issued; this answer is ignored.
    Superseded,
    /// Nobody is signed in.
    Skipped,
}

impl FavoriteSet {
    #[must_use]
    pub fn from_courses(courses: &[Course]) -> Self {
        Self {
            course_ids: courses.iter().map(|c| c.id.clone()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.course_ids.contains(course_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.course_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self, course_id: &str) -> bool {
        self.latest_token.contains_key(course_id)
    }

    /// Flip the displayed state now and hand back what is needed to settle it.
    pub fn begin_toggle(&mut self, course_id: &str) -> PendingToggle {
        self.next_token += 1;
        let token = self.next_token;
        let prior = self.contains(course_id);
        self.set(course_id, !prior);
        self.latest_token.insert(course_id.to_string(), token);
        PendingToggle {
            course_id: course_id.to_string(),
            token,
            prior,
            desired: !prior,
        }
    }

    pub fn settle(
        &mut self,
        pending: &PendingToggle,
        result: &Result<(), ParPassError>,
    ) -> ToggleOutcome {
        if self.latest_token.get(&pending.course_id) != Some(&pending.token) {
            debug!(course_id = %pending.course_id, token = pending.token, "stale favorite response dropped");
            return ToggleOutcome::Superseded;
        }
        self.latest_token.remove(&pending.course_id);
        match result {
            Ok(()) => ToggleOutcome::Confirmed,
            Err(_) => {
                self.set(&pending.course_id, pending.prior);
                ToggleOutcome::Reverted
            }
        }
    }

    fn set(&mut self, course_id: &str, favorite: bool) {
        if favorite {
            self.course_ids.insert(course_id.to_string());
        } else {
            self.course_ids.remove(course_id);
        }
    }
}

/// Issue the add or remove call a pending toggle asks for.
///
/// # Errors
///
/// Returns whatever the collaborator returned.
pub async fn send_toggle(
    api: &dyn ParPassApi,
    member_id: &str,
    pending: &PendingToggle,
) -> Result<(), ParPassError> {
    if pending.desired {
        api.add_favorite(member_id, &pending.course_id).await
    } else {
        api.remove_favorite(member_id, &pending.course_id).await
    }
}

/// Toggle one course for the signed-in member. No-op when signed out.
pub async fn toggle_favorite(
    api: &dyn ParPassApi,
    session: &SessionContext,
    favorites: &mut FavoriteSet,
    course_id: &str,
) -> ToggleOutcome {
    let Some(member) = session.member() else {
        return ToggleOutcome::Skipped;
    };
    let pending = favorites.begin_toggle(course_id);
    let result = send_toggle(api, &member.id, &pending).await;
    if let Err(err) = &result {
        warn!(%err, course_id, "favorite toggle failed, reverting");
    }
    favorites.settle(&pending, &result)
}

/// Load the member's favorites into a set. Signed out yields an empty set.
///
/// # Errors
///
/// Returns the favorites lookup error.
pub async fn load_favorites(
    api: &dyn ParPassApi,
    session: &SessionContext,
) -> Result<FavoriteSet, ParPassError> {
    match session.member() {
        Some(member) => Ok(FavoriteSet::from_courses(
            &api.member_favorites(&member.id).await?,
        )),
        None => Ok(FavoriteSet::default()),
    }
}
