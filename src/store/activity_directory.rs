use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;
use crate::store::seed;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up")]
    AlreadySignedUp,
    #[error("Student not registered for this activity")]
    NotRegistered,
}

/// Shared in-memory store mapping activity name to its record.
///
/// Cloning is cheap and every clone points at the same underlying mapping.
/// Each mutating operation holds the write lock across its whole
/// check-then-mutate step, so a duplicate check and the append it guards
/// cannot interleave between requests.
#[derive(Clone)]
pub struct ActivityDirectory {
    activities: Arc<RwLock<HashMap<String, Activity>>>,
}

impl ActivityDirectory {
    /// Fresh directory with the fixed school roster. Tests get isolation by
    /// constructing their own instance instead of snapshotting a global.
    pub fn seeded() -> Self {
        Self {
            activities: Arc::new(RwLock::new(seed::seed_activities())),
        }
    }

    /// Snapshot of the full mapping. Never fails.
    pub fn list_activities(&self) -> HashMap<String, Activity> {
        self.activities.read().clone()
    }

    /// Add `email` to the activity's roster, preserving signup order.
    ///
    /// Capacity (`max_participants`) is deliberately not checked.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove `email` from the activity's roster.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered);
        };

        activity.participants.remove(pos);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}
