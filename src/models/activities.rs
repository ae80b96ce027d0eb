use serde::{Deserialize, Serialize};

/// One extracurricular offering as it appears on the wire.
///
/// `max_participants` is informational: signup does not enforce it, the
/// frontend only uses it to show how full an activity is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order is preserved; emails are unique within one activity.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|s| s.to_string()).collect();
        self
    }
}
