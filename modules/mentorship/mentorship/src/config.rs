use serde::{Deserialize, Serialize};

/// Configuration for the mentorship module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MentorshipConfig {
    /// Whether a mentee may re-request a mentor whose previous request was
    /// rejected. When `true`, creating a request silently replaces an
    /// existing `Rejected` record for the pair; `Pending` and `Accepted`
    /// records always conflict. When `false`, any existing record
    /// conflicts until the mentee cancels it.
    #[serde(default)]
    pub rerequest_after_rejection: bool,

    /// Upper bound on availability slots a mentor may store.
    #[serde(default = "default_max_slots")]
    pub max_availability_slots: usize,
}

impl Default for MentorshipConfig {
    fn default() -> Self {
        Self {
            rerequest_after_rejection: false,
            max_availability_slots: default_max_slots(),
        }
    }
}

fn default_max_slots() -> usize {
    100
}
