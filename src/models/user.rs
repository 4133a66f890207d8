use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account metadata that is not derivable from the repository collection.
/// Optional fields stay `None` when the API leaves them unset; callers can
/// tell "unset" apart from an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Placeholder profile for a login whose data could not be fetched.
    pub fn unresolved(login: &str) -> Self {
        Self {
            login: login.to_string(),
            name: None,
            bio: None,
            location: None,
            company: None,
            website: None,
            gists: 0,
            followers: 0,
            following: 0,
            created_at: None,
            avatar_url: None,
        }
    }
}
