//! User type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a user participates in the community.
///
/// The type is informational for profile display; it does not gate any
/// operation. Any user may post requests and any user may volunteer for
/// requests they did not post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Primarily posts help requests.
    Resident,
    /// Primarily fulfils help requests.
    Volunteer,
    /// Both posts and fulfils requests.
    Both,
}

impl UserType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Volunteer => "volunteer",
            Self::Both => "both",
        }
    }
}

impl Default for UserType {
    fn default() -> Self {
        Self::Both
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
