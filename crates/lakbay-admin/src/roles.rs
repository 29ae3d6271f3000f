//! Admin user roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lakbay_core::error::Error;

/// The role assigned to an admin user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every screen.
    Administrator,
    /// Manages listings and categories.
    ContentManager,
    /// Reviews incoming registrations.
    Reviewer,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Self; 3] = [Self::Administrator, Self::ContentManager, Self::Reviewer];

    /// Returns the wire tag (e.g. `content_manager`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::ContentManager => "content_manager",
            Self::Reviewer => "reviewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.tag() == s)
            .ok_or_else(|| Error::Configuration(format!("unknown role tag: {s}")))
    }
}
