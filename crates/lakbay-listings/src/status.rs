//! Registration lifecycle for business listings.
//!
//! New listings enter review as `Pending`; reviewers approve or reject
//! them, rejected listings may be resubmitted, and retired listings are
//! archived. The store enforces these transitions so screens cannot move a
//! registration into an impossible state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lakbay_core::error::Error;

/// The review state of a business registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Awaiting review.
    Pending,
    /// Approved and visible on the platform.
    Approved,
    /// Rejected by a reviewer; may be resubmitted.
    Rejected,
    /// Retired from the platform. Terminal.
    Archived,
}

impl RegistrationStatus {
    /// Returns the states this status may move to.
    pub const fn valid_transitions(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Archived],
            Self::Rejected => &[Self::Pending, Self::Archived],
            Self::Archived => &[],
        }
    }

    /// Returns `true` if this status may move to `target`.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.valid_transitions().contains(&target)
    }

    /// Returns `true` if no further transitions are possible.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Moves to `target`, or fails with [`Error::Status`] if the move is
    /// not allowed.
    pub fn transition_to(self, target: Self) -> Result<Self, Error> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(Error::Status(format!("{self} -> {target}")))
        }
    }

    /// Returns the wire tag stored in the database.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RegistrationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "archived" => Ok(Self::Archived),
            other => Err(Error::Status(format!("unknown status tag: {other}"))),
        }
    }
}
