//! Business category types.
//!
//! The platform stores each listing's category as an enumerated type in the
//! backing database; this module is the typed mirror of that column. The
//! wire tags are the snake_case strings the hosted backend uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lakbay_core::error::Error;

/// The category of a business listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    /// Hotels, inns, homestays.
    Accommodation,
    /// Restaurants, cafes, eateries.
    Restaurant,
    /// Souvenir and retail shops.
    Shop,
    /// Natural and cultural attractions.
    Attraction,
    /// Guided tour providers.
    TourOperator,
}

impl BusinessType {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Accommodation,
        Self::Restaurant,
        Self::Shop,
        Self::Attraction,
        Self::TourOperator,
    ];

    /// Returns the wire tag stored in the database (e.g. `tour_operator`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Restaurant => "restaurant",
            Self::Shop => "shop",
            Self::Attraction => "attraction",
            Self::TourOperator => "tour_operator",
        }
    }

    /// Returns the human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Restaurant => "Restaurant",
            Self::Shop => "Shop",
            Self::Attraction => "Attraction",
            Self::TourOperator => "Tour operator",
        }
    }

    /// Returns the `(tag, label)` pairs used to build choice fields.
    pub const fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("accommodation", "Accommodation"),
            ("restaurant", "Restaurant"),
            ("shop", "Shop"),
            ("attraction", "Attraction"),
            ("tour_operator", "Tour operator"),
        ]
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BusinessType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| {
                Error::Schema(format!(
                    "Select a valid choice. {s} is not one of the available choices."
                ))
            })
    }
}
