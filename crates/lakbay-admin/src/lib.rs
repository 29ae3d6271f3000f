//! # lakbay-admin
//!
//! Role-based access for the admin screens: the [`Role`](roles::Role)
//! enumeration and the static route-permission table with the derived
//! sidebar navigation. Pure lookups; no runtime state.

pub mod roles;
pub mod routes;

pub use roles::Role;
pub use routes::{allowed_roles, can_access, navigation_for, NavEntry, NavSection};
