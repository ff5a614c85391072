//! Core data structures shared across the `dock-sift` tools.
//!
//! - [`atom`] – Minimal atom representation with identifier, name, and Cartesian coordinates.
//! - [`molecule`] – A named pose with its atoms, as read from one mol2 record.
//!
//! These types carry raw geometry only. Scoring descriptors live in the record
//! header and are handled by [`crate::mol2::header`] without ever touching the
//! atom list, so geometry checks and table extraction stay independent.

pub mod atom;
pub mod molecule;

pub use atom::Atom;
pub use molecule::Molecule;
