//! Line-level dissection of DOCK multi-molecule mol2 files.
//!
//! DOCK writes one concatenated mol2 record per pose, each preceded by a
//! `##########`-prefixed descriptor header. This module provides the three
//! passes every post-processing tool shares:
//!
//! - [`segment`] – boundary detection: partition a [`LineStream`] into
//!   per-molecule [`Segment`]s by sentinel match.
//! - [`section`] – a small state machine over `@<TRIPOS>` record-type tags,
//!   so atom records are recognized by section membership rather than by
//!   token count.
//! - [`molecule`] / [`header`] – typed extraction of atoms, names, and
//!   labeled descriptor values out of one segment.

pub mod error;
pub mod header;
pub mod molecule;
pub mod section;
pub mod segment;
pub mod stream;

pub use error::Error;
pub use header::{DescriptorSet, OnMissing};
pub use section::Section;
pub use segment::Segment;
pub use stream::LineStream;

/// Substring closing every DOCK molecule record: the ROOT row of the
/// `@<TRIPOS>SUBSTRUCTURE` table. Matched as a substring to tolerate the
/// format's column padding, so it must never occur inside molecule names.
pub const END_OF_MOLECULE: &str = "0 ROOT";

/// Label of the pose-name line in the DOCK descriptor header. The colon is
/// part of the match so `Name_DOCK` and `Name_MOE` lines are not mistaken
/// for it.
pub const NAME_LABEL: &str = "Name:";
