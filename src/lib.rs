//! A pure Rust toolkit for post-processing the multi-molecule mol2 outputs of the
//! DOCK structure-based docking program. It dissects ranked pose files and de novo
//! fragment libraries into per-molecule records and derives the artifacts a
//! docking campaign needs downstream: descriptor tables, clash diagnostics,
//! single-molecule files, filtered libraries, and visual reports.
//!
//! # Features
//!
//! - **Record segmentation** — Partition a multi-molecule stream into
//!   per-molecule line ranges, driven by the DOCK end sentinel (`0 ROOT`) or
//!   by fragment-library start markers (`TYPE:`)
//! - **Descriptor extraction** — Pull DOCK6's `##########` header block into
//!   tables with one row per molecule, with a selectable policy for missing
//!   fields
//! - **Clash screening** — Pairwise interatomic distances below a cutoff,
//!   with per-file and per-run totals
//! - **Fragment filtering** — Keep only library fragments observed more often
//!   than a frequency cutoff
//! - **Pose reports** — Self-contained HTML gallery of ranked poses with
//!   externally rendered 2-D depictions
//!
//! The `dsift` binary exposes each of these as a subcommand.
//!
//! # Quick Start
//!
//! Load a DOCK output, read its molecules, and screen the first pose for
//! atoms driven unphysically close together:
//!
//! ```
//! use dock_sift::{LineStream, clash, mol2};
//!
//! let lines = [
//!     "##########                            Name:   ZINC000000001",
//!     "@<TRIPOS>MOLECULE",
//!     "ZINC000000001",
//!     " 2 1 1 0 0",
//!     "SMALL",
//!     "USER_CHARGES",
//!     "@<TRIPOS>ATOM",
//!     "      1 C1          0.0000    0.0000    0.0000 C.3       1 <0>        -0.0600",
//!     "      2 C2          0.5000    0.0000    0.0000 C.3       1 <0>        -0.0600",
//!     "@<TRIPOS>BOND",
//!     "     1    1    2 1",
//!     "@<TRIPOS>SUBSTRUCTURE",
//!     "    1 LIG1        1 TEMP              0 ****  ****    0 ROOT",
//! ];
//!
//! let stream = LineStream::from_text(&lines.join("\n"));
//! let molecules = mol2::molecule::read_molecules(&stream)?;
//!
//! assert_eq!(molecules.len(), 1);
//! assert_eq!(molecules[0].name, "ZINC000000001");
//! assert_eq!(molecules[0].atom_count(), 2);
//!
//! // The two carbons sit 0.5 apart, well inside the 0.89 default cutoff.
//! let clashes = clash::find_clashes(&molecules[0].atoms, clash::DEFAULT_CUTOFF);
//! assert_eq!(clashes.len(), 1);
//! # Ok::<(), mol2::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`mol2`] — Line streams, record segmentation, the section state machine,
//!   and descriptor header extraction
//! - [`clash`] — Pairwise distance screening and run accounting
//! - [`tables`] — CSV and positions artifacts from descriptor headers
//! - [`fraglib`] — Fragment-library frequency filtering
//! - [`report`] — HTML pose gallery
//!
//! # Data Types
//!
//! - [`Atom`] — Atom identifier, name, and Cartesian coordinates
//! - [`Molecule`] — One named pose with its atoms
//! - [`LineStream`] / [`Segment`] — The in-memory file and a molecule's
//!   inclusive line range within it
//! - [`DescriptorSet`] / [`OnMissing`] — Declared header labels and the
//!   policy for molecules that lack one
//! - [`DescriptorTable`] — Extracted rows, ready to write as CSV

mod model;

pub mod clash;
pub mod fraglib;
pub mod mol2;
pub mod report;
pub mod tables;

pub use model::atom::Atom;
pub use model::molecule::Molecule;

pub use mol2::{DescriptorSet, LineStream, OnMissing, Section, Segment};

pub use clash::{Clash, FileSummary, RunSummary};
pub use tables::DescriptorTable;

pub use mol2::Error as Mol2Error;
