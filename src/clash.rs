//! Pairwise distance screening for docked poses.
//!
//! DOCK occasionally emits poses with atoms driven unphysically close
//! together. This module finds every atom pair closer than a cutoff and
//! aggregates per-file and per-run totals as explicit values.

use crate::model::Atom;
use std::fmt;

/// Default clash cutoff in length units (Å for DOCK output).
pub const DEFAULT_CUTOFF: f64 = 0.89;

/// One atom pair closer than the cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Clash {
    pub first: Atom,
    pub second: Atom,
    pub distance: f64,
}

impl Clash {
    /// Formats the pair as one report line, prefixed with the pose name.
    ///
    /// The second atom prints name before id, mirroring the first.
    pub fn report_line(&self, molecule: &str) -> String {
        format!(
            "{}, | {} {} || {:.4} {:.4} {:.4} | {:.4} {:.4} {:.4} ||  {} {} | {:.4}",
            molecule,
            self.first.id,
            self.first.name,
            self.first.position[0],
            self.first.position[1],
            self.first.position[2],
            self.second.position[0],
            self.second.position[1],
            self.second.position[2],
            self.second.name,
            self.second.id,
            self.distance,
        )
    }
}

impl fmt::Display for Clash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} .. {} {} at {:.4}",
            self.first.id, self.first.name, self.second.name, self.second.id, self.distance
        )
    }
}

/// Scans all atom pairs and returns those strictly closer than `cutoff`.
///
/// Pairs are reported in scan order: ascending first index, then ascending
/// second index. A pair at exactly the cutoff is not reported. Fewer than
/// two atoms produce no pairs.
pub fn find_clashes(atoms: &[Atom], cutoff: f64) -> Vec<Clash> {
    let mut clashes = Vec::new();

    for i in 0..atoms.len() {
        for j in (i + 1)..atoms.len() {
            let distance = atoms[i].distance(&atoms[j]);
            if distance < cutoff {
                clashes.push(Clash {
                    first: atoms[i].clone(),
                    second: atoms[j].clone(),
                    distance,
                });
            }
        }
    }

    clashes
}

/// Totals for one scanned file. Counts restart from zero for each file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub molecules: usize,
    pub flagged: usize,
    pub pairs: usize,
}

impl FileSummary {
    /// Folds one molecule's scan result into the file totals.
    ///
    /// A molecule counts as flagged when at least one pair is below cutoff.
    pub fn record(&mut self, clashes: &[Clash]) {
        self.molecules += 1;
        if !clashes.is_empty() {
            self.flagged += 1;
        }
        self.pairs += clashes.len();
    }
}

/// Totals across a whole run, folded from per-file summaries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub molecules: usize,
    pub flagged: usize,
    pub pairs: usize,
}

impl RunSummary {
    pub fn absorb(&mut self, file: FileSummary) {
        self.files += 1;
        self.molecules += file.molecules;
        self.flagged += file.flagged;
        self.pairs += file.pairs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(id: usize, name: &str, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(id, name, [x, y, z])
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn finds_pair_below_cutoff() {
        let atoms = vec![
            atom(1, "C1", 0.0, 0.0, 0.0),
            atom(2, "C2", 0.5, 0.0, 0.0),
        ];

        let clashes = find_clashes(&atoms, DEFAULT_CUTOFF);

        assert_eq!(clashes.len(), 1);
        assert_eq!(clashes[0].first.id, 1);
        assert_eq!(clashes[0].second.id, 2);
        assert!(approx_eq(clashes[0].distance, 0.5));
    }

    #[test]
    fn pair_at_exact_cutoff_is_not_reported() {
        let atoms = vec![
            atom(1, "C1", 0.0, 0.0, 0.0),
            atom(2, "C2", DEFAULT_CUTOFF, 0.0, 0.0),
        ];

        assert!(find_clashes(&atoms, DEFAULT_CUTOFF).is_empty());
    }

    #[test]
    fn pair_just_inside_cutoff_is_reported() {
        let atoms = vec![
            atom(1, "C1", 0.0, 0.0, 0.0),
            atom(2, "C2", DEFAULT_CUTOFF - 1e-6, 0.0, 0.0),
        ];

        assert_eq!(find_clashes(&atoms, DEFAULT_CUTOFF).len(), 1);
    }

    #[test]
    fn fewer_than_two_atoms_produce_no_pairs() {
        assert!(find_clashes(&[], DEFAULT_CUTOFF).is_empty());
        assert!(find_clashes(&[atom(1, "C1", 0.0, 0.0, 0.0)], DEFAULT_CUTOFF).is_empty());
    }

    #[test]
    fn pairs_come_out_in_scan_order() {
        // Three atoms within 0.2 of each other: every pair clashes.
        let atoms = vec![
            atom(1, "C1", 0.0, 0.0, 0.0),
            atom(2, "C2", 0.1, 0.0, 0.0),
            atom(3, "C3", 0.2, 0.0, 0.0),
        ];

        let clashes = find_clashes(&atoms, DEFAULT_CUTOFF);
        let ids: Vec<(usize, usize)> = clashes
            .iter()
            .map(|c| (c.first.id, c.second.id))
            .collect();

        assert_eq!(ids, vec![(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn clash_count_matches_pairs_below_cutoff() {
        // Atoms on a line at 0, 0.5, 1.5, 1.6: close pairs are
        // (0, 0.5), (1.5, 1.6) only.
        let atoms = vec![
            atom(1, "C1", 0.0, 0.0, 0.0),
            atom(2, "C2", 0.5, 0.0, 0.0),
            atom(3, "C3", 1.5, 0.0, 0.0),
            atom(4, "C4", 1.6, 0.0, 0.0),
        ];

        assert_eq!(find_clashes(&atoms, DEFAULT_CUTOFF).len(), 2);
    }

    #[test]
    fn report_line_carries_name_atoms_and_distance() {
        let clashes = find_clashes(
            &[atom(1, "C1", 0.0, 0.0, 0.0), atom(2, "O1", 0.5, 0.0, 0.0)],
            DEFAULT_CUTOFF,
        );

        let line = clashes[0].report_line("ZINC000001");
        assert_eq!(
            line,
            "ZINC000001, | 1 C1 || 0.0000 0.0000 0.0000 | 0.5000 0.0000 0.0000 ||  O1 2 | 0.5000"
        );
    }

    #[test]
    fn file_summary_counts_molecules_flagged_and_pairs() {
        let close = find_clashes(
            &[atom(1, "C1", 0.0, 0.0, 0.0), atom(2, "C2", 0.1, 0.0, 0.0)],
            DEFAULT_CUTOFF,
        );
        let clean: Vec<Clash> = Vec::new();

        let mut summary = FileSummary::default();
        summary.record(&close);
        summary.record(&clean);
        summary.record(&close);

        assert_eq!(summary.molecules, 3);
        assert_eq!(summary.flagged, 2);
        assert_eq!(summary.pairs, 2);
    }

    #[test]
    fn run_summary_equals_sum_of_file_summaries() {
        let first = FileSummary {
            molecules: 4,
            flagged: 1,
            pairs: 3,
        };
        let second = FileSummary {
            molecules: 2,
            flagged: 2,
            pairs: 5,
        };

        let mut run = RunSummary::default();
        run.absorb(first);
        run.absorb(second);

        assert_eq!(run.files, 2);
        assert_eq!(run.molecules, 6);
        assert_eq!(run.flagged, 3);
        assert_eq!(run.pairs, 8);
    }
}
