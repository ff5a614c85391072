//! Tabulation of DOCK descriptor headers.
//!
//! DOCK6 writes a block of `##########  Label:  value` lines before each
//! molecule record. This module extracts those blocks into a table with one
//! row per molecule and writes two artifacts: a CSV of the table itself and
//! a positions file mapping each molecule's name to the line range its
//! record occupies, for later retrieval of single molecules.

use crate::mol2::{self, DescriptorSet, LineStream, OnMissing, Segment};
use std::io::Write;
use thiserror::Error;

/// Column whose values name the molecules in the positions artifact.
pub const DEFAULT_NAME_COLUMN: &str = "Name_DOCK";

#[derive(Debug, Error)]
pub enum Error {
    #[error("mol2 extraction failed: {0}")]
    Mol2(#[from] mol2::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("name column '{0}' is not part of the descriptor set")]
    UnknownNameColumn(String),
}

/// One molecule's extracted record with the line range it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub segment: Segment,
    pub values: Vec<String>,
}

/// Descriptor values for every molecule of one multi-molecule file.
///
/// Rows are extracted segment by segment, so row `i` always belongs to
/// molecule `i` of the input. Name/position alignment in the artifacts is
/// structural rather than checked after the fact.
#[derive(Debug, Clone)]
pub struct DescriptorTable {
    labels: Vec<String>,
    rows: Vec<TableRow>,
}

impl DescriptorTable {
    /// Extracts the table from a segmented stream.
    ///
    /// Segmentation uses the DOCK end sentinel; a stream without any
    /// sentinel yields an empty table. Rows dropped under
    /// [`OnMissing::Drop`] are omitted while later molecules keep their
    /// input ordinals in error messages.
    pub fn build(
        stream: &LineStream,
        set: &DescriptorSet,
        on_missing: OnMissing,
    ) -> Result<Self, Error> {
        let segments =
            mol2::segment::by_end_sentinel(stream, |line| line.contains(mol2::END_OF_MOLECULE));

        let mut rows = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            if let Some(values) =
                mol2::header::extract_record(stream, *segment, set, index, on_missing)?
            {
                rows.push(TableRow {
                    segment: *segment,
                    values,
                });
            }
        }

        Ok(Self {
            labels: set.labels().to_vec(),
            rows,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Writes the table as CSV: a header row of labels, then one record per
    /// molecule.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.labels)?;
        for row in &self.rows {
            csv.write_record(&row.values)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Writes the positions artifact: `Name\tbegin_idx\tend_idx`, then one
    /// tab-separated row per molecule with 0-based line indices right-aligned
    /// to width 6.
    pub fn write_positions<W: Write>(&self, writer: &mut W, name_column: &str) -> Result<(), Error> {
        let column = self
            .labels
            .iter()
            .position(|label| label == name_column)
            .ok_or_else(|| Error::UnknownNameColumn(name_column.to_string()))?;

        writeln!(writer, "Name\tbegin_idx\tend_idx")?;
        for row in &self.rows {
            writeln!(
                writer,
                "{}\t{:>6}\t{:>6}",
                row.values[column], row.segment.start, row.segment.end
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_molecule_stream() -> LineStream {
        LineStream::from_text(
            "##########                       Name_DOCK:   ZINC000000001\n\
             ##########                           SlogP:   1.20\n\
             @<TRIPOS>MOLECULE\n\
             ZINC000000001\n\
             @<TRIPOS>SUBSTRUCTURE\n\
             1 LIG1  1 TEMP  0 **** ****  0 ROOT\n\
             ##########                       Name_DOCK:   ZINC000000002\n\
             ##########                           SlogP:   -0.35\n\
             @<TRIPOS>MOLECULE\n\
             ZINC000000002\n\
             @<TRIPOS>SUBSTRUCTURE\n\
             1 LIG1  1 TEMP  0 **** ****  0 ROOT\n",
        )
    }

    fn name_and_slogp() -> DescriptorSet {
        DescriptorSet::new(["Name_DOCK", "SlogP"])
    }

    #[test]
    fn rows_follow_molecule_order() {
        let stream = two_molecule_stream();
        let table = DescriptorTable::build(&stream, &name_and_slogp(), OnMissing::Fail).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows()[0].values.to_vec(),
            vec!["ZINC000000001", "1.20"]
        );
        assert_eq!(
            table.rows()[1].values.to_vec(),
            vec!["ZINC000000002", "-0.35"]
        );
    }

    #[test]
    fn stream_without_sentinel_yields_empty_table() {
        let stream = LineStream::from_text("just\nsome\nlines\n");
        let table = DescriptorTable::build(&stream, &name_and_slogp(), OnMissing::Fail).unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn csv_artifact_has_header_and_one_record_per_molecule() {
        let stream = two_molecule_stream();
        let table = DescriptorTable::build(&stream, &name_and_slogp(), OnMissing::Fail).unwrap();

        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Name_DOCK,SlogP\nZINC000000001,1.20\nZINC000000002,-0.35\n"
        );
    }

    #[test]
    fn positions_artifact_matches_dock_format() {
        let stream = two_molecule_stream();
        let table = DescriptorTable::build(&stream, &name_and_slogp(), OnMissing::Fail).unwrap();

        let mut out = Vec::new();
        table
            .write_positions(&mut out, DEFAULT_NAME_COLUMN)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Name\tbegin_idx\tend_idx\n\
             ZINC000000001\t     0\t     5\n\
             ZINC000000002\t     6\t    11\n"
        );
    }

    #[test]
    fn unknown_name_column_is_an_error() {
        let stream = two_molecule_stream();
        let table = DescriptorTable::build(&stream, &name_and_slogp(), OnMissing::Fail).unwrap();

        let err = table
            .write_positions(&mut Vec::new(), "ZINC_ID")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownNameColumn(label) if label == "ZINC_ID"));
    }

    #[test]
    fn missing_descriptor_fails_with_label_and_ordinal() {
        let stream = two_molecule_stream();
        let set = DescriptorSet::new(["Name_DOCK", "Tanimoto_Score"]);

        let err = DescriptorTable::build(&stream, &set, OnMissing::Fail).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Tanimoto_Score"));
        assert!(message.contains("molecule 0"));
    }

    #[test]
    fn blank_policy_keeps_row_alignment() {
        let stream = two_molecule_stream();
        let set = DescriptorSet::new(["Name_DOCK", "Tanimoto_Score"]);

        let table = DescriptorTable::build(&stream, &set, OnMissing::Blank).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].values.to_vec(), vec!["ZINC000000001", ""]);
        assert_eq!(table.rows()[1].values.to_vec(), vec!["ZINC000000002", ""]);
    }

    #[test]
    fn drop_policy_removes_exactly_the_offending_rows() {
        // Only the first molecule carries SlogP.
        let stream = LineStream::from_text(
            "##########                       Name_DOCK:   ZINC000000001\n\
             ##########                           SlogP:   1.20\n\
             1 LIG1  1 TEMP  0 **** ****  0 ROOT\n\
             ##########                       Name_DOCK:   ZINC000000002\n\
             1 LIG1  1 TEMP  0 **** ****  0 ROOT\n",
        );

        let table = DescriptorTable::build(&stream, &name_and_slogp(), OnMissing::Drop).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.rows()[0].values.to_vec(),
            vec!["ZINC000000001", "1.20"]
        );
    }
}
