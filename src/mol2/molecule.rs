use crate::model::{Atom, Molecule};

use super::error::Error;
use super::header;
use super::section::{Section, data_lines};
use super::segment::{self, Segment};
use super::stream::LineStream;
use super::{END_OF_MOLECULE, NAME_LABEL};

/// Minimum whitespace-token arity of an ATOM-section record: id, name,
/// x, y, z, and the SYBYL atom type. DOCK emits 9 columns (those six plus
/// substructure id, substructure name, and partial charge).
const MIN_ATOM_FIELDS: usize = 6;

/// Extracts the atom records of one molecule segment.
///
/// Only lines inside the `@<TRIPOS>ATOM` section are considered; blank lines
/// are skipped and anything else in the section must parse, loudly. Tokens
/// 0–4 are typed as (id, name, x, y, z).
pub fn atoms(stream: &LineStream, segment: Segment) -> Result<Vec<Atom>, Error> {
    let mut out = Vec::new();
    for (idx, section, line) in data_lines(stream, segment) {
        if section != Section::Atom || line.trim().is_empty() {
            continue;
        }
        out.push(parse_atom(line, idx + 1)?);
    }
    Ok(out)
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, Error> {
    let parts: Vec<_> = line.split_whitespace().collect();
    if parts.len() < MIN_ATOM_FIELDS {
        return Err(Error::parse(line_no, "invalid ATOM line"));
    }

    let id = parts[0]
        .parse::<usize>()
        .map_err(|_| Error::parse(line_no, "invalid atom id in ATOM line"))?;
    let x = parts[2]
        .parse::<f64>()
        .map_err(|_| Error::parse(line_no, "invalid x coordinate in ATOM line"))?;
    let y = parts[3]
        .parse::<f64>()
        .map_err(|_| Error::parse(line_no, "invalid y coordinate in ATOM line"))?;
    let z = parts[4]
        .parse::<f64>()
        .map_err(|_| Error::parse(line_no, "invalid z coordinate in ATOM line"))?;

    Ok(Atom::new(id, parts[1], [x, y, z]))
}

/// The molecule's name as declared in its `@<TRIPOS>MOLECULE` section: the
/// first non-blank data line after the tag, trimmed. `None` when the segment
/// has no such line.
pub fn section_name(stream: &LineStream, segment: Segment) -> Option<String> {
    data_lines(stream, segment)
        .find(|(_, section, line)| *section == Section::Molecule && !line.trim().is_empty())
        .map(|(_, _, line)| line.trim().to_string())
}

/// The pose name used for annotation output: the DOCK header `Name` value
/// when present, otherwise the MOLECULE-section name.
pub fn pose_name(stream: &LineStream, segment: Segment) -> Result<Option<String>, Error> {
    if let Some(name) = header::label_value(stream, segment, NAME_LABEL)? {
        return Ok(Some(name));
    }
    Ok(section_name(stream, segment))
}

/// Reads every molecule of a DOCK multi-mol2 stream: segments the stream on
/// the end-of-molecule sentinel, then assembles name and atoms per segment.
///
/// A stream without the sentinel yields an empty list. A molecule with no
/// name anywhere is kept under the `"(unnamed)"` placeholder.
pub fn read_molecules(stream: &LineStream) -> Result<Vec<Molecule>, Error> {
    let segments = segment::by_end_sentinel(stream, |l| l.contains(END_OF_MOLECULE));
    let mut molecules = Vec::with_capacity(segments.len());
    for seg in segments {
        let name = pose_name(stream, seg)?.unwrap_or_else(|| "(unnamed)".to_string());
        molecules.push(Molecule::new(name, atoms(stream, seg)?));
    }
    Ok(molecules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_atom_molecule() -> LineStream {
        LineStream::from_text(
            "##########                                Name:   ZINC000000001\n\
             @<TRIPOS>MOLECULE\n\
             ZINC000000001\n\
                 2     1     1  0  0\n\
             SMALL\n\
             USER_CHARGES\n\
             @<TRIPOS>ATOM\n\
                   1 C1          0.0000    0.0000    0.0000 C.3       1 LIG1       -0.0398\n\
                   2 C2          0.0000    0.0000    0.5000 C.3       1 LIG1        0.0122\n\
             @<TRIPOS>BOND\n\
                  1    1    2 1\n\
             @<TRIPOS>SUBSTRUCTURE\n\
                  1 LIG1        1 TEMP              0 ****  ****    0 ROOT\n",
        )
    }

    fn whole(stream: &LineStream) -> Segment {
        Segment {
            start: 0,
            end: stream.len() - 1,
        }
    }

    #[test]
    fn atoms_extracts_both_descriptors() {
        let stream = two_atom_molecule();
        let atoms = atoms(&stream, whole(&stream)).unwrap();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].id, 1);
        assert_eq!(atoms[0].name, "C1");
        assert_eq!(atoms[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(atoms[1].id, 2);
        assert_eq!(atoms[1].position, [0.0, 0.0, 0.5]);
    }

    #[test]
    fn substructure_root_row_is_never_an_atom() {
        // Nine tokens ending in ROOT, same arity as a DOCK atom line.
        let stream = two_atom_molecule();
        let atoms = atoms(&stream, whole(&stream)).unwrap();
        assert!(atoms.iter().all(|a| a.name != "TEMP" && a.name != "ROOT"));
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn bond_rows_are_never_atoms() {
        let stream = two_atom_molecule();
        // The bond row "1 1 2 1" would parse as an atom id and coordinates
        // if token counts alone decided membership.
        assert_eq!(atoms(&stream, whole(&stream)).unwrap().len(), 2);
    }

    #[test]
    fn malformed_atom_line_is_a_loud_parse_error() {
        let stream = LineStream::from_text(
            "@<TRIPOS>MOLECULE\nLIG\n@<TRIPOS>ATOM\n  1 C1 bad 0.0 0.0 C.3\n0 ROOT\n",
        );
        let err = atoms(&stream, whole(&stream)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("x coordinate"), "unexpected: {}", msg);
        assert!(msg.contains("line ~4"), "unexpected: {}", msg);
    }

    #[test]
    fn section_name_is_first_data_line_after_molecule_tag() {
        let stream = two_atom_molecule();
        assert_eq!(
            section_name(&stream, whole(&stream)).as_deref(),
            Some("ZINC000000001")
        );
    }

    #[test]
    fn pose_name_prefers_the_dock_header() {
        let stream = LineStream::from_text(
            "##########                                Name:   HEADER_NAME\n\
             @<TRIPOS>MOLECULE\n\
             SECTION_NAME\n\
             @<TRIPOS>ATOM\n",
        );
        let seg = whole(&stream);
        assert_eq!(
            pose_name(&stream, seg).unwrap().as_deref(),
            Some("HEADER_NAME")
        );
    }

    #[test]
    fn pose_name_falls_back_to_section_name() {
        let stream = LineStream::from_text("@<TRIPOS>MOLECULE\nSECTION_NAME\n@<TRIPOS>ATOM\n");
        let seg = whole(&stream);
        assert_eq!(
            pose_name(&stream, seg).unwrap().as_deref(),
            Some("SECTION_NAME")
        );
    }

    #[test]
    fn read_molecules_resets_atoms_per_segment() {
        let one = two_atom_molecule().lines().join("\n");
        let text = format!("{}\n{}\n", one, one.replace("ZINC000000001", "ZINC000000002"));
        let stream = LineStream::from_text(&text);

        let molecules = read_molecules(&stream).unwrap();
        assert_eq!(molecules.len(), 2);
        assert_eq!(molecules[0].name, "ZINC000000001");
        assert_eq!(molecules[1].name, "ZINC000000002");
        assert_eq!(molecules[0].atoms.len(), 2);
        assert_eq!(molecules[1].atoms.len(), 2);
    }

    #[test]
    fn read_molecules_without_sentinel_is_a_no_op() {
        let stream = LineStream::from_text("@<TRIPOS>MOLECULE\nLIG\n");
        assert!(read_molecules(&stream).unwrap().is_empty());
    }
}
