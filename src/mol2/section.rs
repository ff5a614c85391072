use super::Segment;
use super::stream::LineStream;

/// Record type indicator that opens a mol2 section.
pub const SECTION_TAG: &str = "@<TRIPOS>";

/// The mol2 section a line belongs to.
///
/// Atom records are identified by membership in the ATOM section rather than
/// by their incidental token count, so a 9-token substructure row (the kind
/// that ends in `ROOT`) can never be mistaken for an atom. Lines before the
/// first section tag are `Preamble` — that is where DOCK writes its
/// `##########` descriptor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Preamble,
    Molecule,
    Atom,
    Bond,
    Substructure,
    Other,
}

impl Section {
    /// Section opened by `line`, or `None` for a data line.
    pub fn from_tag(line: &str) -> Option<Section> {
        let tag = line.trim().strip_prefix(SECTION_TAG)?;
        Some(match tag.trim().to_ascii_uppercase().as_str() {
            "MOLECULE" => Section::Molecule,
            "ATOM" => Section::Atom,
            "BOND" => Section::Bond,
            "SUBSTRUCTURE" => Section::Substructure,
            _ => Section::Other,
        })
    }
}

/// Iterates the data lines of one segment, tagged with their section.
///
/// Section-header lines themselves are consumed by the walk and not yielded;
/// every item is `(absolute line index, section, line)`.
pub fn data_lines<'a>(
    stream: &'a LineStream,
    segment: Segment,
) -> impl Iterator<Item = (usize, Section, &'a str)> + 'a {
    let mut current = Section::Preamble;
    stream
        .segment_lines(segment)
        .iter()
        .enumerate()
        .filter_map(move |(offset, line)| match Section::from_tag(line) {
            Some(section) => {
                current = section;
                None
            }
            None => Some((segment.start + offset, current, line.as_str())),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_recognizes_known_sections() {
        assert_eq!(Section::from_tag("@<TRIPOS>MOLECULE"), Some(Section::Molecule));
        assert_eq!(Section::from_tag("@<TRIPOS>ATOM"), Some(Section::Atom));
        assert_eq!(Section::from_tag("@<TRIPOS>BOND"), Some(Section::Bond));
        assert_eq!(
            Section::from_tag("@<TRIPOS>SUBSTRUCTURE"),
            Some(Section::Substructure)
        );
    }

    #[test]
    fn from_tag_tolerates_whitespace_and_case() {
        assert_eq!(Section::from_tag("  @<TRIPOS>molecule  "), Some(Section::Molecule));
    }

    #[test]
    fn from_tag_maps_unknown_tags_to_other() {
        assert_eq!(Section::from_tag("@<TRIPOS>CRYSIN"), Some(Section::Other));
    }

    #[test]
    fn from_tag_rejects_data_lines() {
        assert_eq!(Section::from_tag("      1 C1  0.0 0.0 0.0 C.3 1 LIG 0.0"), None);
        assert_eq!(Section::from_tag("########## Name: LIG"), None);
    }

    #[test]
    fn data_lines_tag_each_line_with_its_section() {
        let stream = LineStream::from_text(
            "########## Name: LIG\n\
             @<TRIPOS>MOLECULE\n\
             LIG\n\
             @<TRIPOS>ATOM\n\
             atom line\n\
             @<TRIPOS>SUBSTRUCTURE\n\
             sub line\n",
        );
        let segment = Segment { start: 0, end: 6 };
        let tagged: Vec<_> = data_lines(&stream, segment).collect();
        assert_eq!(
            tagged,
            vec![
                (0, Section::Preamble, "########## Name: LIG"),
                (2, Section::Molecule, "LIG"),
                (4, Section::Atom, "atom line"),
                (6, Section::Substructure, "sub line"),
            ]
        );
    }
}
