//! Frequency filtering of DOCK fragment libraries.
//!
//! De novo DOCK emits linker / scaffold / sidechain libraries as mol2
//! streams where every record opens with a `TYPE:` header line and carries
//! an observed frequency in a `FREQ:` header. Filtering keeps the records
//! seen more often than a cutoff, writing them back verbatim.

use crate::mol2::{self, Error, LineStream, Segment};

/// Header label that opens every fragment record.
pub const FRAGMENT_START: &str = "TYPE:";

/// Header label carrying the fragment's observed frequency.
pub const FREQUENCY_LABEL: &str = "FREQ:";

/// Default keep threshold.
pub const DEFAULT_CUTOFF: u64 = 12_000;

/// One fragment record with its observed frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub segment: Segment,
    pub frequency: u64,
}

/// Reads every fragment record of a library stream, in file order.
///
/// Records are delimited by their `TYPE:` start lines; the final record
/// extends to the end of the stream. Lines before the first `TYPE:` belong
/// to no fragment. A stream without any start line yields no fragments.
pub fn fragments(stream: &LineStream) -> Result<Vec<Fragment>, Error> {
    let segments = mol2::segment::by_start_sentinel(stream, |line| line.contains(FRAGMENT_START));

    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        out.push(Fragment {
            segment,
            frequency: frequency(stream, segment)?,
        });
    }
    Ok(out)
}

/// Fragments whose frequency strictly exceeds `cutoff`.
///
/// A fragment seen exactly `cutoff` times is filtered out.
pub fn filter_by_frequency(stream: &LineStream, cutoff: u64) -> Result<Vec<Fragment>, Error> {
    Ok(fragments(stream)?
        .into_iter()
        .filter(|fragment| fragment.frequency > cutoff)
        .collect())
}

/// The value after the colon of the record's last `FREQ:` line, parsed as
/// an unsigned integer. Missing or malformed frequencies are loud errors
/// naming the offending line.
fn frequency(stream: &LineStream, segment: Segment) -> Result<u64, Error> {
    let mut result = None;
    for (offset, line) in stream.segment_lines(segment).iter().enumerate() {
        if !line.contains(FREQUENCY_LABEL) {
            continue;
        }
        let raw = line.split(':').nth(1).unwrap_or("").trim();
        let parsed = raw.parse::<u64>().map_err(|_| Error::Frequency {
            line: segment.start + offset + 1,
            value: raw.to_string(),
        })?;
        result = Some(parsed);
    }
    result.ok_or(Error::MissingFrequency {
        line: segment.start + 1,
        label: FREQUENCY_LABEL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> LineStream {
        LineStream::from_text(
            "# raw de novo output\n\
             ##########  TYPE:       linker\n\
             ##########  SEGMENTS:   1\n\
             ##########  FREQ:       23456\n\
             @<TRIPOS>MOLECULE\n\
             lnk_1\n\
             ##########  TYPE:       linker\n\
             ##########  SEGMENTS:   1\n\
             ##########  FREQ:       12000\n\
             @<TRIPOS>MOLECULE\n\
             lnk_2\n\
             ##########  TYPE:       linker\n\
             ##########  SEGMENTS:   1\n\
             ##########  FREQ:       900\n\
             @<TRIPOS>MOLECULE\n\
             lnk_3\n",
        )
    }

    #[test]
    fn reads_every_fragment_including_the_last() {
        let stream = library();
        let fragments = fragments(&stream).unwrap();

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].frequency, 23456);
        assert_eq!(fragments[1].frequency, 12000);
        assert_eq!(fragments[2].frequency, 900);
        // The last record has no following TYPE: line and must still close.
        assert_eq!(fragments[2].segment.end, stream.len() - 1);
    }

    #[test]
    fn preamble_belongs_to_no_fragment() {
        let stream = library();
        let fragments = fragments(&stream).unwrap();

        assert_eq!(fragments[0].segment.start, 1);
    }

    #[test]
    fn cutoff_is_strictly_greater_than() {
        let stream = library();
        let kept = filter_by_frequency(&stream, DEFAULT_CUTOFF).unwrap();

        // 23456 survives, 12000 sits exactly at the cutoff and is dropped.
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].frequency, 23456);
    }

    #[test]
    fn stream_without_start_lines_yields_nothing() {
        let stream = LineStream::from_text("just\nsome\nlines\n");
        assert!(fragments(&stream).unwrap().is_empty());
    }

    #[test]
    fn missing_frequency_is_a_loud_error() {
        let stream = LineStream::from_text(
            "##########  TYPE:       linker\n\
             @<TRIPOS>MOLECULE\n\
             lnk_1\n",
        );

        let err = fragments(&stream).unwrap_err();
        assert!(matches!(err, Error::MissingFrequency { line: 1, .. }));
    }

    #[test]
    fn unparseable_frequency_is_a_loud_error() {
        let stream = LineStream::from_text(
            "##########  TYPE:       linker\n\
             ##########  FREQ:       lots\n\
             lnk_1\n",
        );

        let err = fragments(&stream).unwrap_err();
        assert!(matches!(err, Error::Frequency { line: 2, value } if value == "lots"));
    }

    #[test]
    fn kept_fragments_write_back_verbatim() {
        let stream = library();
        let kept = filter_by_frequency(&stream, DEFAULT_CUTOFF).unwrap();

        let mut out = Vec::new();
        for fragment in &kept {
            stream.write_segment(fragment.segment, &mut out).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "##########  TYPE:       linker\n\
             ##########  SEGMENTS:   1\n\
             ##########  FREQ:       23456\n\
             @<TRIPOS>MOLECULE\n\
             lnk_1\n"
        );
    }
}
