use std::io::{BufRead, Write};

use super::Segment;
use super::error::Error;

/// An ordered, immutable sequence of text lines loaded fully into memory.
///
/// Every post-processing pass works over a whole file at once (docking
/// outputs run to tens of thousands of lines), so the stream is read in one
/// shot and indexed 0-based from there on. Line terminators are not stored;
/// [`LineStream::write_segment`] re-emits each line with a trailing newline,
/// which normalizes a missing final newline in the source file.
#[derive(Debug, Clone, Default)]
pub struct LineStream {
    lines: Vec<String>,
}

impl LineStream {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Io { source: e })?;
        Ok(Self { lines })
    }

    /// Builds a stream from in-memory text, splitting on line boundaries.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The lines covered by `segment`, in stream order.
    ///
    /// Panics if the segment range lies outside the stream; segments obtained
    /// from [`crate::mol2::segment`] are always in range.
    pub fn segment_lines(&self, segment: Segment) -> &[String] {
        &self.lines[segment.start..=segment.end]
    }

    /// Writes the segment's lines verbatim, one per line.
    pub fn write_segment<W: Write>(&self, segment: Segment, writer: &mut W) -> std::io::Result<()> {
        for line in self.segment_lines(segment) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_splits_lines() {
        let stream = LineStream::from_text("a\nb\nc\n");
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.get(0), Some("a"));
        assert_eq!(stream.get(2), Some("c"));
        assert_eq!(stream.get(3), None);
    }

    #[test]
    fn from_text_without_trailing_newline() {
        let stream = LineStream::from_text("a\nb");
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.get(1), Some("b"));
    }

    #[test]
    fn from_reader_matches_from_text() {
        let text = "one\ntwo\nthree\n";
        let stream = LineStream::from_reader(text.as_bytes()).unwrap();
        assert_eq!(stream.lines(), LineStream::from_text(text).lines());
    }

    #[test]
    fn write_segment_round_trips_lines() {
        let stream = LineStream::from_text("a\nb\nc\nd\n");
        let mut out = Vec::new();
        stream
            .write_segment(Segment { start: 1, end: 2 }, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "b\nc\n");
    }
}
