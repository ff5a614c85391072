use super::stream::LineStream;

/// A contiguous, inclusive `[start, end]` line range holding one molecule's
/// record. Indices are 0-based into the owning [`LineStream`].
///
/// Segments produced by the functions in this module partition the stream:
/// segment *k* ends exactly one line before segment *k+1* begins, with no
/// gaps and no overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Number of lines covered, at least 1 by construction.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Partitions the stream by an end sentinel.
///
/// Every line matching `is_end` closes a segment; the next segment opens on
/// the following line. The first segment always opens at line 0, so end
/// detection alone derives all boundaries. Lines after the final sentinel
/// belong to no segment, and a stream with no sentinel at all yields zero
/// segments — callers treat that as "nothing to do", not as an error.
pub fn by_end_sentinel<F>(stream: &LineStream, is_end: F) -> Vec<Segment>
where
    F: Fn(&str) -> bool,
{
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, line) in stream.lines().iter().enumerate() {
        if is_end(line) {
            segments.push(Segment { start, end: idx });
            start = idx + 1;
        }
    }
    segments
}

/// Partitions the stream by a start sentinel.
///
/// Fragment libraries mark each record's opening line (a `TYPE:` header)
/// instead of its last line. Every segment runs from its start sentinel to
/// the line before the next one; the final segment extends to the end of the
/// stream. Lines before the first sentinel belong to no segment.
pub fn by_start_sentinel<F>(stream: &LineStream, is_start: F) -> Vec<Segment>
where
    F: Fn(&str) -> bool,
{
    let mut segments = Vec::new();
    let mut open: Option<usize> = None;
    for (idx, line) in stream.lines().iter().enumerate() {
        if is_start(line) {
            if let Some(start) = open {
                segments.push(Segment {
                    start,
                    end: idx - 1,
                });
            }
            open = Some(idx);
        }
    }
    if let Some(start) = open {
        segments.push(Segment {
            start,
            end: stream.len() - 1,
        });
    }
    segments
}
