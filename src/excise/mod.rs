//! Marker-bounded excision of a line range
//!
//! A file is read as a [`LineSequence`], scanned once for a start marker and
//! an end marker, and the lines from the start marker up to (not including)
//! the end marker are dropped. The end-marker line and everything after it
//! stay as they were.

mod lines;

pub use lines::LineSequence;

use std::ops::Range;

/// Start marker of the Favorites Gallery section
pub const FAVORITES_GALLERY_MARKER: &str = "{/* Favorites Gallery */}";

/// The comment that follows the Favorites Gallery section
pub const MENU_LIST_MARKER: &str = "{/* Menu List */}";

/// A pair of literal substrings matched by line containment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> Markers<'a> {
    pub fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }

    /// The Favorites Gallery / Menu List pair
    pub fn favorites_gallery() -> Markers<'static> {
        Markers::new(FAVORITES_GALLERY_MARKER, MENU_LIST_MARKER)
    }

    /// Scan once, top to bottom.
    ///
    /// The first start-marker line sets `start`. Every line, including that
    /// one, is checked for the end marker; the first hit sets `end` and stops
    /// the scan. An end marker seen before any start marker therefore ends
    /// the scan with no start.
    pub fn scan(&self, lines: &LineSequence) -> MarkerScan {
        let mut scan = MarkerScan::default();

        for (i, line) in lines.iter().enumerate() {
            if scan.start.is_none() && line.contains(self.start) {
                scan.start = Some(i);
            }
            if line.contains(self.end) {
                scan.end = Some(i);
                break;
            }
        }

        scan
    }
}

/// Result of a marker scan; indices are zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerScan {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl MarkerScan {
    /// The span to remove, if both markers were found
    pub fn span(&self) -> Option<Span> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(Span { start, end }),
            _ => None,
        }
    }
}

/// Half-open line range `[start, end)` bounded by the two marker lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Number of lines removed by this span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        // start > end cannot come out of a single forward scan
        self.start..self.end.max(self.start)
    }
}

/// What an excision did to a line sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Excision {
    Excised { span: Span, removed: Vec<String> },
    MarkersNotFound { scan: MarkerScan },
}

impl Excision {
    pub fn is_excised(&self) -> bool {
        matches!(self, Excision::Excised { .. })
    }

    pub fn removed_lines(&self) -> &[String] {
        match self {
            Excision::Excised { removed, .. } => removed,
            Excision::MarkersNotFound { .. } => &[],
        }
    }
}

/// Excise the marker span from `lines` in place.
///
/// Leaves `lines` untouched when either marker is missing.
pub fn excise_lines(lines: &mut LineSequence, markers: &Markers<'_>) -> Excision {
    let scan = markers.scan(lines);

    match scan.span() {
        Some(span) => {
            let removed = lines.remove_range(span.range());
            Excision::Excised { span, removed }
        }
        None => Excision::MarkersNotFound { scan },
    }
}
