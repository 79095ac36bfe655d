use crate::content::ContentHandle;
use crate::rect::Rect;
use crate::style::{InteractiveId, StyleId};
use crate::units::Pt;
use std::ops::Range;

/// A run of text laid out in a single style on a single line. The text itself
/// stays in the book's content store; the run records where it came from.
#[derive(Clone, PartialEq, Debug)]
pub struct GlyphRun {
    pub style: StyleId,
    /// The content block the text lives in
    pub content: ContentHandle,
    /// Byte range of the text within the content block
    pub range: Range<usize>,
    /// Left edge of the run in page space
    pub x: Pt,
    /// Total advance of the run, trailing whitespace included
    pub width: Pt,
}

impl GlyphRun {
    /// Number of UTF-8 bytes in the run
    pub fn byte_len(&self) -> usize {
        self.range.len()
    }
}

/// A page-space rectangle mapped to the interactive id of a hot style
#[derive(Clone, PartialEq, Debug)]
pub struct HitRegion {
    pub rect: Rect,
    pub id: InteractiveId,
    /// The hot style that produced the region
    pub style: StyleId,
}

/// One laid out line of text
#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    /// Top of the line's text in page space. Any break margin sits directly above it.
    pub top: Pt,
    /// Extra space above the line, from the break that preceded it
    pub margin: Pt,
    pub height: Pt,
    /// Offset of the line from the left edge of the page, from its section's alignment
    pub left: Pt,
    /// Measured width of the line, not counting trailing whitespace
    pub width: Pt,
    /// Index of the section the line belongs to
    pub section: usize,
    pub runs: Vec<GlyphRun>,
    pub hits: Vec<HitRegion>,
}

impl Line {
    /// Vertical space the line takes up, margin included
    pub fn extent(&self) -> Pt {
        self.margin + self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.left, self.top, self.left + self.width, self.top + self.height)
    }

    pub(crate) fn move_to(&mut self, top: Pt) {
        let dy = top - self.top;
        self.top = top;
        for hit in self.hits.iter_mut() {
            hit.rect = hit.rect.offset_y(dy);
        }
    }
}

/// A single page of a [`TypesetBook`](crate::TypesetBook)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Page {
    pub lines: Vec<Line>,
    /// Height of the page's content, from the top of the page to the bottom of its last line
    pub height: Pt,
}

impl Page {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All glyph runs on the page in reading order
    pub fn runs(&self) -> impl Iterator<Item = &GlyphRun> {
        self.lines.iter().flat_map(|line| line.runs.iter())
    }

    /// All hit regions on the page in reading order
    pub fn hit_regions(&self) -> impl Iterator<Item = &HitRegion> {
        self.lines.iter().flat_map(|line| line.hits.iter())
    }

    /// Find the interactive region under a page-space point
    pub fn hit_test(&self, x: Pt, y: Pt) -> Option<&HitRegion> {
        self.hit_regions().find(|hit| hit.rect.contains(x, y))
    }

    pub(crate) fn push_line(&mut self, mut line: Line) {
        line.move_to(self.height + line.margin);
        self.height = line.top + line.height;
        self.lines.push(line);
    }
}
