//! Line wrapping and pagination.
//!
//! Layout runs in two passes once a [`BookTypesetter`](crate::BookTypesetter) is
//! completed:
//!
//! - every section is wrapped to the page width independently, producing
//!   [`Line`](crate::Line)s positioned as if the book were one infinitely tall page
//! - the lines are then distributed over pages, moving whole sections to a fresh
//!   page when that keeps them together
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use book_typesetter::{BookTypesetter, FixedMetrics, TypesetterConfig, Alignment, Pt, colours};
//!
//! let metrics = Arc::new(FixedMetrics::new(Pt(10.0), Pt(20.0)));
//! let mut typesetter = BookTypesetter::new(TypesetterConfig::for_page(Pt(100.0), Pt(100.0)), metrics);
//!
//! let body = typesetter.create_style("body", colours::BLACK).expect("open typesetter");
//! typesetter.set_section_alignment(Alignment::Center).expect("open typesetter");
//! typesetter.write(body, "Chapter One").expect("valid text");
//! typesetter.section_break(Pt(10.0)).expect("valid margin");
//! typesetter.set_section_alignment(Alignment::Left).expect("open typesetter");
//! typesetter.write(body, "It was a dark and stormy night.").expect("valid text");
//!
//! let book = typesetter.complete().expect("first completion");
//! assert_eq!(book.page_count(), 2);
//! ```

mod paginate;
mod text;

pub(crate) use paginate::paginate;
pub(crate) use text::{wrap_section, Carry};

use crate::content::{ContentHandle, ContentStore};
use crate::font::FontMetrics;
use crate::style::{StyleId, StyleRegistry};
use crate::units::Pt;
use std::ops::Range;

/// Horizontal placement of the lines of a section
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Offset of a line of `width` from the left edge of a page `page_width` wide.
    /// Lines wider than the page are never pushed off its left edge.
    pub fn offset(self, width: Pt, page_width: Pt) -> Pt {
        let slack = (page_width - width).max(Pt::ZERO);
        match self {
            Alignment::Left => Pt::ZERO,
            Alignment::Center => slack / 2.0_f32,
            Alignment::Right => slack,
        }
    }
}

/// A write recorded against a section
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RunOp {
    pub style: StyleId,
    pub content: ContentHandle,
    pub range: Range<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SectionItem {
    Run(RunOp),
    LineBreak(Pt),
}

/// A cohesion unit for pagination
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Section {
    /// Extra space above the first line of the section
    pub margin: Pt,
    pub alignment: Alignment,
    pub items: Vec<SectionItem>,
}

impl Section {
    pub fn new(margin: Pt, alignment: Alignment) -> Section {
        Section {
            margin,
            alignment,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything the wrapper needs to measure text
pub(crate) struct LayoutContext<'a> {
    pub styles: &'a StyleRegistry,
    pub content: &'a ContentStore,
    pub metrics: &'a dyn FontMetrics,
    pub page_width: Pt,
    pub tab_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_offsets() {
        let width = Pt(40.0);
        let page = Pt(100.0);
        assert_eq!(Alignment::Left.offset(width, page), Pt(0.0));
        assert_eq!(Alignment::Center.offset(width, page), Pt(30.0));
        assert_eq!(Alignment::Right.offset(width, page), Pt(60.0));
        assert_eq!(Alignment::Right.offset(Pt(140.0), page), Pt(0.0));
    }
}
