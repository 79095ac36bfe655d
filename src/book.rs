use crate::{
    config::PageSize,
    content::ContentStore,
    page::{GlyphRun, HitRegion, Page},
    style::{InteractionState, StyleRegistry},
    Colour, Pt,
};

/// A formatted and paginated document, ready to be shown page by page.
///
/// Books are immutable. They own the styles and content blocks of the
/// typesetter that produced them, so glyph runs and hit regions can be resolved
/// without copying any text. Share one between renderers with an
/// [`Arc`](std::sync::Arc).
#[derive(Debug)]
pub struct TypesetBook {
    pages: Vec<Page>,
    size: (Pt, Pt),
    page_size: PageSize,
    styles: StyleRegistry,
    content: ContentStore,
}

impl TypesetBook {
    pub(crate) fn new(
        pages: Vec<Page>,
        size: (Pt, Pt),
        page_size: PageSize,
        styles: StyleRegistry,
        content: ContentStore,
    ) -> TypesetBook {
        TypesetBook {
            pages,
            size,
            page_size,
            styles,
            content,
        }
    }

    /// Number of pages in the book. A book with no text has no pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The area covered by the book. The width is the widest line, measured from
    /// its own left edge rather than the page's. The height is that of all lines
    /// and break margins combined, before pagination.
    pub fn size(&self) -> (Pt, Pt) {
        self.size
    }

    /// The page size the book was laid out for
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// The text of a glyph run
    pub fn text(&self, run: &GlyphRun) -> &str {
        self.content.slice(run.content, run.range.clone())
    }

    /// Font name and colour a run is drawn with in the given interaction state
    pub fn appearance(&self, run: &GlyphRun, state: InteractionState) -> (&str, Colour) {
        let font = self.styles.font_of(run.style).unwrap_or_default();
        let colour = self
            .styles
            .colour_of(run.style, state)
            .unwrap_or(crate::colours::BLACK);
        (font, colour)
    }

    /// Find the interactive region under a point on a page
    pub fn hit_test(&self, page: usize, x: Pt, y: Pt) -> Option<&HitRegion> {
        self.pages.get(page)?.hit_test(x, y)
    }

    /// All the text of a page, in reading order
    pub fn page_text(&self, page: usize) -> Option<String> {
        let page = self.pages.get(page)?;
        Some(page.runs().map(|run| self.text(run)).collect())
    }
}
