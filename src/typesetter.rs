use crate::{
    book::TypesetBook,
    content::{ContentHandle, ContentStore},
    font::{FixedMetrics, FontMetrics},
    layout::{self, Alignment, Carry, LayoutContext, RunOp, Section, SectionItem},
    style::{InteractiveId, StyleId, StyleRegistry},
    Colour, Pt, TypesetError, TypesetterConfig,
};
use std::sync::Arc;

/// Builder state that is handed over to the book on completion
#[derive(Default)]
struct Session {
    styles: StyleRegistry,
    content: ContentStore,
    sections: Vec<Section>,
}

/// Accumulates styled text, breaks, and alignment changes, then lays them out
/// into a [`TypesetBook`] with [`BookTypesetter::complete`].
///
/// A typesetter is single use. Once completed, its styles and content have moved
/// into the book and every further call fails with
/// [`TypesetError::AlreadyCompleted`].
pub struct BookTypesetter {
    config: TypesetterConfig,
    metrics: Arc<dyn FontMetrics>,
    session: Option<Session>,
    /// Alignment new sections start with
    alignment: Alignment,
}

impl core::fmt::Debug for BookTypesetter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BookTypesetter")
            .field("config", &self.config)
            .field("completed", &self.session.is_none())
            .finish()
    }
}

impl BookTypesetter {
    /// Create a typesetter filling pages of `config.page_size`, measuring text with `metrics`
    pub fn new(config: TypesetterConfig, metrics: Arc<dyn FontMetrics>) -> BookTypesetter {
        let mut session = Session::default();
        session.sections.push(Section::default());
        BookTypesetter {
            config,
            metrics,
            session: Some(session),
            alignment: Alignment::default(),
        }
    }

    /// Create a typesetter for pages of the given size, measuring text on a
    /// [`FixedMetrics`] grid
    pub fn create<W: Into<Pt>, H: Into<Pt>>(page_width: W, page_height: H) -> BookTypesetter {
        BookTypesetter::new(
            TypesetterConfig::for_page(page_width, page_height),
            Arc::new(FixedMetrics::default()),
        )
    }

    pub fn config(&self) -> &TypesetterConfig {
        &self.config
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_none()
    }

    fn session(&mut self) -> Result<&mut Session, TypesetError> {
        self.session.as_mut().ok_or(TypesetError::AlreadyCompleted)
    }

    /// Create a simple text style consisting of a font and a text colour. Identical
    /// styles are shared.
    pub fn create_style(&mut self, font: &str, colour: Colour) -> Result<StyleId, TypesetError> {
        Ok(self.session()?.styles.create_style(font, colour))
    }

    /// Create a hyperlink style with a user-defined identifier based on an existing
    /// style. The `unique` flag forces a new style to be created even if an identical
    /// one exists.
    pub fn create_hot_style(
        &mut self,
        base: StyleId,
        normal: Colour,
        hover: Colour,
        active: Colour,
        id: InteractiveId,
        unique: bool,
    ) -> Result<StyleId, TypesetError> {
        self.session()?
            .styles
            .create_hot_style(base, normal, hover, active, id, unique)
    }

    /// Add a content block to the document without laying it out. If `select` is
    /// true, the block becomes the target of [`write_range`](Self::write_range).
    pub fn add_content<T: AsRef<[u8]>>(
        &mut self,
        text: T,
        select: bool,
    ) -> Result<ContentHandle, TypesetError> {
        self.session()?.content.add_content(text.as_ref(), select)
    }

    /// Select a previously added content block for future range writes
    pub fn select_content(&mut self, handle: ContentHandle) -> Result<(), TypesetError> {
        self.session()?.content.select_content(handle)
    }

    /// Lay out a block of text with the given style. Newline characters in the
    /// text break the line just like [`line_break`](Self::line_break) without a margin.
    pub fn write<T: AsRef<[u8]>>(&mut self, style: StyleId, text: T) -> Result<(), TypesetError> {
        let session = self.session()?;
        if !session.styles.contains(style) {
            return Err(TypesetError::UnknownStyle);
        }
        let text = text.as_ref();
        // validate before storing so a failed write leaves no trace
        std::str::from_utf8(text)?;
        if text.is_empty() {
            return Ok(());
        }
        let content = session.content.add_content(text, false)?;
        push_run(session, style, content, 0..text.len());
        Ok(())
    }

    /// Lay out the byte range `begin..end` of the selected content block with the
    /// given style. An empty range is accepted and lays out nothing.
    pub fn write_range(&mut self, style: StyleId, begin: usize, end: usize) -> Result<(), TypesetError> {
        let session = self.session()?;
        let (content, range) = session.content.selected_span(begin, end)?;
        if !session.styles.contains(style) {
            return Err(TypesetError::UnknownStyle);
        }
        if range.is_empty() {
            return Ok(());
        }
        push_run(session, style, content, range);
        Ok(())
    }

    /// End the current line. `margin` adds space above the next line.
    pub fn line_break<M: Into<Pt>>(&mut self, margin: M) -> Result<(), TypesetError> {
        let margin = checked_margin(margin.into())?;
        current_section(self.session()?).items.push(SectionItem::LineBreak(margin));
        Ok(())
    }

    /// End the current section; text written afterwards starts a new one.
    /// Pagination keeps sections on a single page where possible. `margin` adds
    /// space above the next line.
    pub fn section_break<M: Into<Pt>>(&mut self, margin: M) -> Result<(), TypesetError> {
        let margin = checked_margin(margin.into())?;
        let alignment = self.alignment;
        let session = self.session()?;
        let section = current_section(session);
        if section.is_empty() {
            section.margin += margin;
        } else {
            session.sections.push(Section::new(margin, alignment));
        }
        Ok(())
    }

    /// Change the alignment of the current section, including text already written to it
    pub fn set_section_alignment(&mut self, alignment: Alignment) -> Result<(), TypesetError> {
        current_section(self.session()?).alignment = alignment;
        self.alignment = alignment;
        Ok(())
    }

    /// Finalize the document layout. The typesetter's styles and content move into
    /// the returned book; a second call fails with [`TypesetError::AlreadyCompleted`].
    pub fn complete(&mut self) -> Result<TypesetBook, TypesetError> {
        let Session {
            styles,
            content,
            sections,
        } = self.session.take().ok_or(TypesetError::AlreadyCompleted)?;

        let ctx = LayoutContext {
            styles: &styles,
            content: &content,
            metrics: self.metrics.as_ref(),
            page_width: self.config.page_size.width,
            tab_size: self.config.tab_size,
        };

        // breaks alone don't make a page
        let has_text = sections
            .iter()
            .flat_map(|section| section.items.iter())
            .any(|item| matches!(item, SectionItem::Run(_)));

        let mut carry = Carry::default();
        let lines: Vec<_> = if has_text {
            sections
                .iter()
                .enumerate()
                .flat_map(|(index, section)| layout::wrap_section(section, index, &ctx, &mut carry))
                .collect()
        } else {
            log::debug!("nothing written, the book has no pages");
            Vec::new()
        };

        let width = lines.iter().map(|line| line.width).fold(Pt::ZERO, Pt::max);
        // a trailing break margin has no line to sit above, but still counts towards the size
        let height = lines.iter().map(|line| line.extent()).sum::<Pt>() + carry.margin;
        let line_count = lines.len();

        let pages = layout::paginate(lines, self.config.page_size.height);
        log::debug!(
            "typeset {} sections into {line_count} lines on {} pages ({width} x {height})",
            sections.len(),
            pages.len()
        );

        Ok(TypesetBook::new(
            pages,
            (width, height),
            self.config.page_size,
            styles,
            content,
        ))
    }
}

fn current_section(session: &mut Session) -> &mut Section {
    if session.sections.is_empty() {
        session.sections.push(Section::default());
    }
    let last = session.sections.len() - 1;
    &mut session.sections[last]
}

fn push_run(session: &mut Session, style: StyleId, content: ContentHandle, range: std::ops::Range<usize>) {
    current_section(session)
        .items
        .push(SectionItem::Run(RunOp {
            style,
            content,
            range,
        }));
}

fn checked_margin(margin: Pt) -> Result<Pt, TypesetError> {
    if margin.is_valid_extent() {
        Ok(margin)
    } else {
        Err(TypesetError::InvalidMargin(margin.0))
    }
}
