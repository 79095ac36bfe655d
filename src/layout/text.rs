use super::{LayoutContext, RunOp, Section, SectionItem};
use crate::content::ContentHandle;
use crate::page::{GlyphRun, HitRegion, Line};
use crate::rect::Rect;
use crate::style::StyleId;
use crate::units::Pt;

#[derive(Copy, Clone, PartialEq, Debug)]
enum AtomKind {
    Glyph,
    /// Whitespace; a line may break after it
    Space,
    /// Ends the line it is on
    Newline,
}

/// A single character, measured
#[derive(Clone, Debug)]
struct Atom {
    kind: AtomKind,
    style: StyleId,
    content: ContentHandle,
    start: usize,
    len: usize,
    advance: Pt,
    line_height: Pt,
}

/// Greedy line filler for a single section.
///
/// Characters are appended to the current line while they fit. Whitespace is
/// always appended and marks a break opportunity after it; when a glyph would
/// overflow, the line is cut at the most recent break opportunity and the word
/// after it is carried over to the next line. Without a break opportunity the
/// line is cut right before the overflowing glyph. A line always receives at
/// least one character, so layout makes progress even when a single glyph is
/// wider than the page.
struct LineWrapper<'a, 'c> {
    ctx: &'a LayoutContext<'c>,
    section: &'a Section,
    section_index: usize,
    lines: Vec<Line>,
    current: Vec<Atom>,
    pen: Pt,
    /// number of atoms of `current` that stay on the line when breaking
    last_break: Option<usize>,
    margin: Pt,
    last_height: Pt,
}

impl LineWrapper<'_, '_> {
    fn push_run(&mut self, run: &RunOp) {
        let font = self.ctx.styles.font_of(run.style).unwrap_or_default();
        let line_height = self.ctx.metrics.line_height(font);
        let text = self.ctx.content.slice(run.content, run.range.clone());

        for (offset, ch) in text.char_indices() {
            let (kind, advance) = match ch {
                '\n' => (AtomKind::Newline, Pt::ZERO),
                '\r' => (AtomKind::Space, Pt::ZERO),
                '\t' => (
                    AtomKind::Space,
                    self.ctx.metrics.advance(font, ' ') * self.ctx.tab_size as f32,
                ),
                ch if ch.is_whitespace() => (AtomKind::Space, self.ctx.metrics.advance(font, ch)),
                ch => (AtomKind::Glyph, self.ctx.metrics.advance(font, ch)),
            };

            self.push_atom(Atom {
                kind,
                style: run.style,
                content: run.content,
                start: run.range.start + offset,
                len: ch.len_utf8(),
                advance,
                line_height,
            });
        }
    }

    fn push_atom(&mut self, atom: Atom) {
        match atom.kind {
            AtomKind::Newline => {
                self.current.push(atom);
                self.finish_line();
            }
            AtomKind::Space => {
                self.pen += atom.advance;
                self.current.push(atom);
                self.last_break = Some(self.current.len());
            }
            AtomKind::Glyph => {
                let width = self.ctx.page_width;
                if self.overflows(atom.advance, width) {
                    if let Some(at) = self.last_break.take() {
                        let carried = self.current.split_off(at);
                        self.finish_line();
                        self.pen = carried.iter().map(|a| a.advance).sum();
                        self.current = carried;
                    }
                    if self.overflows(atom.advance, width) {
                        log::debug!(
                            "section {}: no break opportunity, splitting word at byte {}",
                            self.section_index,
                            atom.start
                        );
                        self.finish_line();
                    }
                }
                if self.current.is_empty() && atom.advance > width {
                    log::warn!(
                        "section {}: glyph at byte {} is wider than the page ({} > {})",
                        self.section_index,
                        atom.start,
                        atom.advance,
                        width
                    );
                }
                self.pen += atom.advance;
                self.current.push(atom);
            }
        }
    }

    fn overflows(&self, advance: Pt, width: Pt) -> bool {
        !self.current.is_empty() && self.pen + advance > width
    }

    /// Close the current line, even if it has no characters
    fn finish_line(&mut self) {
        let atoms = std::mem::take(&mut self.current);
        self.pen = Pt::ZERO;
        self.last_break = None;
        let margin = std::mem::take(&mut self.margin);

        let height = atoms
            .iter()
            .map(|a| a.line_height)
            .fold(None, |acc: Option<Pt>, h| Some(acc.map_or(h, |m| m.max(h))))
            .unwrap_or(self.last_height);
        self.last_height = height;

        // trailing whitespace doesn't count towards the measured width
        let visible = atoms
            .iter()
            .rposition(|a| a.kind == AtomKind::Glyph)
            .map_or(0, |i| i + 1);
        let width: Pt = atoms[..visible].iter().map(|a| a.advance).sum();
        let left = self
            .section
            .alignment
            .offset(width, self.ctx.page_width);

        let mut runs: Vec<GlyphRun> = Vec::new();
        let mut x = left;
        for atom in atoms.iter() {
            let continues = runs.last().is_some_and(|run| {
                run.style == atom.style && run.content == atom.content && run.range.end == atom.start
            });
            match runs.last_mut() {
                Some(run) if continues => {
                    run.range.end += atom.len;
                    run.width += atom.advance;
                }
                _ => runs.push(GlyphRun {
                    style: atom.style,
                    content: atom.content,
                    range: atom.start..atom.start + atom.len,
                    x,
                    width: atom.advance,
                }),
            }
            x += atom.advance;
        }

        let hits = runs
            .iter()
            .filter_map(|run| {
                let id = self.ctx.styles.interactive_id(run.style)?;
                Some(HitRegion {
                    rect: Rect::new(run.x, Pt::ZERO, run.x + run.width, height),
                    id,
                    style: run.style,
                })
            })
            .collect();

        self.lines.push(Line {
            top: Pt::ZERO,
            margin,
            height,
            left,
            width,
            section: self.section_index,
            runs,
            hits,
        });
    }
}

/// Wrapping state handed from one section to the next
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Carry {
    /// Height of the most recent line; lines without any characters take it on
    pub last_height: Pt,
    /// Break margin that has no line below it yet
    pub margin: Pt,
}

/// Wrap a section to the page width. A break margin left pending at the end of
/// the section stays in `carry` and lands above the next section's first line.
pub(crate) fn wrap_section(
    section: &Section,
    section_index: usize,
    ctx: &LayoutContext,
    carry: &mut Carry,
) -> Vec<Line> {
    let mut wrapper = LineWrapper {
        ctx,
        section,
        section_index,
        lines: Vec::new(),
        current: Vec::new(),
        pen: Pt::ZERO,
        last_break: None,
        margin: carry.margin + section.margin,
        last_height: carry.last_height,
    };

    for op in section.items.iter() {
        match op {
            SectionItem::Run(run) => wrapper.push_run(run),
            SectionItem::LineBreak(margin) => {
                wrapper.finish_line();
                wrapper.margin = *margin;
            }
        }
    }
    if !wrapper.current.is_empty() {
        wrapper.finish_line();
    }

    carry.last_height = wrapper.last_height;
    carry.margin = wrapper.margin;
    wrapper.lines
}
