use crate::{Pt, TypesetError};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::collections::HashMap;

/// Font measurement used while wrapping lines. Fonts are referred to by the
/// same name that was given to [`create_style`](crate::BookTypesetter::create_style).
///
/// Implementations must be pure: the same font and character always measure the
/// same, otherwise layout is no longer deterministic.
pub trait FontMetrics: Send + Sync {
    /// Horizontal advance of a single character
    fn advance(&self, font: &str, ch: char) -> Pt;

    /// How much to vertically offset a second row of text below a first row of text
    fn line_height(&self, font: &str) -> Pt;

    /// Width of a string of text. Defaults to the sum of the character advances.
    fn text_width(&self, font: &str, text: &str) -> Pt {
        text.chars().map(|ch| self.advance(font, ch)).sum()
    }
}

/// A parsed font object. Fonts can be TTF or OTF fonts.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TypesetError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}').or_else(|| self.glyph_id('?'))
    }

    /// Horizontal advance of a character at the given size. Characters missing from
    /// the font are measured as the replacement glyph.
    pub fn advance(&self, ch: char, size: Pt) -> Pt {
        let Some(gid) = self.glyph_id(ch).or_else(|| self.replacement_glyph_id()) else {
            return Pt::ZERO;
        };
        self.scaling(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                .unwrap_or_default() as f32
    }
}

/// A loaded font at a particular size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// [`FontMetrics`] backed by TrueType / OpenType faces. Faces are loaded once and
/// can be registered under any number of style font names at different sizes.
///
/// Font names that were never registered fall back to the first registered
/// name; with nothing registered every measurement is zero.
#[derive(Default)]
pub struct FontCollection {
    pub fonts: Arena<Font>,
    names: HashMap<String, SpanFont>,
    fallback: Option<SpanFont>,
}

impl FontCollection {
    pub fn new() -> FontCollection {
        FontCollection::default()
    }

    /// Add a font face to the collection, returning its id
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Make `name` refer to the face `id` at `size`
    pub fn register<S: ToString>(&mut self, name: S, id: Id<Font>, size: Pt) {
        let span_font = SpanFont { id, size };
        if self.fallback.is_none() {
            self.fallback = Some(span_font);
        }
        self.names.insert(name.to_string(), span_font);
    }

    fn resolve(&self, name: &str) -> Option<(&Font, Pt)> {
        let span_font = self.names.get(name).copied().or(self.fallback)?;
        self.fonts
            .get(span_font.id)
            .map(|font| (font, span_font.size))
    }
}

impl FontMetrics for FontCollection {
    fn advance(&self, font: &str, ch: char) -> Pt {
        self.resolve(font)
            .map(|(face, size)| face.advance(ch, size))
            .unwrap_or_default()
    }

    fn line_height(&self, font: &str) -> Pt {
        self.resolve(font)
            .map(|(face, size)| face.line_height(size))
            .unwrap_or_default()
    }
}

/// [`FontMetrics`] on a fixed grid: every character of a font has the same
/// advance. Useful for cell-based surfaces and for predictable layouts.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMetrics {
    advance: Pt,
    line_height: Pt,
    overrides: HashMap<String, (Pt, Pt)>,
}

impl FixedMetrics {
    /// Every font measures `advance` per character and `line_height` per line
    pub fn new(advance: Pt, line_height: Pt) -> FixedMetrics {
        FixedMetrics {
            advance,
            line_height,
            overrides: HashMap::new(),
        }
    }

    /// Give the font called `name` its own advance and line height
    pub fn with_font<S: ToString>(mut self, name: S, advance: Pt, line_height: Pt) -> Self {
        self.overrides
            .insert(name.to_string(), (advance, line_height));
        self
    }

    fn metrics(&self, font: &str) -> (Pt, Pt) {
        self.overrides
            .get(font)
            .copied()
            .unwrap_or((self.advance, self.line_height))
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        FixedMetrics::new(Pt(8.0), Pt(16.0))
    }
}

impl FontMetrics for FixedMetrics {
    fn advance(&self, font: &str, _ch: char) -> Pt {
        self.metrics(font).0
    }

    fn line_height(&self, font: &str) -> Pt {
        self.metrics(font).1
    }
}
