//! Character-level formatting for typeset text.
//!
//! Styles are interned in a [`StyleRegistry`] owned by the typesetter, and move
//! with it into the completed [`TypesetBook`](crate::TypesetBook). A style id is
//! only meaningful to the registry that issued it.

use crate::{Colour, TypesetError};
use id_arena::{Arena, Id};

/// Opaque token identifying a hyperlink-like region. The typesetter never
/// interprets it; it is handed back to the click callback untouched.
pub type InteractiveId = isize;

/// Reference to a style within a [`StyleRegistry`]
pub type StyleId = Id<Style>;

/// Pointer interaction state of an interactive region
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Normal,
    /// The pointer is over the region
    Hover,
    /// The region is being pressed
    Active,
}

/// Colours and identity of a hyperlink style
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HotStyle {
    /// Style the font is inherited from
    pub base: StyleId,
    pub normal: Colour,
    pub hover: Colour,
    pub active: Colour,
    pub id: InteractiveId,
}

impl HotStyle {
    pub fn colour(&self, state: InteractionState) -> Colour {
        match state {
            InteractionState::Normal => self.normal,
            InteractionState::Hover => self.hover,
            InteractionState::Active => self.active,
        }
    }
}

/// A character formatting style
#[derive(Clone, Debug, PartialEq)]
pub enum Style {
    /// A font and a text colour
    Plain { font: String, colour: Colour },
    /// A hyperlink style, inheriting its font from a base style
    Hot(HotStyle),
}

/// Interns the styles used by a single typesetter
#[derive(Default, Debug)]
pub struct StyleRegistry {
    styles: Arena<Style>,
}

impl StyleRegistry {
    pub fn new() -> StyleRegistry {
        StyleRegistry::default()
    }

    /// Get the style with the given font and colour, creating it if it doesn't exist yet
    pub fn create_style(&mut self, font: &str, colour: Colour) -> StyleId {
        let existing = self.styles.iter().find(|(_, style)| {
            matches!(style, Style::Plain { font: f, colour: c } if f == font && *c == colour)
        });
        if let Some((id, _)) = existing {
            return id;
        }
        self.styles.alloc(Style::Plain {
            font: font.to_string(),
            colour,
        })
    }

    /// Create a hyperlink style based on `base`. Unless `unique` is false, a new
    /// style is always created; otherwise an identical existing hot style is reused.
    pub fn create_hot_style(
        &mut self,
        base: StyleId,
        normal: Colour,
        hover: Colour,
        active: Colour,
        id: InteractiveId,
        unique: bool,
    ) -> Result<StyleId, TypesetError> {
        if self.styles.get(base).is_none() {
            return Err(TypesetError::UnknownStyle);
        }
        let hot = HotStyle {
            base,
            normal,
            hover,
            active,
            id,
        };

        if !unique {
            let existing = self
                .styles
                .iter()
                .find(|(_, style)| matches!(style, Style::Hot(h) if *h == hot));
            if let Some((style_id, _)) = existing {
                return Ok(style_id);
            }
        }

        Ok(self.styles.alloc(Style::Hot(hot)))
    }

    pub fn get(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id)
    }

    pub fn contains(&self, id: StyleId) -> bool {
        self.styles.get(id).is_some()
    }

    /// Name of the font the style renders with, following hot styles back to
    /// their plain base
    pub fn font_of(&self, id: StyleId) -> Option<&str> {
        let mut current = id;
        loop {
            match self.styles.get(current)? {
                Style::Plain { font, .. } => return Some(font.as_str()),
                Style::Hot(hot) => current = hot.base,
            }
        }
    }

    /// Colour of the style for a given interaction state. Plain styles have one
    /// colour regardless of state.
    pub fn colour_of(&self, id: StyleId, state: InteractionState) -> Option<Colour> {
        match self.styles.get(id)? {
            Style::Plain { colour, .. } => Some(*colour),
            Style::Hot(hot) => Some(hot.colour(state)),
        }
    }

    /// The interactive id of a hot style
    pub fn interactive_id(&self, id: StyleId) -> Option<InteractiveId> {
        match self.styles.get(id)? {
            Style::Plain { .. } => None,
            Style::Hot(hot) => Some(hot.id),
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn plain_styles_are_interned() {
        let mut reg = StyleRegistry::new();
        let a = reg.create_style("serif", colours::BLACK);
        let b = reg.create_style("serif", colours::BLACK);
        let c = reg.create_style("serif", colours::RED);
        let d = reg.create_style("sans", colours::BLACK);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn unique_hot_styles_are_always_new() {
        let mut reg = StyleRegistry::new();
        let base = reg.create_style("serif", colours::BLACK);
        let a = reg
            .create_hot_style(base, colours::BLUE, colours::RED, colours::GREEN, 7, true)
            .expect("base exists");
        let b = reg
            .create_hot_style(base, colours::BLUE, colours::RED, colours::GREEN, 7, true)
            .expect("base exists");
        assert_ne!(a, b);
    }

    #[test]
    fn shared_hot_styles_are_interned() {
        let mut reg = StyleRegistry::new();
        let base = reg.create_style("serif", colours::BLACK);
        let a = reg
            .create_hot_style(base, colours::BLUE, colours::RED, colours::GREEN, 7, false)
            .expect("base exists");
        let b = reg
            .create_hot_style(base, colours::BLUE, colours::RED, colours::GREEN, 7, false)
            .expect("base exists");
        let c = reg
            .create_hot_style(base, colours::BLUE, colours::RED, colours::GREEN, 8, false)
            .expect("base exists");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hot_styles_inherit_font_and_resolve_colours() {
        let mut reg = StyleRegistry::new();
        let base = reg.create_style("serif", colours::BLACK);
        let hot = reg
            .create_hot_style(base, colours::BLUE, colours::RED, colours::GREEN, 42, true)
            .expect("base exists");
        let nested = reg
            .create_hot_style(hot, colours::WHITE, colours::WHITE, colours::WHITE, 43, true)
            .expect("base exists");

        assert_eq!(reg.font_of(nested), Some("serif"));
        assert_eq!(reg.interactive_id(hot), Some(42));
        assert_eq!(reg.interactive_id(base), None);
        assert_eq!(
            reg.colour_of(hot, InteractionState::Hover),
            Some(colours::RED)
        );
        assert_eq!(
            reg.colour_of(base, InteractionState::Active),
            Some(colours::BLACK)
        );
    }

    #[test]
    fn foreign_base_is_rejected() {
        let mut other = StyleRegistry::new();
        let foreign = other.create_style("serif", colours::BLACK);

        let mut reg = StyleRegistry::new();
        let err = reg
            .create_hot_style(foreign, colours::BLUE, colours::RED, colours::GREEN, 1, true)
            .expect_err("base belongs to another registry");
        assert!(matches!(err, TypesetError::UnknownStyle));
    }
}
