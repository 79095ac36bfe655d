/// An RGBA colour. The typesetter never interprets colours; they are carried
/// from styles through to the rendering surface unmodified.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    /// Red, from 0.0 to 1.0
    pub r: f32,
    /// Green, from 0.0 to 1.0
    pub g: f32,
    /// Blue, from 0.0 to 1.0
    pub b: f32,
    /// Alpha (opacity), from 0.0 to 1.0
    pub a: f32,
}

impl Colour {
    /// Create a new, fully opaque colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b, a: 1.0 }
    }

    /// Create a new colour with an alpha channel. All components range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new, fully opaque colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::new_rgba_bytes(r, g, b, 255)
    }

    /// Create a new colour with an alpha channel. All components range from 0 to 255
    pub fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a new, fully opaque grey. g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::new_rgb(g, g, g)
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::new_rgb(c.0.into(), c.1.into(), c.2.into())
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb(r.into(), g.into(), b.into())
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::new_rgba(c.0.into(), c.1.into(), c.2.into(), c.3.into())
    }
}

impl<T: Into<f32>> From<[T; 4]> for Colour {
    fn from(c: [T; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::new_rgba(r.into(), g.into(), b.into(), a.into())
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}
