use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length in typographic points. All page geometry produced by the typesetter
/// is expressed in points, with the origin at the top-left corner of the page
/// and y growing downwards.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// Whether the length is a finite, non-negative number
    pub fn is_valid_extent(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f64> for Pt {
    fn from(v: f64) -> Pt {
        Pt(v as f32)
    }
}

impl From<Pt> for f64 {
    fn from(p: Pt) -> f64 {
        p.0 as f64
    }
}
