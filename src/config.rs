use crate::units::*;

/// Dimensions of a page's text area
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageSize {
    pub width: Pt,
    pub height: Pt,
}

impl PageSize {
    pub fn new<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> PageSize {
        PageSize {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl From<(Pt, Pt)> for PageSize {
    fn from((width, height): (Pt, Pt)) -> Self {
        PageSize { width, height }
    }
}

/// Layout configuration for a [`BookTypesetter`](crate::BookTypesetter)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TypesetterConfig {
    /// Width and height every page is filled to
    pub page_size: PageSize,
    /// Number of spaces a tab character advances by
    pub tab_size: usize,
}

impl TypesetterConfig {
    /// Default configuration for the given page dimensions
    pub fn for_page<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> TypesetterConfig {
        TypesetterConfig {
            page_size: PageSize::new(width, height),
            ..TypesetterConfig::default()
        }
    }
}

impl Default for TypesetterConfig {
    fn default() -> Self {
        TypesetterConfig {
            page_size: PageSize::new(Pt(240.0), Pt(300.0)),
            tab_size: 4,
        }
    }
}
