//! Typesets and paginates styled, interactive book text.
//!
//! A [`BookTypesetter`] accumulates text written in [`Style`]s, line and section
//! breaks, and section alignments. [`BookTypesetter::complete`] wraps all of it to
//! the page width and distributes the lines over pages, producing an immutable
//! [`TypesetBook`]. Hyperlink styles ("hot" styles) carry an [`InteractiveId`]
//! that ends up in the hit regions of every page they appear on, where a
//! [`BookPage`] can hit-test pointer events against them.
//!
//! ```
//! use book_typesetter::{BookTypesetter, Pt, colours};
//!
//! let mut ts = BookTypesetter::create(Pt(200.0), Pt(100.0));
//! let body = ts.create_style("body", colours::BLACK).expect("open typesetter");
//! ts.write(body, "Hello").expect("valid text");
//! ts.line_break(0.0).expect("valid margin");
//! ts.write(body, "World").expect("valid text");
//!
//! let book = ts.complete().expect("first completion");
//! assert_eq!(book.page_count(), 1);
//! assert_eq!(book.page(0).map(|p| p.lines().len()), Some(2));
//! ```

mod book;
pub use book::*;

mod book_page;
pub use book_page::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;
pub use content::*;

mod font;
pub use font::*;

/// Line wrapping and pagination
pub mod layout;
pub use layout::Alignment;

mod page;
pub use page::*;

mod rect;
pub use rect::*;

mod style;
pub use style::*;

mod typesetter;
pub use typesetter::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
