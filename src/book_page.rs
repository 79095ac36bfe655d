//! A page view over a [`TypesetBook`], the way a rendering surface uses it.
//!
//! [`BookPage`] tracks which hyperlink the pointer is over or pressing, and
//! dispatches clicks to a single registered callback. Drawing goes through a
//! [`GlyphSink`], which receives every run with its colour already resolved
//! for the current interaction state.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use book_typesetter::{BookPage, BookTypesetter, Pt, colours};
//!
//! let mut ts = BookTypesetter::create(Pt(200.0), Pt(100.0));
//! let body = ts.create_style("body", colours::BLACK).expect("open typesetter");
//! let link = ts
//!     .create_hot_style(body, colours::BLUE, colours::RED, colours::GREEN, 42, true)
//!     .expect("base style exists");
//! ts.write(link, "topic").expect("valid text");
//! let book = Arc::new(ts.complete().expect("first completion"));
//!
//! let clicked = Arc::new(Mutex::new(Vec::new()));
//! let sink = clicked.clone();
//! let mut view = BookPage::new();
//! view.advise_link_clicked(move |id| sink.lock().unwrap().push(id));
//! view.show_page(book, 0);
//!
//! view.mouse_press(Pt(4.0), Pt(4.0));
//! view.mouse_release(Pt(4.0), Pt(4.0));
//! assert_eq!(*clicked.lock().unwrap(), vec![42]);
//! ```

use crate::{
    book::TypesetBook,
    style::{InteractionState, InteractiveId, StyleId},
    Colour, Pt,
};
use std::sync::Arc;

/// Receives the text of a page to draw
pub trait GlyphSink {
    /// Draw `text` with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, font: &str, colour: Colour, origin: (Pt, Pt));
}

/// Callback invoked with the interactive id of a clicked hyperlink
pub type ClickCallback = Box<dyn FnMut(InteractiveId) + Send>;

/// Displays one page of a book and dispatches hyperlink clicks
#[derive(Default)]
pub struct BookPage {
    book: Option<Arc<TypesetBook>>,
    page: usize,
    link_clicked: Option<ClickCallback>,
    /// hot style under the pointer
    focus: Option<StyleId>,
    /// hot style the pointer was pressed on
    active: Option<StyleId>,
}

impl core::fmt::Debug for BookPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BookPage")
            .field("page", &self.page)
            .field("has_book", &self.book.is_some())
            .field("has_callback", &self.link_clicked.is_some())
            .field("focus", &self.focus)
            .field("active", &self.active)
            .finish()
    }
}

impl BookPage {
    pub fn new() -> BookPage {
        BookPage::default()
    }

    /// Show the given page of a book. Interaction state is reset.
    pub fn show_page(&mut self, book: Arc<TypesetBook>, page: usize) {
        self.book = Some(book);
        self.page = page;
        self.focus = None;
        self.active = None;
    }

    pub fn book(&self) -> Option<&Arc<TypesetBook>> {
        self.book.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Set the callback for clicking a hyperlink, replacing any previous one
    pub fn advise_link_clicked<F>(&mut self, callback: F)
    where
        F: FnMut(InteractiveId) + Send + 'static,
    {
        self.link_clicked = Some(Box::new(callback));
    }

    /// Clear the hyperlink click callback
    pub fn unadvise_link_clicked(&mut self) {
        self.link_clicked = None;
    }

    fn hot_style_at(&self, x: Pt, y: Pt) -> Option<StyleId> {
        let book = self.book.as_ref()?;
        book.hit_test(self.page, x, y).map(|hit| hit.style)
    }

    pub fn mouse_move(&mut self, x: Pt, y: Pt) {
        self.focus = self.hot_style_at(x, y);
    }

    pub fn mouse_leave(&mut self) {
        self.focus = None;
    }

    pub fn mouse_press(&mut self, x: Pt, y: Pt) {
        self.focus = self.hot_style_at(x, y);
        self.active = self.focus;
    }

    /// Release the pointer. If it is released over the same hyperlink it was
    /// pressed on, the click callback is invoked and the id is returned.
    pub fn mouse_release(&mut self, x: Pt, y: Pt) -> Option<InteractiveId> {
        let pressed = self.active.take()?;
        self.focus = self.hot_style_at(x, y);
        if self.focus != Some(pressed) {
            return None;
        }

        let id = self.book.as_ref()?.styles().interactive_id(pressed)?;
        match self.link_clicked.as_mut() {
            Some(callback) => {
                callback(id);
                Some(id)
            }
            None => {
                log::debug!("link {id} clicked with no callback installed");
                None
            }
        }
    }

    /// Interaction state a run in `style` is drawn in
    pub fn state_of(&self, style: StyleId) -> InteractionState {
        if self.active == Some(style) && self.focus == Some(style) {
            InteractionState::Active
        } else if self.focus == Some(style) {
            InteractionState::Hover
        } else {
            InteractionState::Normal
        }
    }

    /// Draw the current page
    pub fn draw<S: GlyphSink>(&self, sink: &mut S) {
        let Some(book) = self.book.as_ref() else {
            return;
        };
        let Some(page) = book.page(self.page) else {
            return;
        };

        for line in page.lines() {
            for run in line.runs.iter() {
                let (font, colour) = book.appearance(run, self.state_of(run.style));
                sink.draw_text(book.text(run), font, colour, (run.x, line.top));
            }
        }
    }
}
