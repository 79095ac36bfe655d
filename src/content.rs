//! Stored text blocks that can be laid out piecewise.

use crate::TypesetError;
use id_arena::{Arena, Id};
use std::ops::Range;

/// An immutable block of UTF-8 text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    text: String,
}

impl ContentBlock {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Handle to a block within a [`ContentStore`]. Handles are issued in
/// increasing order and are only valid for the store that issued them.
pub type ContentHandle = Id<ContentBlock>;

/// Arena of content blocks with at most one selected block
#[derive(Debug, Default)]
pub struct ContentStore {
    blocks: Arena<ContentBlock>,
    selected: Option<ContentHandle>,
}

impl ContentStore {
    pub fn new() -> ContentStore {
        ContentStore::default()
    }

    /// Store a copy of `text`, optionally making it the selected block
    pub fn add_content(&mut self, text: &[u8], select: bool) -> Result<ContentHandle, TypesetError> {
        let text = std::str::from_utf8(text)?;
        let handle = self.blocks.alloc(ContentBlock {
            text: text.to_string(),
        });
        if select {
            self.selected = Some(handle);
        }
        Ok(handle)
    }

    pub fn select_content(&mut self, handle: ContentHandle) -> Result<(), TypesetError> {
        if self.blocks.get(handle).is_none() {
            return Err(TypesetError::InvalidHandle);
        }
        self.selected = Some(handle);
        Ok(())
    }

    pub fn selected(&self) -> Option<ContentHandle> {
        self.selected
    }

    pub fn get(&self, handle: ContentHandle) -> Option<&ContentBlock> {
        self.blocks.get(handle)
    }

    /// Validate `begin..end` against the selected block and return the handle
    /// it refers to.
    pub fn selected_span(
        &self,
        begin: usize,
        end: usize,
    ) -> Result<(ContentHandle, Range<usize>), TypesetError> {
        let handle = self.selected.ok_or(TypesetError::NoSelection)?;
        let block = self.blocks.get(handle).ok_or(TypesetError::InvalidHandle)?;
        if begin > end {
            return Err(TypesetError::InvertedRange { begin, end });
        }
        if end > block.len() {
            return Err(TypesetError::OutOfRange {
                end,
                len: block.len(),
            });
        }
        if !block.text.is_char_boundary(begin) {
            return Err(TypesetError::MalformedText { valid_up_to: begin });
        }
        if !block.text.is_char_boundary(end) {
            return Err(TypesetError::MalformedText { valid_up_to: end });
        }
        Ok((handle, begin..end))
    }

    /// The text of `range` within a block. Returns an empty string for
    /// handles or ranges the store can't resolve.
    pub fn slice(&self, handle: ContentHandle, range: Range<usize>) -> &str {
        self.blocks
            .get(handle)
            .and_then(|block| block.text.get(range))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_selects_by_default() {
        let mut store = ContentStore::new();
        assert_eq!(store.selected(), None);
        let a = store.add_content(b"first", true).expect("valid text");
        assert_eq!(store.selected(), Some(a));
        let b = store.add_content(b"second", false).expect("valid text");
        assert_eq!(store.selected(), Some(a));
        assert!(b.index() > a.index());
        store.select_content(b).expect("issued handle");
        assert_eq!(store.selected(), Some(b));
    }

    #[test]
    fn handles_from_other_stores_are_invalid() {
        let mut other = ContentStore::new();
        let foreign = other.add_content(b"elsewhere", true).expect("valid text");

        let mut store = ContentStore::new();
        store.add_content(b"here", true).expect("valid text");
        let err = store.select_content(foreign).expect_err("not issued here");
        assert!(matches!(err, TypesetError::InvalidHandle));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut store = ContentStore::new();
        let err = store
            .add_content(&[b'o', b'k', 0xff], true)
            .expect_err("invalid utf-8");
        assert!(matches!(err, TypesetError::MalformedText { valid_up_to: 2 }));
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn span_validation_order() {
        let mut store = ContentStore::new();
        assert!(matches!(
            store.selected_span(0, 1),
            Err(TypesetError::NoSelection)
        ));

        let h = store.add_content("héllo".as_bytes(), true).expect("valid text");
        assert!(matches!(
            store.selected_span(4, 2),
            Err(TypesetError::InvertedRange { begin: 4, end: 2 })
        ));
        assert!(matches!(
            store.selected_span(0, 7),
            Err(TypesetError::OutOfRange { end: 7, len: 6 })
        ));
        assert!(matches!(
            store.selected_span(0, 2),
            Err(TypesetError::MalformedText { valid_up_to: 2 })
        ));

        let (handle, range) = store.selected_span(1, 3).expect("valid span");
        assert_eq!(handle, h);
        assert_eq!(store.slice(handle, range), "é");

        let (_, empty) = store.selected_span(3, 3).expect("empty span is fine");
        assert!(empty.is_empty());
    }
}
