//! Typed indices for items, options, and colors.
//!
//! The search engine itself works on raw `usize` indices for array-indexing
//! speed (see `substrate`); these newtypes exist at the public boundary so
//! callers can't accidentally pass an item id where an option id belongs.

/// ID of an option (row) in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(usize);

impl OptionId {
    /// Creates a new `OptionId`.
    #[must_use]
    pub fn new(id: usize) -> Self {
        OptionId(id)
    }

    /// Returns the index of the option in the matrix.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// ID of an item (column) in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Creates a new `ItemId`.
    #[must_use]
    pub fn new(id: usize) -> Self {
        ItemId(id)
    }

    /// Returns the index of the item in the matrix.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Color of a secondary item. `0` is reserved to mean "uncolored".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(usize);

impl Color {
    /// Creates a new `Color`. A value of `0` means "no color".
    #[must_use]
    pub fn new(id: usize) -> Self {
        Color(id)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}
