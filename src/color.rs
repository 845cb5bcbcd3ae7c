use crate::ids::{Color, ItemId};

/// An item as it appears in one option: the item itself, plus an optional
/// color when the item is secondary and this option constrains its color.
///
/// # Examples
///
/// ```
/// use xcover::{Color, ColoredItem, ItemId};
///
/// let item = ColoredItem::new(ItemId::new(1));
/// assert_eq!(item.color(), None);
///
/// let item = ColoredItem::with_color(ItemId::new(1), Color::new(100));
/// assert_eq!(item.color(), Some(Color::new(100)));
/// ```
#[derive(Clone, Copy)]
pub struct ColoredItem {
    item_id: ItemId,
    color: Option<Color>,
}

impl ColoredItem {
    /// Creates a new `ColoredItem` with no color.
    #[must_use]
    pub fn new(item_id: ItemId) -> Self {
        ColoredItem {
            item_id,
            color: None,
        }
    }

    /// Returns the item this cell refers to.
    #[must_use]
    pub fn item(&self) -> ItemId {
        self.item_id
    }

    /// Returns the color of this item, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Creates a new `ColoredItem` with the given color.
    #[must_use]
    pub fn with_color(item_id: ItemId, color: Color) -> Self {
        ColoredItem {
            item_id,
            color: Some(color),
        }
    }
}
