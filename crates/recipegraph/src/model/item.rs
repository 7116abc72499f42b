/// An item that recipes consume or produce.
///
/// Items from the catalog are immutable. Custom items are user-authored
/// instances of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier within catalog and custom items
    pub id: String,
    /// Display name
    pub name: String,
    /// Category tag
    pub category: String,
    /// Stack size, when the item stacks
    pub stack: Option<u32>,
    /// Display row within the category
    pub row: u32,
    /// Icon reference
    pub icon_id: Option<String>,
}

impl Item {
    /// Create an item with no stack size, row 0 and no icon.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            stack: None,
            row: 0,
            icon_id: None,
        }
    }

    /// Set the stack size.
    pub fn with_stack(mut self, stack: u32) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Set the icon reference.
    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }
}
