//! Display metadata: categories and sprite-sheet icons.

use crate::error::{GraphError, Result};

/// A recipe/item category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon reference
    pub icon: Option<String>,
}

/// An icon located on a sprite sheet by a CSS-style offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Unique identifier
    pub id: String,
    /// Sprite offset, e.g. `"-32px -64px"`
    pub position: String,
    /// Dominant colour of the icon
    pub color: String,
}

impl Icon {
    /// Create an icon.
    pub fn new(id: impl Into<String>, position: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            color: color.into(),
        }
    }

    /// Horizontal sprite coordinate (absolute value of the first offset).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidIconPosition`] if the position is malformed.
    pub fn x(&self) -> Result<f64> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Vertical sprite coordinate (absolute value of the second offset).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidIconPosition`] if the position is malformed.
    pub fn y(&self) -> Result<f64> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both sprite coordinates.
    ///
    /// The position must hold exactly two whitespace-separated numbers, each
    /// with an optional `px` suffix.
    ///
    /// ```
    /// use recipegraph::Icon;
    ///
    /// let icon = Icon::new("gear", "-32px -64px", "#888");
    /// assert_eq!(icon.coordinates().unwrap(), (32.0, 64.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidIconPosition`] if the position is malformed.
    pub fn coordinates(&self) -> Result<(f64, f64)> {
        let mut parts = self.position.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => Ok((self.offset(x)?, self.offset(y)?)),
            _ => Err(self.invalid()),
        }
    }

    fn offset(&self, raw: &str) -> Result<f64> {
        let number = raw.strip_suffix("px").unwrap_or(raw);
        number
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(f64::abs)
            .ok_or_else(|| self.invalid())
    }

    fn invalid(&self) -> GraphError {
        GraphError::InvalidIconPosition {
            icon_id: self.id.clone(),
            position: self.position.clone(),
        }
    }
}
