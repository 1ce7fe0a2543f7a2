//! Typed inline styles.
//!
//! The widget only ever touches three style properties: `display` (to show
//! and hide the dropdown), `margin-top` (a page-supplied offset), and
//! `position` (absolute vs. fixed). They are modeled as typed values rather
//! than raw CSS strings so tests can assert on them directly.

/// The `display` values the widget writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// The element takes part in layout.
    Block,
    /// The element is removed from layout (hidden).
    None,
}

impl Display {
    /// The CSS keyword for this value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// The positioning schemes the widget selects between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Positioning {
    /// Positioned relative to the nearest positioned ancestor.
    #[default]
    Absolute,
    /// Positioned relative to the viewport. Use when the containing element
    /// is too small to let the whole dropdown be visible.
    Fixed,
}

impl Positioning {
    /// The CSS keyword for this value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}

/// The inline style slots of a single element.
///
/// An unset slot means the element falls back to whatever the host's
/// stylesheet says; the widget never reads a style back to decide behavior
/// (visibility is tracked as widget state).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    /// `display` override, if any.
    pub display: Option<Display>,
    /// `margin-top` override, if any. Kept as the page-supplied string
    /// (e.g. `"2px"`, `"0.5rem"`).
    pub margin_top: Option<String>,
    /// `position` override, if any.
    pub position: Option<Positioning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_keywords() {
        assert_eq!(Display::Block.as_css(), "block");
        assert_eq!(Display::None.as_css(), "none");
        assert_eq!(Positioning::Absolute.as_css(), "absolute");
        assert_eq!(Positioning::Fixed.as_css(), "fixed");
    }

    #[test]
    fn test_default_style_is_unset() {
        let style = InlineStyle::default();
        assert_eq!(style.display, None);
        assert_eq!(style.margin_top, None);
        assert_eq!(style.position, None);
    }
}
