//! Construction options for [`Datalist`](super::Datalist).

use std::fmt;

/// How the close affordance in the dropdown header is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseIcon {
    /// A literal `❎` character in a `<span>`.
    #[default]
    Glyph,
    /// An icon-font `<i>` element (`fa-window-close`), for pages that ship
    /// an icon font.
    IconFont,
}

/// The type of the optional selection callback.
///
/// Invoked with no arguments after a selection completes. Page code that
/// wants the selected value connects to
/// [`Datalist::activated`](super::Datalist::activated) instead.
pub type SelectCallback = Box<dyn Fn() + Send + Sync>;

/// Construction inputs for [`Datalist::bind`](super::Datalist::bind).
///
/// All fields are optional; the defaults bind instance 0 with the glyph close
/// icon, no style overrides, and no callback.
///
/// # Example
///
/// ```
/// use trellis_datalist::widget::{CloseIcon, DatalistOptions};
///
/// let options = DatalistOptions::new()
///     .with_instance(2)
///     .with_close_icon(CloseIcon::IconFont)
///     .with_margin_top("2px")
///     .with_fixed_position(true)
///     .with_on_select(|| println!("picked something"));
/// ```
#[derive(Default)]
pub struct DatalistOptions {
    /// Instance discriminator; selects the container id
    /// `datalist-autocomplete` (0) or `datalist-autocomplete-N`.
    pub(crate) instance: u32,
    /// Close affordance rendering.
    pub(crate) close_icon: CloseIcon,
    /// Optional `margin-top` override applied to the container.
    pub(crate) margin_top: Option<String>,
    /// Use `position: fixed` instead of the default absolute positioning.
    pub(crate) fixed: bool,
    /// Optional selection callback.
    pub(crate) on_select: Option<SelectCallback>,
}

impl DatalistOptions {
    /// Options for instance 0 with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select which container on the page this widget binds to. Leave the
    /// first widget at 0 and number further widgets 1, 2, 3, ...
    pub fn with_instance(mut self, instance: u32) -> Self {
        self.instance = instance;
        self
    }

    /// Select the close affordance rendering.
    pub fn with_close_icon(mut self, icon: CloseIcon) -> Self {
        self.close_icon = icon;
        self
    }

    /// Apply a `margin-top` to the container to adjust the dropdown position
    /// relative to the input.
    pub fn with_margin_top(mut self, margin: impl Into<String>) -> Self {
        self.margin_top = Some(margin.into());
        self
    }

    /// Give the container `position: fixed` instead of absolute. Use when the
    /// containing element is too small to let the whole dropdown be visible.
    pub fn with_fixed_position(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Invoke the given callback (with no arguments) after each completed
    /// selection.
    pub fn with_on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for DatalistOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatalistOptions")
            .field("instance", &self.instance)
            .field("close_icon", &self.close_icon)
            .field("margin_top", &self.margin_top)
            .field("fixed", &self.fixed)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
