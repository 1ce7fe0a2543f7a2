//! The [`Datalist`] widget: a text input paired with a dropdown suggestion
//! panel.
//!
//! The widget binds to a pre-existing container element (found by id) whose
//! immediately preceding sibling is a text input, injects a header (with a
//! close affordance) and a suggestion body into the container, and from then
//! on manages the dropdown's content and visibility:
//!
//! - Page code feeds suggestions through [`set_markup`](Datalist::set_markup)
//!   (replace) or [`set_elements`](Datalist::set_elements) (accumulate).
//! - A click on a body entry carrying a non-empty `value` attribute selects
//!   it: the dropdown closes, the value lands in the associated input and in
//!   [`value`](Datalist::value), and [`activated`](Datalist::activated) fires.
//! - A click on the close affordance hides the dropdown; any other click
//!   inside the container leaves it alone.
//!
//! # Example
//!
//! ```
//! use trellis_datalist::prelude::*;
//!
//! let mut tree = ViewTree::new();
//! let page = tree.create_element("div");
//! let input = tree.create_element("input");
//! tree.set_attribute(input, "type", "text");
//! let container = tree.create_element("div");
//! tree.set_id(container, "datalist-autocomplete");
//! tree.append_child(page, input);
//! tree.append_child(page, container);
//!
//! let mut datalist = Datalist::bind(&mut tree, DatalistOptions::new())?;
//! datalist.activated.connect(|value| println!("picked {value}"));
//! datalist.set_markup(&mut tree, "<option value=\"pear\">pear</option>");
//! # Ok::<(), trellis_datalist::Error>(())
//! ```

use std::fmt;

use trellis_core::Signal;

use crate::error::{Error, Result};
use crate::view::{ClickEvent, Display, NodeId, Positioning, ViewTree};
use super::options::{CloseIcon, DatalistOptions};

/// Base document id of the container element; instance N ≠ 0 binds to
/// `datalist-autocomplete-N`.
const BASE_CONTAINER_ID: &str = "datalist-autocomplete";

/// Attribute marking the close affordance; the close handler keys off this,
/// not the presentational class.
const CLOSE_ROLE: &str = "close";

/// Whether the dropdown is currently shown.
///
/// This is widget state, not a style readback: content setters move it to
/// `Shown`, closing (programmatic or via the close affordance) moves it to
/// `Hidden`. The container's `display` style mirrors the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// The dropdown is hidden. Initial state.
    #[default]
    Hidden,
    /// The dropdown is visible.
    Shown,
}

/// Result of routing a click through the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler accepted the click (selection or close).
    Accepted,
    /// No handler acted on the click.
    Ignored,
}

impl DispatchOutcome {
    /// Check if the click was handled.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// The view nodes a successfully bound widget holds on to.
#[derive(Debug, Clone, Copy)]
struct Bindings {
    /// The outer container (visibility toggles here).
    container: NodeId,
    /// The injected header holding the close affordance.
    header: NodeId,
    /// The injected suggestion body the content setters fill.
    body: NodeId,
    /// The associated text input selections are written into.
    input: NodeId,
}

/// A text input paired with a dropdown suggestion panel.
///
/// Create one instance per autocomplete region on the page, numbering the
/// containers `datalist-autocomplete`, `datalist-autocomplete-1`,
/// `datalist-autocomplete-2`, ... and passing the number as the instance
/// discriminator. Instances are fully independent.
///
/// If the container id does not resolve, the widget logs an error and stays
/// **inert**: every method is a no-op and the view tree is never touched.
/// A missing or wrong-typed associated input is a setup contract violation
/// and fails construction with an error instead.
///
/// # Signals
///
/// - `activated(String)`: emitted after a selection completes, carrying the
///   selected value. The no-argument callback from
///   [`DatalistOptions::with_on_select`] is delivered through this signal.
pub struct Datalist {
    /// Computed container id for this instance.
    id_string: String,
    /// Close affordance rendering.
    close_icon: CloseIcon,
    /// `margin-top` override applied at bind time.
    margin_top: Option<String>,
    /// Positioning scheme applied at bind time.
    positioning: Positioning,
    /// Explicit show/hide state of the dropdown.
    visibility: Visibility,
    /// Last selected value.
    last_value: Option<String>,
    /// Present iff setup completed; `None` leaves the widget inert.
    bindings: Option<Bindings>,

    /// Signal emitted when a suggestion is selected.
    pub activated: Signal<String>,
}

impl Datalist {
    /// The container id a given instance discriminator binds to.
    ///
    /// ```
    /// use trellis_datalist::widget::Datalist;
    ///
    /// assert_eq!(Datalist::container_id(0), "datalist-autocomplete");
    /// assert_eq!(Datalist::container_id(2), "datalist-autocomplete-2");
    /// ```
    pub fn container_id(instance: u32) -> String {
        if instance == 0 {
            BASE_CONTAINER_ID.to_string()
        } else {
            format!("{BASE_CONTAINER_ID}-{instance}")
        }
    }

    /// Bind a widget to the page.
    ///
    /// Resolves the container by its computed id, applies the requested style
    /// overrides, locates the associated input as the container's immediately
    /// preceding sibling, injects the header/body structure, and wires the
    /// click listeners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] / [`Error::NotATextInput`] when the
    /// element preceding the container is absent or not a text input. A
    /// missing *container* is not an error: the widget is returned inert
    /// (see the type-level docs).
    pub fn bind(tree: &mut ViewTree, options: DatalistOptions) -> Result<Self> {
        let DatalistOptions {
            instance,
            close_icon,
            margin_top,
            fixed,
            on_select,
        } = options;

        let activated = Signal::new();
        if let Some(callback) = on_select {
            // The page callback takes no arguments; the value stays on the signal.
            activated.connect(move |_: &String| callback());
        }

        let mut widget = Self {
            id_string: Self::container_id(instance),
            close_icon,
            margin_top,
            positioning: if fixed {
                Positioning::Fixed
            } else {
                Positioning::Absolute
            },
            visibility: Visibility::Hidden,
            last_value: None,
            bindings: None,
            activated,
        };

        let Some(container) = tree.element_by_id(&widget.id_string) else {
            tracing::error!(
                target: "trellis_datalist::widget",
                container = %widget.id_string,
                "no container element found; datalist left inert"
            );
            return Ok(widget);
        };

        if let Some(margin) = &widget.margin_top {
            tree.set_margin_top(container, margin.clone());
        }
        if widget.positioning == Positioning::Fixed {
            tree.set_position(container, Positioning::Fixed);
        }

        let input = match tree.previous_sibling(container) {
            None => return Err(Error::missing_input(&widget.id_string)),
            Some(sibling) if !tree.is_text_input(sibling) => {
                let tag = tree.tag(sibling).unwrap_or_default().to_string();
                return Err(Error::not_a_text_input(&widget.id_string, tag));
            }
            Some(sibling) => sibling,
        };

        tree.add_class(container, "datalist-outer");
        let header = Self::build_header(tree, widget.close_icon);
        let body = tree.create_element("div");
        tree.add_class(body, "datalist");
        tree.append_child(container, header);
        tree.append_child(container, body);

        // Listener registration: clicks routed through dispatch_click reach
        // the body (selection) and container (close) handlers from here on.
        widget.bindings = Some(Bindings {
            container,
            header,
            body,
            input,
        });
        tracing::debug!(
            target: "trellis_datalist::widget",
            container = %widget.id_string,
            "datalist bound"
        );
        Ok(widget)
    }

    /// Build the dropdown header with its close affordance.
    fn build_header(tree: &mut ViewTree, icon: CloseIcon) -> NodeId {
        let header = tree.create_element("div");
        tree.add_class(header, "datalist-header");

        let close = match icon {
            CloseIcon::IconFont => {
                let i = tree.create_element("i");
                for class in ["fas", "fa-window-close", "fa-lg", "close-datalist"] {
                    tree.add_class(i, class);
                }
                i
            }
            CloseIcon::Glyph => {
                let span = tree.create_element("span");
                tree.add_class(span, "close-datalist");
                tree.add_class(span, "html-entity");
                tree.set_text(span, "\u{274E}");
                span
            }
        };
        tree.set_attribute(close, "data-role", CLOSE_ROLE);
        tree.append_child(header, close);

        header
    }

    // =========================================================================
    // Content setters
    // =========================================================================

    /// Replace the suggestion body with the given markup and show the
    /// dropdown.
    ///
    /// An empty fragment hides the dropdown and leaves the existing body
    /// content untouched. A fragment that fails to parse is logged and also
    /// hides the dropdown. Do not mix with
    /// [`set_elements`](Self::set_elements) without accounting for the
    /// replace-vs-accumulate difference.
    pub fn set_markup(&mut self, tree: &mut ViewTree, markup: &str) {
        let Some(bindings) = self.bindings else { return };
        if markup.is_empty() {
            self.close(tree);
            return;
        }
        match tree.set_markup(bindings.body, markup) {
            Ok(()) => self.show(tree),
            Err(err) => {
                tracing::warn!(
                    target: "trellis_datalist::widget",
                    container = %self.id_string,
                    error = %err,
                    "markup fragment rejected; hiding dropdown"
                );
                self.close(tree);
            }
        }
    }

    /// Append already-built elements to the suggestion body and show the
    /// dropdown.
    ///
    /// An empty slice hides the dropdown. Existing body content is NOT
    /// cleared: repeated calls accumulate. Do not mix with
    /// [`set_markup`](Self::set_markup) without accounting for the
    /// replace-vs-accumulate difference.
    pub fn set_elements(&mut self, tree: &mut ViewTree, elements: &[NodeId]) {
        let Some(bindings) = self.bindings else { return };
        if elements.is_empty() {
            self.close(tree);
            return;
        }
        for &element in elements {
            tree.append_child(bindings.body, element);
        }
        self.show(tree);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// The dropdown's current state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Hide the dropdown.
    ///
    /// Also triggered by a click on the close affordance and after a
    /// completed selection.
    pub fn close(&mut self, tree: &mut ViewTree) {
        let Some(bindings) = self.bindings else { return };
        self.visibility = Visibility::Hidden;
        tree.set_display(bindings.container, Display::None);
    }

    fn show(&mut self, tree: &mut ViewTree) {
        let Some(bindings) = self.bindings else { return };
        self.visibility = Visibility::Shown;
        tree.set_display(bindings.container, Display::Block);
    }

    // =========================================================================
    // Click dispatch
    // =========================================================================

    /// Route a click through the widget's listeners.
    ///
    /// The event bubbles from the target through its ancestors; the innermost
    /// listener sees it first (body before container for clicks on
    /// suggestions), and an accepted event stops propagating.
    ///
    /// - Body listener: a target carrying a non-empty `value` attribute is a
    ///   selection; anything else inside the body is ignored.
    /// - Container listener: a target carrying the close marker hides the
    ///   dropdown; any other click inside the container leaves it open.
    pub fn dispatch_click(&mut self, tree: &mut ViewTree, event: &mut ClickEvent) -> DispatchOutcome {
        let Some(bindings) = self.bindings else {
            return DispatchOutcome::Ignored;
        };

        let mut current = Some(event.target());
        while let Some(node) = current {
            if node == bindings.body {
                self.on_body_click(tree, event, bindings);
            } else if node == bindings.container {
                self.on_container_click(tree, event);
            }
            if event.is_accepted() {
                return DispatchOutcome::Accepted;
            }
            current = tree.parent(node);
        }
        DispatchOutcome::Ignored
    }

    /// Selection handler: acts only on targets with a non-empty `value`.
    fn on_body_click(&mut self, tree: &mut ViewTree, event: &mut ClickEvent, bindings: Bindings) {
        let Some(value) = tree
            .attribute(event.target(), "value")
            .filter(|v| !v.is_empty())
            .map(str::to_string)
        else {
            return;
        };

        event.accept();
        self.close(tree);
        tree.set_attribute(bindings.input, "value", value.clone());
        self.last_value = Some(value.clone());
        tracing::debug!(
            target: "trellis_datalist::widget",
            container = %self.id_string,
            value = %value,
            "suggestion selected"
        );
        self.activated.emit(value);
    }

    /// Close handler: acts only on the close affordance itself. Other click
    /// targets inside the container deliberately leave the dropdown open.
    fn on_container_click(&mut self, tree: &mut ViewTree, event: &mut ClickEvent) {
        if tree.attribute(event.target(), "data-role") != Some(CLOSE_ROLE) {
            return;
        }
        event.accept();
        self.close(tree);
        tracing::trace!(
            target: "trellis_datalist::widget",
            container = %self.id_string,
            "dropdown closed via close affordance"
        );
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The last selected value; `None` until a selection occurs.
    pub fn value(&self) -> Option<&str> {
        self.last_value.as_deref()
    }

    /// Whether setup found no container and the widget ignores every call.
    pub fn is_inert(&self) -> bool {
        self.bindings.is_none()
    }

    /// The container element, unless inert.
    pub fn container(&self) -> Option<NodeId> {
        self.bindings.map(|b| b.container)
    }

    /// The injected suggestion body, unless inert.
    pub fn body(&self) -> Option<NodeId> {
        self.bindings.map(|b| b.body)
    }

    /// The associated text input, unless inert.
    pub fn input(&self) -> Option<NodeId> {
        self.bindings.map(|b| b.input)
    }

    /// The injected header element, unless inert.
    pub fn header(&self) -> Option<NodeId> {
        self.bindings.map(|b| b.header)
    }

    /// The close affordance rendering this widget was configured with.
    pub fn close_icon(&self) -> CloseIcon {
        self.close_icon
    }

    /// The `margin-top` override this widget was configured with.
    pub fn margin_top(&self) -> Option<&str> {
        self.margin_top.as_deref()
    }

    /// The positioning scheme this widget was configured with.
    pub fn positioning(&self) -> Positioning {
        self.positioning
    }
}

impl fmt::Debug for Datalist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datalist")
            .field("container_id", &self.id_string)
            .field("visibility", &self.visibility)
            .field("last_value", &self.last_value)
            .field("inert", &self.bindings.is_none())
            .finish()
    }
}
