//! Trellis Datalist - a headless autocomplete/datalist widget.
//!
//! A [`Datalist`](widget::Datalist) pairs a text input with a dropdown
//! suggestion panel. Page code populates the panel through two content
//! setters; the user picks an entry with a click; the widget writes the
//! choice into the associated input, remembers it, and notifies listeners
//! through its `activated` signal.
//!
//! The widget never touches a rendering surface. It manipulates a
//! [`ViewTree`](view::ViewTree) - an in-memory element tree exposing the
//! handful of capabilities the widget needs (lookup by id, styles, classes,
//! attributes, child management, click delivery). A host embeds the tree
//! however it likes; unit tests drive it directly.
//!
//! # Example
//!
//! ```
//! use trellis_datalist::prelude::*;
//!
//! let mut tree = ViewTree::new();
//!
//! // Page setup: a text input immediately followed by the container.
//! let page = tree.create_element("div");
//! let input = tree.create_element("input");
//! tree.set_attribute(input, "type", "text");
//! let container = tree.create_element("div");
//! tree.set_id(container, "datalist-autocomplete");
//! tree.append_child(page, input);
//! tree.append_child(page, container);
//!
//! let mut datalist = Datalist::bind(&mut tree, DatalistOptions::new())?;
//! datalist.set_markup(&mut tree, "<option value=\"apple\">apple</option>");
//! assert_eq!(datalist.visibility(), Visibility::Shown);
//! # Ok::<(), trellis_datalist::Error>(())
//! ```

pub mod error;
pub mod prelude;
pub mod view;
pub mod widget;

pub use error::{Error, Result};
