//! The datalist autocomplete widget.
//!
//! - [`Datalist`]: binds to a container + text-input pair in a
//!   [`ViewTree`](crate::view::ViewTree), injects the dropdown structure, and
//!   manages content, visibility, and selection
//! - [`DatalistOptions`]: construction inputs (instance discriminator, close
//!   icon, margin, positioning, selection callback)
//! - [`Visibility`]: the widget's explicit shown/hidden state
//! - [`DispatchOutcome`]: result of routing a click through the widget

mod datalist;
mod options;

pub use datalist::{Datalist, DispatchOutcome, Visibility};
pub use options::{CloseIcon, DatalistOptions, SelectCallback};
