//! The view tree the widget binds to.
//!
//! Trellis widgets do not talk to a browser or a renderer. They depend on a
//! small "view binding" capability - find an element by identifier, read and
//! write element style, create elements, append children, receive clicks -
//! and this module provides it as an in-memory element tree:
//!
//! - [`ViewTree`]: slotmap-backed element storage with parent/child links
//! - [`InlineStyle`], [`Display`], [`Positioning`]: the typed style subset
//!   the widget manipulates
//! - [`ClickEvent`]: typed click payload delivered to widgets
//! - [`ViewTreeDebug`]: tree formatter for logs and test output
//!
//! The same tree serves as the production surface for headless hosts and as
//! the fake binding in unit tests.

mod debug;
mod event;
mod markup;
mod style;
mod tree;

pub use debug::{TreeStyle, ViewTreeDebug};
pub use event::ClickEvent;
pub use style::{Display, InlineStyle, Positioning};
pub use tree::{NodeId, ViewTree};
