//! Prelude module for Trellis Datalist.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use trellis_datalist::prelude::*;
//! ```
//!
//! This provides access to:
//! - The widget (`Datalist`, `DatalistOptions`, `CloseIcon`, `Visibility`)
//! - The view tree (`ViewTree`, `NodeId`, styles, `ClickEvent`)
//! - Signals (`Signal`, `ConnectionId`)
//! - Error types (`Error`, `Result`)

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{CloseIcon, Datalist, DatalistOptions, DispatchOutcome, Visibility};

// ============================================================================
// View Tree
// ============================================================================

pub use crate::view::{ClickEvent, Display, NodeId, Positioning, ViewTree, ViewTreeDebug};

// ============================================================================
// Signals
// ============================================================================

pub use trellis_core::{ConnectionId, Signal};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{Error, Result};
