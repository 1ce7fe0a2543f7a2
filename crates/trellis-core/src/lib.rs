//! Core systems for Trellis.
//!
//! This crate provides the foundational components shared by the Trellis
//! widget crates:
//!
//! - **Signal/Slot System**: Type-safe notification between widgets and page code
//! - **Logging Targets**: Constants for filtering `tracing` output by subsystem
//!
//! Trellis widgets are synchronous and single-threaded: every handler runs to
//! completion inside the call that triggered it. Signals here therefore invoke
//! their slots directly on the emitting thread; there is no event loop and no
//! queued delivery.
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! // Create a signal that carries the selected value
//! let activated = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = activated.connect(|value| {
//!     println!("Selected: {}", value);
//! });
//!
//! // Emit the signal
//! activated.emit("apple".to_string());
//!
//! // Disconnect when done
//! activated.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
