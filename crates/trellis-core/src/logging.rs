//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` filter directives
//! to narrow output to a specific subsystem, e.g.
//! `RUST_LOG=trellis_core::signal=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// View tree target (emitted by the widget crates).
    pub const VIEW: &str = "trellis_datalist::view";
    /// Widget target (emitted by the widget crates).
    pub const WIDGET: &str = "trellis_datalist::widget";
}
