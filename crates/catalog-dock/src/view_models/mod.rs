//! View models - pre-computed render data
//!
//! Views stay dumb: every string, badge, and selection flag they draw
//! is derived here from state, which keeps the presentation logic
//! testable without a terminal.

pub mod dock;

pub use dock::DockViewModel;
