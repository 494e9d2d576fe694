//! Reducers - pure state transitions
//!
//! Middleware performs side effects; reducers only fold actions into
//! state.

pub mod app_reducer;
pub mod dock_reducer;

pub use app_reducer::reduce;
