//! Platform abstraction layer
//!
//! Handles:
//! - Time (injected clock so tests control elapsed seconds)
//! - Input events
//! - The terminal frontend used by the native binary

pub mod input;
pub mod terminal;
pub mod time;

pub use input::{InputEvent, InputFrame, InputSource, ScriptedInput};
pub use time::{Clock, ManualClock, SystemClock};
