//! Shared building blocks: random sources, clocks, errors.
//!
//! Both engines depend on this module; neither depends on the other.

pub mod clock;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, WidgetError};
pub use rng::{ScriptedSource, SeededRng, SeededRngState, UniformSource};
