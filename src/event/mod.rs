//! Implements the parametric climate-event stress models

mod event;
mod flood;
mod heatwave;
mod high_wind;
pub use crate::event::event::*;
pub use crate::event::flood::*;
pub use crate::event::heatwave::*;
pub use crate::event::high_wind::*;
