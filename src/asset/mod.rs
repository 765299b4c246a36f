//! Implements the infrastructure asset models

mod asset;
mod bridge;
mod building;
mod road;
pub use crate::asset::asset::*;
pub use crate::asset::bridge::*;
pub use crate::asset::building::*;
pub use crate::asset::road::*;
