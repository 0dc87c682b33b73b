#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::format::{DEFAULT_TEMPLATE, Template};
pub use crate::types::*;

mod error;
pub mod format;
mod rhumb;
mod spherical;
mod types;
pub mod utils;
