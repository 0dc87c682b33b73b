mod bounds;
mod point;

pub use bounds::*;
pub use point::*;
