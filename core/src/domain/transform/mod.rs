//! Display-side transforms: per-axis scale factors and color assignment.
//! Neither alters the underlying table.

pub mod color;
pub mod scale;

pub use color::*;
pub use scale::*;
