//! Pure data structures shared by the backends, the orchestration layer and the HTTP surface.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
