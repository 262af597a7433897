pub mod aggregate;
pub mod tab_descriptor;

pub use aggregate::*;
pub use tab_descriptor::*;
