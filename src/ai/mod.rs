pub mod strategies;
pub mod evaluation;

pub use strategies::*;
pub use evaluation::*;
