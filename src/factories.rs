mod erased;
mod initializer;
mod typed;

pub use erased::*;
pub use initializer::*;
pub use typed::*;
