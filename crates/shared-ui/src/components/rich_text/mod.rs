mod component;
mod parse;

pub use component::*;
pub use parse::*;
