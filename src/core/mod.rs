// Core modules implementing the tree model, parsing, emission, and error modeling.
pub mod emit;
pub mod error;
pub mod node;
pub mod parse;
