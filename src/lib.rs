pub mod cli;
pub mod color;
pub mod error;
pub mod input;
pub mod render;
pub mod tokenizer;
