pub mod grid;
pub mod input;
pub mod instruction;
pub mod runner;
