//! Game of Life core functionality

pub mod grid;
pub mod patterns;
pub mod render;
pub mod rules;

pub use grid::Grid;
pub use patterns::{populate, Pattern};
pub use render::{Alphabet, AlphabetError};
pub use rules::Simulator;
