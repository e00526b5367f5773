/*!
## Rust Machine Module

This Rust module is the ><> virtual machine: a self-modifying grid,
an instruction pointer that wraps around it, and a stack of stacks.

*/

mod cursor;
mod grid;
mod io;
mod machine;
mod random;
mod stack;
mod vector;

pub use cursor::Cursor;
pub use grid::Grid;
pub use io::Channel;
pub use machine::approximately_equal;
pub use machine::Machine;
pub use machine::State;
pub use random::Random;
pub use random::Randomness;
pub use random::Sequence;
pub use stack::Frame;
pub use stack::Stacks;
pub use vector::Vector;

#[cfg(test)]
mod tests;
