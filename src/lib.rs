//! # ><>
//!
//! An interpreter for ><> ("fish"), a two-dimensional stack language.
//!
//! Programs are grids of characters. An instruction pointer starts in the
//! top left corner moving right, wraps around the edges of the grid, and
//! executes one character per step. Values live on a stack of stacks,
//! each with a one-value register. Programs may read and rewrite their
//! own source with `g` and `p`.
//!
//! ```
//! use fish::mach::Machine;
//!
//! let mut fish = Machine::new("0:n;", "");
//! fish.run(None).unwrap();
//! assert!(fish.is_completed());
//! assert_eq!(fish.output(), "0");
//! ```
//!
//! The machine has no display of its own. The `fish` binary wraps it in a
//! headless runner and a stepping debugger for the terminal.

pub mod lang;
pub mod mach;
