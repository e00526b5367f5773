//! # ><>
//!
//! Runs a ><> program headlessly or in a stepping debugger.
//!

mod term;

fn main() {
    term::main()
}
