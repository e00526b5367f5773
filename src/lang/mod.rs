/*!
# Rust Language Module

This Rust module decodes ><> instructions and defines the errors
a running program can raise.

*/

#[macro_use]
mod error;
mod instruction;

pub use error::Error;
pub use error::ErrorCode;
pub use instruction::Binary;
pub use instruction::Instruction;
pub use instruction::Mirror;
pub use instruction::Quote;
