//! Synacor-style virtual machine library.
//!
//! Provides a 16-bit stack-plus-registers bytecode interpreter, a program
//! image loader, a console I/O seam, and a read-only instruction renderer.

pub mod utils;
pub mod virtual_machine;
