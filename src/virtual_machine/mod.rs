//! Stack-plus-registers bytecode virtual machine.
//!
//! Implements an interpreter for a compact 16-bit architecture: 32768 memory
//! cells, eight registers, an unbounded stack, and a 22-opcode instruction
//! set with modular arithmetic on a 15-bit value space. Programs are loaded
//! from flat little-endian images and interact with the operator through a
//! character-oriented console.
//!
//! # Architecture
//!
//! - **Cells**: 16-bit values. [0, 32767] are numbers, [32768, 32775] name
//!   registers r0-r7, anything above is invalid as an operand.
//! - **Execution model**: sequential fetch/decode/execute with conditional
//!   jumps and call/return via the stack.
//!
//! # Modules
//!
//! - [`vm`]: core virtual machine implementation
//! - [`isa`]: instruction set architecture and opcode decoding
//! - [`operand`]: value-space constants and operand classification
//! - [`image`]: program image loading
//! - [`console`]: character I/O seam between the VM and the host terminal
//! - [`debugger`]: read-only instruction rendering

pub mod console;
pub mod debugger;
pub mod errors;
pub mod image;
pub mod isa;
pub mod operand;
pub mod vm;
