//! Instruction Set Architecture (ISA) definitions.
//!
//! Defines the VM's instruction set. The
//! [`for_each_instruction!`](crate::for_each_instruction) macro holds the
//! canonical instruction definitions and invokes a callback macro for code
//! generation. This enables multiple modules to generate instruction-related
//! code without duplicating definitions.
//!
//! This module generates:
//! - The [`Instruction`] enum with opcode mappings
//! - `TryFrom<u16>` for decoding opcodes
//! - Mnemonics and operand counts
//!
//! See [`debugger`](super::debugger) for the rendering expansion of the same
//! table.
//!
//! # Instruction Format
//!
//! An instruction is an opcode cell followed by zero to three operand cells.
//! Operand kinds:
//! - `Dst`: destination; must be a register reference
//! - `Src`: source; a number used as-is, or a register reference resolved to
//!   the register's current value

use crate::virtual_machine::errors::VMError;

/// Invokes a callback macro with the complete instruction definition list.
///
/// This macro enables code generation for instructions in multiple modules
/// without duplicating the instruction definitions.
#[macro_export]
macro_rules! for_each_instruction {
    ($callback:ident) => {
        $callback! {
            // =========================
            // Machine control
            // =========================
            /// halt ; stop execution
            Halt = 0, "halt" => [],
            /// noop ; no effect
            Noop = 21, "noop" => [],
            // =========================
            // Registers and stack
            // =========================
            /// set <dst> a ; dst = a
            Set = 1, "set" => [dst: Dst, a: Src],
            /// push a ; push a onto the stack
            Push = 2, "push" => [a: Src],
            /// pop <dst> ; dst = top of stack; empty stack is a fault
            Pop = 3, "pop" => [dst: Dst],
            // =========================
            // Comparison
            // =========================
            /// eq <dst> a b ; dst = 1 if a == b else 0
            Eq = 4, "eq" => [dst: Dst, a: Src, b: Src],
            /// gt <dst> a b ; dst = 1 if a > b else 0
            Gt = 5, "gt" => [dst: Dst, a: Src, b: Src],
            // =========================
            // Control flow
            // =========================
            /// jmp a ; jump to address a
            Jmp = 6, "jmp" => [a: Src],
            /// jt a b ; if a is nonzero, jump to b
            Jt = 7, "jt" => [cond: Src, target: Src],
            /// jf a b ; if a is zero, jump to b
            Jf = 8, "jf" => [cond: Src, target: Src],
            /// call a ; push the address after the operand, jump to a
            Call = 17, "call" => [target: Src],
            /// ret ; jump to the popped address; empty stack halts
            Ret = 18, "ret" => [],
            // =========================
            // Arithmetic and logic
            // =========================
            /// add <dst> a b ; dst = (a + b) mod 32768
            Add = 9, "add" => [dst: Dst, a: Src, b: Src],
            /// mult <dst> a b ; dst = (a * b) mod 32768
            Mult = 10, "mult" => [dst: Dst, a: Src, b: Src],
            /// mod <dst> a b ; dst = a mod b; zero b is a fault
            Mod = 11, "mod" => [dst: Dst, a: Src, b: Src],
            /// and <dst> a b ; dst = a bitand b
            And = 12, "and" => [dst: Dst, a: Src, b: Src],
            /// or <dst> a b ; dst = a bitor b
            Or = 13, "or" => [dst: Dst, a: Src, b: Src],
            /// not <dst> a ; dst = 15-bit inverse of a
            Not = 14, "not" => [dst: Dst, a: Src],
            // =========================
            // Memory
            // =========================
            /// rmem <dst> a ; dst = memory cell at address a
            Rmem = 15, "rmem" => [dst: Dst, addr: Src],
            /// wmem a b ; memory cell at address a = b
            Wmem = 16, "wmem" => [addr: Src, value: Src],
            // =========================
            // Console
            // =========================
            /// out a ; emit a as one output character
            Out = 19, "out" => [value: Src],
            /// in <dst> ; dst = code point of the next input byte
            In = 20, "in" => [dst: Dst],
        }
    };
}

macro_rules! define_instructions {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:literal, $mnemonic:literal => [
                $( $field:ident : $kind:ident ),* $(,)?
            ]
        ),* $(,)?
    ) => {
        // =========================
        // VM instruction enum
        // =========================
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub enum Instruction {
            $(
                $(#[$doc])*
                $name = $opcode,
            )*
        }

        impl TryFrom<u16> for Instruction {
            type Error = VMError;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $( $opcode => Ok(Instruction::$name), )*
                    _ => Err(VMError::InvalidOpcode {
                        opcode: value,
                        addr: 0,
                    }),
                }
            }
        }

        impl Instruction {
            /// Returns the mnemonic for this instruction.
            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $( Instruction::$name => $mnemonic, )*
                }
            }

            /// Returns the number of operand cells following the opcode.
            pub const fn operand_count(&self) -> usize {
                match self {
                    $(
                        Instruction::$name =>
                            <[()]>::len(&[ $( define_instructions!(@unit $field) ),* ]),
                    )*
                }
            }
        }
    };

    // ---------- counting ----------
    (@unit $x:ident) => { () };
}

for_each_instruction!(define_instructions);
