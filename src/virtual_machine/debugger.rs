//! Read-only instruction rendering.
//!
//! [`Disassembler`] pretty-prints the instruction at a cursor as
//! `<mnemonic> <operands>`: source operands show the raw cell and its
//! resolved value in parentheses, destinations show the register index in
//! angle brackets, and cells that decode as neither render as data words.
//!
//! Uses [`for_each_instruction!`](crate::for_each_instruction) so the
//! rendered shapes can never drift from the decoder. The cursor is distinct
//! from the VM's program counter; rendering observes state and never
//! mutates it.

use crate::for_each_instruction;
use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::isa::Instruction;
use crate::virtual_machine::operand::Operand;
use crate::virtual_machine::vm::VM;
use std::fmt::Write;

/// Renders instructions from a VM's memory without touching its state.
pub struct Disassembler<'a> {
    vm: &'a VM,
    cursor: u16,
}

macro_rules! define_render_instruction {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:literal, $mnemonic:literal => [
                $( $field:ident : $kind:ident ),* $(,)?
            ]
        ),* $(,)?
    ) => {
        impl Disassembler<'_> {
            /// Renders the instruction at the cursor and advances the cursor
            /// past it.
            ///
            /// Cells that do not name an instruction render as `data N` and
            /// consume one cell.
            pub fn render_next(&mut self) -> Result<String, VMError> {
                let cell = self.read()?;
                let Ok(instr) = Instruction::try_from(cell) else {
                    return Ok(format!("data {cell}"));
                };

                let mut line = String::from(instr.mnemonic());
                match instr {
                    $(
                        Instruction::$name => {
                            $(
                                let cell = self.read()?;
                                define_render_instruction!(@operand self, line, cell, $kind);
                            )*
                        }
                    )*
                }
                Ok(line)
            }
        }
    };

    // Destination: the register index in angle brackets
    (@operand $self:ident, $line:ident, $cell:ident, Dst) => {
        match Operand::try_from($cell) {
            Ok(Operand::Register(idx)) => {
                let _ = write!($line, " <{idx}>");
            }
            _ => {
                let _ = write!($line, " {}?", $cell);
            }
        }
    };

    // Source: the raw cell and its resolved value
    (@operand $self:ident, $line:ident, $cell:ident, Src) => {
        match Operand::try_from($cell) {
            Ok(Operand::Literal(value)) => {
                let _ = write!($line, " {value} ({value})");
            }
            Ok(Operand::Register(idx)) => {
                let resolved = $self.vm.registers().get(idx);
                let _ = write!($line, " {} ({resolved})", $cell);
            }
            Err(_) => {
                let _ = write!($line, " {}?", $cell);
            }
        }
    };
}

for_each_instruction!(define_render_instruction);

impl<'a> Disassembler<'a> {
    /// Creates a disassembler with its cursor at `addr`.
    pub fn at(vm: &'a VM, addr: u16) -> Self {
        Self { vm, cursor: addr }
    }

    /// Creates a disassembler with its cursor at the VM's program counter.
    pub fn at_pc(vm: &'a VM) -> Self {
        Self::at(vm, vm.pc())
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Reads the cell at the cursor and post-increments the cursor.
    fn read(&mut self) -> Result<u16, VMError> {
        let cell = self.vm.memory().read(self.cursor)?;
        self.cursor = self.cursor.wrapping_add(1);
        Ok(cell)
    }
}
