use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::image::Image;
use crate::virtual_machine::operand::ADDRESS_SPACE;

/// Flat 32768-cell memory.
///
/// The program image seats at address 0; everything beyond it is zeroed.
/// Accesses are bounds-checked so a program counter or resolved address past
/// the address space surfaces as a fault instead of wrapping.
pub struct Memory {
    cells: Vec<u16>,
}

impl Memory {
    /// Creates a memory with the image seated at the low end.
    pub(super) fn with_image(image: &Image) -> Self {
        let mut cells = vec![0u16; ADDRESS_SPACE];
        cells[..image.len()].copy_from_slice(image.cells());
        Self { cells }
    }

    /// Reads the cell at `addr`.
    pub fn read(&self, addr: u16) -> Result<u16, VMError> {
        self.cells
            .get(usize::from(addr))
            .copied()
            .ok_or(VMError::AddressOutOfRange { addr })
    }

    /// Writes a number into the cell at `addr`.
    pub(super) fn write(&mut self, addr: u16, value: u16) -> Result<(), VMError> {
        match self.cells.get_mut(usize::from(addr)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VMError::AddressOutOfRange { addr }),
        }
    }
}
