//! Program image loading.
//!
//! A program image is a flat binary whose length is a multiple of two bytes;
//! each pair is one little-endian 16-bit cell. Cell `k` seats at memory
//! address `k`. There is no header, trailer, or checksum. Cells whose value
//! exceeds the operand space are permitted at load time (they may be data)
//! and fault only if later fetched as an opcode or operand.

use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::operand::ADDRESS_SPACE;
use std::fs;
use std::path::Path;

/// Maximum image size in bytes: one byte pair per addressable cell.
pub const MAX_IMAGE_BYTES: usize = ADDRESS_SPACE * 2;

/// A decoded program image: the cell sequence seated at the low end of
/// memory when the VM starts.
#[derive(Debug, Clone)]
pub struct Image {
    cells: Vec<u16>,
}

impl Image {
    /// Decodes an image from its raw byte stream.
    ///
    /// The stream must split into whole cells and fit the address space.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VMError> {
        if bytes.len() % 2 != 0 {
            return Err(VMError::OddImageLength { len: bytes.len() });
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(VMError::ImageTooLarge {
                len: bytes.len(),
                max: MAX_IMAGE_BYTES,
            });
        }

        let cells = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self { cells })
    }

    /// Reads and decodes an image file.
    pub fn from_file(path: &Path) -> Result<Self, VMError> {
        let bytes = fs::read(path).map_err(|e| VMError::ImageUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Builds an image directly from cells.
    pub fn from_cells(cells: &[u16]) -> Result<Self, VMError> {
        if cells.len() > ADDRESS_SPACE {
            return Err(VMError::ImageTooLarge {
                len: cells.len() * 2,
                max: MAX_IMAGE_BYTES,
            });
        }
        Ok(Self {
            cells: cells.to_vec(),
        })
    }

    /// Returns the decoded cells.
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Returns the number of cells in the image.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the image holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
