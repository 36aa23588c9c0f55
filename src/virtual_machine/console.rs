//! Character I/O seam between the VM and the host terminal.
//!
//! The [`Console`] trait is the only side-effect surface the dispatcher
//! touches: `out` writes one character per instruction, `in` blocks for one
//! input byte. End of input is reported as `None` so the dispatcher decides
//! policy per opcode. [`StdConsole`] wires the trait to the process's
//! standard streams; the host terminal's cooked mode is expected to deliver
//! whole lines, which the guest consumes one byte per `in`.

use crate::virtual_machine::errors::VMError;
use std::io::{self, Read, Write};

/// Character I/O surface used during execution.
pub trait Console {
    /// Emits the character for `code`.
    ///
    /// `code` is a number in [0, 32767]: the low byte for ASCII, UTF-8 for
    /// anything above.
    fn write(&mut self, code: u16) -> Result<(), VMError>;

    /// Blocks until one input byte is available.
    ///
    /// Returns `None` at end of input.
    fn read(&mut self) -> Result<Option<u8>, VMError>;
}

/// Console over the process's standard input and output streams.
pub struct StdConsole;

impl Console for StdConsole {
    fn write(&mut self, code: u16) -> Result<(), VMError> {
        let mut out = io::stdout().lock();
        let result = match char::from_u32(u32::from(code)) {
            Some(c) if c.is_ascii() => out.write_all(&[code as u8]),
            Some(c) => out.write_all(c.encode_utf8(&mut [0u8; 4]).as_bytes()),
            None => {
                return Err(VMError::Io {
                    reason: format!("code point {code} is not a character"),
                });
            }
        };
        result.map_err(|e| VMError::Io {
            reason: e.to_string(),
        })
    }

    fn read(&mut self) -> Result<Option<u8>, VMError> {
        let mut buf = [0u8; 1];
        match io::stdin().lock().read_exact(&mut buf) {
            Ok(()) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(VMError::Io {
                reason: e.to_string(),
            }),
        }
    }
}
