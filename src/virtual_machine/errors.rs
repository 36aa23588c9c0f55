use synacor_derive::Error;

/// Errors that can occur while loading or executing a program image.
///
/// Every fault is fatal: the machine stops and the error is reported to the
/// caller. Variants that arise during execution carry the address of the
/// faulting opcode or operand cell. A clean halt (opcode 0, or `ret` on an
/// empty stack) is not an error.
#[derive(Debug, Error)]
pub enum VMError {
    /// Image byte stream does not split into whole 16-bit cells.
    #[error("image length {len} is not a whole number of cells")]
    OddImageLength { len: usize },
    /// Image byte stream is larger than the address space.
    #[error("image is {len} bytes but memory holds at most {max}")]
    ImageTooLarge { len: usize, max: usize },
    /// Image file could not be read from disk.
    #[error("failed to read image {path}: {reason}")]
    ImageUnreadable { path: String, reason: String },
    /// Cell fetched as an opcode does not name an instruction.
    #[error("invalid opcode {opcode} at address {addr}")]
    InvalidOpcode { opcode: u16, addr: u16 },
    /// Operand cell is outside the value space (neither number nor register).
    #[error("invalid operand {value} at address {addr}")]
    InvalidOperand { value: u16, addr: u16 },
    /// Destination operand is a plain number instead of a register reference.
    #[error("destination operand {value} at address {addr} is not a register")]
    ExpectedRegister { value: u16, addr: u16 },
    /// `mod` with a zero divisor.
    #[error("modulus by zero at address {addr}")]
    DivisionByZero { addr: u16 },
    /// `pop` on an empty stack (`ret` on an empty stack halts instead).
    #[error("pop from an empty stack at address {addr}")]
    StackUnderflow { addr: u16 },
    /// `in` hit end of input before a byte was available.
    #[error("end of input at address {addr}")]
    InputExhausted { addr: u16 },
    /// Host standard stream failure.
    #[error("i/o failure: {reason}")]
    Io { reason: String },
    /// Memory access outside the 32768-cell address space.
    #[error("memory address {addr} is outside the address space")]
    AddressOutOfRange { addr: u16 },
}
