use super::*;
use crate::virtual_machine::console::tests::ScriptedConsole;

fn load_vm(cells: &[u16]) -> VM {
    VM::new(Image::from_cells(cells).expect("image build failed"))
}

fn run_with_input(cells: &[u16], input: &str) -> (VM, String) {
    let mut vm = load_vm(cells);
    let mut console = ScriptedConsole::with_input(input);
    vm.run(&mut console).expect("vm run failed");
    (vm, console.output().to_string())
}

fn run_cells(cells: &[u16]) -> (VM, String) {
    run_with_input(cells, "")
}

fn run_expect_err(cells: &[u16]) -> VMError {
    let mut vm = load_vm(cells);
    let mut console = ScriptedConsole::new();
    vm.run(&mut console).expect_err("expected fault")
}

fn reg(vm: &VM, idx: u8) -> u16 {
    vm.registers().get(idx)
}

// ==================== Registers and stack ====================

#[test]
fn set_literal_into_register() {
    let (vm, _) = run_cells(&[1, 32768, 123, 0]);
    assert_eq!(reg(&vm, 0), 123);
}

#[test]
fn set_copies_register_values() {
    let (vm, _) = run_cells(&[1, 32768, 42, 1, 32769, 32768, 0]);
    assert_eq!(reg(&vm, 1), 42);
}

#[test]
fn push_pop_round_trips() {
    let (vm, _) = run_cells(&[2, 99, 3, 32770, 0]);
    assert_eq!(reg(&vm, 2), 99);
    assert!(vm.stack().is_empty());
}

#[test]
fn push_resolves_register_sources() {
    let (vm, _) = run_cells(&[1, 32768, 7, 2, 32768, 3, 32771, 0]);
    assert_eq!(reg(&vm, 3), 7);
}

#[test]
fn pop_on_empty_stack_is_a_fault() {
    assert!(matches!(
        run_expect_err(&[3, 32768]),
        VMError::StackUnderflow { addr: 0 }
    ));
}

// ==================== Comparison ====================

#[test]
fn eq_sets_one_on_equality() {
    let (vm, _) = run_cells(&[4, 32768, 5, 5, 0]);
    assert_eq!(reg(&vm, 0), 1);
}

#[test]
fn eq_sets_zero_on_inequality() {
    let (vm, _) = run_cells(&[4, 32768, 5, 6, 0]);
    assert_eq!(reg(&vm, 0), 0);
}

#[test]
fn gt_is_strict() {
    let (vm, _) = run_cells(&[5, 32768, 6, 5, 5, 32769, 5, 5, 0]);
    assert_eq!(reg(&vm, 0), 1);
    assert_eq!(reg(&vm, 1), 0);
}

// ==================== Jumps ====================

#[test]
fn jmp_redirects_the_pc() {
    // Jump over a halt into an out/halt pair.
    let (_, output) = run_cells(&[6, 3, 0, 19, 65, 0]);
    assert_eq!(output, "A");
}

#[test]
fn jmp_through_a_register_uses_its_value() {
    let (_, output) = run_cells(&[1, 32768, 6, 6, 32768, 0, 19, 66, 0]);
    assert_eq!(output, "B");
}

#[test]
fn jt_jumps_on_nonzero_literal() {
    let (_, output) = run_cells(&[7, 1, 5, 0, 0, 19, 65, 0]);
    assert_eq!(output, "A");
}

#[test]
fn jt_does_not_jump_on_zero_register() {
    // r0 holds 0, so execution falls through to the halt at address 3.
    let (vm, output) = run_cells(&[7, 32768, 5, 0, 0, 19, 65, 0]);
    assert_eq!(output, "");
    assert_eq!(vm.pc(), 4);
}

#[test]
fn jf_jumps_on_zero_register() {
    let (_, output) = run_cells(&[8, 32768, 5, 0, 0, 19, 65, 0]);
    assert_eq!(output, "A");
}

#[test]
fn jf_falls_through_on_nonzero() {
    let (_, output) = run_cells(&[8, 1, 5, 0, 0, 19, 65, 0]);
    assert_eq!(output, "");
}

// ==================== Arithmetic and logic ====================

#[test]
fn add_is_modular() {
    // r0 = 32767, then r0 = (32767 + 1) mod 32768.
    let (vm, _) = run_cells(&[1, 32768, 32767, 9, 32768, 32768, 1, 0]);
    assert_eq!(reg(&vm, 0), 0);
}

#[test]
fn add_of_small_operands() {
    let (vm, _) = run_cells(&[9, 32768, 2, 3, 0]);
    assert_eq!(reg(&vm, 0), 5);
}

#[test]
fn mult_is_modular() {
    // 32767 * 32767 = (-1)^2 mod 32768.
    let (vm, _) = run_cells(&[10, 32768, 32767, 32767, 0]);
    assert_eq!(reg(&vm, 0), 1);
}

#[test]
fn mod_takes_the_remainder() {
    let (vm, _) = run_cells(&[11, 32768, 17, 5, 0]);
    assert_eq!(reg(&vm, 0), 2);
}

#[test]
fn mod_by_zero_is_a_fault() {
    assert!(matches!(
        run_expect_err(&[11, 32768, 17, 0]),
        VMError::DivisionByZero { addr: 0 }
    ));
}

#[test]
fn and_or_are_bitwise() {
    let (vm, _) = run_cells(&[12, 32768, 0b1100, 0b1010, 13, 32769, 0b1100, 0b1010, 0]);
    assert_eq!(reg(&vm, 0), 0b1000);
    assert_eq!(reg(&vm, 1), 0b1110);
}

#[test]
fn not_inverts_fifteen_bits() {
    let (vm, _) = run_cells(&[14, 32768, 0, 14, 32769, 32767, 0]);
    assert_eq!(reg(&vm, 0), 32767);
    assert_eq!(reg(&vm, 1), 0);
}

#[test]
fn not_twice_restores_the_value() {
    let (vm, _) = run_cells(&[14, 32768, 12345, 14, 32768, 32768, 0]);
    assert_eq!(reg(&vm, 0), 12345);
}

// ==================== Memory ====================

#[test]
fn wmem_rmem_round_trips() {
    let (vm, _) = run_cells(&[16, 100, 1234, 15, 32768, 100, 0]);
    assert_eq!(reg(&vm, 0), 1234);
}

#[test]
fn rmem_beyond_the_image_reads_zero() {
    let (vm, _) = run_cells(&[15, 32768, 30000, 0]);
    assert_eq!(reg(&vm, 0), 0);
}

#[test]
fn wmem_can_rewrite_upcoming_code() {
    // Overwrite the halt at address 4 before reaching it... with another halt.
    let (vm, _) = run_cells(&[16, 4, 0, 21, 0]);
    assert_eq!(vm.memory().read(4).unwrap(), 0);
    assert!(vm.halted());
}

// ==================== Call and ret ====================

#[test]
fn call_then_ret_resumes_after_the_call() {
    // call 5 runs the noop at 5, ret returns to the halt right after the
    // call's operand.
    let (vm, _) = run_cells(&[17, 5, 0, 0, 0, 21, 18]);
    assert!(vm.halted());
    assert_eq!(vm.pc(), 3);
}

#[test]
fn call_pushes_the_address_after_its_operand() {
    // call jumps to 4, where pop recovers the pushed resume address.
    let (vm, _) = run_cells(&[17, 4, 0, 0, 3, 32768, 0]);
    assert_eq!(reg(&vm, 0), 2);
}

#[test]
fn call_through_a_register_jumps_to_its_value() {
    let (vm, _) = run_cells(&[1, 32768, 6, 17, 32768, 0, 21, 18]);
    assert!(vm.halted());
}

#[test]
fn ret_on_empty_stack_halts_cleanly() {
    let (vm, _) = run_cells(&[18]);
    assert!(vm.halted());
}

// ==================== Console ====================

#[test]
fn out_emits_characters() {
    let (_, output) = run_cells(&[19, 72, 19, 105, 0]);
    assert_eq!(output, "Hi");
}

#[test]
fn out_count_matches_instruction_count() {
    let (_, output) = run_cells(&[19, 97, 19, 97, 19, 97, 0]);
    assert_eq!(output.len(), 3);
}

#[test]
fn out_of_register_sum() {
    // r1 = 5, r2 = 3, r0 = r1 + r2, out r0.
    let (_, output) = run_cells(&[
        1, 32769, 5, 1, 32770, 3, 9, 32768, 32769, 32770, 19, 32768, 0,
    ]);
    assert_eq!(output, "\u{8}");
}

#[test]
fn in_reads_one_code_point_per_instruction() {
    let (vm, _) = run_with_input(&[20, 32768, 20, 32769, 0], "hi");
    assert_eq!(reg(&vm, 0), u16::from(b'h'));
    assert_eq!(reg(&vm, 1), u16::from(b'i'));
}

#[test]
fn in_consumes_a_line_byte_by_byte() {
    let (vm, _) = run_with_input(&[20, 32768, 20, 32769, 20, 32770, 0], "go\n");
    assert_eq!(reg(&vm, 0), u16::from(b'g'));
    assert_eq!(reg(&vm, 1), u16::from(b'o'));
    assert_eq!(reg(&vm, 2), u16::from(b'\n'));
}

#[test]
fn in_at_end_of_input_is_a_fault() {
    assert!(matches!(
        run_expect_err(&[20, 32768]),
        VMError::InputExhausted { addr: 0 }
    ));
}

// ==================== Decode faults ====================

#[test]
fn unknown_opcode_is_a_fault() {
    assert!(matches!(
        run_expect_err(&[22]),
        VMError::InvalidOpcode { opcode: 22, addr: 0 }
    ));
}

#[test]
fn operand_above_value_space_is_a_fault() {
    assert!(matches!(
        run_expect_err(&[6, 32776]),
        VMError::InvalidOperand {
            value: 32776,
            addr: 1
        }
    ));
}

#[test]
fn literal_destination_is_a_fault() {
    assert!(matches!(
        run_expect_err(&[1, 5, 1]),
        VMError::ExpectedRegister { value: 5, addr: 1 }
    ));
}

#[test]
fn faults_report_the_faulting_address() {
    // The bad operand sits at address 2 after a leading noop.
    assert!(matches!(
        run_expect_err(&[21, 6, 40000, 0]),
        VMError::InvalidOperand {
            value: 40000,
            addr: 2
        }
    ));
}

// ==================== Machine control ====================

#[test]
fn halt_stops_after_the_opcode_cell() {
    let (vm, _) = run_cells(&[21, 21, 0]);
    assert!(vm.halted());
    assert_eq!(vm.pc(), 3);
}

#[test]
fn running_into_zeroed_memory_halts() {
    // The image is one noop; the zero cell after it executes as halt.
    let (vm, _) = run_cells(&[21]);
    assert!(vm.halted());
    assert_eq!(vm.pc(), 2);
}

#[test]
fn noop_leaves_registers_alone() {
    let (vm, _) = run_cells(&[1, 32768, 7, 21, 0]);
    assert_eq!(reg(&vm, 0), 7);
}

#[test]
fn registers_hold_numbers_in_all_reached_states() {
    let (vm, _) = run_cells(&[
        1, 32768, 32767, 9, 32769, 32768, 32767, 10, 32770, 32768, 32768, 14, 32771, 32768, 0,
    ]);
    for idx in 0..8 {
        assert!(reg(&vm, idx) < 32768);
    }
}
