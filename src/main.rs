//! Synacor-style virtual machine runner.
//!
//! Loads a program image and executes it against the terminal.
//!
//! # Usage
//! ```text
//! synacor <image.bin> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `image.bin`: Program image file (flat little-endian 16-bit cells)
//!
//! # Options
//! - `--trace`: Print each instruction to stderr before executing it
//! - `--verbose`: Show info-level logs
//!
//! Exits 0 on a clean halt (opcode 0, or `ret` on an empty stack) and 1 on
//! any load, decode, arithmetic, stack, memory, or I/O fault.

use std::env;
use std::path::Path;
use std::process;
use synacor::utils::log::{self, Level};
use synacor::virtual_machine::console::StdConsole;
use synacor::virtual_machine::debugger::Disassembler;
use synacor::virtual_machine::errors::VMError;
use synacor::virtual_machine::image::Image;
use synacor::virtual_machine::vm::VM;
use synacor::{error, info};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let image_path = &args[1];
    let mut trace = false;
    let mut verbose = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                trace = true;
                i += 1;
            }
            "--verbose" => {
                verbose = true;
                i += 1;
            }
            other => {
                eprintln!("Unexpected argument: {}\n", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    log::init(if verbose { Level::Info } else { Level::Warn });

    let image = match Image::from_file(Path::new(image_path)) {
        Ok(image) => image,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    info!("loaded {} cells from {}", image.len(), image_path);

    let mut vm = VM::new(image);
    let mut console = StdConsole;

    let result = if trace {
        run_traced(&mut vm, &mut console)
    } else {
        vm.run(&mut console)
    };

    match result {
        Ok(()) => info!("halted cleanly at address {}", vm.pc()),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// Runs the VM one step at a time, printing each instruction before it
/// executes.
fn run_traced(vm: &mut VM, console: &mut StdConsole) -> Result<(), VMError> {
    while !vm.halted() {
        let addr = vm.pc();
        match Disassembler::at_pc(vm).render_next() {
            Ok(line) => eprintln!("{addr:5}: {line}"),
            Err(e) => eprintln!("{addr:5}: <{e}>"),
        }
        vm.step(console)?;
    }
    Ok(())
}

const USAGE: &str = "\
Synacor Virtual Machine

USAGE:
    {program} <image.bin> [OPTIONS]

ARGS:
    <image.bin>    Program image file (little-endian 16-bit cells)

OPTIONS:
    --trace        Print each instruction to stderr before executing it
    --verbose      Show info-level logs
    -h, --help     Print this help message

EXAMPLES:
    # Run a program image
    {program} challenge.bin

    # Watch the instruction stream while it runs
    {program} challenge.bin --trace
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}
