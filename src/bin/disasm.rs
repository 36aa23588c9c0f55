//! Program image disassembly CLI.
//!
//! Prints an address-annotated instruction listing of an image. Cells that
//! do not decode as instructions are listed as data words. Registers are
//! rendered with their startup value of zero.
//!
//! # Usage
//! ```text
//! disasm <image.bin>
//! ```

use std::env;
use std::path::Path;
use std::process;
use synacor::virtual_machine::debugger::Disassembler;
use synacor::virtual_machine::image::Image;
use synacor::virtual_machine::vm::VM;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() != 2 { 1 } else { 0 });
    }

    let image = match Image::from_file(Path::new(&args[1])) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Failed to load image: {}", e);
            process::exit(1);
        }
    };

    let cell_count = image.len();
    let vm = VM::new(image);
    let mut disasm = Disassembler::at(&vm, 0);

    while usize::from(disasm.cursor()) < cell_count {
        let addr = disasm.cursor();
        match disasm.render_next() {
            Ok(line) => println!("{addr:5}: {line}"),
            Err(e) => {
                eprintln!("Listing stopped at address {}: {}", addr, e);
                process::exit(1);
            }
        }
    }
}

const USAGE: &str = "\
Program Image Disassembler

USAGE:
    {program} <image.bin>

ARGS:
    <image.bin>    Program image file (little-endian 16-bit cells)
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}
