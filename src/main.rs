use clap::Parser;
use dwarfgen::cli::Cli;
use dwarfgen::code_emitter::emit_wrapper;
use dwarfgen::wrapper::Wrapper;
use std::io;

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn main() {
    let args = Cli::parse();
    let wrapper = Wrapper::new(args.function, args.input_type, args.output_type);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = emit_wrapper(&mut out, &wrapper) {
        fatal(&format!(
            "Failed to write wrapper for '{}': {}",
            wrapper.function(),
            e
        ));
    }
}
