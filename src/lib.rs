use std::fmt::Write;

pub mod cli;
pub mod code_emitter;
pub mod config;
pub mod errors;
pub mod wrapper;

use crate::errors::DwarfGenResult;
use crate::wrapper::Wrapper;

// Renders the wrapper for one libdwarf function as a standalone block of
// Rust source, without the separator line or trailing newline the
// command-line tool adds around it.
pub fn generate(function: &str, input_type: &str, output_type: &str) -> DwarfGenResult<String> {
    let wrapper = Wrapper::new(function, input_type, output_type);
    let mut output = String::new();
    write!(output, "{}", wrapper)?;
    Ok(output)
}
