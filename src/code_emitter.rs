use crate::errors::DwarfGenResult;
use crate::wrapper::Wrapper;
use std::io::Write;

// Writes one wrapper to the sink: a blank separator line, the wrapper block,
// a final newline. The separator keeps successive wrappers apart when their
// output is appended to a single bindings file.
pub fn emit_wrapper<W: Write>(out: &mut W, wrapper: &Wrapper) -> DwarfGenResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", wrapper)?;
    out.flush()?;
    Ok(())
}
