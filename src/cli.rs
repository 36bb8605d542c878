use clap::Parser;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generates value-returning Rust wrappers for libdwarf calls",
    long_about = "Generates a value-returning Rust wrapper for a libdwarf function that\n\
                 reports its result through an output parameter.\n\
                 \n\
                 Example usage:\n\
                 dwarfgen dwarf_get_TAG_name Dwarf_Half Dwarf_Bool\n\
                 dwarfgen dwarf_offdie Dwarf_Off Dwarf_Die\n\
                 \n\
                 The wrapper calls the named function with the argument, the address of\n\
                 a local return value, and an error context, checks the result against\n\
                 DW_DLV_OK, and panics with the function name on failure."
)]
pub struct Cli {
    /// Name of the libdwarf function to wrap
    pub function: String,

    /// Type of the wrapper's single argument
    pub input_type: String,

    /// Type produced through the wrapped function's output parameter
    pub output_type: String,
}
