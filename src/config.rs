// Fixed vocabulary of the generated wrapper. Every string here is part of
// the tool's output contract and must not drift.

/// libdwarf scalar and pointer-alias types whose wrapper locals are safe to
/// zero-initialize. Exact, case-sensitive names, in the order the libdwarf
/// bindings declare them.
pub const PRIMITIVE_TYPES: [&str; 8] = [
    "Dwarf_Bool",
    "Dwarf_Off",
    "Dwarf_Unsigned",
    "Dwarf_Half",
    "Dwarf_Small",
    "Dwarf_Signed",
    "Dwarf_Addr",
    "Dwarf_Ptr",
];

// Name prefix of every generated wrapper function
pub const WRAPPER_PREFIX: &str = "my_";

// Result value libdwarf returns on success
pub const SUCCESS_SENTINEL: &str = "DW_DLV_OK";

// Error-context argument passed to every wrapped call
pub const ERROR_CONTEXT: &str = "dwarf_error()";

// Bindgen-style struct name behind an opaque libdwarf handle type
pub fn struct_pointee(type_name: &str) -> String {
    format!("Struct_{}_s", type_name)
}
