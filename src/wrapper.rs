use crate::config;
use std::fmt;

/// Which initialization expression seeds the wrapper's return-value local.
///
/// libdwarf's scalar and pointer-alias types start at zero; every other type
/// is an opaque handle and starts as a typed null pointer cast to the handle
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitKind {
    Zeroed,
    NullPtrCast,
}

impl InitKind {
    /// Picks the initialization form for an output type by exact membership
    /// in the fixed primitive table. No case folding, no prefix stripping.
    pub fn for_type(type_name: &str) -> Self {
        if config::PRIMITIVE_TYPES.contains(&type_name) {
            InitKind::Zeroed
        } else {
            InitKind::NullPtrCast
        }
    }
}

/// One generated wrapper: the wrapped libdwarf function plus its argument
/// and result types. All three names are substituted into the output
/// verbatim.
#[derive(Debug, Clone)]
pub struct Wrapper {
    function: String,
    input_type: String,
    output_type: String,
}

impl Wrapper {
    pub fn new(
        function: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            function: function.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn init_kind(&self) -> InitKind {
        InitKind::for_type(&self.output_type)
    }

    // Declaration snippet seeding the `ret` local, without the `let mut ret`
    // lead-in or the closing semicolon
    pub fn init_expr(&self) -> String {
        match self.init_kind() {
            InitKind::Zeroed => format!(": {} = 0", self.output_type),
            InitKind::NullPtrCast => format!(
                "= ptr::null::<{}>() as {}",
                config::struct_pointee(&self.output_type),
                self.output_type
            ),
        }
    }
}

impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "fn {}{}(arg: {}) -> {} {{",
            config::WRAPPER_PREFIX, self.function, self.input_type, self.output_type
        )?;
        writeln!(f, "    let mut ret {};", self.init_expr())?;
        writeln!(f, "    unsafe {{")?;
        writeln!(
            f,
            "        let res = {}(arg, &mut ret as *mut {}, {});",
            self.function,
            self.output_type,
            config::ERROR_CONTEXT
        )?;
        writeln!(f, "        if (res != {}) {{", config::SUCCESS_SENTINEL)?;
        writeln!(f, "            panic!(\"Error in {}\");", self.function)?;
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;
        writeln!(f, "    ret")?;
        write!(f, "}}")
    }
}
