//! Error types for the few fallible host-facing operations.

use std::error::Error;
use std::fmt::{self, Display};

/// Returned by [`crate::Dcpu::add_module`] when the module bus is already full.
///
/// The bus holds at most [`crate::MAX_MODULES`] devices, mirroring the fixed
/// `modules[MAX_MODULES]` array of the C reference emulator. The caller
/// decides what to do with a rejected module (typically: log it and drop it).
#[derive(Debug)]
pub struct ModuleBusFull {
    pub(crate) attempted_count: usize,
}

impl Display for ModuleBusFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "module bus is full: cannot register module {} (capacity is {})",
            self.attempted_count,
            crate::MAX_MODULES
        )
    }
}

impl Error for ModuleBusFull {}
