// Clippy rules to disable.
#![allow(clippy::new_without_default)]

pub mod constants;
pub mod cpu_6510;
pub mod memory;
pub mod opcodes;
