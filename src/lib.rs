//! Day 1: stack vs heap allocation, and three ways to refer to one value.
//!
//! Each demo writes to any `io::Write` so the binary can point it at stdout
//! and tests can capture it in a `Vec<u8>`.

pub mod aliasing;
pub mod allocation;
pub mod error;

use std::io::Write;

pub use aliasing::{const_ref_ptr_demo, AliasedValue, ConstAlias, IndirectAccessor, MutAlias};
pub use allocation::{stack_vs_heap_demo, HeapValue};
pub use error::{DemoError, Result};

pub const BANNER: &str = "Day 1: C++ Kernel Basics";

/// Prints the banner, then runs both demos in order.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;

    stack_vs_heap_demo(out)?;
    const_ref_ptr_demo(out)?;

    out.flush()?;
    Ok(())
}
