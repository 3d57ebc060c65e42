// Pattern 1: Stack vs Heap Allocation
use std::io::Write;

use crate::error::Result;

pub const STACK_HEADER: &str = "[Stack vs Heap]";
pub const STACK_INITIAL: i32 = 42;
pub const HEAP_INITIAL: i32 = 99;

//==============================================================================
// Part 1: Owning heap handle
//==============================================================================

/// A single heap-allocated integer with exactly one owner.
///
/// `release` consumes the handle, so a second release or a read after release
/// does not compile. Dropping the handle without calling `release` still frees
/// the allocation.
#[derive(Debug)]
pub struct HeapValue {
    slot: Box<i32>, // 8 bytes on stack (pointer) + 4 bytes on heap
}

impl HeapValue {
    /// Allocates a new integer on the heap. Out-of-memory aborts the process.
    pub fn new(value: i32) -> Self {
        HeapValue { slot: Box::new(value) }
    }

    pub fn get(&self) -> i32 {
        *self.slot
    }

    /// Frees the allocation and hands back the last value it held.
    pub fn release(self) -> i32 {
        let HeapValue { slot } = self;
        *slot
    }
}

//==============================================================================
// Part 2: The demo
//==============================================================================

/// Values observed while running the allocation demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationReport {
    pub stack: i32,
    pub heap: i32,
}

/// Runs the allocation demo and returns what it printed.
pub fn run_stack_vs_heap<W: Write>(out: &mut W) -> Result<AllocationReport> {
    writeln!(out)?;
    writeln!(out, "{}", STACK_HEADER)?;

    // Stack allocated: size known at compile time
    let a: i32 = STACK_INITIAL;
    writeln!(out, "stack a = {}", a)?;

    let b = HeapValue::new(HEAP_INITIAL);
    writeln!(out, "heap b = {}", b.get())?;

    let heap = b.release();
    Ok(AllocationReport { stack: a, heap })
}
// `a` freed here automatically; `b` was released above

pub fn stack_vs_heap_demo<W: Write>(out: &mut W) -> Result<()> {
    run_stack_vs_heap(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut buf = Vec::new();
        stack_vs_heap_demo(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\n[Stack vs Heap]\nstack a = 42\nheap b = 99\n");
    }

    #[test]
    fn test_report_values() {
        let report = run_stack_vs_heap(&mut Vec::new()).unwrap();
        assert_eq!(report, AllocationReport { stack: 42, heap: 99 });
    }

    #[test]
    fn test_release_returns_last_value() {
        let value = HeapValue::new(-7);
        assert_eq!(value.get(), -7);
        assert_eq!(value.release(), -7);
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        assert!(stack_vs_heap_demo(&mut Closed).is_err());
    }
}
