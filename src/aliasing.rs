// Pattern 3: One value, three access paths
//
// A mutable alias, a read-only alias and a raw-pointer accessor all refer to
// the same storage. `&mut` and `&` cannot coexist over a plain `i32`, so the
// storage is a `Cell<i32>` and every view borrows the cell.
use std::cell::Cell;
use std::io::Write;
use std::marker::PhantomData;

use crate::error::Result;

pub const REFERENCE_HEADER: &str = "[const / reference / pointer]";
pub const REFERENCE_INITIAL: i32 = 10;
pub const LABEL_WIDTH: usize = 6;

//==============================================================================
// Part 1: Shared storage
//==============================================================================

#[derive(Debug, Default)]
pub struct AliasedValue {
    cell: Cell<i32>,
}

impl AliasedValue {
    pub fn new(value: i32) -> Self {
        AliasedValue { cell: Cell::new(value) }
    }

    /// The underlying value, read directly.
    pub fn get(&self) -> i32 {
        self.cell.get()
    }

    pub fn mut_alias(&self) -> MutAlias<'_> {
        MutAlias { cell: &self.cell }
    }

    pub fn const_alias(&self) -> ConstAlias<'_> {
        ConstAlias { cell: &self.cell }
    }

    pub fn indirect(&self) -> IndirectAccessor<'_> {
        IndirectAccessor {
            ptr: self.cell.as_ptr(),
            _marker: PhantomData,
        }
    }
}

//==============================================================================
// Part 2: Views
//==============================================================================

/// Reads and writes the shared value (`int&`).
#[derive(Debug, Clone, Copy)]
pub struct MutAlias<'a> {
    cell: &'a Cell<i32>,
}

impl MutAlias<'_> {
    pub fn get(&self) -> i32 {
        self.cell.get()
    }

    pub fn set(&self, value: i32) {
        self.cell.set(value);
    }

    pub fn add(&self, delta: i32) {
        self.cell.set(self.cell.get().wrapping_add(delta));
    }
}

/// Read-only view of the shared value (`const int&`). Has no way to write.
#[derive(Debug, Clone, Copy)]
pub struct ConstAlias<'a> {
    cell: &'a Cell<i32>,
}

impl ConstAlias<'_> {
    pub fn get(&self) -> i32 {
        self.cell.get()
    }
}

/// Holds the address of the shared value (`int*`).
///
/// The lifetime ties the pointer to the cell it came from, so it cannot
/// outlive the storage.
#[derive(Debug, Clone, Copy)]
pub struct IndirectAccessor<'a> {
    ptr: *mut i32,
    _marker: PhantomData<&'a Cell<i32>>,
}

impl IndirectAccessor<'_> {
    pub fn as_ptr(&self) -> *const i32 {
        self.ptr
    }

    pub fn read(&self) -> i32 {
        // SAFETY: `ptr` comes from `Cell::as_ptr` on a cell borrowed for 'a.
        // `Cell` never hands out references to its contents, so no reference
        // to the `i32` is live while we read.
        unsafe { self.ptr.read() }
    }

    pub fn write(&self, value: i32) {
        // SAFETY: same as `read`; access is single-threaded because the raw
        // pointer makes this type !Send and !Sync.
        unsafe { self.ptr.write(value) }
    }

    pub fn add(&self, delta: i32) {
        self.write(self.read().wrapping_add(delta));
    }
}

//==============================================================================
// Part 3: The demo
//==============================================================================

/// What the reference demo printed, and where the value ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasReport {
    pub underlying: i32,
    pub via_ref: i32,
    pub via_cref: i32,
    pub final_value: i32,
}

fn write_labeled<W: Write>(out: &mut W, label: &str, value: i32) -> Result<()> {
    writeln!(out, "{:<width$} = {}", label, value, width = LABEL_WIDTH)?;
    Ok(())
}

/// Runs the reference demo.
///
/// The printed lines are a snapshot taken after the increment through the
/// mutable alias; the increment through the pointer lands after it.
pub fn run_const_ref_ptr<W: Write>(out: &mut W) -> Result<AliasReport> {
    writeln!(out)?;
    writeln!(out, "{}", REFERENCE_HEADER)?;

    let x = AliasedValue::new(REFERENCE_INITIAL);

    let r = x.mut_alias();
    let cref = x.const_alias();
    let ptr = x.indirect();

    r.add(1);

    let (underlying, via_ref, via_cref) = (x.get(), r.get(), cref.get());
    write_labeled(out, "x", underlying)?;
    write_labeled(out, "ref", via_ref)?;
    write_labeled(out, "cref", via_cref)?;

    ptr.add(1);
    debug_assert_eq!(r.get(), cref.get());
    debug_assert_eq!(ptr.read(), x.get());

    Ok(AliasReport {
        underlying,
        via_ref,
        via_cref,
        final_value: x.get(),
    })
}

pub fn const_ref_ptr_demo<W: Write>(out: &mut W) -> Result<()> {
    run_const_ref_ptr(out)?;
    Ok(())
}
