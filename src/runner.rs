//! Populate-Print-Compute routine
//!
//! Fills the fixed array with 0..9 in ascending order, printing each
//! assignment, reprints the last element, then prints the offset sum. Output
//! goes to any `io::Write` so the binary can pass stdout and tests can pass a
//! buffer.

use anyhow::Result;
use std::io::Write;

use crate::fixed_array::{add_last_plus_offset, FixedArray, ARRAY_LEN};

/// Run the populate/print/compute sequence against `out`
///
/// Emits exactly `ARRAY_LEN` populate lines, one reprint of the last element,
/// and one sum line. Labels match the reference output byte for byte.
pub fn run<W: Write>(out: &mut W, offset: i32) -> Result<()> {
    let mut array = FixedArray::new();

    for i in 0..ARRAY_LEN {
        array.set(i, i as i32)?;
        tracing::debug!(index = i, "populated element");
        writeln!(out, "a[i]: {}", array.get(i)?)?;
    }

    writeln!(out, "a[9]: {}", array.last())?;

    let sum = add_last_plus_offset(&array, offset);
    writeln!(out, "c: {}", sum)?;

    out.flush()?;
    Ok(())
}
