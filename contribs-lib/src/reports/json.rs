use crate::Result;
use core::fmt::Write;
use serde::Serialize;

/// Write `value` as pretty-printed JSON.
pub fn generate<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
