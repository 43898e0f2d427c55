//! Confirmation notice, unrelated to the mutation flow.

use std::io::{self, Write};

/// Literal confirmation text, spelling included.
pub const CONFIRMATION_MESSAGE: &str = "Documents Successfuly Connected!";

/// Presents the confirmation message on `out`.
pub fn my_alert<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CONFIRMATION_MESSAGE}")?;
    out.flush()
}
