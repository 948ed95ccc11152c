//! Domain list output (deny-list and ignore-list).

use std::io::Write;

use anyhow::{Context, Result};

/// Writes one domain per line and flushes.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
pub fn write_domain_list<W: Write>(writer: &mut W, domains: &[String]) -> Result<()> {
    for domain in domains {
        writeln!(writer, "{domain}").context("Failed to write domain list entry")?;
    }
    writer.flush().context("Failed to flush domain list")?;
    Ok(())
}
