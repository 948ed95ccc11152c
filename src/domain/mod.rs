//! Domain extraction from email addresses.
//!
//! The extracted domain is used verbatim as the membership-cache key: no
//! trimming or case-folding is applied.

use crate::error_handling::RowError;

/// One input record: the CSV fields in column order.
pub type Row = Vec<String>;

/// Extracts the domain part of an email address.
///
/// The domain is the `@`-separated segment right after the first `@`; anything
/// after a second `@` is not part of it.
///
/// # Errors
///
/// Returns `RowError::MalformedEmail` if the address has no `@` or the segment
/// after it is empty.
pub fn extract_domain(email: &str) -> Result<&str, RowError> {
    match email.split('@').nth(1) {
        Some(domain) if !domain.is_empty() => Ok(domain),
        _ => Err(RowError::MalformedEmail),
    }
}

/// Returns the email field of a row and its domain.
///
/// # Errors
///
/// Returns `RowError::MissingEmailField` if the row is shorter than
/// `email_column + 1`, or `RowError::MalformedEmail` if no domain can be
/// extracted.
pub fn row_domain(row: &[String], email_column: usize) -> Result<&str, RowError> {
    let email = row.get(email_column).ok_or(RowError::MissingEmailField {
        index: email_column,
        len: row.len(),
    })?;
    extract_domain(email)
}
