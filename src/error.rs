use thiserror::Error;

use crate::table::ResourceName;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Generation is fail-fast: the first error stops all further processing and is handed back to
/// the caller unchanged. Whatever text was already written to the output sink stays there; it is
/// up to the caller to discard it.
///
/// # Error Categories
///
/// ## Symbol Errors
/// - [`Error::InvalidSymbol`] - A resource name collides with a reserved Java identifier
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - The output sink rejected a write
/// - [`Error::Error`] - Miscellaneous failures
///
/// Broken table invariants (unassigned ids, styleables without a value, attributes without a
/// name) are not represented here. They indicate a bug in whatever built the table and panic.
///
/// # Examples
///
/// ```rust
/// use rsymbols::prelude::*;
///
/// let mut table = ResourceTable::new("app", 0x7f);
/// table.add_entry(ResourceType::Id, 0x01, 0x0000, "class");
///
/// match JavaClassGenerator::new(&table, GeneratorOptions::default()).generate_to_string("app") {
///     Ok(source) => println!("{source}"),
///     Err(Error::InvalidSymbol(name)) => eprintln!("cannot emit {name}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A resolved resource name is a reserved Java identifier or literal.
    ///
    /// The associated [`ResourceName`] carries the package that was being generated, the
    /// resource type and the unmangled entry name, e.g. `app:id/class`.
    #[error("invalid symbol name '{0}'")]
    InvalidSymbol(ResourceName),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors raised by the output sink while the class is being written.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
