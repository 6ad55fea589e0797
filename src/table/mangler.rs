//! Encoding of an origin package into an entry name.
//!
//! When resources of several packages are merged into a single table, entries that came from
//! another package keep their origin by carrying it inside the name: `package$entry`.

/// Separator between the origin package and the entry name in a mangled name.
pub const MANGLE_SEPARATOR: char = '$';

/// Mangles and unmangles entry names of merged resource tables.
pub struct NameMangler;

impl NameMangler {
    /// Encodes `package` into `entry`, producing `package$entry`.
    #[must_use]
    pub fn mangle_entry(package: &str, entry: &str) -> String {
        let mut mangled = String::with_capacity(package.len() + entry.len() + 1);
        mangled.push_str(package);
        mangled.push(MANGLE_SEPARATOR);
        mangled.push_str(entry);
        mangled
    }

    /// Splits a mangled name into `(package, entry)`.
    ///
    /// Returns `None` if `name` is not mangled. The package ends at the first separator, the
    /// remainder (which may itself contain separators) is the entry name.
    #[must_use]
    pub fn unmangle(name: &str) -> Option<(&str, &str)> {
        name.split_once(MANGLE_SEPARATOR)
    }
}
