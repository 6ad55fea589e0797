//! Java `R` class generation from a compiled resource table.
//!
//! [`JavaClassGenerator`] walks a [`ResourceTable`] once and streams a Java source file to any
//! [`std::io::Write`] sink. Every resource becomes an `int` constant in a nested class named after
//! its type; styleables additionally produce an `int[]` of attribute ids plus index constants.
//!
//! # Package Filtering
//!
//! A merged table can contain entries of several packages. Entries imported from another
//! package carry their origin in a mangled name (see [`crate::table::NameMangler`]). When
//! generating for package `P`:
//! - mangled entries are emitted only if their origin package is `P`
//! - plain entries are emitted only if `P` is the table's own package
//!
//! # Examples
//!
//! ```rust
//! use rsymbols::prelude::*;
//!
//! let mut table = ResourceTable::new("com.example", 0x7f);
//! table.add_entry(ResourceType::Id, 0x01, 0x0000, "button");
//!
//! let generator = JavaClassGenerator::new(&table, GeneratorOptions::default());
//! let source = generator.generate_to_string("com.example")?;
//! assert!(source.contains("public static final int button = 0x7f010000;"));
//! # Ok::<(), rsymbols::Error>(())
//! ```

mod styleable;
mod symbols;

pub use styleable::ATTRIBS_PER_LINE;
pub use symbols::{is_valid_symbol, transform};

use std::io::Write;

use tracing::{debug, trace};

use crate::{
    table::{NameMangler, ResourceId, ResourceName, ResourceTable, ResourceTableType, ResourceType},
    Error, Result,
};

/// Indentation of the nested per-type classes.
pub(crate) const INDENT_CLASS: &str = "    ";
/// Indentation of constants inside a per-type class.
pub(crate) const INDENT_MEMBER: &str = "        ";
/// Indentation of elements inside a styleable array initializer.
pub(crate) const INDENT_ARRAY_ELEMENT: &str = "            ";

/// Banner written at the top of every generated file.
pub const HEADER_BANNER: &str = concat!(
    "/* AUTO-GENERATED FILE. DO NOT MODIFY.\n",
    " *\n",
    " * This class was automatically generated by the\n",
    " * aapt tool from the resource data it found. It\n",
    " * should not be modified by hand.\n",
    " */\n\n",
);

/// Options controlling the shape of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit the `final` modifier on `int` constants (default: true).
    ///
    /// Library projects turn this off so that their ids can be reassigned when the library is
    /// linked into an application. Styleable arrays are always `final`.
    pub use_final: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { use_final: true }
    }
}

impl GeneratorOptions {
    /// Sets whether `int` constants are declared `final`.
    ///
    /// # Arguments
    ///
    /// * `use_final` - `false` to emit mutable constants, as needed for library projects.
    ///
    /// # Returns
    ///
    /// The updated configuration.
    #[must_use]
    pub fn with_final(mut self, use_final: bool) -> Self {
        self.use_final = use_final;
        self
    }
}

/// Generates the Java `R` class for a resource table.
///
/// The generator only borrows the table and keeps no state between calls, so one generator can
/// produce the classes of several packages of a merged table in turn.
pub struct JavaClassGenerator<'a> {
    table: &'a ResourceTable,
    options: GeneratorOptions,
}

impl<'a> JavaClassGenerator<'a> {
    /// Creates a new generator for `table`.
    ///
    /// # Arguments
    /// * `table`   - The fully built resource table to render
    /// * `options` - Code shape options
    #[must_use]
    pub fn new(table: &'a ResourceTable, options: GeneratorOptions) -> Self {
        JavaClassGenerator { table, options }
    }

    /// Returns the options this generator was created with
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Writes the `R` class for `package` to `out`.
    ///
    /// The text is streamed while the table is walked. If an error occurs, everything written so
    /// far stays in `out` and no further types are processed; the caller decides whether to
    /// discard the partial output.
    ///
    /// # Arguments
    /// * `package` - The Java package of the generated class, which also selects the entries to
    ///   emit (see the module documentation)
    /// * `out`     - The sink receiving the generated source
    ///
    /// # Errors
    /// - [`Error::InvalidSymbol`] if an emitted entry is named after a reserved Java identifier
    /// - [`Error::FileError`] if writing to `out` fails
    ///
    /// # Panics
    /// Panics if the table violates its construction invariants: an entry id that packs to an
    /// invalid [`ResourceId`], a styleable entry without a styleable value, or a styleable
    /// attribute without id or name.
    pub fn generate<W: Write>(&self, package: &str, out: &mut W) -> Result<()> {
        debug!(
            package,
            table_package = self.table.package(),
            types = self.table.len(),
            "generating R class"
        );

        write!(out, "{HEADER_BANNER}")?;
        writeln!(out, "package {package};")?;
        writeln!(out)?;

        writeln!(out, "public final class R {{")?;
        for ty in self.table {
            trace!(ty = %ty.ty, entries = ty.entries.len(), "emitting type");
            writeln!(out, "{INDENT_CLASS}public static final class {} {{", ty.ty)?;
            self.generate_type(package, ty, out)?;
            writeln!(out, "{INDENT_CLASS}}}")?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    /// Generates the `R` class for `package` into a new string.
    ///
    /// # Errors
    /// Same as [`JavaClassGenerator::generate`]; the partial output is dropped.
    pub fn generate_to_string(&self, package: &str) -> Result<String> {
        let mut out = Vec::new();
        self.generate(package, &mut out)?;
        String::from_utf8(out).map_err(|e| Error::Error(e.to_string()))
    }

    /// Writes the constants of all entries of `ty` that belong to `package`.
    fn generate_type<W: Write>(
        &self,
        package: &str,
        ty: &ResourceTableType,
        out: &mut W,
    ) -> Result<()> {
        let final_modifier = self.final_modifier();

        for entry in &ty.entries {
            let id = ResourceId::new(self.table.package_id(), ty.type_id, entry.entry_id);
            assert!(id.is_valid(), "invalid id {id} for entry '{}'", entry.name);

            let name = match NameMangler::unmangle(&entry.name) {
                Some((origin, name)) => {
                    if origin != package {
                        debug!(entry = %entry.name, origin, "skipping entry of another package");
                        continue;
                    }
                    name
                }
                None => {
                    if package != self.table.package() {
                        debug!(entry = %entry.name, "skipping unmangled entry for foreign package");
                        continue;
                    }
                    entry.name.as_str()
                }
            };

            if !is_valid_symbol(name) {
                return Err(Error::InvalidSymbol(ResourceName::new(package, ty.ty, name)));
            }

            match ty.ty {
                ResourceType::Styleable => {
                    let Some(value) = entry.values.first() else {
                        panic!("styleable '{name}' has no value");
                    };
                    let Some(styleable) = value.as_styleable() else {
                        panic!("styleable '{name}' holds a non-styleable value");
                    };
                    self.write_styleable(name, styleable, out)?;
                }
                _ => {
                    writeln!(
                        out,
                        "{INDENT_MEMBER}public static{final_modifier} int {} = {id};",
                        transform(name)
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Returns the modifier inserted between `static` and `int` for index and id constants.
    pub(crate) fn final_modifier(&self) -> &'static str {
        if self.options.use_final {
            " final"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::{app_table, merged_table};

    fn generate(table: &ResourceTable, package: &str, use_final: bool) -> Result<String> {
        JavaClassGenerator::new(table, GeneratorOptions::default().with_final(use_final))
            .generate_to_string(package)
    }

    #[test]
    fn test_options_default() {
        let options = GeneratorOptions::default();
        assert!(options.use_final);
        assert!(!options.with_final(false).use_final);
    }

    #[test]
    fn test_header_and_wrapper() {
        let table = ResourceTable::new("app", 0x7f);
        let source = generate(&table, "app", true).unwrap();
        assert_eq!(
            source,
            "/* AUTO-GENERATED FILE. DO NOT MODIFY.\n\
             \x20*\n\
             \x20* This class was automatically generated by the\n\
             \x20* aapt tool from the resource data it found. It\n\
             \x20* should not be modified by hand.\n\
             \x20*/\n\
             \n\
             package app;\n\
             \n\
             public final class R {\n\
             }\n"
        );
    }

    #[test]
    fn test_single_id_final() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Id, 0x01, 0x0001, "foo");

        let source = generate(&table, "app", true).unwrap();
        assert!(source.contains(
            "    public static final class id {\n\
             \x20       public static final int foo = 0x7f010001;\n\
             \x20   }\n"
        ));
    }

    #[test]
    fn test_single_id_not_final() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Id, 0x01, 0x0001, "foo");

        let source = generate(&table, "app", false).unwrap();
        assert!(source.contains("        public static int foo = 0x7f010001;\n"));
        assert!(!source.contains("static final int foo"));
    }

    #[test]
    fn test_names_are_transformed() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::String, 0x02, 0x0000, "app.name-short");

        let source = generate(&table, "app", true).unwrap();
        assert!(source.contains("public static final int app_name_short = 0x7f020000;"));
    }

    #[test]
    fn test_types_in_table_order() {
        let source = generate(&app_table(), "com.example.app", true).unwrap();
        let attr = source.find("class attr {").unwrap();
        let string = source.find("class string {").unwrap();
        let styleable = source.find("class styleable {").unwrap();
        assert!(attr < string && string < styleable);
    }

    #[test]
    fn test_styleable_entry_dispatch() {
        let source = generate(&app_table(), "com.example.app", true).unwrap();
        assert!(source.contains("public static final int[] Theme = {"));
        assert!(source.contains("public static final int Theme_android_textColor = 0;"));
        assert!(source.contains("public static final int Theme_colorAccent = 1;"));
        assert!(!source.contains("int Theme = 0x"));
    }

    #[test]
    fn test_mangled_entries_only_for_their_package() {
        let table = merged_table();

        let own = generate(&table, "com.example.app", true).unwrap();
        assert!(own.contains("int app_icon = 0x7f040000;"));
        assert!(!own.contains("lib_icon"));

        let lib = generate(&table, "com.example.lib", true).unwrap();
        assert!(lib.contains("int lib_icon = 0x7f040001;"));
        assert!(!lib.contains("app_icon"));
        assert!(lib.contains("package com.example.lib;"));
    }

    #[test]
    fn test_unrelated_package_emits_only_containers() {
        let source = generate(&merged_table(), "org.other", true).unwrap();
        assert!(source.contains("public static final class drawable {\n    }\n"));
        assert!(!source.contains(" = 0x"));
    }

    #[test]
    fn test_reserved_name_fails() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Id, 0x01, 0x0000, "ok");
        table.add_entry(ResourceType::Id, 0x01, 0x0001, "class");

        let err = generate(&table, "app", true).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(_)));
        assert_eq!(err.to_string(), "invalid symbol name 'app:id/class'");
    }

    #[test]
    fn test_reserved_mangled_name_reports_unmangled() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Bool, 0x05, 0x0000, "lib$true");

        let err = generate(&table, "lib", true).unwrap_err();
        assert_eq!(err.to_string(), "invalid symbol name 'lib:bool/true'");

        // Skipped entries are never validated.
        assert!(generate(&table, "app", true).is_ok());
    }

    #[test]
    fn test_failure_stops_before_next_type() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Id, 0x01, 0x0000, "null");
        table.add_entry(ResourceType::String, 0x02, 0x0000, "title");

        let generator = JavaClassGenerator::new(&table, GeneratorOptions::default());
        let mut out = Vec::new();
        assert!(generator.generate("app", &mut out).is_err());

        let partial = String::from_utf8(out).unwrap();
        assert!(partial.contains("public static final class id {"));
        assert!(!partial.contains("class string"));
        assert!(!partial.ends_with("}\n}\n"));
    }

    #[test]
    #[should_panic(expected = "invalid id")]
    fn test_unassigned_type_id_panics() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Id, 0x00, 0x0000, "foo");
        let _ = generate(&table, "app", true);
    }

    #[test]
    #[should_panic(expected = "has no value")]
    fn test_styleable_without_value_panics() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Styleable, 0x06, 0x0000, "Theme");
        let _ = generate(&table, "app", true);
    }
}
