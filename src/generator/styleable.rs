//! Styleable attribute arrays and their index constants.
//!
//! A styleable is rendered as an `int[]` holding the ids of its attributes, followed by one
//! `int` constant per attribute holding that attribute's position in the array:
//!
//! ```text
//!         public static final int[] Theme = {
//!             0x7f010000, 0x7f010001
//!         };
//!         public static final int Theme_colorPrimary = 0;
//!         public static final int Theme_android_textColor = 1;
//! ```

use std::io::Write;

use tracing::trace;

use crate::{
    generator::{
        symbols::transform,
        JavaClassGenerator, INDENT_ARRAY_ELEMENT, INDENT_MEMBER,
    },
    table::{ResourceId, ResourceNameRef, Styleable},
    Result,
};

/// The number of attributes to emit per line in a styleable array.
pub const ATTRIBS_PER_LINE: usize = 4;

/// Returns the attributes of `styleable` sorted by id.
///
/// Array positions are part of the generated API, so the order must not depend on how the
/// styleable happens to store its entries. Equal ids are ordered by name.
///
/// # Panics
/// Panics if an attribute has no assigned id or no name. The table builder guarantees both.
pub(crate) fn sorted_attributes(styleable: &Styleable) -> Vec<(ResourceId, ResourceNameRef<'_>)> {
    let mut sorted: Vec<_> = styleable
        .entries
        .iter()
        .map(|attr| {
            assert!(attr.id.is_valid(), "no id set for styleable entry {}", attr.name);
            assert!(attr.name.is_valid(), "no name set for styleable entry {}", attr.id);
            (attr.id, attr.name.as_name_ref())
        })
        .collect();
    sorted.sort();
    sorted
}

impl JavaClassGenerator<'_> {
    /// Writes the id array of `styleable` followed by one index constant per attribute.
    ///
    /// # Arguments
    /// * `entry_name` - The unmangled name of the owning styleable entry
    /// * `styleable`  - The attribute group to render
    /// * `out`        - The sink receiving the text
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if writing to `out` fails.
    pub(crate) fn write_styleable<W: Write>(
        &self,
        entry_name: &str,
        styleable: &Styleable,
        out: &mut W,
    ) -> Result<()> {
        let attributes = sorted_attributes(styleable);
        let owner = transform(entry_name);
        trace!(styleable = entry_name, attributes = attributes.len(), "emitting styleable");

        write!(out, "{INDENT_MEMBER}public static final int[] {owner} = {{")?;
        let count = attributes.len();
        for (i, (id, _)) in attributes.iter().enumerate() {
            if i % ATTRIBS_PER_LINE == 0 {
                write!(out, "\n{INDENT_ARRAY_ELEMENT}")?;
            }
            write!(out, "{id}")?;
            if i != count - 1 {
                write!(out, ", ")?;
            }
        }
        writeln!(out, "\n{INDENT_MEMBER}}};")?;

        // Attributes may come from other packages, so those are prefixed with their package.
        let final_modifier = self.final_modifier();
        for (index, (_, name)) in attributes.iter().enumerate() {
            write!(out, "{INDENT_MEMBER}public static{final_modifier} int {owner}")?;
            if name.package != self.table.package() {
                write!(out, "_{}", transform(name.package))?;
            }
            writeln!(out, "_{} = {index};", transform(name.entry))?;
        }
        Ok(())
    }
}
