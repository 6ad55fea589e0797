//! In-memory compiled resource table.
//!
//! This module holds the data model consumed by the symbol generator: a table owns an ordered
//! list of types, each type owns an ordered list of entries, and each entry owns its compiled
//! values. The table is populated by earlier stages of the resource pipeline and is read-only
//! while symbols are generated.
//!
//! # Key Types
//! - [`ResourceTable`] - Package-level container of all resource types
//! - [`ResourceTableType`] - All entries of one resource category
//! - [`ResourceEntry`] - A single named resource and its values
//! - [`ResourceId`] - Packed `package/type/entry` identifier
//! - [`NameMangler`] - Origin-package encoding used for merged entries
mod id;
mod mangler;
mod name;
mod value;

pub use id::ResourceId;
pub use mangler::{NameMangler, MANGLE_SEPARATOR};
pub use name::{ResourceName, ResourceNameRef, ResourceType};
pub use value::{Styleable, StyleableAttr, Value};

/// A single named resource within a [`ResourceTableType`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResourceEntry {
    /// Entry index within its type, unique per type
    pub entry_id: u16,
    /// Entry name, possibly mangled with its origin package (see [`NameMangler`])
    pub name: String,
    /// Compiled values; only the first one is consulted for styleables
    pub values: Vec<Value>,
}

impl ResourceEntry {
    /// Creates a new entry without values
    ///
    /// # Arguments
    /// * `entry_id` - The entry index within its type
    /// * `name`     - The entry name, mangled if it was merged from another package
    #[must_use]
    pub fn new(entry_id: u16, name: impl Into<String>) -> Self {
        ResourceEntry {
            entry_id,
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Appends a value to this entry, returning `self` for chaining
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// All entries of a single resource category.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResourceTableType {
    /// The resource category
    pub ty: ResourceType,
    /// Type byte used when packing entry ids
    pub type_id: u8,
    /// Entries in insertion order
    pub entries: Vec<ResourceEntry>,
}

impl ResourceTableType {
    /// Creates an empty type
    #[must_use]
    pub fn new(ty: ResourceType, type_id: u8) -> Self {
        ResourceTableType {
            ty,
            type_id,
            entries: Vec::new(),
        }
    }

    /// Looks up an entry by its stored (possibly mangled) name
    #[must_use]
    pub fn find_entry(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Appends an entry and returns a mutable reference to it
    pub fn add_entry(&mut self, entry: ResourceEntry) -> &mut ResourceEntry {
        let index = self.entries.len();
        self.entries.push(entry);
        &mut self.entries[index]
    }
}

/// A compiled resource table for a single package.
///
/// Types are kept in insertion order, which is also the order of the nested classes in the
/// generated `R` class.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResourceTable {
    package: String,
    package_id: u8,
    types: Vec<ResourceTableType>,
}

impl ResourceTable {
    /// Creates an empty table
    ///
    /// # Arguments
    /// * `package`    - The package name owning this table, e.g. `com.example.app`
    /// * `package_id` - The package byte used when packing ids, `0x7f` for applications
    #[must_use]
    pub fn new(package: impl Into<String>, package_id: u8) -> Self {
        ResourceTable {
            package: package.into(),
            package_id,
            types: Vec::new(),
        }
    }

    /// Returns the package name owning this table
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the package byte of this table
    #[must_use]
    pub fn package_id(&self) -> u8 {
        self.package_id
    }

    /// Returns all types in insertion order
    #[must_use]
    pub fn types(&self) -> &[ResourceTableType] {
        &self.types
    }

    /// Get an iterator over all types in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ResourceTableType> {
        self.types.iter()
    }

    /// Returns the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if there are no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Looks up a type by category
    #[must_use]
    pub fn find_type(&self, ty: ResourceType) -> Option<&ResourceTableType> {
        self.types.iter().find(|t| t.ty == ty)
    }

    /// Returns the type for `ty`, appending an empty one with `type_id` if it does not exist yet.
    ///
    /// An already existing type keeps its original type id.
    pub fn add_type(&mut self, ty: ResourceType, type_id: u8) -> &mut ResourceTableType {
        let index = match self.types.iter().position(|t| t.ty == ty) {
            Some(index) => index,
            None => {
                self.types.push(ResourceTableType::new(ty, type_id));
                self.types.len() - 1
            }
        };
        &mut self.types[index]
    }

    /// Appends a value-less entry to the type `ty`, creating the type if needed.
    ///
    /// # Arguments
    /// * `ty`       - The resource category
    /// * `type_id`  - Type byte used if the type has to be created
    /// * `entry_id` - The entry index within the type
    /// * `name`     - The entry name, mangled if it was merged from another package
    pub fn add_entry(
        &mut self,
        ty: ResourceType,
        type_id: u8,
        entry_id: u16,
        name: impl Into<String>,
    ) -> &mut ResourceEntry {
        self.add_type(ty, type_id)
            .add_entry(ResourceEntry::new(entry_id, name))
    }

    /// Appends an entry carrying `value` to the type `ty`, creating the type if needed.
    pub fn add_value(
        &mut self,
        ty: ResourceType,
        type_id: u8,
        entry_id: u16,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut ResourceEntry {
        self.add_type(ty, type_id)
            .add_entry(ResourceEntry::new(entry_id, name).with_value(value))
    }
}

impl<'a> IntoIterator for &'a ResourceTable {
    type Item = &'a ResourceTableType;
    type IntoIter = std::slice::Iter<'a, ResourceTableType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = ResourceTable::new("com.example", 0x7f);
        assert_eq!(table.package(), "com.example");
        assert_eq!(table.package_id(), 0x7f);
        assert!(table.is_empty());
    }

    #[test]
    fn test_add_type_is_find_or_create() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_type(ResourceType::String, 0x02);
        table.add_type(ResourceType::Id, 0x01);
        let again = table.add_type(ResourceType::String, 0x09);
        assert_eq!(again.type_id, 0x02);

        assert_eq!(table.len(), 2);
        let order: Vec<_> = table.iter().map(|t| t.ty).collect();
        assert_eq!(order, vec![ResourceType::String, ResourceType::Id]);
    }

    #[test]
    fn test_add_entry_keeps_insertion_order() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_entry(ResourceType::Id, 0x01, 0x0002, "zeta");
        table.add_entry(ResourceType::Id, 0x01, 0x0000, "alpha");

        let ids = table.find_type(ResourceType::Id).unwrap();
        let names: Vec<_> = ids.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(ids.find_entry("alpha").unwrap().entry_id, 0x0000);
        assert!(ids.find_entry("beta").is_none());
    }

    #[test]
    fn test_add_value() {
        let mut table = ResourceTable::new("app", 0x7f);
        let entry = table.add_value(
            ResourceType::Color,
            0x03,
            0x0000,
            "accent",
            Value::Item("#ff0000".to_string()),
        );
        assert_eq!(entry.values.len(), 1);
        assert!(table.find_type(ResourceType::Styleable).is_none());
    }

    #[test]
    fn test_table_into_iter() {
        let mut table = ResourceTable::new("app", 0x7f);
        table.add_type(ResourceType::Layout, 0x04);
        let mut count = 0;
        for ty in &table {
            assert_eq!(ty.ty, ResourceType::Layout);
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
