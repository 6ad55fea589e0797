use std::fmt;

/// A packed resource identifier.
///
/// Resource ids consist of a 32-bit value where:
/// - The high byte (bits 24-31) is the package id
/// - The next byte (bits 16-23) is the type id
/// - The low 16 bits (bits 0-15) are the entry id within that type
///
/// Ordering follows the numeric value, so ids sort package-major, then by type, then by entry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// Creates a new id from its three components
    ///
    /// # Arguments
    /// * `package_id` - The package byte, `0x7f` for applications and `0x01` for the framework
    /// * `type_id`    - The type byte, assigned per resource type within a package
    /// * `entry_id`   - The entry index within the type
    #[must_use]
    pub fn new(package_id: u8, type_id: u8, entry_id: u16) -> Self {
        ResourceId((u32::from(package_id) << 24) | (u32::from(type_id) << 16) | u32::from(entry_id))
    }

    /// Returns the raw packed value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the package id (high byte)
    #[must_use]
    pub fn package_id(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the type id (bits 16-23)
    #[must_use]
    pub fn type_id(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Extracts the entry id (low 16 bits)
    #[must_use]
    pub fn entry_id(&self) -> u16 {
        (self.0 & 0x0000_FFFF) as u16
    }

    /// Returns true if both the package and the type have been assigned.
    ///
    /// A zero package or type byte is the "unassigned" sentinel. Entry id 0 is a legitimate
    /// first entry and does not affect validity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (self.0 & 0xFF00_0000) != 0 && (self.0 & 0x00FF_0000) != 0
    }
}

impl From<u32> for ResourceId {
    fn from(value: u32) -> Self {
        ResourceId(value)
    }
}

impl From<ResourceId> for u32 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResourceId(0x{:08x}, package: 0x{:02x}, type: 0x{:02x}, entry: {})",
            self.0,
            self.package_id(),
            self.type_id(),
            self.entry_id()
        )
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
