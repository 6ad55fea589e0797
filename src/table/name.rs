use std::fmt;

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The category of a resource, e.g. `string`, `id` or `styleable`.
///
/// The string form of each variant is the canonical type tag used in resource names
/// (`app:string/title`) and as the nested class name inside the generated `R` class.
/// Both directions are derived: [`ToString`] / [`AsRef<str>`] produce the tag, and
/// [`std::str::FromStr`] parses it back.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, AsRefStr, EnumString,
    EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceType {
    /// Tween animations
    Anim,
    /// Property animations
    Animator,
    /// Typed arrays
    Array,
    /// Attribute definitions
    Attr,
    /// Attributes that are not exported to the public `R` class
    #[strum(serialize = "^attr-private")]
    AttrPrivate,
    /// Boolean values
    Bool,
    /// Colors and color state lists
    Color,
    /// Dimensions
    Dimen,
    /// Drawables
    Drawable,
    /// Fractions
    Fraction,
    /// Plain identifiers
    Id,
    /// Integers
    Integer,
    /// Integer arrays
    #[strum(serialize = "integer-array")]
    IntegerArray,
    /// Interpolators
    Interpolator,
    /// Layouts
    Layout,
    /// Menus
    Menu,
    /// Launcher icons
    Mipmap,
    /// Quantity strings
    Plurals,
    /// Raw files
    Raw,
    /// Strings
    String,
    /// Styles and themes
    Style,
    /// Declare-styleable attribute groups
    Styleable,
    /// Transitions
    Transition,
    /// Arbitrary XML files
    Xml,
}

/// A fully qualified, owned resource name: `package:type/entry`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ResourceName {
    /// Package the resource belongs to
    pub package: String,
    /// Resource category
    pub ty: ResourceType,
    /// Entry name within the type
    pub entry: String,
}

impl ResourceName {
    /// Creates a new resource name
    ///
    /// # Arguments
    /// * `package` - The owning package, may be empty for package-relative references
    /// * `ty`      - The resource category
    /// * `entry`   - The entry name
    #[must_use]
    pub fn new(package: impl Into<String>, ty: ResourceType, entry: impl Into<String>) -> Self {
        ResourceName {
            package: package.into(),
            ty,
            entry: entry.into(),
        }
    }

    /// Borrows this name as a [`ResourceNameRef`]
    #[must_use]
    pub fn as_name_ref(&self) -> ResourceNameRef<'_> {
        ResourceNameRef {
            package: &self.package,
            ty: self.ty,
            entry: &self.entry,
        }
    }

    /// Returns true if both the package and the entry name are set
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.as_name_ref().is_valid()
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_name_ref(), f)
    }
}

/// A borrowed view of a [`ResourceName`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ResourceNameRef<'a> {
    /// Package the resource belongs to
    pub package: &'a str,
    /// Resource category
    pub ty: ResourceType,
    /// Entry name within the type
    pub entry: &'a str,
}

impl<'a> ResourceNameRef<'a> {
    /// Creates a new borrowed resource name
    #[must_use]
    pub fn new(package: &'a str, ty: ResourceType, entry: &'a str) -> Self {
        ResourceNameRef { package, ty, entry }
    }

    /// Returns true if both the package and the entry name are set
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.package.is_empty() && !self.entry.is_empty()
    }

    /// Copies this view into an owned [`ResourceName`]
    #[must_use]
    pub fn to_resource_name(&self) -> ResourceName {
        ResourceName::new(self.package, self.ty, self.entry)
    }
}

impl fmt::Display for ResourceNameRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}:", self.package)?;
        }
        write!(f, "{}/{}", self.ty, self.entry)
    }
}
