//! # rsymbols Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! rsymbols library. Import this module to get quick access to everything needed to build a
//! resource table and generate its `R` class.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all rsymbols operations
pub use crate::Error;

/// The result type used throughout rsymbols
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The `R` class generator and its options
pub use crate::generator::{GeneratorOptions, JavaClassGenerator};

/// Java symbol rules applied to generated constant names
pub use crate::generator::{is_valid_symbol, transform};

// ================================================================================================
// Resource Table
// ================================================================================================

/// Table containers
pub use crate::table::{ResourceEntry, ResourceTable, ResourceTableType};

/// Identifiers and names
pub use crate::table::{ResourceId, ResourceName, ResourceNameRef, ResourceType};

/// Compiled values
pub use crate::table::{Styleable, StyleableAttr, Value};

/// Merged-name handling
pub use crate::table::NameMangler;
