// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # rsymbols
//!
//! Generates the Java `R` class of an Android application or library from a compiled,
//! in-memory resource table. Every resource is exposed as a named `int` constant holding its
//! packed resource id, and every styleable additionally as an `int[]` of attribute ids plus one
//! index constant per attribute.
//!
//! ## Quick Start
//!
//! ```rust
//! use rsymbols::prelude::*;
//!
//! let mut table = ResourceTable::new("com.example.app", 0x7f);
//! table.add_entry(ResourceType::String, 0x02, 0x0000, "app_name");
//! table.add_value(
//!     ResourceType::Styleable,
//!     0x03,
//!     0x0000,
//!     "Theme",
//!     Styleable::new().attr(
//!         ResourceName::new("android", ResourceType::Attr, "textColor"),
//!         ResourceId::new(0x01, 0x01, 0x0098),
//!     ),
//! );
//!
//! let generator = JavaClassGenerator::new(&table, GeneratorOptions::default());
//! let mut out = Vec::new();
//! generator.generate("com.example.app", &mut out)?;
//!
//! let source = String::from_utf8(out).unwrap();
//! assert!(source.contains("public static final int app_name = 0x7f020000;"));
//! assert!(source.contains("public static final int Theme_android_textColor = 0;"));
//! # Ok::<(), rsymbols::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`table`] - The resource table data model consumed by the generator
//! - [`generator`] - The `R` class generator, symbol rules and styleable rendering
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The library never prints. Progress and skipped entries are reported through
//! [`tracing`](https://docs.rs/tracing) events at `debug` and `trace` level; install a
//! subscriber in the host application to see them.

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use rsymbols::prelude::*;
///
/// let table = ResourceTable::new("com.example.app", 0x7f);
/// let source = JavaClassGenerator::new(&table, GeneratorOptions::default())
///     .generate_to_string("com.example.app")?;
/// assert!(source.starts_with("/* AUTO-GENERATED FILE. DO NOT MODIFY."));
/// # Ok::<(), rsymbols::Error>(())
/// ```
pub mod prelude;

/// The compiled resource table: types, entries, values and resource ids.
///
/// # Key Types
///
/// - [`table::ResourceTable`] - Package-level container of all resource types
/// - [`table::ResourceId`] - Packed `package/type/entry` identifier
/// - [`table::ResourceType`] - Resource categories and their tags
/// - [`table::Value`] - Compiled values, distinguishing styleables from everything else
/// - [`table::NameMangler`] - Origin-package encoding of merged entry names
pub mod table;

/// Java `R` class generation.
///
/// See [`generator::JavaClassGenerator`] for the generation contract, including package
/// filtering of merged tables and fail-fast handling of reserved names.
pub mod generator;

/// `rsymbols` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `rsymbols` Error type
///
/// # Examples
///
/// ```rust
/// use rsymbols::{prelude::*, Error};
///
/// let mut table = ResourceTable::new("app", 0x7f);
/// table.add_entry(ResourceType::Id, 0x01, 0x0000, "package");
///
/// let generator = JavaClassGenerator::new(&table, GeneratorOptions::default());
/// match generator.generate_to_string("app") {
///     Ok(_) => unreachable!(),
///     Err(Error::InvalidSymbol(name)) => assert_eq!(name.to_string(), "app:id/package"),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
pub use error::Error;

/// Main entry point for generating the `R` class.
///
/// See [`generator::JavaClassGenerator`].
pub use generator::{GeneratorOptions, JavaClassGenerator};

/// Main data structure consumed by the generator.
///
/// See [`table::ResourceTable`].
pub use table::ResourceTable;
