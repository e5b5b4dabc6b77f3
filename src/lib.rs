//! # attrset
//!
//! Attribute-value resolution engine for namespaced resource references.
//!
//! Given the raw, textual `(name, value)` pairs attached to one UI-element
//! declaration, the engine resolves each value into a typed result — a
//! resource id, integer, float, boolean, or literal string — honoring a
//! two-level namespace model (one system namespace plus arbitrary
//! application-package namespaces) and the reference grammar
//! `@ns:type/name`, `@type/name`, `@+id/name`, `@null`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → AttributeSet resolver + ResourceLookup service
//!   ↓
//! reference → reference-grammar parser
//!   ↓
//! base      → primitives (Namespace, Attribute)
//! ```
//!
//! The engine owns no resource table: a [`resolve::ResourceLookup`] service
//! is injected at construction and consulted only when a reference must
//! become a numeric id. [`resolve::InMemoryResources`] is a ready-made
//! table-backed service for tests and simple hosts.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use attrset::base::{Attribute, SYSTEM_NS_URI};
//! use attrset::resolve::{AttributeSet, InMemoryResources};
//!
//! let resources = Arc::new(
//!     InMemoryResources::new().with_resource("android", "string", "ok", 0x0104_0013),
//! );
//! let attrs = AttributeSet::new(
//!     "com.example.app",
//!     vec![
//!         Attribute::from_qualified("android:attr/text", "@android:string/ok", "com.example.app")
//!             .unwrap(),
//!     ],
//!     resources,
//! );
//! assert_eq!(attrs.attribute_resource_value(SYSTEM_NS_URI, "text", 0), 0x0104_0013);
//! ```

/// Foundation types: Namespace, Attribute
pub mod base;

/// The resource-reference grammar
pub mod reference;

/// Attribute resolution against a lookup service
pub mod resolve;

// Re-export commonly needed items
pub use base::{Attribute, Namespace};
pub use reference::ParsedReference;
pub use resolve::{AttributeSet, InMemoryResources, ResourceLookup, ValueError};
