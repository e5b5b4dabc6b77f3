//! Foundation types for attribute resolution.
//!
//! This module provides the fundamental types used throughout the engine:
//! - [`Namespace`] - system vs. application-package attribute scopes
//! - [`Attribute`] - one raw (namespace, name, value, owner) entry
//!
//! This module has NO dependencies on other attrset modules.

mod attr;
mod namespace;

pub use attr::Attribute;
pub use namespace::{Namespace, RES_NS_PREFIX, SYSTEM_NS_URI, SYSTEM_PACKAGE};
