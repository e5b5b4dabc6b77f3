//! Attribute resolution — turning raw entries into typed values.
//!
//! [`AttributeSet`] owns the ordered entries of one declaration and exposes
//! the typed accessors. Each by-name accessor decodes the query namespace,
//! picks the first matching entry in insertion order, classifies its raw
//! value through the reference grammar, and maps the result to the requested
//! type, consulting the injected [`ResourceLookup`] only when a reference
//! must become a numeric id.
//!
//! Two distinct fallback outcomes are kept deliberately separate:
//!
//! - **absent attribute** (or a `@null` value) → the caller-supplied default
//! - **present reference the lookup service does not know** → `0`
//!
//! Collapsing these is the classic bug in this kind of engine.

mod lookup;

use std::sync::Arc;

use smol_str::SmolStr;
use thiserror::Error;
use tracing::trace;

use crate::base::{Attribute, Namespace};
use crate::reference::{self, ParsedReference};

pub use lookup::{InMemoryResources, ResourceLookup};

/// A present entry whose raw value cannot be parsed as the requested scalar
/// type.
///
/// Defaults are reserved for *absent* attributes; a malformed value on an
/// entry that is present is surfaced instead of silently defaulted.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValueError {
    #[error("attribute `{name}` holds `{value}`, which is not a boolean")]
    MalformedBool { name: SmolStr, value: SmolStr },
    #[error("attribute `{name}` holds `{value}`, which is not an integer")]
    MalformedInt { name: SmolStr, value: SmolStr },
    #[error("attribute `{name}` holds `{value}`, which is not a float")]
    MalformedFloat { name: SmolStr, value: SmolStr },
}

/// The resolved attribute collection of one declaration.
///
/// Immutable after construction; safe to share across threads for read-only
/// access provided the lookup service is internally synchronized (the
/// engine performs no locking of its own).
///
/// Index-based accessors (`*_at`, [`attribute_name`], ...) treat an
/// out-of-range index as a caller contract violation and panic, matching
/// slice indexing. By-name accessors return the caller's default when no
/// entry matches.
///
/// [`attribute_name`]: AttributeSet::attribute_name
pub struct AttributeSet {
    context_package: SmolStr,
    attrs: Vec<Attribute>,
    lookup: Arc<dyn ResourceLookup + Send + Sync>,
}

impl AttributeSet {
    /// Build an attribute set from the raw entries of one declaration.
    ///
    /// `context_package` is the package of the declaring context; it backs
    /// entries whose own owning package is empty. Entry order is preserved
    /// and significant: by-name queries return the first match.
    pub fn new(
        context_package: impl Into<SmolStr>,
        attrs: Vec<Attribute>,
        lookup: Arc<dyn ResourceLookup + Send + Sync>,
    ) -> Self {
        Self {
            context_package: context_package.into(),
            attrs,
            lookup,
        }
    }

    /// Number of entries.
    pub fn attribute_count(&self) -> usize {
        self.attrs.len()
    }

    /// Check whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The raw entry at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_at(&self, index: usize) -> &Attribute {
        &self.attrs[index]
    }

    // ========================================================================
    // STRING ACCESSORS
    // ========================================================================

    /// The value of the first entry matching `(namespace_uri, name)`, with
    /// references expanded to their fully qualified `@pkg:type/name` form.
    ///
    /// Returns `None` when no entry matches or the value is `@null`;
    /// literals come back unchanged.
    pub fn attribute_value(&self, namespace_uri: &str, name: &str) -> Option<String> {
        self.find(namespace_uri, name)
            .and_then(|attr| self.expand_value(attr))
    }

    /// Index-based form of [`attribute_value`](AttributeSet::attribute_value).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_value_at(&self, index: usize) -> Option<String> {
        self.expand_value(&self.attrs[index])
    }

    /// The fully qualified `package:name` of the entry at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_name(&self, index: usize) -> String {
        let attr = &self.attrs[index];
        format!("{}:{}", attr.namespace().package_prefix(), attr.name())
    }

    // ========================================================================
    // RESOURCE-ID ACCESSORS
    // ========================================================================

    /// Resolve the value of the first matching entry to a numeric resource
    /// id.
    ///
    /// Absent entries and `@null` (and non-reference literals) yield
    /// `default`; a present reference the lookup service does not know
    /// yields `0`, which is a distinct outcome from "attribute absent".
    /// `@+id/name` definitions allocate (or fetch) a stable local id.
    pub fn attribute_resource_value(&self, namespace_uri: &str, name: &str, default: i32) -> i32 {
        match self.find(namespace_uri, name) {
            Some(attr) => self.resolve_reference(attr, default),
            None => default,
        }
    }

    /// Index-based form of
    /// [`attribute_resource_value`](AttributeSet::attribute_resource_value).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_resource_value_at(&self, index: usize, default: i32) -> i32 {
        self.resolve_reference(&self.attrs[index], default)
    }

    /// The defining resource id of the attribute at `index` — the id of the
    /// entry's own `(namespace, attr, name)` triple, not of its value.
    /// Returns `0` when the lookup service does not know the attribute.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_name_resource(&self, index: usize) -> i32 {
        let attr = &self.attrs[index];
        self.lookup
            .resolve_attr_id(attr.namespace(), attr.name())
            .unwrap_or(0)
    }

    /// The resolved id of the `style` entry, if any.
    ///
    /// The style attribute is namespace-agnostic: the first entry whose
    /// local name is `style` is used regardless of its namespace. Returns
    /// `0` when there is no style entry, the value is not a resource
    /// reference, or the referenced style is unknown. Never fails.
    pub fn style_attribute(&self) -> i32 {
        let Some(attr) = self.attrs.iter().find(|a| a.name() == "style") else {
            return 0;
        };
        match reference::parse(attr.value()) {
            ParsedReference::Resource {
                package,
                res_type,
                name,
            } => {
                let package = package.as_deref().unwrap_or_else(|| self.owner_of(attr));
                self.lookup
                    .resolve_id(Some(package), &res_type, &name)
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    // ========================================================================
    // SCALAR ACCESSORS
    // ========================================================================

    /// Parse the first matching entry's value as a boolean
    /// (case-insensitive `true`/`false`).
    ///
    /// Returns `default` when no entry matches; a present entry with any
    /// other value is a [`ValueError::MalformedBool`].
    pub fn attribute_bool_value(
        &self,
        namespace_uri: &str,
        name: &str,
        default: bool,
    ) -> Result<bool, ValueError> {
        match self.find(namespace_uri, name) {
            Some(attr) => parse_bool(attr),
            None => Ok(default),
        }
    }

    /// Index-based form of
    /// [`attribute_bool_value`](AttributeSet::attribute_bool_value).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_bool_value_at(&self, index: usize) -> Result<bool, ValueError> {
        parse_bool(&self.attrs[index])
    }

    /// Parse the first matching entry's value as an integer, accepting an
    /// optional sign and a `0x`/`0X` hexadecimal prefix.
    ///
    /// Returns `default` when no entry matches; a present entry with a
    /// malformed value is a [`ValueError::MalformedInt`].
    pub fn attribute_int_value(
        &self,
        namespace_uri: &str,
        name: &str,
        default: i32,
    ) -> Result<i32, ValueError> {
        match self.find(namespace_uri, name) {
            Some(attr) => parse_int(attr),
            None => Ok(default),
        }
    }

    /// Index-based form of
    /// [`attribute_int_value`](AttributeSet::attribute_int_value).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_int_value_at(&self, index: usize) -> Result<i32, ValueError> {
        parse_int(&self.attrs[index])
    }

    /// Parse the first matching entry's value as a float.
    ///
    /// Returns `default` when no entry matches; a present entry with a
    /// malformed value is a [`ValueError::MalformedFloat`].
    pub fn attribute_float_value(
        &self,
        namespace_uri: &str,
        name: &str,
        default: f32,
    ) -> Result<f32, ValueError> {
        match self.find(namespace_uri, name) {
            Some(attr) => parse_float(attr),
            None => Ok(default),
        }
    }

    /// Index-based form of
    /// [`attribute_float_value`](AttributeSet::attribute_float_value).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn attribute_float_value_at(&self, index: usize) -> Result<f32, ValueError> {
        parse_float(&self.attrs[index])
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// First entry matching the decoded query, in insertion order.
    fn find(&self, namespace_uri: &str, name: &str) -> Option<&Attribute> {
        let query = Namespace::from_uri(namespace_uri);
        let found = self.attrs.iter().find(|a| a.matches(&query, name));
        if found.is_none() {
            trace!(namespace = %query, name, "attribute not present");
        }
        found
    }

    /// The package that qualifies an unpackaged reference in this entry.
    fn owner_of<'a>(&'a self, attr: &'a Attribute) -> &'a str {
        if attr.owner_package().is_empty() {
            &self.context_package
        } else {
            attr.owner_package()
        }
    }

    /// Expand an entry's value to its canonical string form.
    fn expand_value(&self, attr: &Attribute) -> Option<String> {
        match reference::parse(attr.value()) {
            ParsedReference::Null => None,
            ParsedReference::Literal(text) => Some(text.to_string()),
            ParsedReference::IdDefinition { package, name } => {
                let package = package.as_deref().unwrap_or_else(|| self.owner_of(attr));
                Some(format!("@{}:id/{}", package, name))
            }
            ParsedReference::Resource {
                package,
                res_type,
                name,
            } => {
                let package = package.as_deref().unwrap_or_else(|| self.owner_of(attr));
                Some(format!("@{}:{}/{}", package, res_type, name))
            }
        }
    }

    /// Resolve an entry's value to a numeric id.
    fn resolve_reference(&self, attr: &Attribute, default: i32) -> i32 {
        match reference::parse(attr.value()) {
            ParsedReference::Null | ParsedReference::Literal(_) => default,
            ParsedReference::IdDefinition { package, name } => {
                let package = package.as_deref().unwrap_or_else(|| self.owner_of(attr));
                self.lookup.allocate_or_get_local_id(Some(package), &name)
            }
            ParsedReference::Resource {
                package,
                res_type,
                name,
            } => {
                // Present but unknown references degrade to 0, not the
                // caller's default.
                let package = package.as_deref().unwrap_or_else(|| self.owner_of(attr));
                self.lookup
                    .resolve_id(Some(package), &res_type, &name)
                    .unwrap_or(0)
            }
        }
    }
}

fn parse_bool(attr: &Attribute) -> Result<bool, ValueError> {
    let value = attr.value().trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValueError::MalformedBool {
            name: attr.name().into(),
            value: attr.value().into(),
        })
    }
}

fn parse_int(attr: &Attribute) -> Result<i32, ValueError> {
    int_from_str(attr.value().trim()).ok_or_else(|| ValueError::MalformedInt {
        name: attr.name().into(),
        value: attr.value().into(),
    })
}

/// Integer literal grammar: optional sign, then `0x`/`0X` hex or decimal.
fn int_from_str(value: &str) -> Option<i32> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn parse_float(attr: &Attribute) -> Result<f32, ValueError> {
    attr.value()
        .trim()
        .parse::<f32>()
        .map_err(|_| ValueError::MalformedFloat {
            name: attr.name().into(),
            value: attr.value().into(),
        })
}
