//! Raw attribute entries as handed over by declaration parsing.

use smol_str::SmolStr;
use std::fmt;

use super::namespace::Namespace;

/// One raw `(namespace, name, value, owning package)` tuple attached to a
/// declaration.
///
/// Entries are immutable once constructed. The owning package supplies the
/// default package used to qualify an otherwise-unqualified reference value
/// (`@string/ok` resolves against the entry's owner, not the queried
/// namespace).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    namespace: Namespace,
    name: SmolStr,
    value: SmolStr,
    owner_package: SmolStr,
}

impl Attribute {
    /// Create an attribute entry.
    pub fn new(
        namespace: Namespace,
        name: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
        owner_package: impl Into<SmolStr>,
    ) -> Self {
        Self {
            namespace,
            name: name.into(),
            value: value.into(),
            owner_package: owner_package.into(),
        }
    }

    /// Create an entry from a qualified name of the form `pkg:type/name`
    /// (e.g. `android:attr/text`).
    ///
    /// The type segment is carried by declaration files but is always
    /// `attr` for entries reaching the resolver, so it is only validated
    /// for shape, not content. Returns `None` when the string does not
    /// have both the `:` and `/` separators.
    pub fn from_qualified(
        qualified: &str,
        value: impl Into<SmolStr>,
        owner_package: impl Into<SmolStr>,
    ) -> Option<Self> {
        let (package, rest) = qualified.split_once(':')?;
        let (_res_type, name) = rest.split_once('/')?;
        Some(Self::new(
            Namespace::from_package(package),
            name,
            value,
            owner_package,
        ))
    }

    /// The namespace this attribute was declared under.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The local attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw textual value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The package owning the declaration this entry came from.
    pub fn owner_package(&self) -> &str {
        &self.owner_package
    }

    /// Check whether this entry answers a `(namespace, name)` query.
    ///
    /// Matching is exact: local names must be equal and the declared
    /// namespace must equal the query namespace, including the package
    /// string for `Named` namespaces.
    pub fn matches(&self, namespace: &Namespace, name: &str) -> bool {
        self.name == name && self.namespace == *namespace
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}=\"{}\"", self.namespace, self.name, self.value)
    }
}
