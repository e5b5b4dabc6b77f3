//! Attribute namespaces and their canonical URI forms.

use smol_str::SmolStr;
use std::fmt;

/// The package prefix reserved for the system namespace.
pub const SYSTEM_PACKAGE: &str = "android";

/// Common prefix of all namespace URIs.
pub const RES_NS_PREFIX: &str = "http://schemas.android.com/apk/res/";

/// Canonical URI of the system namespace.
pub const SYSTEM_NS_URI: &str = "http://schemas.android.com/apk/res/android";

/// The scope under which an attribute name is declared.
///
/// Attributes live either in the platform's `System` namespace or in a
/// `Named` application-package namespace. Two `Named` namespaces are equal
/// only when their package strings are identical; cross-package queries
/// never match.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Namespace {
    /// The platform symbol space (`android`).
    System,
    /// An application package, identified by its package name.
    Named(SmolStr),
}

impl Namespace {
    /// Build a namespace from a bare package name.
    ///
    /// `"android"` maps to [`Namespace::System`]; anything else becomes
    /// [`Namespace::Named`].
    pub fn from_package(package: &str) -> Self {
        if package == SYSTEM_PACKAGE {
            Namespace::System
        } else {
            Namespace::Named(SmolStr::new(package))
        }
    }

    /// Decode a namespace from its URI form.
    ///
    /// Accepts both the full `http://schemas.android.com/apk/res/<pkg>` form
    /// and a bare package name, so query strings and declaration packages go
    /// through the same path.
    pub fn from_uri(uri: &str) -> Self {
        let package = uri.strip_prefix(RES_NS_PREFIX).unwrap_or(uri);
        Self::from_package(package)
    }

    /// The package prefix used when rendering qualified attribute names.
    ///
    /// `"android"` for the system namespace, the package name otherwise.
    pub fn package_prefix(&self) -> &str {
        match self {
            Namespace::System => SYSTEM_PACKAGE,
            Namespace::Named(package) => package,
        }
    }

    /// The canonical URI form of this namespace.
    pub fn uri(&self) -> String {
        format!("{}{}", RES_NS_PREFIX, self.package_prefix())
    }

    /// Check whether this is the system namespace.
    pub fn is_system(&self) -> bool {
        matches!(self, Namespace::System)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_prefix())
    }
}
