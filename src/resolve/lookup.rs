//! The resource-lookup service consumed by the resolver.
//!
//! The engine never owns a resource table; it asks an injected
//! [`ResourceLookup`] to turn qualified names into numeric ids. The one
//! mutating operation — allocating an id for a `@+id/name` definition — is
//! pushed behind the service so the resolver itself stays immutable.

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::Namespace;

/// Maps qualified resource names to numeric ids.
///
/// All methods take `&self`; implementations that allocate local ids must do
/// so with interior mutability and keep the allocation idempotent per
/// `(package, name)` key, including under concurrent first-time callers.
pub trait ResourceLookup {
    /// Resolve a fully qualified `(package, type, name)` reference to its
    /// numeric id, or `None` if unknown.
    fn resolve_id(&self, package: Option<&str>, res_type: &str, name: &str) -> Option<i32>;

    /// Return a stable, non-zero id for a `@+id/name` definition, creating
    /// it on first use.
    ///
    /// Repeated calls with the same `(package, name)` must return the same
    /// id for the lifetime of the service.
    fn allocate_or_get_local_id(&self, package: Option<&str>, name: &str) -> i32;

    /// Resolve an attribute's own defining id from its declared namespace
    /// and local name.
    fn resolve_attr_id(&self, namespace: &Namespace, local_name: &str) -> Option<i32>;
}

/// Key of one registered resource: `(package, type, name)`.
type ResKey = (SmolStr, SmolStr, SmolStr);

/// First id handed out for locally defined `@+id/name` entries that have no
/// pre-registered id. Mirrors the app id space so allocated ids are visibly
/// non-zero and do not collide with small test constants.
const LOCAL_ID_BASE: i32 = 0x7f90_0000;

/// An in-memory [`ResourceLookup`] backed by a registered id table.
///
/// Resources are registered up front with [`with_resource`] /
/// [`register`]; local ids for previously unseen `@+id/name` definitions
/// are allocated on demand from a deterministic counter.
///
/// [`with_resource`]: InMemoryResources::with_resource
/// [`register`]: InMemoryResources::register
#[derive(Debug, Default)]
pub struct InMemoryResources {
    /// Registered `(package, type, name) → id`, in registration order.
    ids: IndexMap<ResKey, i32>,
    /// Ids handed out for local definitions.
    local: RwLock<LocalIds>,
}

#[derive(Debug, Default)]
struct LocalIds {
    allocated: FxHashMap<(SmolStr, SmolStr), i32>,
    next: i32,
}

impl InMemoryResources {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource id, builder-style.
    pub fn with_resource(mut self, package: &str, res_type: &str, name: &str, id: i32) -> Self {
        self.register(package, res_type, name, id);
        self
    }

    /// Register a resource id.
    pub fn register(&mut self, package: &str, res_type: &str, name: &str, id: i32) {
        self.ids.insert(
            (SmolStr::new(package), SmolStr::new(res_type), SmolStr::new(name)),
            id,
        );
    }

    /// Number of registered resources (not counting allocated local ids).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether the table has no registered resources.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl ResourceLookup for InMemoryResources {
    fn resolve_id(&self, package: Option<&str>, res_type: &str, name: &str) -> Option<i32> {
        let package = package?;
        self.ids
            .get(&(SmolStr::new(package), SmolStr::new(res_type), SmolStr::new(name)))
            .copied()
    }

    fn allocate_or_get_local_id(&self, package: Option<&str>, name: &str) -> i32 {
        // A definition like `@+id/text1` resolves to the already-compiled id
        // when the table knows one.
        if let Some(id) = self.resolve_id(package, "id", name) {
            return id;
        }

        let key = (SmolStr::new(package.unwrap_or("")), SmolStr::new(name));

        // Fast path: already allocated (read lock).
        {
            let local = self.local.read();
            if let Some(&id) = local.allocated.get(&key) {
                return id;
            }
        }

        // Slow path: allocate (write lock).
        let mut local = self.local.write();

        // Double-check after acquiring the write lock so concurrent
        // first-time callers agree on the final id.
        if let Some(&id) = local.allocated.get(&key) {
            return id;
        }

        let id = LOCAL_ID_BASE + local.next;
        local.next += 1;
        local.allocated.insert(key.clone(), id);
        debug!(package = %key.0, name = %key.1, id, "allocated local id");
        id
    }

    fn resolve_attr_id(&self, namespace: &Namespace, local_name: &str) -> Option<i32> {
        self.resolve_id(Some(namespace.package_prefix()), "attr", local_name)
    }
}
