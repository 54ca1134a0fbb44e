//! Descriptor cache
//!
//! Descriptors are built once per target type and reused for every record
//! bound afterwards. The cache is an explicit value so tests and embedders
//! can hold an isolated one; [`DescriptorCache::global`] is the shared
//! process-wide instance used by the top-level functions.

use crate::descriptor::{ClassDescriptor, Flattenable};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

type Entry = Arc<dyn Any + Send + Sync>;

/// Process-wide or caller-owned cache of class descriptors, keyed by type
/// identity. Entries are created on first use and never invalidated; target
/// types are static for the process lifetime.
#[derive(Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<TypeId, Entry, ahash::RandomState>>,
}

impl DescriptorCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared process-wide cache.
    pub fn global() -> &'static DescriptorCache {
        static GLOBAL: OnceLock<DescriptorCache> = OnceLock::new();
        GLOBAL.get_or_init(DescriptorCache::new)
    }

    /// The descriptor for `T`, building and caching it on first use.
    /// Concurrent first use is safe: the check-then-insert sequence runs
    /// under the write lock, so exactly one descriptor per type survives.
    pub fn descriptor<T: Flattenable>(&self) -> Arc<ClassDescriptor<T>> {
        let key = TypeId::of::<T>();

        if let Some(entry) = self
            .entries
            .read()
            .expect("descriptor cache lock poisoned")
            .get(&key)
        {
            return downcast::<T>(entry.clone());
        }

        let mut entries = self
            .entries
            .write()
            .expect("descriptor cache lock poisoned");
        let entry = entries
            .entry(key)
            .or_insert_with(|| Arc::new(T::descriptor()) as Entry);
        downcast::<T>(entry.clone())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("descriptor cache lock poisoned")
            .len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn downcast<T: Flattenable>(entry: Entry) -> Arc<ClassDescriptor<T>> {
    entry
        .downcast()
        .unwrap_or_else(|_| unreachable!("cache entries are keyed by TypeId"))
}
