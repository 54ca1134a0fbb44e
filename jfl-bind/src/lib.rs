//! JFL Bind - Declarative field binding
//!
//! This crate maps flattened JSON records into target structures:
//!
//! - Per-field path declarations with alternative paths and transforms
//! - Class descriptors built once per target type and cached
//! - High-level `flatten_to_objects` / `flatten_into_object` APIs
//!
//! Descriptors are explicit values built through [`ClassDescriptor::builder`]
//! and supplied via the [`Flattenable`] trait; no runtime reflection is
//! involved.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod descriptor;

// Re-export commonly used types
pub use cache::DescriptorCache;
pub use descriptor::{ClassDescriptor, ClassDescriptorBuilder, Flattenable, Transformed};
pub use jfl_path::{FlError, Path, Result};

use serde_json::Value;

/// Unwrap `root` against `unwrap_path` and bind each emission point into a
/// fresh `T`, in document order. Descriptors come from the process-wide
/// cache.
pub fn flatten_to_objects<T: Flattenable + Default>(
    root: &Value,
    unwrap_path: &str,
) -> Result<Vec<T>> {
    flatten_to_objects_in(DescriptorCache::global(), root, unwrap_path)
}

/// [`flatten_to_objects`] with a caller-supplied descriptor cache.
pub fn flatten_to_objects_in<T: Flattenable + Default>(
    cache: &DescriptorCache,
    root: &Value,
    unwrap_path: &str,
) -> Result<Vec<T>> {
    let descriptor = cache.descriptor::<T>();
    jfl_core::flatten_to_proxies(root, unwrap_path)?
        .iter()
        .map(|proxy| descriptor.bind(proxy))
        .collect()
}

/// Bind the whole document (no unwrapping) into an existing instance.
/// Requires exactly one emission point; anything else is
/// [`FlError::InvalidEmissionCount`]. Fields whose paths resolve to nothing
/// keep their current values.
pub fn flatten_into_object<T: Flattenable>(root: &Value, target: &mut T) -> Result<()> {
    flatten_into_object_in(DescriptorCache::global(), root, target)
}

/// [`flatten_into_object`] with a caller-supplied descriptor cache.
pub fn flatten_into_object_in<T: Flattenable>(
    cache: &DescriptorCache,
    root: &Value,
    target: &mut T,
) -> Result<()> {
    let descriptor = cache.descriptor::<T>();
    let proxies = jfl_core::flatten_to_proxies(root, "")?;
    match proxies.as_slice() {
        [proxy] => descriptor.bind_into(proxy, target),
        _ => Err(FlError::InvalidEmissionCount(proxies.len())),
    }
}
