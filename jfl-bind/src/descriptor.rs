//! Class descriptors and field mappings
//!
//! A [`ClassDescriptor`] is the declarative metadata for one target type:
//! an ordered list of field mappings, each naming a primary path, zero or
//! more alternative paths, and how the resolved value becomes the field's
//! native value. Conversion goes through `serde_json::from_value`, so
//! scalar coercion and nested structural deserialization both follow serde
//! semantics.

use jfl_core::Proxy;
use jfl_path::{FlError, Path, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type BindFn<T> = Box<dyn Fn(&mut T, &Value) -> std::result::Result<(), BoxError> + Send + Sync>;

/// Outcome of a field transform: either a JSON value still to be converted
/// to the field's native type, or the native value itself, assigned as-is.
pub enum Transformed<V> {
    /// Convert this value to the field type before assigning.
    Json(Value),
    /// Assign this value directly.
    Native(V),
}

/// A target type that declares how its fields bind to record paths.
pub trait Flattenable: Sized + 'static {
    /// Build the descriptor for this type. Called once per process per
    /// type; the result is cached by [`crate::DescriptorCache`].
    fn descriptor() -> ClassDescriptor<Self>;
}

/// One declared field: its name (for error reporting), the paths tried in
/// order, and the bind step applying transform, conversion and assignment.
struct FieldMapping<T> {
    name: &'static str,
    paths: Vec<Path>,
    bind: BindFn<T>,
}

impl<T> FieldMapping<T> {
    /// First path that resolves wins: primary, then alternatives in order.
    fn resolve<'a>(&self, proxy: &Proxy<'a>) -> Option<&'a Value> {
        self.paths.iter().find_map(|path| proxy.get(path))
    }
}

/// The cached set of field mappings for one target type.
pub struct ClassDescriptor<T> {
    fields: Vec<FieldMapping<T>>,
}

impl<T> ClassDescriptor<T> {
    /// Start declaring fields for `T`.
    pub fn builder() -> ClassDescriptorBuilder<T> {
        ClassDescriptorBuilder { fields: Vec::new() }
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Bind one record into an existing instance. Fields whose paths all
    /// resolve to nothing are left untouched. The first conversion or
    /// transform failure aborts this record with
    /// [`FlError::FieldBinding`] naming the field.
    pub fn bind_into(&self, proxy: &Proxy<'_>, target: &mut T) -> Result<()> {
        for field in &self.fields {
            let Some(value) = field.resolve(proxy) else {
                continue;
            };
            (field.bind)(target, value).map_err(|source| FlError::FieldBinding {
                field: field.name.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Bind one record into a fresh `T`.
    pub fn bind(&self, proxy: &Proxy<'_>) -> Result<T>
    where
        T: Default,
    {
        let mut target = T::default();
        self.bind_into(proxy, &mut target)?;
        Ok(target)
    }
}

/// Builder for [`ClassDescriptor`]. Fields bind in declaration order.
pub struct ClassDescriptorBuilder<T> {
    fields: Vec<FieldMapping<T>>,
}

impl<T: 'static> ClassDescriptorBuilder<T> {
    /// Declare a field. `paths` holds the primary path first, then any
    /// alternatives; the resolved value is serde-converted to `V` and
    /// passed to `assign`.
    pub fn field<V>(
        mut self,
        name: &'static str,
        paths: &[&str],
        assign: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self
    where
        V: DeserializeOwned,
    {
        let bind: BindFn<T> = Box::new(move |target, value| {
            let converted: V = serde_json::from_value(value.clone())?;
            assign(target, converted);
            Ok(())
        });
        self.fields.push(FieldMapping {
            name,
            paths: parse_paths(paths),
            bind,
        });
        self
    }

    /// Declare a field with a value transform applied before conversion.
    /// A [`Transformed::Json`] result is serde-converted to `V`; a
    /// [`Transformed::Native`] result is assigned as-is.
    pub fn field_with<V>(
        mut self,
        name: &'static str,
        paths: &[&str],
        transform: impl Fn(&Value) -> std::result::Result<Transformed<V>, BoxError>
            + Send
            + Sync
            + 'static,
        assign: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self
    where
        V: DeserializeOwned,
    {
        let bind: BindFn<T> = Box::new(move |target, value| {
            match transform(value)? {
                Transformed::Json(json) => assign(target, serde_json::from_value(json)?),
                Transformed::Native(native) => assign(target, native),
            }
            Ok(())
        });
        self.fields.push(FieldMapping {
            name,
            paths: parse_paths(paths),
            bind,
        });
        self
    }

    /// Finish the descriptor.
    pub fn build(self) -> ClassDescriptor<T> {
        ClassDescriptor {
            fields: self.fields,
        }
    }
}

fn parse_paths(paths: &[&str]) -> Vec<Path> {
    paths.iter().map(|p| Path::parse(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Record {
        name: String,
        n1: i32,
    }

    fn descriptor() -> ClassDescriptor<Record> {
        ClassDescriptor::builder()
            .field("name", &["name"], |r: &mut Record, v: String| r.name = v)
            .field("n1", &["objs/n1"], |r: &mut Record, v: i32| r.n1 = v)
            .build()
    }

    fn proxy_for(doc: &Value) -> Proxy<'_> {
        let mut proxies = jfl_core::flatten_to_proxies(doc, "objs").unwrap();
        proxies.remove(0)
    }

    #[test]
    fn test_bind_assigns_declared_fields() {
        let doc = json!({"name": "value", "objs": [{"n1": 7}]});
        assert_eq!(descriptor().field_count(), 2);
        let record = descriptor().bind(&proxy_for(&doc)).unwrap();
        assert_eq!(record.name, "value");
        assert_eq!(record.n1, 7);
    }

    #[test]
    fn test_absent_paths_keep_defaults() {
        let doc = json!({"objs": [{"other": 1}]});
        let record = descriptor().bind(&proxy_for(&doc)).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.n1, 0);
    }

    #[test]
    fn test_conversion_failure_names_the_field() {
        let doc = json!({"name": "value", "objs": [{"n1": "not a number"}]});
        match descriptor().bind(&proxy_for(&doc)) {
            Err(FlError::FieldBinding { field, .. }) => assert_eq!(field, "n1"),
            other => panic!("expected FieldBinding, got {:?}", other.map(|_| ())),
        };
    }

    #[test]
    fn test_bind_into_leaves_unresolved_fields_alone() {
        let doc = json!({"objs": [{"n1": 9}]});
        let mut record = Record {
            name: "kept".to_string(),
            n1: 0,
        };
        descriptor()
            .bind_into(&proxy_for(&doc), &mut record)
            .unwrap();
        assert_eq!(record.name, "kept");
        assert_eq!(record.n1, 9);
    }

    #[test]
    fn test_transform_json_and_native() {
        #[derive(Default)]
        struct Movie {
            title: String,
            minutes: i64,
        }

        let descriptor = ClassDescriptor::<Movie>::builder()
            .field_with(
                "title",
                &["title"],
                |value| {
                    let s = value.as_str().ok_or("title must be a string")?;
                    Ok(Transformed::Json(json!(s.to_uppercase())))
                },
                |m: &mut Movie, v: String| m.title = v,
            )
            .field_with(
                "minutes",
                &["length"],
                |value| {
                    let n = value.as_i64().ok_or("length must be an integer")?;
                    Ok(Transformed::Native(n * 60))
                },
                |m: &mut Movie, v: i64| m.minutes = v,
            )
            .build();

        let doc = json!({"title": "Biloxi Blues", "length": 80});
        let mut proxies = jfl_core::flatten_to_proxies(&doc, "").unwrap();
        let movie = descriptor.bind(&proxies.remove(0)).unwrap();
        assert_eq!(movie.title, "BILOXI BLUES");
        assert_eq!(movie.minutes, 4800);
    }
}
