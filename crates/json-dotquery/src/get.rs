//! Typed extraction over resolved leaves.
//!
//! Every getter is `child` followed by a variant match on the resolved
//! value. Scalar getters fail with [`Error::InvalidType`] on any mismatch,
//! including between integer-decoded and float-decoded numbers. Array and
//! map getters degrade a mismatched *element* to the target type's default
//! value instead of aborting the whole extraction.

use std::sync::Arc;

use ahash::AHashMap;

use crate::error::Error;
use crate::resolver::Resolver;
use crate::value::JsonValue;

fn typed_array<T: Default>(
    items: &[Arc<JsonValue>],
    convert: impl Fn(&JsonValue) -> Option<T>,
) -> Vec<T> {
    items
        .iter()
        .map(|item| convert(item).unwrap_or_default())
        .collect()
}

fn typed_map<T: Default>(
    fields: &AHashMap<String, Arc<JsonValue>>,
    convert: impl Fn(&JsonValue) -> Option<T>,
) -> AHashMap<String, T> {
    fields
        .iter()
        .map(|(key, field)| (key.clone(), convert(field).unwrap_or_default()))
        .collect()
}

fn narrow_i32(value: &JsonValue) -> Option<i32> {
    value.as_i64().and_then(|i| i32::try_from(i).ok())
}

impl Resolver {
    /// Resolves `path` and returns the raw decoded value there.
    pub fn get(&self, path: &str) -> Result<Arc<JsonValue>, Error> {
        Ok(Arc::clone(self.child(path)?.value()))
    }

    /// The integer at `path`, narrowed to `i32`.
    ///
    /// Fails with [`Error::InvalidType`] when the value decoded as floating
    /// point or does not fit in an `i32`.
    pub fn get_i32(&self, path: &str) -> Result<i32, Error> {
        narrow_i32(&*self.get(path)?).ok_or(Error::InvalidType)
    }

    /// The integer at `path`.
    ///
    /// A value that decoded as floating point is a different shape and fails
    /// with [`Error::InvalidType`], never an implicit narrowing.
    pub fn get_i64(&self, path: &str) -> Result<i64, Error> {
        self.get(path)?.as_i64().ok_or(Error::InvalidType)
    }

    /// The floating-point number at `path`, narrowed to `f32`.
    ///
    /// The narrowing cast is lossy for values outside `f32` precision.
    pub fn get_f32(&self, path: &str) -> Result<f32, Error> {
        self.get_f64(path).map(|f| f as f32)
    }

    /// The floating-point number at `path`.
    ///
    /// A value that decoded as an integer fails with [`Error::InvalidType`].
    pub fn get_f64(&self, path: &str) -> Result<f64, Error> {
        self.get(path)?.as_f64().ok_or(Error::InvalidType)
    }

    /// The boolean at `path`.
    pub fn get_bool(&self, path: &str) -> Result<bool, Error> {
        self.get(path)?.as_bool().ok_or(Error::InvalidType)
    }

    /// The string at `path`.
    pub fn get_string(&self, path: &str) -> Result<String, Error> {
        self.get(path)?
            .as_str()
            .map(str::to_owned)
            .ok_or(Error::InvalidType)
    }

    /// The array at `path` as shared value nodes.
    pub fn get_array(&self, path: &str) -> Result<Vec<Arc<JsonValue>>, Error> {
        match &*self.get(path)? {
            JsonValue::Array(items) => Ok(items.clone()),
            _ => Err(Error::InvalidType),
        }
    }

    pub fn get_i32_array(&self, path: &str) -> Result<Vec<i32>, Error> {
        Ok(typed_array(&self.get_array(path)?, narrow_i32))
    }

    pub fn get_i64_array(&self, path: &str) -> Result<Vec<i64>, Error> {
        Ok(typed_array(&self.get_array(path)?, JsonValue::as_i64))
    }

    pub fn get_f32_array(&self, path: &str) -> Result<Vec<f32>, Error> {
        Ok(typed_array(&self.get_array(path)?, |v| {
            v.as_f64().map(|f| f as f32)
        }))
    }

    pub fn get_f64_array(&self, path: &str) -> Result<Vec<f64>, Error> {
        Ok(typed_array(&self.get_array(path)?, JsonValue::as_f64))
    }

    pub fn get_bool_array(&self, path: &str) -> Result<Vec<bool>, Error> {
        Ok(typed_array(&self.get_array(path)?, JsonValue::as_bool))
    }

    pub fn get_string_array(&self, path: &str) -> Result<Vec<String>, Error> {
        Ok(typed_array(&self.get_array(path)?, |v| {
            v.as_str().map(str::to_owned)
        }))
    }

    /// The object at `path` as shared value nodes keyed by field name.
    pub fn get_map(
        &self,
        path: &str,
    ) -> Result<AHashMap<String, Arc<JsonValue>>, Error> {
        match &*self.get(path)? {
            JsonValue::Object(fields) => Ok(fields.clone()),
            _ => Err(Error::InvalidType),
        }
    }

    pub fn get_i32_map(&self, path: &str) -> Result<AHashMap<String, i32>, Error> {
        Ok(typed_map(&self.get_map(path)?, narrow_i32))
    }

    pub fn get_i64_map(&self, path: &str) -> Result<AHashMap<String, i64>, Error> {
        Ok(typed_map(&self.get_map(path)?, JsonValue::as_i64))
    }

    pub fn get_f32_map(&self, path: &str) -> Result<AHashMap<String, f32>, Error> {
        Ok(typed_map(&self.get_map(path)?, |v| {
            v.as_f64().map(|f| f as f32)
        }))
    }

    pub fn get_f64_map(&self, path: &str) -> Result<AHashMap<String, f64>, Error> {
        Ok(typed_map(&self.get_map(path)?, JsonValue::as_f64))
    }

    pub fn get_bool_map(&self, path: &str) -> Result<AHashMap<String, bool>, Error> {
        Ok(typed_map(&self.get_map(path)?, JsonValue::as_bool))
    }

    pub fn get_string_map(
        &self,
        path: &str,
    ) -> Result<AHashMap<String, String>, Error> {
        Ok(typed_map(&self.get_map(path)?, |v| {
            v.as_str().map(str::to_owned)
        }))
    }
}
