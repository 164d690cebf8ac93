//! Resolver nodes: dotted-path resolution with per-node memoization.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::Error;
use crate::path;
use crate::value::JsonValue;

/// A handle to one node of a decoded JSON tree plus its resolution cache.
///
/// A resolver is created once from raw JSON bytes and then queried with
/// dotted paths. Every child reached through a path segment is memoized in
/// the parent's cache, so repeated queries through the same segment return
/// the same node and nested caches accumulate across calls. Cloning a
/// resolver clones the handle, not the tree.
///
/// Path elements are separated by dots. An element addressing an array is
/// the index in square brackets; anything else addresses an object key.
/// A path of exactly `"."` resolves to the node itself.
///
/// # Example
///
/// ```
/// use json_dotquery::Resolver;
///
/// let root = Resolver::new(br#"{"a": {"arr": [{"c": 5}], "x": "p"}}"#)?;
/// let item = root.child("a.arr.[0]")?;
/// assert_eq!(item.get_i64("c")?, 5);
/// assert_eq!(root.get_string("a.x")?, "p");
/// # Ok::<(), json_dotquery::Error>(())
/// ```
#[derive(Clone)]
pub struct Resolver {
    node: Arc<Node>,
}

struct Node {
    value: Arc<JsonValue>,
    cache: RwLock<AHashMap<String, Resolver>>,
}

impl Resolver {
    /// Decodes raw JSON bytes and wraps the result in a root resolver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] carrying the decoder's error when the
    /// input is empty or not well-formed JSON.
    pub fn new(data: &[u8]) -> Result<Self, Error> {
        let decoded: serde_json::Value = serde_json::from_slice(data)?;
        Ok(Self::from_value(decoded))
    }

    /// Wraps an already-decoded `serde_json` tree in a root resolver.
    pub fn from_value(value: serde_json::Value) -> Self {
        Self::wrap(Arc::new(value.into()))
    }

    fn wrap(value: Arc<JsonValue>) -> Self {
        Self {
            node: Arc::new(Node {
                value,
                cache: RwLock::new(AHashMap::new()),
            }),
        }
    }

    /// The decoded value this resolver addresses.
    pub fn value(&self) -> &Arc<JsonValue> {
        &self.node.value
    }

    /// Whether two resolvers are handles to the same node.
    ///
    /// Children reached through the same cached segment compare equal here,
    /// not merely structurally.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Resolves the subtree at the given dotted path.
    ///
    /// Keys may themselves contain literal dots; there is no escaping
    /// syntax. Disambiguation is structural: the shortest matching key is
    /// preferred, and progressively longer dot-joined candidates are tried
    /// when a shorter interpretation cannot resolve the rest of the path.
    ///
    /// # Errors
    ///
    /// - [`Error::UnexpectedShape`] when descending past a scalar or null.
    /// - [`Error::IndexNotFound`] when an array is addressed without an
    ///   index segment.
    /// - [`Error::IndexOutOfBound`] when the index is negative or past the
    ///   end of the array.
    /// - [`Error::NoDataFound`] when no key candidate resolves the path.
    pub fn child(&self, path: &str) -> Result<Self, Error> {
        self.resolve(&path::split(path))
    }

    fn resolve(&self, segments: &[&str]) -> Result<Self, Error> {
        if segments.is_empty() {
            return Ok(self.clone());
        }
        match &*self.node.value {
            JsonValue::Array(items) => self.resolve_in_array(items, segments),
            JsonValue::Object(fields) => self.resolve_in_object(fields, segments),
            _ => Err(Error::UnexpectedShape),
        }
    }

    fn resolve_in_array(
        &self,
        items: &[Arc<JsonValue>],
        segments: &[&str],
    ) -> Result<Self, Error> {
        let index = path::parse_index(segments[0]).ok_or(Error::IndexNotFound)?;
        if index < 0 || index as usize >= items.len() {
            return Err(Error::IndexOutOfBound);
        }
        let key = index.to_string();
        let child = match self.lookup(&key) {
            Some(cached) => cached,
            None => self.memoize(key, Self::wrap(Arc::clone(&items[index as usize]))),
        };
        // No fallback here: whatever the rest of the path produces is final.
        child.resolve(&segments[1..])
    }

    fn resolve_in_object(
        &self,
        fields: &AHashMap<String, Arc<JsonValue>>,
        segments: &[&str],
    ) -> Result<Self, Error> {
        // Segments a, b, c may address the keys `a`, `a.b` or `a.b.c`, all
        // of which can legitimately exist. Each candidate gets a chance, in
        // order of preference a > a.b > a.b.c: a longer literal key is only
        // reached when every shorter interpretation fails to resolve the
        // remaining segments.
        let mut current = segments[0].to_string();
        for i in 0..segments.len() {
            if let Some(cached) = self.lookup(&current) {
                if let Ok(found) = cached.resolve(&segments[i + 1..]) {
                    return Ok(found);
                }
            } else if let Some(value) = fields.get(&current) {
                let child = self.memoize(current.clone(), Self::wrap(Arc::clone(value)));
                if let Ok(found) = child.resolve(&segments[i + 1..]) {
                    return Ok(found);
                }
            }
            // Nothing here, extend the candidate with the next segment.
            if let Some(next) = segments.get(i + 1) {
                current.push('.');
                current.push_str(next);
            }
        }
        Err(Error::NoDataFound)
    }

    fn lookup(&self, key: &str) -> Option<Resolver> {
        self.node.cache.read().get(key).cloned()
    }

    fn memoize(&self, key: String, child: Resolver) -> Resolver {
        let mut cache = self.node.cache.write();
        // Another caller may have populated the key between our read and
        // this write; the first insertion wins and the late construction
        // is dropped.
        cache.entry(key).or_insert(child).clone()
    }
}
