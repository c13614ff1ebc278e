use crate::knowledge::CatalogError;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

/// Immutable catalog entry referenced by many entities.
pub struct Shared<T> {
    inner: Arc<T>,
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.deref(), f)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct Dictionary<K, T> {
    keys: HashMap<K, Shared<T>>,
}

impl<K: Clone, T> Clone for Dictionary<K, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<K, T> Default for Dictionary<K, T> {
    fn default() -> Self {
        Self {
            keys: HashMap::default(),
        }
    }
}

impl<K, T> Dictionary<K, T>
where
    K: Debug + Hash + Eq + Copy + FromStr<Err = CatalogError>,
{
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn insert(&mut self, key: K, kind: T) {
        self.keys.insert(key, Shared::new(kind));
    }

    pub fn get(&self, key: K) -> Result<Shared<T>, CatalogError> {
        self.keys
            .get(&key)
            .cloned()
            .ok_or(CatalogError::UnknownCatalogKey {
                key: format!("{:?}", key),
            })
    }

    /// Looks up entry by any accepted textual identifier of the key.
    pub fn find(&self, name: &str) -> Result<Shared<T>, CatalogError> {
        let key = K::from_str(name)?;
        self.get(key)
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id
        }
    }

    /// Copy of the sequence to allocate identifiers before operation applied.
    pub fn introduce(&self) -> Sequence {
        Sequence { value: self.value }
    }
}
