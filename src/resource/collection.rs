//! Ordered, immutable collections of models.

use super::{Collectable, Parent, Record};
use crate::error::{GitterError, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// An ordered sequence of models of one type, built from one server response.
///
/// Items keep the server's order and the collection is never resized. Iterating
/// borrows the collection, so every traversal starts again from the first item.
pub struct Collection<T> {
    parent: Arc<dyn Parent>,
    items: Vec<T>,
}

impl<T: Collectable> Collection<T> {
    /// Build a collection from a decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`GitterError::Decode`] if `data` is not an array, or the first
    /// error raised while building an item.
    pub fn new<P>(parent: P, data: Value) -> Result<Self>
    where
        P: Parent + 'static,
    {
        match data {
            Value::Array(records) => Self::from_records(parent, records),
            other => Err(GitterError::Decode {
                message: "expected a JSON array of records".into(),
                body: other.to_string(),
            }),
        }
    }

    /// Build a collection from already split records.
    pub fn from_records<P>(parent: P, records: Vec<Value>) -> Result<Self>
    where
        P: Parent + 'static,
    {
        let parent: Arc<dyn Parent> = Arc::new(parent);
        let items = records
            .into_iter()
            .map(|record| T::from_args(T::collectable_args(parent.as_ref(), record)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { parent, items })
    }
}

impl<T> Collection<T> {
    /// The client or model that produced this collection.
    pub fn parent(&self) -> &dyn Parent {
        self.parent.as_ref()
    }

    /// Iterate over the items in server order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// First item.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last item.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: AsRef<Record>> Collection<T> {
    /// Raw records of the items, in order.
    pub fn records(&self) -> Vec<Value> {
        self.items
            .iter()
            .map(|item| item.as_ref().data().clone())
            .collect()
    }
}

/// Borrowing iterator over a [`Collection`].
pub type Iter<'a, T> = std::slice::Iter<'a, T>;

/// Owning iterator over a [`Collection`].
pub type IntoIter<T> = std::vec::IntoIter<T>;

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            parent: Arc::clone(&self.parent),
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
