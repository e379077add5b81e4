//! The sequence type behind [`Value::Vec`](crate::Value::Vec).
//!
//! Lesson bindings are created once and never mutated, so [`Seq`] has no
//! mutating operations.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Ordered sequence of binding elements.
///
/// Built once from a `Vec` or an iterator and only read afterwards. Clones
/// share structure, so copying a binding's value does not copy its elements.
#[derive(Clone)]
pub struct Seq<T: Clone>(im::Vector<T>);

impl<T: Clone> Seq<T> {
    /// Element count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for `[]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Clone> Default for Seq<T> {
    fn default() -> Self {
        Self(im::Vector::new())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Seq<T> {}

impl<T: Clone + Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
