//! First-class result container for collection-mode mapping
//!
//! Collection-mode `to` returns this container rather than a bare `Vec`, so
//! callers can rely on "the collection abstraction": ordered, indexable,
//! iterable, and never nested: mapping an already-sequence-shaped source
//! produces exactly one container deep.
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

use crate::target::Target;
use std::fmt;
use std::ops::Index;

/// Ordered, indexable container of mapped targets.
///
/// `items[i]` corresponds to source item `i`; input order is preserved.
#[derive(Default)]
pub struct MappedCollection {
    items: Vec<Box<dyn Target>>,
}

impl MappedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Target> {
        self.items.get(index).map(|item| &**item)
    }

    pub fn first(&self) -> Option<&dyn Target> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Target> {
        self.items.iter().map(|item| &**item)
    }

    pub fn push(&mut self, item: Box<dyn Target>) {
        self.items.push(item);
    }

    pub fn into_inner(self) -> Vec<Box<dyn Target>> {
        self.items
    }
}

impl Index<usize> for MappedCollection {
    type Output = dyn Target;

    fn index(&self, index: usize) -> &Self::Output {
        &*self.items[index]
    }
}

impl FromIterator<Box<dyn Target>> for MappedCollection {
    fn from_iter<I: IntoIterator<Item = Box<dyn Target>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MappedCollection {
    type Item = Box<dyn Target>;
    type IntoIter = std::vec::IntoIter<Box<dyn Target>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Debug for MappedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedCollection")
            .field("len", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::any::Any;

    struct Tag(&'static str);

    impl Target for Tag {
        fn declares_field(&self, _name: &str) -> bool {
            false
        }

        fn set_field(&mut self, _name: &str, _value: Value) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn into_any(self: Box<Self>) -> Box<dyn Any> {
            self
        }
    }

    #[test]
    fn test_preserves_order_and_indexes() {
        let collection: MappedCollection =
            vec![Box::new(Tag("first")) as Box<dyn Target>, Box::new(Tag("second"))]
                .into_iter()
                .collect();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection[1].downcast_ref::<Tag>().unwrap().0, "second");
        assert_eq!(collection.first().unwrap().downcast_ref::<Tag>().unwrap().0, "first");
    }

    #[test]
    fn test_iterates_in_order() {
        let collection: MappedCollection =
            vec![Box::new(Tag("a")) as Box<dyn Target>, Box::new(Tag("b"))]
                .into_iter()
                .collect();

        let tags: Vec<&'static str> = collection
            .iter()
            .map(|item| item.downcast_ref::<Tag>().unwrap().0)
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
    }
}
