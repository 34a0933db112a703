//! Implementation of a flexible array of strings, searched linearly
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use compact_str::CompactString;
use core::{iter::FusedIterator, slice};

//-----------------------------------------------------------------------------------------------//

/// A growable array of strings, kept in insertion order.
///
/// Duplicates are stored again each time they are appended. Searching is a linear scan, so this
/// is only suitable for short runs of words such as a lightly loaded hash bucket.
#[derive(Clone, Default)]
pub struct FlexArray {
    item: Vec<CompactString>,
}

impl FlexArray {
    /// Constructor
    pub fn new() -> FlexArray {
        FlexArray { item: Vec::new() }
    }

    /// Constructor, pre-allocating a given capacity
    pub fn with_capacity(capacity: usize) -> FlexArray {
        FlexArray {
            item: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of words stored, counting duplicates
    #[inline]
    pub fn len(&self) -> usize {
        self.item.len()
    }

    /// Check if there are any words in the array
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// Append a copy of a word. An empty word is ignored.
    pub fn append(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.item.push(CompactString::new(word));
    }

    /// Check if a word has been appended
    pub fn is_present(&self, word: &str) -> bool {
        self.item.iter().any(|item| item == word)
    }

    /// Visit every word in insertion order
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        for item in &self.item {
            visit(item.as_str());
        }
    }

    /// Remove all words, releasing their storage
    pub fn clear(&mut self) {
        self.item = Vec::new();
    }

    /// Iterate over the words in insertion order
    pub fn iter(&self) -> FlexArrayIterator<'_> {
        FlexArrayIterator {
            item: self.item.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a FlexArray {
    type Item = &'a str;
    type IntoIter = FlexArrayIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a str> for FlexArray {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut flex = FlexArray::new();
        for word in iter {
            flex.append(word);
        }
        flex
    }
}

//-----------------------------------------------------------------------------------------------//

/// An iterator over the words of a `FlexArray`, in insertion order
pub struct FlexArrayIterator<'a> {
    item: slice::Iter<'a, CompactString>,
}

impl<'a> Iterator for FlexArrayIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.item.next().map(CompactString::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.item.size_hint()
    }
}

impl ExactSizeIterator for FlexArrayIterator<'_> {}

impl FusedIterator for FlexArrayIterator<'_> {}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of appending and searching
fn test_flex_0() {
    use alloc::vec;

    let mut flex = FlexArray::new();

    flex.append("pear");
    flex.append("apple");
    flex.append("banana");
    flex.append("apple");

    debug_assert_eq!(flex.len(), 4);
    debug_assert!(flex.is_present("apple"));
    debug_assert!(!flex.is_present("kiwi"));
    debug_assert!(!flex.is_present("appl"));

    let v: Vec<&str> = flex.iter().collect();
    debug_assert_eq!(v, vec!["pear", "apple", "banana", "apple"]);
}

#[test]
// Visiting keeps insertion order and empty words are never stored
fn test_flex_1() {
    use alloc::string::{String, ToString};

    let mut flex: FlexArray = ["b", "", "a", "c"].into_iter().collect();
    debug_assert_eq!(flex.len(), 3);
    debug_assert!(!flex.is_present(""));

    let mut visited = String::new();
    flex.visit(|word| visited.push_str(word));
    debug_assert_eq!(visited, "bac".to_string());

    flex.clear();
    debug_assert!(flex.is_empty());
    debug_assert_eq!(flex.iter().next(), None);
}

#[test]
// A stress test with appending past many growth steps
fn test_flex_2() {
    use alloc::string::ToString;
    use rand::prelude::*;

    const COUNT: usize = 10000;

    let mut rng = SmallRng::seed_from_u64(9876543210);

    let mut flex = FlexArray::with_capacity(1);
    for _ in 0..COUNT {
        flex.append(&rng.random_range(0..COUNT).to_string());
    }
    debug_assert_eq!(flex.len(), COUNT);

    let mut rng = SmallRng::seed_from_u64(9876543210);

    for _ in 0..COUNT / 10 {
        let word = rng.random_range(0..COUNT).to_string();
        debug_assert!(flex.is_present(&word));
    }
    debug_assert!(!flex.is_present("x"));
}
