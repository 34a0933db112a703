//! Implementation of a hash table of words, with one container per bucket
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::{fmt::Display, iter};

use crate::{
    container::{Container, ContainerKind},
    rbt::Colour,
};

/// The number of buckets used when none is given
pub const DEFAULT_SIZE: usize = 113;

/// Hash a word by its bytes, `h = h * 31 + b` in wrapping 32-bit arithmetic
pub fn default_hash(word: &str) -> u64 {
    let mut h: u32 = 0;
    for b in word.bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(b));
    }
    u64::from(h)
}

//-----------------------------------------------------------------------------------------------//

/// A hash table of words.
///
/// The number of buckets and the kind of container held in every bucket are fixed when the table
/// is constructed, the table never resizes. A bucket's container is created the first time a word
/// hashes to it.
pub struct HashTable {
    bucket: Vec<Option<Container>>,
    kind: ContainerKind,
    hash: fn(&str) -> u64,
}

impl HashTable {
    /// Constructor, using `default_hash`.
    ///
    /// A size of zero is replaced by `DEFAULT_SIZE`.
    pub fn new(size: usize, kind: ContainerKind) -> HashTable {
        HashTable::with_hasher(size, kind, default_hash)
    }

    /// Constructor, using a custom hash function to pick the bucket of a word.
    ///
    /// A size of zero is replaced by `DEFAULT_SIZE`.
    pub fn with_hasher(size: usize, kind: ContainerKind, hash: fn(&str) -> u64) -> HashTable {
        let size = if size == 0 { DEFAULT_SIZE } else { size };
        log::debug!("hash table of {size} buckets using {kind:?} containers");

        HashTable {
            bucket: iter::repeat_with(|| None).take(size).collect(),
            kind,
            hash,
        }
    }

    /// Get the number of buckets
    #[inline]
    pub fn size(&self) -> usize {
        self.bucket.len()
    }

    /// Get the kind of container used in every bucket
    #[inline]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Get the bucket a word belongs in
    pub fn index(&self, word: &str) -> usize {
        ((self.hash)(word) % self.bucket.len() as u64) as usize
    }

    /// Insert a word. An empty word is ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let i = self.index(word);
        let kind = self.kind;
        self.bucket[i]
            .get_or_insert_with(|| {
                log::trace!("creating bucket {i}");
                Container::new(kind)
            })
            .add(word);
    }

    /// Check if a word has been inserted
    pub fn search(&self, word: &str) -> bool {
        self.bucket[self.index(word)]
            .as_ref()
            .is_some_and(|c| c.contains(word))
    }

    /// Get the container of a bucket, or `None` if nothing has been inserted into it
    pub fn bucket(&self, i: usize) -> Option<&Container> {
        self.bucket.get(i)?.as_ref().filter(|c| !c.is_empty())
    }

    /// Visit every word, bucket by bucket
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&str, Option<Colour>),
    {
        for c in self.bucket.iter().flatten() {
            c.visit(&mut visit);
        }
    }

    /// Write the table, one line per non-empty bucket
    pub fn print<W: core::fmt::Write>(&self, out: &mut W) -> core::fmt::Result {
        for c in self.bucket.iter().flatten() {
            if !c.is_empty() {
                c.write_line(out)?;
            }
        }
        Ok(())
    }

    /// Remove every word, releasing the containers of all buckets
    pub fn clear(&mut self) {
        for c in self.bucket.iter_mut() {
            *c = None;
        }
    }
}

impl Display for HashTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.print(f)
    }
}

//-----------------------------------------------------------------------------------------------//

// Route a handful of words to fixed buckets
#[cfg(test)]
fn fixed_hash(word: &str) -> u64 {
    match word {
        "cat" | "dog" => 0,
        "bird" | "ant" => 2,
        _ => 1,
    }
}

#[test]
// Words land in the buckets chosen by the hash function
fn test_table_0() {
    use alloc::string::ToString;

    for kind in [ContainerKind::FlexArray, ContainerKind::RedBlackTree] {
        let mut table = HashTable::with_hasher(4, kind, fixed_hash);
        for word in ["cat", "dog", "bird", "ant"] {
            table.insert(word);
        }

        debug_assert_eq!(table.size(), 4);
        debug_assert_eq!(table.kind(), kind);
        debug_assert_eq!(table.bucket(0).map(Container::len), Some(2));
        debug_assert!(table.bucket(1).is_none());
        debug_assert_eq!(table.bucket(2).map(Container::len), Some(2));
        debug_assert!(table.bucket(3).is_none());
        debug_assert!(table.bucket(4).is_none());

        debug_assert!(table.search("cat"));
        debug_assert!(table.search("ant"));
        debug_assert!(!table.search("fish"));

        // Empty buckets print nothing
        debug_assert_eq!(table.to_string().lines().count(), 2);
    }
}

#[test]
// The dump of a table matches the dump of each of its buckets
fn test_table_1() {
    use alloc::string::ToString;

    let mut table = HashTable::with_hasher(4, ContainerKind::FlexArray, fixed_hash);
    for word in ["cat", "bird", "dog", "ant", "dog"] {
        table.insert(word);
    }
    debug_assert_eq!(table.to_string(), "cat dog dog \nbird ant \n");

    let mut table = HashTable::with_hasher(4, ContainerKind::RedBlackTree, fixed_hash);
    for word in ["cat", "bird", "dog", "ant", "dog"] {
        table.insert(word);
    }
    debug_assert_eq!(
        table.to_string(),
        "black: cat red:   dog \nblack: bird red:   ant \n"
    );

    table.clear();
    debug_assert_eq!(table.to_string(), "");
    debug_assert!(!table.search("cat"));
}

#[test]
// The default hash is stable and a zero size falls back to the default
fn test_table_2() {
    debug_assert_eq!(default_hash(""), 0);
    debug_assert_eq!(default_hash("a"), 97);
    debug_assert_eq!(default_hash("ab"), 97 * 31 + 98);

    let table = HashTable::new(0, ContainerKind::FlexArray);
    debug_assert_eq!(table.size(), DEFAULT_SIZE);
    debug_assert_eq!(table.index("ab"), (97 * 31 + 98) % DEFAULT_SIZE);
}

#[test]
// A stress test with many words in few buckets, comparing both kinds of container
fn test_table_3() {
    use alloc::string::ToString;
    use rand::prelude::*;

    const COUNT: usize = 5000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut flex = HashTable::new(17, ContainerKind::FlexArray);
    let mut tree = HashTable::new(17, ContainerKind::RedBlackTree);

    let mut words = Vec::new();
    for _ in 0..COUNT {
        let word = rng.random_range(0..usize::MAX).to_string();
        flex.insert(&word);
        tree.insert(&word);
        words.push(word);
    }

    for word in &words {
        debug_assert!(flex.search(word));
        debug_assert!(tree.search(word));
    }

    for _ in 0..COUNT {
        let word = rng.random_range(0..usize::MAX).to_string();
        debug_assert_eq!(flex.search(&word), tree.search(&word));
    }

    let mut visited = 0;
    tree.visit(|_, colour| {
        debug_assert!(colour.is_some());
        visited += 1;
    });
    debug_assert_eq!(visited, COUNT);
}
