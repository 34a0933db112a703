//! Implementation of a container of words, backed by either a flex array or a red-black tree
#![warn(missing_docs)]

extern crate alloc;

use core::fmt::Write;

use crate::{
    flex::FlexArray,
    rbt::{Colour, Rbt},
};

//-----------------------------------------------------------------------------------------------//

/// The strategy a container uses to store its words
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerKind {
    /// An unordered array, searched linearly
    #[default]
    FlexArray,
    /// A red-black tree, searched in logarithmic time
    RedBlackTree,
}

//-----------------------------------------------------------------------------------------------//

/// A container of words.
///
/// The kind of container is chosen when it is constructed and never changes afterwards.
pub enum Container {
    /// Words kept in insertion order, duplicates stored repeatedly
    FlexArray(FlexArray),
    /// Words kept in a red-black tree, duplicates counted
    RedBlackTree(Rbt),
}

impl Container {
    /// Construct an empty container of a given kind
    pub fn new(kind: ContainerKind) -> Container {
        match kind {
            ContainerKind::FlexArray => Container::FlexArray(FlexArray::new()),
            ContainerKind::RedBlackTree => Container::RedBlackTree(Rbt::new()),
        }
    }

    /// Get the kind of the container
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::FlexArray(_) => ContainerKind::FlexArray,
            Container::RedBlackTree(_) => ContainerKind::RedBlackTree,
        }
    }

    /// Get the number of entries. Duplicates count once in a tree and once per append in a flex
    /// array.
    pub fn len(&self) -> usize {
        match self {
            Container::FlexArray(flex) => flex.len(),
            Container::RedBlackTree(tree) => tree.len(),
        }
    }

    /// Check if there are any words in the container
    pub fn is_empty(&self) -> bool {
        match self {
            Container::FlexArray(flex) => flex.is_empty(),
            Container::RedBlackTree(tree) => tree.is_empty(),
        }
    }

    /// Add a word
    pub fn add(&mut self, word: &str) {
        match self {
            Container::FlexArray(flex) => flex.append(word),
            Container::RedBlackTree(tree) => tree.insert(word),
        }
    }

    /// Check if a word has been added
    pub fn contains(&self, word: &str) -> bool {
        match self {
            Container::FlexArray(flex) => flex.is_present(word),
            Container::RedBlackTree(tree) => tree.search(word),
        }
    }

    /// Visit every word.
    ///
    /// A flex array is visited in insertion order with no colour. A tree is visited in pre-order,
    /// with the colour of each node.
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&str, Option<Colour>),
    {
        match self {
            Container::FlexArray(flex) => flex.visit(|word| visit(word, None)),
            Container::RedBlackTree(tree) => {
                tree.preorder(|word, colour| visit(word, Some(colour)))
            }
        }
    }

    /// Write every word on a single line, tree words labelled with their colour
    pub fn write_line<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        let mut result = Ok(());

        self.visit(|word, colour| {
            if result.is_ok() {
                result = match colour {
                    Some(colour) => write!(out, "{:<7}{} ", colour.label(), word),
                    None => write!(out, "{word} "),
                };
            }
        });

        result?;
        writeln!(out)
    }

    /// Remove all words, keeping the kind of the container
    pub fn clear(&mut self) {
        match self {
            Container::FlexArray(flex) => flex.clear(),
            Container::RedBlackTree(tree) => tree.clear(),
        }
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Both kinds of container answer membership queries identically
fn test_container_0() {
    use alloc::string::ToString;
    use rand::prelude::*;

    const COUNT: usize = 2000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut flex = Container::new(ContainerKind::FlexArray);
    let mut tree = Container::new(ContainerKind::RedBlackTree);

    for _ in 0..COUNT {
        let word = rng.random_range(0..COUNT).to_string();
        flex.add(&word);
        tree.add(&word);

        let query = rng.random_range(0..COUNT).to_string();
        debug_assert_eq!(flex.contains(&query), tree.contains(&query));
    }

    for i in 0..COUNT {
        let query = i.to_string();
        debug_assert_eq!(flex.contains(&query), tree.contains(&query));
    }

    debug_assert_eq!(flex.len(), COUNT);
    debug_assert!(tree.len() < COUNT);
}

#[test]
// A tree container keeps the latest root and visits in pre-order
fn test_container_1() {
    use alloc::{string::String, vec, vec::Vec};

    let mut c = Container::new(ContainerKind::RedBlackTree);
    debug_assert_eq!(c.kind(), ContainerKind::RedBlackTree);
    debug_assert!(c.is_empty());

    for word in ["pear", "apple", "banana", "apple"] {
        c.add(word);
    }

    debug_assert!(c.contains("apple"));
    debug_assert!(!c.contains("kiwi"));
    if let Container::RedBlackTree(tree) = &c {
        debug_assert_eq!(tree.occurrences("apple"), 2);
        debug_assert_eq!(tree.root_colour(), Some(Colour::Black));
    }

    let mut visited = Vec::new();
    c.visit(|word, colour| visited.push((String::from(word), colour)));
    debug_assert_eq!(
        visited,
        vec![
            (String::from("banana"), Some(Colour::Black)),
            (String::from("apple"), Some(Colour::Red)),
            (String::from("pear"), Some(Colour::Red)),
        ]
    );

    let mut line = String::new();
    c.write_line(&mut line).unwrap();
    debug_assert_eq!(line, "black: banana red:   apple red:   pear \n");

    c.clear();
    debug_assert!(c.is_empty());
    debug_assert_eq!(c.kind(), ContainerKind::RedBlackTree);
}

#[test]
// A flex array container visits in insertion order without colour
fn test_container_2() {
    use alloc::string::String;

    let mut c = Container::new(ContainerKind::default());
    debug_assert_eq!(c.kind(), ContainerKind::FlexArray);

    for word in ["pear", "apple", "banana", "apple"] {
        c.add(word);
    }
    debug_assert_eq!(c.len(), 4);

    let mut colours = 0;
    c.visit(|_, colour| colours += usize::from(colour.is_some()));
    debug_assert_eq!(colours, 0);

    let mut line = String::new();
    c.write_line(&mut line).unwrap();
    debug_assert_eq!(line, "pear apple banana apple \n");
}
