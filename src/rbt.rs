//! Implementation of a red-black tree of strings, with duplicate counting
#![warn(missing_docs)]

extern crate alloc;

use alloc::{boxed::Box, vec::Vec};
use compact_str::CompactString;
use core::{cmp::Ordering, fmt::Display, iter::FusedIterator, mem};

//-----------------------------------------------------------------------------------------------//

/// The colour of a node in a red-black tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    /// A red node, never the parent of another red node
    Red,
    /// A black node, counted by the black-height
    Black,
}

impl Colour {
    /// The label printed in front of a key when dumping a tree
    pub fn label(self) -> &'static str {
        match self {
            Colour::Red => "red:",
            Colour::Black => "black:",
        }
    }
}

//-----------------------------------------------------------------------------------------------//

// A node in a red-black tree
struct Node {
    key: CompactString,
    count: u32,
    colour: Colour,
    left: Link,
    right: Link,
}

// An owning handle to a subtree, absent for an empty subtree
type Link = Option<Box<Node>>;

impl Node {
    fn new(key: &str) -> Node {
        Node {
            key: CompactString::new(key),
            count: 1,
            colour: Colour::Red,
            left: None,
            right: None,
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// A red-black tree of strings.
///
/// Inserting a key that is already present does not create a new node, it increments the number
/// of occurrences recorded against the existing node. The tree owns every node and every key.
#[derive(Default)]
pub struct Rbt {
    root: Link,
    len: usize,
}

impl Rbt {
    /// Construct an empty tree
    pub fn new() -> Rbt {
        Rbt { root: None, len: 0 }
    }

    /// Get the number of distinct keys in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are any keys in the tree
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get the colour of the root, or `None` if the tree is empty
    pub fn root_colour(&self) -> Option<Colour> {
        self.root.as_ref().map(|r| r.colour)
    }

    /// Insert a key.
    ///
    /// An empty key is ignored. If the key is already in the tree its occurrence count is
    /// incremented, otherwise a new red node is added and the tree is rebalanced on the way back
    /// up to the root.
    pub fn insert(&mut self, key: &str) {
        if key.is_empty() {
            return;
        }

        let mut created = false;
        let mut root = insert(self.root.take(), key, &mut created);
        root.colour = Colour::Black;
        self.root = Some(root);

        if created {
            self.len += 1;
        }
    }

    /// Delete a key.
    ///
    /// If the key does not exist, then this function has no effect. All occurrences of the key
    /// are removed together. The tree is not rebalanced after the removal, so the black-height
    /// of different paths may drift apart over a run of deletions.
    pub fn delete(&mut self, key: &str) {
        let mut removed = false;
        self.root = delete(self.root.take(), key, &mut removed);

        if removed {
            self.len -= 1;
        }
    }

    /// Check if a key is in the tree
    pub fn search(&self, key: &str) -> bool {
        self.occurrences(key) > 0
    }

    /// Get the number of times a key has been inserted, or zero if it is not in the tree.
    ///
    /// The count stops at `u32::MAX`.
    pub fn occurrences(&self, key: &str) -> u32 {
        let mut x = &self.root;

        while let Some(r) = x {
            match key.cmp(r.key.as_str()) {
                Ordering::Equal => return r.count,
                Ordering::Less => x = &r.left,
                Ordering::Greater => x = &r.right,
            }
        }

        0
    }

    /// Remove all keys from the tree, releasing every node
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Visit every key in ascending order
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        inorder(&self.root, &mut visit);
    }

    /// Visit every key in pre-order, a node before its left and then its right subtree.
    ///
    /// The colour of each node is passed alongside its key.
    pub fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&str, Colour),
    {
        preorder(&self.root, &mut visit);
    }

    /// Iterate over the keys in ascending order
    pub fn iter(&self) -> RbtIterator<'_> {
        let mut iter = RbtIterator {
            stack: Vec::new(),
            count: self.len,
        };
        iter.descend(&self.root);
        iter
    }

    // Check the red-black invariants, returning the black-height of the tree
    #[cfg(test)]
    fn check(&self) -> usize {
        debug_assert_ne!(self.root_colour(), Some(Colour::Red));
        debug_assert!(!has_red_violation(&self.root));

        let mut keys = Vec::new();
        self.inorder(|key| keys.push(CompactString::new(key)));
        debug_assert_eq!(keys.len(), self.len);
        debug_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

        match black_height(&self.root) {
            Some(height) => height,
            None => panic!("unequal black-height"),
        }
    }
}

impl Display for Rbt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        dump(&self.root, f)
    }
}

impl<'a> IntoIterator for &'a Rbt {
    type Item = &'a str;
    type IntoIter = RbtIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a str> for Rbt {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tree = Rbt::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

//-----------------------------------------------------------------------------------------------//

/// An iterator over the keys of an `Rbt`, in ascending order
pub struct RbtIterator<'a> {
    stack: Vec<&'a Node>,
    count: usize,
}

impl<'a> RbtIterator<'a> {
    // Push the left spine of a subtree
    fn descend(&mut self, mut x: &'a Link) {
        while let Some(r) = x {
            self.stack.push(r);
            x = &r.left;
        }
    }
}

impl<'a> Iterator for RbtIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let r = self.stack.pop()?;
        self.descend(&r.right);
        self.count -= 1;

        Some(r.key.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl ExactSizeIterator for RbtIterator<'_> {}

impl FusedIterator for RbtIterator<'_> {}

//-----------------------------------------------------------------------------------------------//

// IMPLEMENTATION NOTE
//
// The functions below take ownership of a subtree and hand back the root of the subtree that
// replaces it. A rotation gives the subtree a different root node, so the caller must always
// store the returned handle in the slot it took the subtree from.

#[inline]
fn is_red(x: &Link) -> bool {
    matches!(x, Some(r) if r.colour == Colour::Red)
}

#[inline]
fn is_black(x: &Link) -> bool {
    !is_red(x)
}

// Check if either child of a subtree root is red
#[inline]
fn has_red_child(x: &Link) -> bool {
    matches!(x, Some(r) if is_red(&r.left) || is_red(&r.right))
}

#[inline]
fn paint(x: &mut Link, colour: Colour) {
    if let Some(r) = x {
        r.colour = colour;
    }
}

// Promote the right child of `r` into its place
fn left_rotate(mut r: Box<Node>) -> Box<Node> {
    match r.right.take() {
        None => r,
        Some(mut y) => {
            r.right = y.left.take();
            y.left = Some(r);
            y
        }
    }
}

// Promote the left child of `r` into its place
fn right_rotate(mut r: Box<Node>) -> Box<Node> {
    match r.left.take() {
        None => r,
        Some(mut y) => {
            r.left = y.right.take();
            y.right = Some(r);
            y
        }
    }
}

// Remove consecutive reds below `r`
//
// The three cases are tested in order against the same subtree, each one seeing the result of the
// previous one.
fn fix(mut r: Box<Node>) -> Box<Node> {
    // Both children and a grandchild are red: colour the root red and the children black
    if is_red(&r.left) && is_red(&r.right) && (has_red_child(&r.left) || has_red_child(&r.right))
    {
        r.colour = Colour::Red;
        paint(&mut r.left, Colour::Black);
        paint(&mut r.right, Colour::Black);
    }

    // The left child is red, the right child is black, and a left grandchild is red
    if is_red(&r.left) && is_black(&r.right) && has_red_child(&r.left) {
        if matches!(&r.left, Some(a) if is_red(&a.right)) {
            r.left = r.left.take().map(left_rotate);
        }
        r = right_rotate(r);
        r.colour = Colour::Black;
        paint(&mut r.right, Colour::Red);
    }

    // The right child is red, the left child is black, and a right grandchild is red
    if is_red(&r.right) && is_black(&r.left) && has_red_child(&r.right) {
        if matches!(&r.right, Some(b) if is_red(&b.left)) {
            r.right = r.right.take().map(right_rotate);
        }
        r = left_rotate(r);
        r.colour = Colour::Black;
        paint(&mut r.left, Colour::Red);
    }

    r
}

fn insert(x: Link, key: &str, created: &mut bool) -> Box<Node> {
    let mut r = match x {
        Some(r) => r,
        None => {
            *created = true;
            return Box::new(Node::new(key));
        }
    };

    match key.cmp(r.key.as_str()) {
        Ordering::Less => r.left = Some(insert(r.left.take(), key, created)),
        Ordering::Greater => r.right = Some(insert(r.right.take(), key, created)),
        Ordering::Equal => r.count = r.count.saturating_add(1),
    }

    fix(r)
}

// Get the left-most node of a subtree
fn left_most(r: &mut Node) -> &mut Node {
    match r.left {
        Some(ref mut y) => left_most(y),
        None => r,
    }
}

fn delete(x: Link, key: &str, removed: &mut bool) -> Link {
    let mut r = x?;

    match key.cmp(r.key.as_str()) {
        Ordering::Less => {
            r.left = delete(r.left.take(), key, removed);
            return Some(r);
        }
        Ordering::Greater => {
            r.right = delete(r.right.take(), key, removed);
            return Some(r);
        }
        Ordering::Equal => {}
    }

    // A leaf, or a node with only a right child
    if r.left.is_none() {
        *removed = true;
        return r.right.take();
    }

    // A node with only a left child
    if r.right.is_none() {
        *removed = true;
        return r.left.take();
    }

    // Two children: trade places with the successor, which then has at most a right child
    if let Some(y) = r.right.as_mut() {
        let successor = left_most(y);
        mem::swap(&mut r.key, &mut successor.key);
        mem::swap(&mut r.count, &mut successor.count);
    }
    r.right = delete(r.right.take(), key, removed);

    Some(r)
}

fn inorder<F>(x: &Link, visit: &mut F)
where
    F: FnMut(&str),
{
    if let Some(r) = x {
        inorder(&r.left, visit);
        visit(r.key.as_str());
        inorder(&r.right, visit);
    }
}

fn preorder<F>(x: &Link, visit: &mut F)
where
    F: FnMut(&str, Colour),
{
    if let Some(r) = x {
        visit(r.key.as_str(), r.colour);
        preorder(&r.left, visit);
        preorder(&r.right, visit);
    }
}

fn dump(x: &Link, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if let Some(r) = x {
        write!(f, "{:<7}{} ", r.colour.label(), r.key)?;
        dump(&r.left, f)?;
        dump(&r.right, f)?;
    }
    Ok(())
}

//-----------------------------------------------------------------------------------------------//

// DEBUG : Check for a red node with a red child
#[cfg(test)]
fn has_red_violation(x: &Link) -> bool {
    match x {
        None => false,
        Some(r) => {
            (r.colour == Colour::Red && has_red_child(x))
                || has_red_violation(&r.left)
                || has_red_violation(&r.right)
        }
    }
}

// DEBUG : Get the black-height of a subtree, or `None` if two paths disagree
#[cfg(test)]
fn black_height(x: &Link) -> Option<usize> {
    match x {
        None => Some(1),
        Some(r) => {
            let left = black_height(&r.left)?;
            let right = black_height(&r.right)?;
            if left != right {
                return None;
            }
            Some(left + usize::from(r.colour == Colour::Black))
        }
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Duplicates are counted against a single node
fn test_rbt_0() {
    use alloc::{string::ToString, vec};

    let mut tree = Rbt::new();
    for key in ["pear", "apple", "banana", "apple"] {
        tree.insert(key);
    }
    tree.check();

    debug_assert_eq!(tree.len(), 3);
    debug_assert!(tree.search("apple"));
    debug_assert_eq!(tree.occurrences("apple"), 2);
    debug_assert_eq!(tree.occurrences("pear"), 1);
    debug_assert!(!tree.search("kiwi"));
    debug_assert_eq!(tree.occurrences("kiwi"), 0);

    let mut visited = Vec::new();
    tree.preorder(|key, colour| visited.push((key.to_string(), colour)));
    debug_assert_eq!(
        visited,
        vec![
            ("banana".to_string(), Colour::Black),
            ("apple".to_string(), Colour::Red),
            ("pear".to_string(), Colour::Red),
        ]
    );

    let v: Vec<&str> = tree.iter().collect();
    debug_assert_eq!(v, vec!["apple", "banana", "pear"]);
}

#[test]
// Empty keys are ignored
fn test_rbt_1() {
    let mut tree = Rbt::new();
    tree.insert("");
    debug_assert!(tree.is_empty());
    debug_assert!(!tree.search(""));

    tree.insert("a");
    tree.insert("");
    tree.delete("");
    debug_assert_eq!(tree.len(), 1);
    debug_assert_eq!(tree.root_colour(), Some(Colour::Black));
}

#[test]
// Ascending inserts trigger rotations at every level
fn test_rbt_2() {
    use alloc::format;

    let mut tree = Rbt::new();
    let mut keys = Vec::new();
    for i in 0..512 {
        let key = format!("{i:04}");
        tree.insert(&key);
        tree.check();
        keys.push(key);
    }

    let v: Vec<&str> = tree.iter().collect();
    debug_assert_eq!(v.len(), keys.len());
    debug_assert!(v.iter().zip(keys.iter()).all(|(a, b)| a == b));

    // A balanced tree of 512 keys has a black-height well under the key count
    debug_assert!(tree.check() <= 11);
}

#[test]
// A stress test with random inserts, checking the invariants after every insert
fn test_rbt_3() {
    use alloc::string::ToString;
    use rand::prelude::*;

    const SEEDS: u64 = 50;
    const COUNT: usize = 400;

    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(1234567890 + seed);

        let mut tree = Rbt::new();
        for _ in 0..COUNT {
            let key = rng.random_range(0..COUNT / 2).to_string();
            tree.insert(&key);
            tree.check();
        }

        let mut rng = SmallRng::seed_from_u64(1234567890 + seed);

        for _ in 0..COUNT {
            let key = rng.random_range(0..COUNT / 2).to_string();
            debug_assert!(tree.search(&key));
        }

        let mut total = 0;
        tree.inorder(|key| total += tree.occurrences(key) as usize);
        debug_assert_eq!(total, COUNT);

        debug_assert!(!tree.search("not a number"));
    }
}

#[test]
// Inorder traversal and the iterator agree
fn test_rbt_4() {
    let tree: Rbt = ["mango", "fig", "date", "fig", "apple", "lime"].into_iter().collect();

    let mut keys = Vec::new();
    tree.inorder(|key| keys.push(CompactString::new(key)));

    let v: Vec<&str> = tree.iter().collect();
    debug_assert_eq!(keys, v);
    debug_assert_eq!(tree.iter().len(), 5);
}

#[test]
// Deleting leaves, single-child and two-child nodes
fn test_rbt_5() {
    use alloc::vec;

    let mut tree: Rbt = ["d", "b", "f", "a", "c", "e", "g", "b"].into_iter().collect();
    tree.check();

    // Not present
    tree.delete("z");
    debug_assert_eq!(tree.len(), 7);

    // Two children, the successor keeps its own count
    tree.delete("d");
    debug_assert!(!tree.search("d"));
    debug_assert_eq!(tree.occurrences("b"), 2);
    debug_assert_eq!(tree.occurrences("e"), 1);

    tree.delete("b");
    tree.delete("g");
    debug_assert_eq!(tree.len(), 4);

    let v: Vec<&str> = tree.iter().collect();
    debug_assert_eq!(v, vec!["a", "c", "e", "f"]);

    for key in ["a", "c", "e", "f"] {
        tree.delete(key);
    }
    debug_assert!(tree.is_empty());
    debug_assert_eq!(tree.len(), 0);
}

#[test]
// Deletion does not rebalance, so the black-height can drift
fn test_rbt_6() {
    let mut tree: Rbt = ["a", "b", "c", "d"].into_iter().collect();
    debug_assert_eq!(tree.check(), 3);

    tree.delete("a");
    debug_assert_eq!(black_height(&tree.root), None);

    // Ordering and membership survive
    debug_assert!(tree.search("b"));
    debug_assert!(tree.search("c"));
    debug_assert!(tree.search("d"));
    debug_assert!(!tree.search("a"));
}

#[test]
// A stress test with inserting and deleting
fn test_rbt_7() {
    use alloc::string::ToString;
    use rand::prelude::*;

    const COUNT: usize = 5000;

    let mut rng = SmallRng::seed_from_u64(5678901234);

    let mut tree = Rbt::new();
    for _ in 0..COUNT {
        tree.insert(&rng.random_range(0..usize::MAX).to_string());
    }

    let mut rng = SmallRng::seed_from_u64(5678901234);

    for i in 0..COUNT {
        let key = rng.random_range(0..usize::MAX).to_string();
        if i % 2 == 0 {
            tree.delete(&key);
            debug_assert!(!tree.search(&key));
        } else {
            debug_assert!(tree.search(&key));
        }
    }

    let v: Vec<&str> = tree.iter().collect();
    debug_assert_eq!(v.len(), tree.len());
    debug_assert!(v.windows(2).all(|pair| pair[0] < pair[1]));

    tree.clear();
    debug_assert!(tree.is_empty());
    debug_assert_eq!(tree.iter().next(), None);
}

#[test]
// The pre-order dump labels every key with its colour
fn test_rbt_8() {
    use alloc::string::ToString;

    let tree: Rbt = ["pear", "apple", "banana"].into_iter().collect();
    debug_assert_eq!(
        tree.to_string(),
        "black: banana red:   apple red:   pear "
    );
    debug_assert_eq!(Rbt::new().to_string(), "");
}

#[test]
// The occurrence count saturates instead of overflowing
fn test_rbt_9() {
    let mut tree = Rbt::new();
    tree.insert("echo");
    tree.insert("delta");

    if let Some(r) = tree.root.as_mut() {
        r.count = u32::MAX - 1;
    }
    tree.insert("echo");
    tree.insert("echo");
    tree.check();

    debug_assert_eq!(tree.occurrences("echo"), u32::MAX);
    debug_assert_eq!(tree.occurrences("delta"), 1);
    debug_assert_eq!(tree.len(), 2);
}
