//! ## Introduction
//!
//! This crate implements a word index for spell checking. A dictionary of words is loaded into a
//! hash table, then a stream of words is checked against it and the words missing from the
//! dictionary are reported.
//!
//! Each bucket of the hash table holds a container of the words that hash to it. A container is
//! one of two interchangeable strategies, chosen once for the whole table:
//!
//! - A flex array: an unordered growable array of words, searched linearly. Duplicates are stored
//!   again each time.
//! - A red-black tree: a self-balancing binary search tree, searched in logarithmic time.
//!   Duplicates are counted against a single node.
//!
//! ## Contents
//!
//! <center>
//!
//! | Type          | Stores            | Search      | Iterator            |
//! |:--------------|:------------------|:------------|---------------------|
//! | `Rbt`         | String/Count      | Ordered     | `RbtIterator`       |
//! | `FlexArray`   | String            | Linear      | `FlexArrayIterator` |
//! | `Container`   | Either of above   | Either      | `visit()`           |
//! | `HashTable`   | Container/Bucket  | Hash        | `visit()`           |
//!
//! </center>
//!
//! The `Words` iterator splits text into the lowercased words stored in the table. The containers
//! themselves never normalise the words they are given.
//!
//! The crate is `#![no_std]`, it only needs an allocator.

#![no_std]
#![warn(missing_docs)]

mod container;
mod flex;
mod rbt;
mod table;
mod words;

pub use container::*;
pub use flex::*;
pub use rbt::*;
pub use table::*;
pub use words::*;
