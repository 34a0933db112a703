//! Splitting text into normalised words
#![warn(missing_docs)]

extern crate alloc;

use compact_str::CompactString;
use core::iter::FusedIterator;

/// The longest word produced. A longer run of letters is split, the remainder starting the next
/// word.
pub const MAX_WORD_LEN: usize = 79;

/// An iterator over the words of a text.
///
/// A word is a run of ASCII letters and digits, lowercased. Apostrophes inside a word are dropped
/// without ending it, so `don't` becomes `dont`. Every other byte separates words, including the
/// bytes of non-ASCII characters, so the text does not need to be valid UTF-8.
#[derive(Clone)]
pub struct Words<'a> {
    text: &'a [u8],
    at: usize,
}

impl<'a> Words<'a> {
    /// Constructor
    pub fn new(text: &'a [u8]) -> Words<'a> {
        Words { text, at: 0 }
    }
}

impl Iterator for Words<'_> {
    type Item = CompactString;

    fn next(&mut self) -> Option<CompactString> {
        // Skip to the start of the word
        while self.at < self.text.len() && !self.text[self.at].is_ascii_alphanumeric() {
            self.at += 1;
        }

        if self.at == self.text.len() {
            return None;
        }

        let mut word = CompactString::default();
        while self.at < self.text.len() && word.len() < MAX_WORD_LEN {
            let b = self.text[self.at];
            if b.is_ascii_alphanumeric() {
                word.push(char::from(b.to_ascii_lowercase()));
            } else if b != b'\'' {
                break;
            }
            self.at += 1;
        }

        Some(word)
    }
}

impl FusedIterator for Words<'_> {}

//-----------------------------------------------------------------------------------------------//

#[test]
// Words are lowercased and split on punctuation and whitespace
fn test_words_0() {
    use alloc::{vec, vec::Vec};

    let v: Vec<CompactString> = Words::new(b"  The cat's HAT, (and)\n42 dogs!\t").collect();
    debug_assert_eq!(v, vec!["the", "cats", "hat", "and", "42", "dogs"]);

    debug_assert_eq!(Words::new(b"").next(), None);
    debug_assert_eq!(Words::new(b" ,.;\n").next(), None);
}

#[test]
// Non-ASCII letters separate words
fn test_words_1() {
    use alloc::{vec, vec::Vec};

    let v: Vec<CompactString> = Words::new("café naïve-ok".as_bytes()).collect();
    debug_assert_eq!(v, vec!["caf", "na", "ve", "ok"]);
}

#[test]
// Long runs are split at the maximum word length
fn test_words_2() {
    use alloc::{string::String, vec::Vec};

    let mut text = String::new();
    for _ in 0..MAX_WORD_LEN + 5 {
        text.push('x');
    }

    let v: Vec<CompactString> = Words::new(text.as_bytes()).collect();
    debug_assert_eq!(v.len(), 2);
    debug_assert_eq!(v[0].len(), MAX_WORD_LEN);
    debug_assert_eq!(v[1], "xxxxx");
}

#[test]
// Bytes that are not valid UTF-8 separate words instead of failing
fn test_words_3() {
    use alloc::{vec, vec::Vec};

    let v: Vec<CompactString> = Words::new(b"apple\ncaf\xe9\nna\xefve\xff\xfeKIWI").collect();
    debug_assert_eq!(v, vec!["apple", "caf", "na", "ve", "kiwi"]);
}
