/*!
# Strings

Exact pattern matching via [KMP failure tables](kmp), polynomial [rolling hashes](rolling_hash) and
prefix [tries](trie).

Matching functions work on bytes (`impl AsRef<[u8]>`), so they accept `&str`, `String` and raw file contents alike;
offsets are byte offsets. Functions that return substrings work on `char`s.
*/

pub mod kmp;
pub mod rolling_hash;
pub mod trie;

pub use kmp::*;
pub use rolling_hash::*;
pub use trie::*;
