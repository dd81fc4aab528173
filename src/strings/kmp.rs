/*!
# Knuth-Morris-Pratt

`prefix_function(p)[i]` is the length of the longest proper prefix of `p[..=i]` that is also a suffix of it.
Matching a haystack against the table never moves backwards in the haystack, giving `O(n + m)` search.
*/

use std::iter::FusedIterator;

/// Failure table of `pattern`
///
/// # Examples
/// ```
/// use dsakit::strings::prefix_function;
///
/// assert_eq!(prefix_function(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
/// ```
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = table[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        table[i] = len;
    }
    table
}

/// Iterator over the start offsets of all (possibly overlapping) occurrences of a needle.
/// See [`find_all`].
pub struct Matches<'a, T> {
    haystack: &'a [T],
    needle: &'a [T],
    table: Vec<usize>,
    pos: usize,
    matched: usize,
}

impl<'a, T: PartialEq> Matches<'a, T> {
    /// Creates the iterator; an empty needle matches at every offset `0..=haystack.len()`
    pub fn new(haystack: &'a [T], needle: &'a [T]) -> Self {
        Self {
            haystack,
            needle,
            table: prefix_function(needle),
            pos: 0,
            matched: 0,
        }
    }
}

impl<T: PartialEq> Iterator for Matches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.needle.len();
        if m == 0 {
            let pos = self.pos;
            self.pos += 1;
            return (pos <= self.haystack.len()).then_some(pos);
        }

        while self.pos < self.haystack.len() {
            let c = &self.haystack[self.pos];
            self.pos += 1;

            while self.matched > 0 && *c != self.needle[self.matched] {
                self.matched = self.table[self.matched - 1];
            }
            if *c == self.needle[self.matched] {
                self.matched += 1;
            }
            if self.matched == m {
                self.matched = self.table[m - 1];
                return Some(self.pos - m);
            }
        }

        None
    }
}

impl<T: PartialEq> FusedIterator for Matches<'_, T> {}

/// Offset of the first occurrence of `needle` in `haystack`; an empty needle matches at `0` (LC 28)
///
/// # Examples
/// ```
/// use dsakit::strings::find;
///
/// assert_eq!(find("sadbutsad", "sad"), Some(0));
/// assert_eq!(find("leetcode", "leeto"), None);
/// assert_eq!(find("abc", ""), Some(0));
/// ```
pub fn find(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Option<usize> {
    Matches::new(haystack.as_ref(), needle.as_ref()).next()
}

/// Offsets of all occurrences of `needle` in `haystack`, including overlapping ones
///
/// # Examples
/// ```
/// use dsakit::strings::find_all;
///
/// assert_eq!(find_all("aaaa", "aa"), vec![0, 1, 2]);
/// assert_eq!(find_all(b"abcab".as_slice(), b"ab"), vec![0, 3]);
/// ```
pub fn find_all(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Vec<usize> {
    Matches::new(haystack.as_ref(), needle.as_ref()).collect()
}

/// Shortest palindrome obtained by prepending characters to `s` (LC 214)
///
/// # Examples
/// ```
/// use dsakit::strings::shortest_palindrome;
///
/// assert_eq!(shortest_palindrome("aacecaaa"), "aaacecaaa");
/// assert_eq!(shortest_palindrome("abcd"), "dcbabcd");
/// ```
pub fn shortest_palindrome(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();

    // the longest palindromic prefix is the longest prefix of `s` that is a suffix of `rev(s)`;
    // `None` separates both halves so that matches cannot cross it
    let combined: Vec<Option<char>> = chars
        .iter()
        .copied()
        .map(Some)
        .chain(std::iter::once(None))
        .chain(chars.iter().rev().copied().map(Some))
        .collect();
    let palindrome = prefix_function(&combined).last().copied().unwrap_or(0);

    chars[palindrome..]
        .iter()
        .rev()
        .chain(chars.iter())
        .collect()
}

/// Returns `true` if `s` consists of two or more copies of one of its substrings (LC 459)
///
/// # Examples
/// ```
/// use dsakit::strings::has_repeated_substring_pattern;
///
/// assert!(has_repeated_substring_pattern("abcabcabc"));
/// assert!(!has_repeated_substring_pattern("aba"));
/// ```
pub fn has_repeated_substring_pattern(s: impl AsRef<[u8]>) -> bool {
    let s = s.as_ref();
    let n = s.len();
    let Some(&border) = prefix_function(s).last() else {
        return false;
    };

    // the smallest period divides the length iff the string is a proper repetition
    border > 0 && n % (n - border) == 0
}

/// Fewest copies of `a` whose concatenation contains `b`, or `None` if no number suffices (LC 686)
///
/// # Examples
/// ```
/// use dsakit::strings::repeated_string_match;
///
/// assert_eq!(repeated_string_match("abcd", "cdabcdab"), Some(3));
/// assert_eq!(repeated_string_match("a", "aa"), Some(2));
/// assert_eq!(repeated_string_match("abc", "w"), None);
/// ```
pub fn repeated_string_match(a: &str, b: &str) -> Option<usize> {
    if b.is_empty() {
        return Some(0);
    }
    if a.is_empty() {
        return None;
    }

    // `b` can only start within the first copy, so one copy beyond covering `b` suffices
    let copies = b.len().div_ceil(a.len());
    let haystack = a.repeat(copies + 1);
    let first = find(&haystack, b)?;

    Some(if first + b.len() <= copies * a.len() {
        copies
    } else {
        copies + 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn failure_table() {
        assert_eq!(prefix_function::<u8>(&[]), Vec::<usize>::new());
        assert_eq!(prefix_function(b"abcabcd"), vec![0, 0, 0, 1, 2, 3, 0]);
        assert_eq!(prefix_function(b"aaaa"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn matches_naive_search() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        for _ in 0..200 {
            let haystack = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(b'a'..b'c'))
                .collect_vec();
            let needle = (0..rng.random_range(1..5))
                .map(|_| rng.random_range(b'a'..b'c'))
                .collect_vec();

            let expected = haystack
                .windows(needle.len())
                .positions(|w| w == needle.as_slice())
                .collect_vec();
            assert_eq!(find_all(&haystack, &needle), expected);
            assert_eq!(find(&haystack, &needle), expected.first().copied());
        }
    }

    #[test]
    fn empty_needle() {
        assert_eq!(find("", ""), Some(0));
        assert_eq!(find_all("ab", ""), vec![0, 1, 2]);
        assert_eq!(find("", "a"), None);
    }

    #[test]
    fn palindromes() {
        assert_eq!(shortest_palindrome(""), "");
        assert_eq!(shortest_palindrome("a"), "a");
        assert_eq!(shortest_palindrome("aba"), "aba");
        assert_eq!(shortest_palindrome("ab"), "bab");
        assert_eq!(shortest_palindrome("äbc"), "cbäbc");
    }

    #[test]
    fn repetitions() {
        assert!(has_repeated_substring_pattern("abab"));
        assert!(has_repeated_substring_pattern("aaaa"));
        assert!(!has_repeated_substring_pattern("a"));
        assert!(!has_repeated_substring_pattern(""));
        assert!(!has_repeated_substring_pattern("abaaba a"));
        assert!(has_repeated_substring_pattern("abaaba"));

        assert_eq!(repeated_string_match("abc", "cabcabca"), Some(4));
        assert_eq!(repeated_string_match("ab", ""), Some(0));
        assert_eq!(repeated_string_match("abc", "abc"), Some(1));
        assert_eq!(repeated_string_match("aa", "a"), Some(1));
        assert_eq!(repeated_string_match("ab", "ba"), Some(2));
    }
}
