/*!
# Rolling Hashes

[`RollingHash`] precomputes prefix hashes of a sequence under two moduli, so that the hash of any window
is available in `O(1)`. Both residues are packed into one `u64`; equal windows always hash equally,
and distinct windows collide with probability about `10^-18`.
*/

use std::ops::{Range, RangeBounds};

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::trace;

use crate::structures::resolve_range;

const MOD1: u64 = 1_000_000_007;
const MOD2: u64 = 1_000_000_009;
const BASE1: u64 = 91_138_233;
const BASE2: u64 = 97_266_353;

/// Prefix hashes and powers of a sequence under two polynomial hashes
#[derive(Debug, Clone)]
pub struct RollingHash {
    prefix: Vec<(u64, u64)>,
    powers: Vec<(u64, u64)>,
}

impl RollingHash {
    /// Hashes the symbols of `values`; a symbol `x` contributes `x + 1` so that zeros are not ignored
    pub fn new<T: Copy + Into<u64>>(values: &[T]) -> Self {
        let mut prefix = Vec::with_capacity(values.len() + 1);
        let mut powers = Vec::with_capacity(values.len() + 1);
        prefix.push((0, 0));
        powers.push((1, 1));

        for &x in values {
            let x = Into::<u64>::into(x) + 1;
            let (h1, h2) = *prefix.last().unwrap_or(&(0, 0));
            let (p1, p2) = *powers.last().unwrap_or(&(1, 1));
            prefix.push(((h1 * BASE1 + x % MOD1) % MOD1, (h2 * BASE2 + x % MOD2) % MOD2));
            powers.push((p1 * BASE1 % MOD1, p2 * BASE2 % MOD2));
        }

        Self { prefix, powers }
    }

    /// Number of hashed symbols
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hash of the window `range`
    ///
    /// # Examples
    /// ```
    /// use dsakit::strings::RollingHash;
    ///
    /// let hash = RollingHash::new(b"abcab");
    /// assert_eq!(hash.hash(0..2), hash.hash(3..5));
    /// assert_ne!(hash.hash(0..2), hash.hash(1..3));
    /// ```
    pub fn hash(&self, range: impl RangeBounds<usize>) -> u64 {
        let (start, end) = resolve_range(range, self.len());
        let (l1, l2) = self.prefix[start];
        let (r1, r2) = self.prefix[end];
        let (p1, p2) = self.powers[end - start];

        let x1 = (r1 + MOD1 - l1 * p1 % MOD1) % MOD1;
        let x2 = (r2 + MOD2 - l2 * p2 % MOD2) % MOD2;
        (x1 << 32) ^ x2
    }

    /// Hashes of all windows of length `len`, in order of their start
    pub fn windows(&self, len: usize) -> impl Iterator<Item = u64> + '_ {
        (0..(self.len() + 1).saturating_sub(len)).map(move |i| self.hash(i..i + len))
    }
}

/// Offset of the first occurrence of `needle` in `haystack` by Rabin-Karp; hash hits are verified,
/// so the result is exact. An empty needle matches at `0`.
///
/// # Examples
/// ```
/// use dsakit::strings::rabin_karp_find;
///
/// assert_eq!(rabin_karp_find("hello world", "o w"), Some(4));
/// assert_eq!(rabin_karp_find("hello", "world"), None);
/// ```
pub fn rabin_karp_find(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Option<usize> {
    let (haystack, needle) = (haystack.as_ref(), needle.as_ref());
    if needle.len() > haystack.len() {
        return None;
    }

    let target = RollingHash::new(needle).hash(..);
    RollingHash::new(haystack)
        .windows(needle.len())
        .positions(|h| h == target)
        .find(|&i| &haystack[i..i + needle.len()] == needle)
}

const DNA_WINDOW: usize = 10;

/// All 10-letter sequences that occur more than once in the DNA string `s`, sorted (LC 187).
///
/// Windows are encoded with two bits per nucleotide and rolled along `s`; windows containing a
/// letter other than `A`, `C`, `G` or `T` are skipped.
///
/// # Examples
/// ```
/// use dsakit::strings::repeated_dna_sequences;
///
/// assert_eq!(
///     repeated_dna_sequences("AAAAACCCCCAAAAACCCCCCAAAAAGGGTTT"),
///     vec!["AAAAACCCCC", "CCCCCAAAAA"]
/// );
/// assert_eq!(repeated_dna_sequences("AAAAAAAAAAAAA"), vec!["AAAAAAAAAA"]);
/// ```
pub fn repeated_dna_sequences(s: &str) -> Vec<String> {
    let mask = (1u32 << (2 * DNA_WINDOW)) - 1;
    let mut counts: FxHashMap<u32, (usize, usize)> = FxHashMap::default();

    let mut code = 0u32;
    let mut valid = 0;
    for (i, c) in s.bytes().enumerate() {
        let bits = match c {
            b'A' => 0,
            b'C' => 1,
            b'G' => 2,
            b'T' => 3,
            _ => {
                valid = 0;
                continue;
            }
        };
        code = ((code << 2) | bits) & mask;
        valid += 1;

        if valid >= DNA_WINDOW {
            counts.entry(code).or_insert((i + 1 - DNA_WINDOW, 0)).1 += 1;
        }
    }

    counts
        .into_values()
        .filter(|&(_, count)| count > 1)
        .map(|(start, _)| s[start..start + DNA_WINDOW].to_string())
        .sorted()
        .collect()
}

/// Start of some window of length `len` that occurs at least twice, verified on hash hits
fn find_duplicate_window(chars: &[char], hashes: &RollingHash, len: usize) -> Option<usize> {
    let mut seen: FxHashMap<u64, usize> = FxHashMap::default();
    for (i, h) in hashes.windows(len).enumerate() {
        match seen.get(&h) {
            Some(&j) if chars[j..j + len] == chars[i..i + len] => return Some(j),
            Some(_) => {}
            None => {
                seen.insert(h, i);
            }
        }
    }
    None
}

/// A longest substring that occurs at least twice in `s` (occurrences may overlap),
/// or `None` if no character repeats (LC 1044).
///
/// Binary searches the length, as a duplicate of length `l` implies one of every length below `l`.
///
/// # Examples
/// ```
/// use dsakit::strings::longest_duplicate_substring;
///
/// assert_eq!(longest_duplicate_substring("banana").as_deref(), Some("ana"));
/// assert_eq!(longest_duplicate_substring("abcd"), None);
/// ```
pub fn longest_duplicate_substring(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let hashes = RollingHash::new(&chars);

    let mut best: Option<Range<usize>> = None;
    let (mut lo, mut hi) = (1, chars.len().saturating_sub(1));
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        trace!(len = mid, "probe duplicate length");
        match find_duplicate_window(&chars, &hashes, mid) {
            Some(start) => {
                best = Some(start..start + mid);
                lo = mid + 1;
            }
            None => hi = mid - 1,
        }
    }

    best.map(|range| chars[range].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn window_hashes_agree_with_fresh_hashes() {
        let text = b"mississippi";
        let hash = RollingHash::new(text);
        assert_eq!(hash.len(), 11);
        for len in 0..=text.len() {
            for (i, h) in hash.windows(len).enumerate() {
                assert_eq!(h, RollingHash::new(&text[i..i + len]).hash(..));
            }
        }
        assert_eq!(hash.hash(1..4), hash.hash(4..7)); // "ssi"
        assert_eq!(hash.windows(12).count(), 0);
    }

    #[test]
    fn zero_symbols_count() {
        let hash = RollingHash::new(&[0u8, 0, 0]);
        assert_ne!(hash.hash(0..1), hash.hash(0..2));
    }

    #[test]
    fn rabin_karp() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        for _ in 0..200 {
            let haystack: Vec<u8> = (0..rng.random_range(0..30))
                .map(|_| rng.random_range(b'x'..=b'z'))
                .collect();
            let needle: Vec<u8> = (0..rng.random_range(0..4))
                .map(|_| rng.random_range(b'x'..=b'z'))
                .collect();
            assert_eq!(
                rabin_karp_find(&haystack, &needle),
                crate::strings::find(&haystack, &needle)
            );
        }
    }

    #[test]
    fn dna() {
        assert!(repeated_dna_sequences("ACGT").is_empty());
        assert_eq!(
            repeated_dna_sequences("GAGAGAGAGAGAGNGAGAGAGAGAG"),
            vec!["AGAGAGAGAG", "GAGAGAGAGA"]
        );
        assert_eq!(
            repeated_dna_sequences("AAAAAAAAAANAAAAAAAAAA"),
            vec!["AAAAAAAAAA"]
        );
    }

    #[test]
    fn duplicates() {
        assert_eq!(longest_duplicate_substring(""), None);
        assert_eq!(longest_duplicate_substring("a"), None);
        assert_eq!(longest_duplicate_substring("aa").as_deref(), Some("a"));
        assert_eq!(longest_duplicate_substring("aaaa").as_deref(), Some("aaa"));
        assert_eq!(
            longest_duplicate_substring("xyzabcxyzabd").as_deref(),
            Some("xyzab")
        );
        assert_eq!(longest_duplicate_substring("ñañaña").as_deref(), Some("ñaña"));
    }
}
