//! Breadth-first search over implicit graphs whose nodes are generated on the fly
//! (lock combinations, words one letter apart, ...).

use std::collections::VecDeque;

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Returns the fewest number of steps from `start` to any state satisfying `is_target`,
/// where `successors` generates the states reachable in one step.
///
/// States already in `visited` are never entered, so the caller can forbid states by inserting them upfront.
/// Returns `None` if no target is reachable or `start` itself is forbidden.
///
/// # Examples
/// ```
/// use dsakit::algo::implicit_bfs_distance;
/// use fxhash::FxHashSet;
///
/// // from 1 to 10 by either adding one or doubling: 1, 2, 4, 5, 10
/// let steps = implicit_bfs_distance(
///     1u32,
///     &mut FxHashSet::default(),
///     |&x| [x + 1, 2 * x].into_iter().filter(|&y| y <= 10),
///     |&x| x == 10,
/// );
/// assert_eq!(steps, Some(4));
/// ```
pub fn implicit_bfs_distance<T, V, F, I>(
    start: T,
    visited: &mut V,
    mut successors: F,
    is_target: impl Fn(&T) -> bool,
) -> Option<usize>
where
    T: Clone,
    V: Set<T>,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    if visited.insert(start.clone()) {
        return None;
    }
    if is_target(&start) {
        return Some(0);
    }

    let mut frontier = VecDeque::from([(start, 0)]);
    while let Some((state, steps)) = frontier.pop_front() {
        for next in successors(&state) {
            if visited.insert(next.clone()) {
                continue;
            }
            if is_target(&next) {
                return Some(steps + 1);
            }
            frontier.push_back((next, steps + 1));
        }
    }

    None
}

const WHEELS: u32 = 4;
const COMBINATIONS: u32 = 10_000;

fn parse_combination(code: &str, line: usize) -> Result<Node> {
    if code.len() != WHEELS as usize || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse {
            line,
            reason: format!("expected {WHEELS} digits, found {code:?}"),
        });
    }
    Ok(code.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as Node))
}

/// Returns the fewest single-wheel turns to get a 4-wheel lock from `"0000"` to `target`
/// without ever showing one of the `deadends`, or `None` if that is impossible.
///
/// Fails with [`Error::Parse`] if a combination is not exactly four digits; `line` is the
/// 1-based position in `deadends`, or `0` for the target.
///
/// # Examples
/// ```
/// use dsakit::algo::open_lock;
///
/// assert_eq!(open_lock(&["0201", "0101", "0102", "1212", "2002"], "0202").unwrap(), Some(6));
/// assert_eq!(open_lock(&["0000"], "8888").unwrap(), None);
/// ```
pub fn open_lock<S: AsRef<str>>(deadends: &[S], target: &str) -> Result<Option<usize>> {
    let target = parse_combination(target, 0)?;

    let mut visited = NodeBitSet::new(COMBINATIONS);
    for (i, dead) in deadends.iter().enumerate() {
        visited.set_bit(parse_combination(dead.as_ref(), i + 1)?);
    }

    let turns = |&code: &Node| {
        (0..WHEELS).flat_map(move |wheel| {
            let unit = 10u32.pow(wheel);
            let digit = (code / unit) % 10;
            let rest = code - digit * unit;
            [(digit + 1) % 10, (digit + 9) % 10].map(|d| rest + d * unit)
        })
    };

    Ok(implicit_bfs_distance(0, &mut visited, turns, |&code| code == target))
}

/// Returns the number of words in the shortest sequence from `begin` to `end` in which consecutive
/// words differ in exactly one letter and every word after `begin` is in `words`.
/// Returns `None` if there is no such sequence.
///
/// # Examples
/// ```
/// use dsakit::algo::word_ladder;
///
/// let words = ["hot", "dot", "dog", "lot", "log", "cog"];
/// assert_eq!(word_ladder("hit", "cog", &words), Some(5));
/// assert_eq!(word_ladder("hit", "cog", &words[..5]), None);
/// ```
pub fn word_ladder<S: AsRef<str>>(begin: &str, end: &str, words: &[S]) -> Option<usize> {
    let dictionary: FxHashSet<&str> = words.iter().map(|w| w.as_ref()).collect();
    if !dictionary.contains(end) {
        return None;
    }

    let alphabet = dictionary
        .iter()
        .flat_map(|w| w.chars())
        .chain(begin.chars())
        .unique()
        .collect_vec();

    let one_letter_apart = |word: &String| {
        let chars = word.chars().collect_vec();
        let mut next = Vec::new();
        for i in 0..chars.len() {
            for &c in alphabet.iter().filter(|&&c| c != chars[i]) {
                let mut candidate = chars.clone();
                candidate[i] = c;
                let candidate: String = candidate.into_iter().collect();
                if dictionary.contains(candidate.as_str()) {
                    next.push(candidate);
                }
            }
        }
        next
    };

    let mut visited: FxHashSet<String> = FxHashSet::default();
    implicit_bfs_distance(begin.to_string(), &mut visited, one_letter_apart, |w| w == end)
        .map(|steps| steps + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock() {
        assert_eq!(
            open_lock(&["0201", "0101", "0102", "1212", "2002"], "0202").unwrap(),
            Some(6)
        );
        assert_eq!(open_lock(&["8888"], "0009").unwrap(), Some(1));
        assert_eq!(
            open_lock(
                &["8887", "8889", "8878", "8898", "8788", "8988", "7888", "9888"],
                "8888"
            )
            .unwrap(),
            None
        );
        assert_eq!(open_lock(&["0000"], "8888").unwrap(), None);
        assert_eq!(open_lock::<&str>(&[], "0000").unwrap(), Some(0));
        assert_eq!(open_lock::<&str>(&[], "5555").unwrap(), Some(20));

        assert!(matches!(
            open_lock(&["0000", "12a4"], "0001"),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            open_lock::<&str>(&[], "00001"),
            Err(Error::Parse { line: 0, .. })
        ));
    }

    #[test]
    fn ladder() {
        let words = ["hot", "dot", "dog", "lot", "log", "cog"];
        assert_eq!(word_ladder("hit", "cog", &words), Some(5));
        assert_eq!(word_ladder("hit", "cog", &words[..5]), None);
        assert_eq!(word_ladder("a", "c", &["a", "b", "c"]), Some(2));
        assert_eq!(word_ladder("hot", "dog", &["hot", "dog"]), None);
    }

    #[test]
    fn forbidden_start() {
        let mut visited = NodeBitSet::new(10);
        visited.set_bit(0);
        assert_eq!(
            implicit_bfs_distance(0, &mut visited, |&x: &Node| [(x + 1) % 10], |&x| x == 5),
            None
        );
    }
}
