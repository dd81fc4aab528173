/*!
# Tries

A [`Trie`] stores its nodes in an arena (`Vec`), children are indexed by character.
Node `0` is the root, representing the empty prefix.
*/

use std::collections::BTreeSet;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use crate::grid::{Grid, GridPos};

type NodeIdx = usize;

const ROOT: NodeIdx = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, NodeIdx>,
    terminal: bool,
}

/// Prefix tree over words
///
/// # Examples
/// ```
/// use dsakit::strings::Trie;
///
/// let mut trie: Trie = ["apple", "app", "bat"].into_iter().collect();
/// assert!(trie.contains("app"));
/// assert!(!trie.contains("ap"));
/// assert!(trie.starts_with("ap"));
/// assert_eq!(trie.words_with_prefix("ap"), vec!["app", "apple"]);
/// assert!(!trie.insert("bat"));
/// assert_eq!(trie.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Inserts `word` and returns `true` if it was not present before
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = ROOT;
        for c in word.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }

        let inserted = !std::mem::replace(&mut self.nodes[node].terminal, true);
        self.words += inserted as usize;
        inserted
    }

    /// Node reached by following `prefix` from the root
    fn walk(&self, prefix: &str) -> Option<NodeIdx> {
        prefix
            .chars()
            .try_fold(ROOT, |node, c| self.child(node, c))
    }

    fn child(&self, node: NodeIdx, c: char) -> Option<NodeIdx> {
        self.nodes[node].children.get(&c).copied()
    }

    /// Returns `true` if `word` was inserted
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Returns `true` if some inserted word starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        !self.is_empty() && self.walk(prefix).is_some()
    }

    /// All words starting with `prefix`, sorted
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.walk(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut stack = vec![(start, prefix.to_string())];
        while let Some((node, word)) = stack.pop() {
            if self.nodes[node].terminal {
                words.push(word.clone());
            }
            for (&c, &child) in &self.nodes[node].children {
                let mut next = word.clone();
                next.push(c);
                stack.push((child, next));
            }
        }

        words.sort_unstable();
        words
    }

    /// Shortest inserted word that is a prefix of `word`
    pub fn shortest_prefix_of<'a>(&self, word: &'a str) -> Option<&'a str> {
        let mut node = ROOT;
        for (i, c) in word.char_indices() {
            node = self.child(node, c)?;
            if self.nodes[node].terminal {
                return Some(&word[..i + c.len_utf8()]);
            }
        }
        None
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

/// Dictionary whose lookups may contain `.` as a wildcard for any single character (LC 211)
///
/// # Examples
/// ```
/// use dsakit::strings::WordDictionary;
///
/// let mut dict = WordDictionary::new();
/// dict.add_word("bad");
/// dict.add_word("dad");
/// assert!(!dict.search("pad"));
/// assert!(dict.search(".ad"));
/// assert!(dict.search("b.."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    trie: Trie,
}

impl WordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) {
        self.trie.insert(word);
    }

    pub fn search(&self, pattern: &str) -> bool {
        let pattern = pattern.chars().collect_vec();
        let mut stack = vec![(ROOT, 0)];
        while let Some((node, matched)) = stack.pop() {
            let Some(&c) = pattern.get(matched) else {
                if self.trie.nodes[node].terminal {
                    return true;
                }
                continue;
            };

            if c == '.' {
                stack.extend(
                    self.trie.nodes[node]
                        .children
                        .values()
                        .map(|&child| (child, matched + 1)),
                );
            } else if let Some(child) = self.trie.child(node, c) {
                stack.push((child, matched + 1));
            }
        }
        false
    }
}

/// All `words` that can be traced on `board` through orthogonally adjacent cells, using every
/// cell at most once per word. Each word is reported once; the result is sorted (LC 212).
///
/// # Examples
/// ```
/// use dsakit::{grid::Grid, strings::find_words};
///
/// let board: Grid<char> = "oaan\netae\nihkr\niflv".parse().unwrap();
/// assert_eq!(find_words(&board, &["oath", "pea", "eat", "rain"]), vec!["eat", "oath"]);
/// ```
pub fn find_words<S: AsRef<str>>(board: &Grid<char>, words: &[S]) -> Vec<String> {
    let trie: Trie = words.iter().map(|w| w.as_ref()).collect();

    let mut found = BTreeSet::new();
    let mut on_path = Grid::new(board.rows(), board.cols(), false);
    let mut word = String::new();

    for start in board.positions() {
        if let Some(node) = trie.child(ROOT, board[start]) {
            trace_words(board, &trie, start, node, &mut on_path, &mut word, &mut found);
        }
    }

    debug!(words = words.len(), found = found.len(), "word search");
    found.into_iter().collect()
}

/// Depth-first search extending the path ending in `pos`, which spells the prefix of trie node `node`
fn trace_words(
    board: &Grid<char>,
    trie: &Trie,
    pos: GridPos,
    node: NodeIdx,
    on_path: &mut Grid<bool>,
    word: &mut String,
    found: &mut BTreeSet<String>,
) {
    on_path[pos] = true;
    word.push(board[pos]);

    if trie.nodes[node].terminal {
        found.insert(word.clone());
    }
    for next in board.neighbors4(pos) {
        if on_path[next] {
            continue;
        }
        if let Some(child) = trie.child(node, board[next]) {
            trace_words(board, trie, next, child, on_path, word, found);
        }
    }

    word.pop();
    on_path[pos] = false;
}

/// Replaces every word of `sentence` by its shortest root from `dictionary`, if any (LC 648).
/// Words are separated by single spaces.
///
/// # Examples
/// ```
/// use dsakit::strings::replace_words;
///
/// assert_eq!(
///     replace_words(&["cat", "bat", "rat"], "the cattle was rattled by the battery"),
///     "the cat was rat by the bat"
/// );
/// ```
pub fn replace_words<S: AsRef<str>>(dictionary: &[S], sentence: &str) -> String {
    let roots: Trie = dictionary.iter().collect();
    sentence
        .split(' ')
        .map(|word| roots.shortest_prefix_of(word).unwrap_or(word))
        .join(" ")
}

/// Longest word of `words` that can be built one character at a time from other words in `words`,
/// the lexicographically smallest among equally long ones; `None` if not even a single-character word exists (LC 720)
///
/// # Examples
/// ```
/// use dsakit::strings::longest_word;
///
/// let words = ["a", "banana", "app", "appl", "ap", "apply", "apple"];
/// assert_eq!(longest_word(&words).as_deref(), Some("apple"));
/// ```
pub fn longest_word<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let trie: Trie = words.iter().collect();

    // only terminal nodes are entered, so every prefix of a reached word is a word itself
    let mut best: Option<String> = None;
    let mut stack = vec![(ROOT, String::new())];
    while let Some((node, word)) = stack.pop() {
        if node != ROOT
            && best.as_ref().is_none_or(|b| {
                word.chars().count() > b.chars().count()
                    || (word.chars().count() == b.chars().count() && word < *b)
            })
        {
            best = Some(word.clone());
        }

        for (&c, &child) in &trie.nodes[node].children {
            if trie.nodes[child].terminal {
                let mut next = word.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
    }

    best
}
