/*!
# Disjoint-Set Problems

Problems solved by merging elements in a [`UnionFind`]: redundant edges, provinces, network repairs,
equality constraints, index swaps, account merging, stone removal, slash regions, and
division chains (which uses a union-find with multiplicative weights).
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Returns the last edge of `edges` that closes a cycle, i.e. the edge to remove so that the remaining
/// edges form a tree. Nodes are 1-based labels with `n = edges.len()`.
/// Returns `None` if the edges are acyclic.
///
/// Fails if a label is outside `1..=n`.
///
/// # Examples
/// ```
/// use dsakit::algo::redundant_connection;
///
/// assert_eq!(redundant_connection(&[(1, 2), (1, 3), (2, 3)]).unwrap(), Some((2, 3)));
/// ```
pub fn redundant_connection(edges: &[(u32, u32)]) -> Result<Option<(u32, u32)>> {
    let n = edges.len() as NumNodes;
    let mut uf = UnionFind::new(n);
    let mut redundant = None;

    for &(a, b) in edges {
        if !uf.union(check_label(a, n)?, check_label(b, n)?) {
            redundant = Some((a, b));
        }
    }

    Ok(redundant)
}

/// Directed variant of [`redundant_connection`]: `edges` formed a rooted tree before one extra
/// edge was added. Returns the edge whose removal restores a rooted tree, preferring the last such edge.
///
/// Fails if a label is outside `1..=n` with `n = edges.len()`.
///
/// # Examples
/// ```
/// use dsakit::algo::redundant_directed_connection;
///
/// assert_eq!(redundant_directed_connection(&[(1, 2), (1, 3), (2, 3)]).unwrap(), Some((2, 3)));
/// assert_eq!(
///     redundant_directed_connection(&[(1, 2), (2, 3), (3, 4), (4, 1), (1, 5)]).unwrap(),
///     Some((4, 1))
/// );
/// ```
pub fn redundant_directed_connection(edges: &[(u32, u32)]) -> Result<Option<(u32, u32)>> {
    let n = edges.len() as NumNodes;

    // a node with two parents: both incoming edges are candidates
    let mut parent = vec![None; n as usize];
    let mut candidates = None;
    for &(a, b) in edges {
        let v = check_label(b, n)?;
        check_label(a, n)?;
        match parent[v as usize] {
            None => parent[v as usize] = Some(a),
            Some(first) => {
                candidates = Some(((first, b), (a, b)));
                break;
            }
        }
    }

    let mut uf = UnionFind::new(n);
    for &(a, b) in edges {
        if candidates.is_some_and(|(_, second)| second == (a, b)) {
            continue;
        }
        if !uf.union(check_label(a, n)?, check_label(b, n)?) {
            return Ok(Some(candidates.map_or((a, b), |(first, _)| first)));
        }
    }

    Ok(candidates.map(|(_, second)| second))
}

/// Returns the number of groups of cities connected directly or indirectly,
/// where `is_connected[i][j]` states whether `i` and `j` are directly connected.
///
/// Fails with [`Error::RaggedGrid`] if `is_connected` is not square.
///
/// # Examples
/// ```
/// use dsakit::algo::count_provinces;
///
/// let m = [vec![true, true, false], vec![true, true, false], vec![false, false, true]];
/// assert_eq!(count_provinces(&m).unwrap(), 2);
/// ```
pub fn count_provinces(is_connected: &[Vec<bool>]) -> Result<usize> {
    let n = is_connected.len();
    let mut uf = UnionFind::new(n as NumNodes);

    for (i, row) in is_connected.iter().enumerate() {
        if row.len() != n {
            return Err(Error::RaggedGrid {
                row: i,
                expected: n,
                found: row.len(),
            });
        }
        for j in (i + 1..n).filter(|&j| row[j]) {
            uf.union(i as Node, j as Node);
        }
    }

    Ok(uf.number_of_sets() as usize)
}

/// Returns the minimum number of cables that have to be moved to connect all `n` computers,
/// or `None` if there are fewer than `n - 1` cables.
///
/// Fails if a computer is `>= n`.
///
/// # Examples
/// ```
/// use dsakit::algo::operations_to_connect;
///
/// assert_eq!(operations_to_connect(4, &[(0, 1), (0, 2), (1, 2)]).unwrap(), Some(1));
/// assert_eq!(operations_to_connect(6, &[(0, 1), (0, 2), (0, 3), (1, 2)]).unwrap(), None);
/// ```
pub fn operations_to_connect(n: NumNodes, connections: &[(Node, Node)]) -> Result<Option<usize>> {
    let edges = checked_edges(n, connections)?;
    if edges.len() + 1 < n as usize {
        return Ok(None);
    }

    let mut uf = UnionFind::new(n);
    for Edge(u, v) in edges {
        uf.union(u, v);
    }

    Ok(Some(uf.number_of_sets().saturating_sub(1) as usize))
}

/// Returns `true` if values can be assigned to the single-letter variables `a..=z` such that all
/// equations of the form `"x==y"` and `"x!=y"` hold.
///
/// Fails with [`Error::Parse`] (1-based line = position in `equations`) on a malformed equation.
///
/// # Examples
/// ```
/// use dsakit::algo::equations_possible;
///
/// assert!(!equations_possible(&["a==b", "b!=a"]).unwrap());
/// assert!(equations_possible(&["b==a", "a==b"]).unwrap());
/// ```
pub fn equations_possible<S: AsRef<str>>(equations: &[S]) -> Result<bool> {
    let parsed = equations
        .iter()
        .enumerate()
        .map(|(i, eq)| parse_equation(eq.as_ref(), i + 1))
        .collect::<Result<Vec<_>>>()?;

    let mut uf = UnionFind::new(26);
    for &(x, equal, y) in &parsed {
        if equal {
            uf.union(x, y);
        }
    }

    Ok(parsed
        .iter()
        .filter(|(_, equal, _)| !equal)
        .all(|&(x, _, y)| !uf.same_set(x, y)))
}

fn parse_equation(eq: &str, line: usize) -> Result<(Node, bool, Node)> {
    let variable = |c: u8| {
        c.is_ascii_lowercase()
            .then(|| (c - b'a') as Node)
            .ok_or_else(|| Error::Parse {
                line,
                reason: format!("invalid variable {:?} in {eq:?}", c as char),
            })
    };

    match eq.as_bytes() {
        &[x, op, b'=', y] if op == b'=' || op == b'!' => Ok((variable(x)?, op == b'=', variable(y)?)),
        _ => Err(Error::Parse {
            line,
            reason: format!("expected `x==y` or `x!=y`, found {eq:?}"),
        }),
    }
}

/// Returns the lexicographically smallest string obtainable by swapping the characters at any of the
/// index `pairs` arbitrarily often.
///
/// Fails if an index is not a valid character position.
///
/// # Examples
/// ```
/// use dsakit::algo::smallest_string_with_swaps;
///
/// assert_eq!(smallest_string_with_swaps("dcab", &[(0, 3), (1, 2), (0, 2)]).unwrap(), "abcd");
/// ```
pub fn smallest_string_with_swaps(s: &str, pairs: &[(usize, usize)]) -> Result<String> {
    let mut chars = s.chars().collect_vec();
    let n = chars.len() as NumNodes;
    // indices beyond `Node` are out of range for any string we can index
    let narrow = |i: usize| Node::try_from(i).unwrap_or(INVALID_NODE);
    let edges = checked_edges(n, pairs.iter().map(|&(a, b)| (narrow(a), narrow(b))))?;

    let mut uf = UnionFind::new(n);
    for Edge(u, v) in edges {
        uf.union(u, v);
    }

    // indices within a set are sorted, so the smallest characters go to the smallest indices
    for set in uf.sets() {
        let sorted = set.iter().map(|&i| chars[i as usize]).sorted_unstable().collect_vec();
        for (i, c) in set.into_iter().zip(sorted) {
            chars[i as usize] = c;
        }
    }

    Ok(chars.into_iter().collect())
}

/// Merges accounts `[name, email, ...]` that share at least one email.
///
/// Every merged account carries the name of its first account followed by its sorted, unique emails.
/// Merged accounts are ordered by the position of their first account.
///
/// # Examples
/// ```
/// use dsakit::algo::accounts_merge;
///
/// let accounts = vec![
///     vec!["John".to_string(), "a@x".to_string(), "b@x".to_string()],
///     vec!["Mary".to_string(), "m@x".to_string()],
///     vec!["John".to_string(), "c@x".to_string(), "a@x".to_string()],
/// ];
/// assert_eq!(
///     accounts_merge(&accounts),
///     vec![vec!["John", "a@x", "b@x", "c@x"], vec!["Mary", "m@x"]]
/// );
/// ```
pub fn accounts_merge<S: AsRef<str>>(accounts: &[Vec<S>]) -> Vec<Vec<String>> {
    let mut uf = UnionFind::new(accounts.len() as NumNodes);
    let mut owner: FxHashMap<&str, Node> = FxHashMap::default();

    for (i, account) in accounts.iter().enumerate() {
        for email in account.iter().skip(1) {
            let first = *owner.entry(email.as_ref()).or_insert(i as Node);
            uf.union(first, i as Node);
        }
    }

    let merged = uf
        .sets()
        .into_iter()
        .map(|set| {
            let name = accounts[set[0] as usize]
                .first()
                .map_or_else(String::new, |s| s.as_ref().to_string());
            let emails = set
                .iter()
                .flat_map(|&i| accounts[i as usize].iter().skip(1).map(|e| e.as_ref()))
                .sorted_unstable()
                .dedup()
                .map(str::to_string);
            std::iter::once(name).chain(emails).collect_vec()
        })
        .collect_vec();

    debug!(accounts = accounts.len(), merged = merged.len(), "merged accounts");
    merged
}

/// Returns the maximum number of stones that can be removed, where a stone may be removed
/// while another remaining stone shares its row or column.
///
/// # Examples
/// ```
/// use dsakit::algo::most_stones_removed;
///
/// assert_eq!(most_stones_removed(&[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]), 5);
/// ```
pub fn most_stones_removed(stones: &[(i32, i32)]) -> usize {
    let mut uf = UnionFind::new(stones.len() as NumNodes);
    let mut first_in_row: FxHashMap<i32, Node> = FxHashMap::default();
    let mut first_in_col: FxHashMap<i32, Node> = FxHashMap::default();

    for (i, &(row, col)) in stones.iter().enumerate() {
        let i = i as Node;
        let r = *first_in_row.entry(row).or_insert(i);
        let c = *first_in_col.entry(col).or_insert(i);
        uf.union(r, i);
        uf.union(c, i);
    }

    stones.len() - uf.number_of_sets() as usize
}

/// Returns the number of regions an `n x n` grid is cut into by `'/'` and `'\\'` characters.
/// Every other character is treated as blank.
///
/// Fails with [`Error::RaggedGrid`] if a row does not have exactly `n` characters.
///
/// # Examples
/// ```
/// use dsakit::algo::regions_by_slashes;
///
/// assert_eq!(regions_by_slashes(&[" /", "/ "]).unwrap(), 2);
/// assert_eq!(regions_by_slashes(&["/\\", "\\/"]).unwrap(), 5);
/// ```
pub fn regions_by_slashes<S: AsRef<str>>(grid: &[S]) -> Result<usize> {
    const TOP: Node = 0;
    const RIGHT: Node = 1;
    const BOTTOM: Node = 2;
    const LEFT: Node = 3;

    let n = grid.len();
    let id = |r: usize, c: usize, part: Node| ((r * n + c) as Node) * 4 + part;
    let mut uf = UnionFind::new((n * n * 4) as NumNodes);

    for (r, row) in grid.iter().enumerate() {
        let row = row.as_ref().chars().collect_vec();
        if row.len() != n {
            return Err(Error::RaggedGrid {
                row: r,
                expected: n,
                found: row.len(),
            });
        }

        for (c, &ch) in row.iter().enumerate() {
            match ch {
                '/' => {
                    uf.union(id(r, c, TOP), id(r, c, LEFT));
                    uf.union(id(r, c, RIGHT), id(r, c, BOTTOM));
                }
                '\\' => {
                    uf.union(id(r, c, TOP), id(r, c, RIGHT));
                    uf.union(id(r, c, BOTTOM), id(r, c, LEFT));
                }
                _ => {
                    uf.union(id(r, c, TOP), id(r, c, RIGHT));
                    uf.union(id(r, c, RIGHT), id(r, c, BOTTOM));
                    uf.union(id(r, c, BOTTOM), id(r, c, LEFT));
                }
            }

            if r + 1 < n {
                uf.union(id(r, c, BOTTOM), id(r + 1, c, TOP));
            }
            if c + 1 < n {
                uf.union(id(r, c, RIGHT), id(r, c + 1, LEFT));
            }
        }
    }

    Ok(uf.number_of_sets() as usize)
}

/// Union-find whose elements carry the ratio to their parent, so that the ratio of any two
/// elements in the same set can be read off their paths to the root.
struct RatioUnionFind {
    parent: Vec<Node>,
    ratio: Vec<f64>,
}

impl RatioUnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n as Node).collect(),
            ratio: vec![1.0; n],
        }
    }

    /// Returns `(root, u / root)` and compresses the path
    fn find(&mut self, u: Node) -> (Node, f64) {
        let p = self.parent[u as usize];
        if p == u {
            return (u, 1.0);
        }

        let (root, p_to_root) = self.find(p);
        self.parent[u as usize] = root;
        self.ratio[u as usize] *= p_to_root;
        (root, self.ratio[u as usize])
    }

    /// Records `u / v = value`
    fn union(&mut self, u: Node, v: Node, value: f64) {
        let (ru, u_to_ru) = self.find(u);
        let (rv, v_to_rv) = self.find(v);
        if ru != rv {
            // ru / rv = (u / u_to_ru) / (v / v_to_rv) = value * v_to_rv / u_to_ru
            self.parent[ru as usize] = rv;
            self.ratio[ru as usize] = value * v_to_rv / u_to_ru;
        }
    }

    /// Returns `u / v` if both are in the same set
    fn ratio(&mut self, u: Node, v: Node) -> Option<f64> {
        let (ru, u_to_ru) = self.find(u);
        let (rv, v_to_rv) = self.find(v);
        (ru == rv).then(|| u_to_ru / v_to_rv)
    }
}

/// Given equations `a / b = value`, answers every query `x / y`, or `None` if it cannot be derived
/// (including when a variable never occurs in an equation).
///
/// Fails with [`Error::Parse`] if `equations` and `values` differ in length; `line` is the 1-based
/// position of the first equation or value without a partner.
///
/// # Examples
/// ```
/// use dsakit::algo::evaluate_division;
///
/// let answers =
///     evaluate_division(&[("a", "b"), ("b", "c")], &[2.0, 3.0], &[("a", "c"), ("c", "a"), ("a", "e")]);
/// assert_eq!(answers.unwrap(), vec![Some(6.0), Some(1.0 / 6.0), None]);
/// ```
pub fn evaluate_division<S: AsRef<str>>(
    equations: &[(S, S)],
    values: &[f64],
    queries: &[(S, S)],
) -> Result<Vec<Option<f64>>> {
    if equations.len() != values.len() {
        let missing = if equations.len() > values.len() { "value" } else { "equation" };
        return Err(Error::Parse {
            line: equations.len().min(values.len()) + 1,
            reason: format!("{missing} missing"),
        });
    }

    let mut ids: FxHashMap<&str, Node> = FxHashMap::default();
    for (a, b) in equations {
        for x in [a.as_ref(), b.as_ref()] {
            let next = ids.len() as Node;
            ids.entry(x).or_insert(next);
        }
    }

    let mut uf = RatioUnionFind::new(ids.len());
    for ((a, b), &value) in equations.iter().zip(values) {
        uf.union(ids[a.as_ref()], ids[b.as_ref()], value);
    }

    Ok(queries
        .iter()
        .map(|(x, y)| {
            let (&x, &y) = (ids.get(x.as_ref())?, ids.get(y.as_ref())?);
            uf.ratio(x, y)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redundant_edges() {
        assert_eq!(
            redundant_connection(&[(1, 2), (1, 3), (2, 3)]).unwrap(),
            Some((2, 3))
        );
        assert_eq!(
            redundant_connection(&[(1, 2), (2, 3), (3, 4), (1, 4), (1, 5)]).unwrap(),
            Some((1, 4))
        );
        assert_eq!(redundant_connection(&[(1, 2), (2, 3), (3, 1)]).unwrap(), Some((3, 1)));
        assert!(redundant_connection(&[(1, 7)]).is_err());
    }

    #[test]
    fn redundant_directed_edges() {
        // two parents, no cycle
        assert_eq!(
            redundant_directed_connection(&[(1, 2), (1, 3), (2, 3)]).unwrap(),
            Some((2, 3))
        );
        // cycle, no two parents
        assert_eq!(
            redundant_directed_connection(&[(1, 2), (2, 3), (3, 4), (4, 1), (1, 5)]).unwrap(),
            Some((4, 1))
        );
        // two parents on a cycle: the first parent edge closes the cycle
        assert_eq!(
            redundant_directed_connection(&[(2, 1), (3, 1), (4, 2), (1, 4)]).unwrap(),
            Some((2, 1))
        );
    }

    #[test]
    fn provinces() {
        let m = [
            vec![true, true, false],
            vec![true, true, false],
            vec![false, false, true],
        ];
        assert_eq!(count_provinces(&m).unwrap(), 2);

        let identity = (0..4).map(|i| (0..4).map(|j| i == j).collect_vec()).collect_vec();
        assert_eq!(count_provinces(&identity).unwrap(), 4);
        assert_eq!(count_provinces(&[]).unwrap(), 0);

        assert!(matches!(
            count_provinces(&[vec![true, false], vec![true]]),
            Err(Error::RaggedGrid { row: 1, expected: 2, found: 1 })
        ));
        assert!(matches!(
            count_provinces(&[vec![true, false]]),
            Err(Error::RaggedGrid { row: 0, expected: 1, found: 2 })
        ));
    }

    #[test]
    fn network_operations() {
        assert_eq!(operations_to_connect(4, &[(0, 1), (0, 2), (1, 2)]).unwrap(), Some(1));
        assert_eq!(
            operations_to_connect(6, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)]).unwrap(),
            Some(2)
        );
        assert_eq!(
            operations_to_connect(6, &[(0, 1), (0, 2), (0, 3), (1, 2)]).unwrap(),
            None
        );
        assert_eq!(operations_to_connect(1, &[]).unwrap(), Some(0));
        assert!(operations_to_connect(2, &[(0, 2)]).is_err());
    }

    #[test]
    fn equations() {
        assert!(!equations_possible(&["a==b", "b!=a"]).unwrap());
        assert!(equations_possible(&["b==a", "a==b"]).unwrap());
        assert!(equations_possible(&["a==b", "b==c", "a==c"]).unwrap());
        assert!(!equations_possible(&["a==b", "b!=c", "c==a"]).unwrap());
        assert!(!equations_possible(&["a!=a"]).unwrap());
        assert!(matches!(
            equations_possible(&["a==b", "a<b"]),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(equations_possible(&["A==b"]).is_err());
    }

    #[test]
    fn swaps() {
        assert_eq!(
            smallest_string_with_swaps("dcab", &[(0, 3), (1, 2)]).unwrap(),
            "bacd"
        );
        assert_eq!(
            smallest_string_with_swaps("dcab", &[(0, 3), (1, 2), (0, 2)]).unwrap(),
            "abcd"
        );
        assert_eq!(
            smallest_string_with_swaps("cba", &[(0, 1), (1, 2)]).unwrap(),
            "abc"
        );
        assert_eq!(smallest_string_with_swaps("", &[]).unwrap(), "");
        assert!(smallest_string_with_swaps("ab", &[(0, 2)]).is_err());
    }

    #[test]
    fn swaps_reject_huge_indices() {
        let wide = 1usize << 32;
        assert!(matches!(
            smallest_string_with_swaps("ba", &[(wide, 1)]),
            Err(Error::NodeOutOfRange { n: 2, .. })
        ));
        assert!(smallest_string_with_swaps("ba", &[(0, usize::MAX)]).is_err());
    }

    #[test]
    fn accounts() {
        let accounts = vec![
            vec!["John", "johnsmith@mail.com", "john_newyork@mail.com"],
            vec!["John", "johnsmith@mail.com", "john00@mail.com"],
            vec!["Mary", "mary@mail.com"],
            vec!["John", "johnnybravo@mail.com"],
        ];
        assert_eq!(
            accounts_merge(&accounts),
            vec![
                vec![
                    "John",
                    "john00@mail.com",
                    "john_newyork@mail.com",
                    "johnsmith@mail.com"
                ],
                vec!["Mary", "mary@mail.com"],
                vec!["John", "johnnybravo@mail.com"],
            ]
        );

        // transitively connected through the last account
        let accounts = vec![vec!["A", "a"], vec!["B", "b"], vec!["A", "a", "b", "a"]];
        assert_eq!(accounts_merge(&accounts), vec![vec!["A", "a", "b"]]);
    }

    #[test]
    fn stones() {
        assert_eq!(
            most_stones_removed(&[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]),
            5
        );
        assert_eq!(most_stones_removed(&[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]), 3);
        assert_eq!(most_stones_removed(&[(0, 0)]), 0);
    }

    #[test]
    fn slashes() {
        assert_eq!(regions_by_slashes(&[" /", "/ "]).unwrap(), 2);
        assert_eq!(regions_by_slashes(&[" /", "  "]).unwrap(), 1);
        assert_eq!(regions_by_slashes(&["/\\", "\\/"]).unwrap(), 5);
        assert!(matches!(
            regions_by_slashes(&["/", "//"]),
            Err(Error::RaggedGrid { row: 0, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn division() {
        let equations = [("a", "b"), ("b", "c")];
        let answers = evaluate_division(
            &equations,
            &[2.0, 3.0],
            &[("a", "c"), ("b", "a"), ("a", "e"), ("a", "a"), ("x", "x")],
        )
        .unwrap();
        let expected = [Some(6.0), Some(0.5), None, Some(1.0), None];
        for (got, want) in answers.into_iter().zip(expected) {
            match (got, want) {
                (Some(g), Some(w)) => assert!((g - w).abs() < 1e-9),
                (g, w) => assert_eq!(g, w),
            }
        }

        // two chains joined later
        let answers = evaluate_division(
            &[("a", "b"), ("c", "d"), ("b", "c")],
            &[2.0, 5.0, 3.0],
            &[("a", "d"), ("d", "b")],
        )
        .unwrap();
        assert!((answers[0].unwrap() - 30.0).abs() < 1e-9);
        assert!((answers[1].unwrap() - 1.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn division_length_mismatch() {
        let equations = [("a", "b"), ("b", "c")];
        assert!(matches!(
            evaluate_division(&equations, &[2.0], &[("a", "c")]),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            evaluate_division(&equations[..1], &[2.0, 3.0], &[("a", "b")]),
            Err(Error::Parse { line: 2, .. })
        ));
    }
}
