//! Exact-match-first name resolution shared by player and team lookups.

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// How a query may partially match a candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partial {
    /// The query appears anywhere in the key.
    Substring,
    /// The key, or one of its words, starts with the query.
    WordPrefix,
}

impl Partial {
    fn matches(self, key: &str, wanted: &str) -> bool {
        match self {
            Partial::Substring => key.contains(wanted),
            Partial::WordPrefix => {
                key.starts_with(wanted) || key.contains(&format!(" {}", wanted))
            }
        }
    }
}

/// Pick the candidate whose names best match `name`.
///
/// A case-insensitive exact match on any key wins; otherwise the first
/// candidate containing `name` in any key. Candidate order breaks ties.
pub fn best_match<'a, T, F>(candidates: &'a [T], name: &str, keys: F) -> Option<&'a T>
where
    F: Fn(&'a T) -> Vec<&'a str>,
{
    best_match_by(candidates, name, &keys, &keys, Partial::Substring)
}

/// Like [`best_match`], but partial matching only looks at `partial_keys`
/// and uses the `partial` rule.
pub fn best_match_by<'a, T, E, P>(
    candidates: &'a [T],
    name: &str,
    exact_keys: E,
    partial_keys: P,
    partial: Partial,
) -> Option<&'a T>
where
    E: Fn(&'a T) -> Vec<&'a str>,
    P: Fn(&'a T) -> Vec<&'a str>,
{
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }

    candidates
        .iter()
        .find(|&c| exact_keys(c).into_iter().any(|k| normalize(k) == wanted))
        .or_else(|| {
            candidates.iter().find(|&c| {
                partial_keys(c)
                    .into_iter()
                    .any(|k| partial.matches(&normalize(k), &wanted))
            })
        })
}
