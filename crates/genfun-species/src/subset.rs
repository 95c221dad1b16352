//! Size restrictions for species operators.
//!
//! The textual forms are:
//!
//! | text        | admitted sizes k          |
//! |-------------|---------------------------|
//! | (empty)     | all                       |
//! | `=k`        | exactly k                 |
//! | `>k`, `>=k` | above / from k            |
//! | `<k`, `<=k` | below / up to k           |
//! | `{a,b,..}`  | the listed sizes          |
//! | `~S`        | complement of any form S  |
//!
//! Every subset carries an exclusive upper bound (the truncation length of
//! the series it is applied to); sizes at or past it are never enumerated.

use genfun_core::{GfError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// The shape of a subset, after complements of comparisons are folded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubsetKind {
    /// Every size.
    All,
    /// Exactly `k`.
    Exactly(usize),
    /// Strictly above `k`.
    Greater(usize),
    /// `k` and above.
    AtLeast(usize),
    /// Strictly below `k`.
    Less(usize),
    /// `k` and below.
    AtMost(usize),
    /// An explicit finite set.
    Set(BTreeSet<usize>),
    /// Everything except an explicit finite set.
    Complement(BTreeSet<usize>),
}

/// A predicate over sizes `0..exclusive_max`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subset {
    kind: SubsetKind,
    exclusive_max: usize,
}

impl Subset {
    /// The unrestricted subset.
    #[must_use]
    pub fn all(exclusive_max: usize) -> Self {
        Self::new(SubsetKind::All, exclusive_max)
    }

    /// Wraps a kind with its bound.
    #[must_use]
    pub fn new(kind: SubsetKind, exclusive_max: usize) -> Self {
        Self {
            kind,
            exclusive_max,
        }
    }

    /// Parses the subset mini-language.
    ///
    /// # Errors
    ///
    /// [`GfError::Argument`] for malformed text.
    pub fn parse(text: &str, exclusive_max: usize) -> Result<Self> {
        Ok(Self::new(parse_kind(text.trim())?, exclusive_max))
    }

    /// The shape of this subset.
    #[must_use]
    pub fn kind(&self) -> &SubsetKind {
        &self.kind
    }

    /// The exclusive upper bound on enumerated sizes.
    #[must_use]
    pub fn exclusive_max(&self) -> usize {
        self.exclusive_max
    }

    /// The same predicate with a different bound.
    #[must_use]
    pub fn with_exclusive_max(&self, exclusive_max: usize) -> Self {
        Self::new(self.kind.clone(), exclusive_max)
    }

    /// True if size `k` is admitted (ignoring the bound).
    #[must_use]
    pub fn contains(&self, k: usize) -> bool {
        match &self.kind {
            SubsetKind::All => true,
            SubsetKind::Exactly(j) => k == *j,
            SubsetKind::Greater(j) => k > *j,
            SubsetKind::AtLeast(j) => k >= *j,
            SubsetKind::Less(j) => k < *j,
            SubsetKind::AtMost(j) => k <= *j,
            SubsetKind::Set(set) => set.contains(&k),
            SubsetKind::Complement(set) => !set.contains(&k),
        }
    }

    /// True for the unrestricted subset.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.kind == SubsetKind::All
    }

    /// True when only finitely many sizes are rejected, so the restricted
    /// operator is best computed as the complete form minus the rejected
    /// terms.
    #[must_use]
    pub fn is_cofinite(&self) -> bool {
        matches!(
            self.kind,
            SubsetKind::All
                | SubsetKind::Greater(_)
                | SubsetKind::AtLeast(_)
                | SubsetKind::Complement(_)
        )
    }

    /// Admitted sizes below the bound, ascending.
    #[must_use]
    pub fn admitted(&self) -> Vec<usize> {
        (0..self.exclusive_max).filter(|&k| self.contains(k)).collect()
    }

    /// Rejected sizes below the bound, ascending.
    #[must_use]
    pub fn rejected(&self) -> Vec<usize> {
        (0..self.exclusive_max).filter(|&k| !self.contains(k)).collect()
    }
}

fn parse_kind(text: &str) -> Result<SubsetKind> {
    if text.is_empty() {
        return Ok(SubsetKind::All);
    }
    if let Some(rest) = text.strip_prefix('~') {
        let rest = rest.trim_start();
        if rest.is_empty() {
            return Err(GfError::argument("subset complement '~' needs an operand"));
        }
        return Ok(complement(parse_kind(rest)?));
    }
    if let Some(body) = text.strip_prefix('{') {
        let body = body
            .strip_suffix('}')
            .ok_or_else(|| GfError::argument(format!("unterminated subset set {text:?}")))?;
        let mut set = BTreeSet::new();
        for item in body.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            set.insert(parse_bound(item)?);
        }
        return Ok(SubsetKind::Set(set));
    }

    let (op, rest) = [">=", "<=", "=", ">", "<"]
        .iter()
        .find_map(|op| text.strip_prefix(op).map(|rest| (*op, rest)))
        .ok_or_else(|| GfError::argument(format!("malformed subset specification {text:?}")))?;
    let k = parse_bound(rest.trim())?;
    Ok(match op {
        ">=" => SubsetKind::AtLeast(k),
        "<=" => SubsetKind::AtMost(k),
        ">" => SubsetKind::Greater(k),
        "<" => SubsetKind::Less(k),
        _ => SubsetKind::Exactly(k),
    })
}

fn complement(kind: SubsetKind) -> SubsetKind {
    match kind {
        SubsetKind::All => SubsetKind::Set(BTreeSet::new()),
        SubsetKind::Exactly(k) => SubsetKind::Complement(BTreeSet::from([k])),
        SubsetKind::Greater(k) => SubsetKind::AtMost(k),
        SubsetKind::AtLeast(k) => SubsetKind::Less(k),
        SubsetKind::Less(k) => SubsetKind::AtLeast(k),
        SubsetKind::AtMost(k) => SubsetKind::Greater(k),
        SubsetKind::Set(set) => SubsetKind::Complement(set),
        SubsetKind::Complement(set) => SubsetKind::Set(set),
    }
}

fn parse_bound(text: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|_| GfError::argument(format!("subset bound {text:?} is not a non-negative integer")))
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = |set: &BTreeSet<usize>| {
            set.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
        };
        match &self.kind {
            SubsetKind::All => Ok(()),
            SubsetKind::Exactly(k) => write!(f, "={k}"),
            SubsetKind::Greater(k) => write!(f, ">{k}"),
            SubsetKind::AtLeast(k) => write!(f, ">={k}"),
            SubsetKind::Less(k) => write!(f, "<{k}"),
            SubsetKind::AtMost(k) => write!(f, "<={k}"),
            SubsetKind::Set(set) => write!(f, "{{{}}}", list(set)),
            SubsetKind::Complement(set) => write!(f, "~{{{}}}", list(set)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert!(Subset::parse("", 10).unwrap().is_all());
        assert_eq!(Subset::parse("=3", 10).unwrap().admitted(), vec![3]);
        assert_eq!(Subset::parse(">7", 10).unwrap().admitted(), vec![8, 9]);
        assert_eq!(Subset::parse(">=8", 10).unwrap().admitted(), vec![8, 9]);
        assert_eq!(Subset::parse("<2", 10).unwrap().admitted(), vec![0, 1]);
        assert_eq!(Subset::parse("<= 2", 10).unwrap().admitted(), vec![0, 1, 2]);
        assert_eq!(Subset::parse("{1, 4,12}", 10).unwrap().admitted(), vec![1, 4]);
        assert_eq!(Subset::parse("{}", 10).unwrap().admitted(), Vec::<usize>::new());
    }

    #[test]
    fn test_complements() {
        let s = Subset::parse("~{0,1,2}", 6).unwrap();
        assert_eq!(s.admitted(), vec![3, 4, 5]);
        assert_eq!(s.rejected(), vec![0, 1, 2]);
        assert!(s.is_cofinite());

        let s = Subset::parse("~>3", 6).unwrap();
        assert_eq!(s.kind(), &SubsetKind::AtMost(3));
        assert!(!s.is_cofinite());

        let s = Subset::parse("~=2", 5).unwrap();
        assert_eq!(s.admitted(), vec![0, 1, 3, 4]);
        assert!(Subset::parse("~", 5).is_err());
    }

    #[test]
    fn test_malformed() {
        for text in ["3", "=x", "{1,2", ">-1", "!3", "=1.5"] {
            assert!(
                matches!(Subset::parse(text, 5), Err(GfError::Argument(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_cofinite() {
        assert!(Subset::parse(">=1", 5).unwrap().is_cofinite());
        assert!(!Subset::parse("<3", 5).unwrap().is_cofinite());
        assert!(!Subset::parse("{1}", 5).unwrap().is_cofinite());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["", "=3", ">1", ">=2", "<4", "<=5", "{1,3}", "~{0,2}"] {
            let s = Subset::parse(text, 10).unwrap();
            assert_eq!(s.to_string(), text);
            assert_eq!(Subset::parse(&s.to_string(), 10).unwrap(), s);
        }
    }
}
