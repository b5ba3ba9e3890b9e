//! Birth/survival rules.
//!
//! A rule is a pair of neighbor-count sets written in `B/S` notation, e.g.
//! `B6/S5,6` for the default 3D Life rule. Counts go up to 26 so they are
//! comma separated rather than run together as in 2D notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};

/// Largest possible neighbor count.
pub const MAX_NEIGHBORS: u8 = 26;

/// Birth and survival sets, stored as bit masks over `0..=26`.
///
/// Both sets are non-empty and in range for every `Rule` that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: u32,
    survive: u32,
}

impl Default for Rule {
    /// B6/S5,6
    fn default() -> Self {
        Self {
            birth: 1u32 << 6,
            survive: (1u32 << 5) | (1u32 << 6),
        }
    }
}

impl Rule {
    /// Build a rule from birth and survival counts.
    pub fn new(birth: &[u8], survive: &[u8]) -> Result<Self> {
        Self::from_counts(
            birth.iter().map(|&n| i64::from(n)),
            survive.iter().map(|&n| i64::from(n)),
        )
    }

    pub(crate) fn from_counts<B, S>(birth: B, survive: S) -> Result<Self>
    where
        B: IntoIterator<Item = i64>,
        S: IntoIterator<Item = i64>,
    {
        Ok(Self {
            birth: mask_of(birth, "birth")?,
            survive: mask_of(survive, "survive")?,
        })
    }

    /// Would a dead cell with `neighbors` live neighbors be born?
    #[inline]
    pub fn births_on(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.birth & (1u32 << neighbors) != 0
    }

    /// Would a live cell with `neighbors` live neighbors survive?
    #[inline]
    pub fn survives_on(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.survive & (1u32 << neighbors) != 0
    }

    /// Next state of a cell given its current state and neighbor count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survives_on(neighbors)
        } else {
            self.births_on(neighbors)
        }
    }

    /// Birth counts in ascending order.
    pub fn birth(&self) -> Vec<u8> {
        counts_of(self.birth)
    }

    /// Survival counts in ascending order.
    pub fn survive(&self) -> Vec<u8> {
        counts_of(self.survive)
    }
}

fn mask_of<I: IntoIterator<Item = i64>>(counts: I, which: &str) -> Result<u32> {
    let mut mask = 0u32;
    for n in counts {
        if !(0..=i64::from(MAX_NEIGHBORS)).contains(&n) {
            return Err(LatticeError::DataFormat(format!(
                "{which} count {n} is outside 0..={MAX_NEIGHBORS}"
            )));
        }
        mask |= 1u32 << n;
    }
    if mask == 0 {
        return Err(LatticeError::DataFormat(format!(
            "{which} counts must not be empty"
        )));
    }
    Ok(mask)
}

fn counts_of(mask: u32) -> Vec<u8> {
    (0..=MAX_NEIGHBORS).filter(|&n| mask & (1u32 << n) != 0).collect()
}

fn join(counts: &[u8]) -> String {
    counts
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", join(&self.birth()), join(&self.survive()))
    }
}

impl FromStr for Rule {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || LatticeError::DataFormat(format!("invalid rule notation {s:?}"));

        let (birth, survive) = s.trim().split_once('/').ok_or_else(bad)?;
        let birth = strip_prefix_ci(birth.trim(), 'b').ok_or_else(bad)?;
        let survive = strip_prefix_ci(survive.trim(), 's').ok_or_else(bad)?;

        Self::from_counts(parse_list(birth)?, parse_list(survive)?)
    }
}

fn strip_prefix_ci(s: &str, prefix: char) -> Option<&str> {
    s.strip_prefix(prefix)
        .or_else(|| s.strip_prefix(prefix.to_ascii_uppercase()))
}

fn parse_list(s: &str) -> Result<Vec<i64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|part| {
            part.trim().parse::<i64>().map_err(|_| {
                LatticeError::DataFormat(format!("invalid neighbor count {:?}", part.trim()))
            })
        })
        .collect()
}

impl TryFrom<String> for Rule {
    type Error = LatticeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}
