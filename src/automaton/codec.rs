//! Sparse live-cell payloads for saving, loading and presets.
//!
//! The exchanged shape is
//!
//! ```json
//! {
//!   "size": [sx, sy, sz],
//!   "liveCells": [[x, y, z], ...],
//!   "rules": { "birth": [n, ...], "survive": [n, ...] }
//! }
//! ```
//!
//! `rules` is optional on input. Generation and live count are not part of
//! the payload; a decoded lattice starts at generation 0.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LatticeError, Result};
use crate::state::Lattice;

use super::rule::Rule;

/// Sparse representation of a lattice.
///
/// Coordinates are kept as `i64` so that out-of-range input survives parsing
/// and is rejected by [`decode`] with a precise message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub size: [i64; 3],
    #[serde(rename = "liveCells")]
    pub live_cells: Vec<[i64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePayload {
    pub birth: Vec<i64>,
    pub survive: Vec<i64>,
}

impl From<Rule> for RulePayload {
    fn from(rule: Rule) -> Self {
        Self {
            birth: rule.birth().into_iter().map(i64::from).collect(),
            survive: rule.survive().into_iter().map(i64::from).collect(),
        }
    }
}

/// Extract the live cells, dimensions and rule of a lattice.
pub fn encode(lattice: &Lattice) -> Payload {
    Payload {
        size: lattice.size().map(i64::from),
        live_cells: lattice.live_cells().map(|cell| cell.map(i64::from)).collect(),
        rules: Some(lattice.rule().into()),
    }
}

/// Build a fresh lattice from a payload.
///
/// Non-positive dimensions are a configuration error. Out-of-range cells and
/// invalid rule counts are data-format errors. Nothing outside the returned
/// lattice is touched, so a failed decode has no effect.
pub fn decode(payload: &Payload) -> Result<Lattice> {
    let [sx, sy, sz] = payload.size;
    let (width, height, depth) = (dimension(sx)?, dimension(sy)?, dimension(sz)?);

    let rule = match &payload.rules {
        Some(rules) => Rule::from_counts(
            rules.birth.iter().copied(),
            rules.survive.iter().copied(),
        )?,
        None => Rule::default(),
    };

    let mut lattice = Lattice::with_rule(width, height, depth, rule)?;
    for &[x, y, z] in &payload.live_cells {
        match (i32::try_from(x), i32::try_from(y), i32::try_from(z)) {
            (Ok(cx), Ok(cy), Ok(cz)) if lattice.in_bounds(cx, cy, cz) => {
                lattice.set(cx, cy, cz, true)
            }
            _ => {
                return Err(LatticeError::DataFormat(format!(
                    "live cell [{x}, {y}, {z}] is outside the {width}x{height}x{depth} lattice"
                )))
            }
        }
    }

    debug!(
        "decoded {width}x{height}x{depth} lattice with {} live cells, rule {rule}",
        lattice.live_count()
    );
    Ok(lattice)
}

fn dimension(value: i64) -> Result<i32> {
    match i32::try_from(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LatticeError::Config(format!(
            "lattice dimension {value} must be a positive 32-bit integer"
        ))),
    }
}

/// Serialize a lattice as compact JSON.
pub fn to_json(lattice: &Lattice) -> Result<String> {
    Ok(serde_json::to_string(&encode(lattice))?)
}

/// Serialize a lattice as indented JSON, as written to save files.
pub fn to_json_pretty(lattice: &Lattice) -> Result<String> {
    Ok(serde_json::to_string_pretty(&encode(lattice))?)
}

/// Parse and decode a JSON payload.
pub fn from_json(text: &str) -> Result<Lattice> {
    let payload: Payload = serde_json::from_str(text)?;
    decode(&payload)
}

impl Lattice {
    pub fn encode(&self) -> Payload {
        encode(self)
    }

    /// Replace this lattice with the decoded payload.
    ///
    /// On error the current lattice is left as it was.
    pub fn load(&mut self, payload: &Payload) -> Result<()> {
        *self = decode(payload)?;
        Ok(())
    }

    /// Replace this lattice with a decoded JSON payload.
    ///
    /// On error the current lattice is left as it was.
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        *self = from_json(text)?;
        Ok(())
    }
}

/// Set cells alive from a pasted list of coordinates.
///
/// Accepts `[x,y,z],[x,y,z],...`, `[[x,y,z],...]` or a single `[x,y,z]`.
/// Entries that are not three integers inside the lattice are skipped.
/// Returns how many entries were applied. Text that is not a JSON list at all
/// is a data-format error and leaves the lattice unchanged.
pub fn paste_live_cells(lattice: &mut Lattice, text: &str) -> Result<usize> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(&format!("[{text}]"))?,
    };

    let entries = match value {
        Value::Array(items) if items.first().is_some_and(Value::is_array) => items,
        Value::Array(items) if items.is_empty() => return Ok(0),
        Value::Array(items) => vec![Value::Array(items)],
        _ => {
            return Err(LatticeError::DataFormat(
                "expected a list of [x, y, z] coordinates".to_string(),
            ))
        }
    };

    let mut applied = 0;
    for entry in &entries {
        if let Some([x, y, z]) = cell_of(entry) {
            if lattice.in_bounds(x, y, z) {
                lattice.set(x, y, z, true);
                applied += 1;
            }
        }
    }

    debug!("pasted {applied} of {} cells", entries.len());
    Ok(applied)
}

fn cell_of(entry: &Value) -> Option<[i32; 3]> {
    match entry.as_array()?.as_slice() {
        [x, y, z] => {
            let coord = |v: &Value| v.as_i64().and_then(|n| i32::try_from(n).ok());
            Some([coord(x)?, coord(y)?, coord(z)?])
        }
        _ => None,
    }
}
