// src/rank.rs
//! Bayesian smoothing of raw ratings by volume.
//!
//! `score = (C * m + n * r) / (C + n)` where `m` is the prior mean and `C` the
//! prior strength in equivalent ratings. Few ratings → close to `m`; many
//! ratings → close to `r`. Keeps a book with three 5-star ratings from
//! outranking one with 50,000 ratings at 4.3.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::consts::{DEFAULT_PRIOR_COUNT, DEFAULT_PRIOR_MEAN, MAX_RATING};
use crate::error::ScrapeError;
use crate::model::Field;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankError {
    #[error("{field} is unknown")]
    Unknown { field: &'static str },

    #[error("{field} is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("rating {value} outside 0..=5")]
    OutOfRange { value: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prior {
    pub mean: f64,
    pub count: u64,
}

impl Default for Prior {
    fn default() -> Self {
        Self { mean: DEFAULT_PRIOR_MEAN, count: DEFAULT_PRIOR_COUNT }
    }
}

impl Prior {
    pub fn new(mean: f64, count: u64) -> Self {
        Self { mean, count }
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if !self.mean.is_finite() || !(0.0..=MAX_RATING).contains(&self.mean) {
            return Err(ScrapeError::config(format!(
                "prior mean {} must be within 0..={MAX_RATING}",
                self.mean
            )));
        }
        Ok(())
    }

    /// Unrounded smoothed score.
    pub fn smooth(&self, rating: f64, count: u64) -> f64 {
        let c = self.count as f64;
        let n = count as f64;
        let weight = c + n;
        if weight == 0.0 {
            return self.mean;
        }
        (c * self.mean + n * rating) / weight
    }
}

/// Smoothed score rounded to 2 decimals.
pub fn normalize(raw_rating: f64, rating_count: u64, prior: &Prior) -> f64 {
    round2(prior.smooth(raw_rating, rating_count))
}

/// Coerce extracted text and normalize. Unknown or non-numeric input is an
/// error, never a sentinel score.
pub fn normalize_fields(
    rating: &Field<String>,
    count: &Field<String>,
    prior: &Prior,
) -> Result<f64, RankError> {
    let r = match rating {
        Field::Found(s) => parse_rating(s)?,
        Field::Unknown => return Err(RankError::Unknown { field: "rating" }),
    };
    let n = match count {
        Field::Found(s) => parse_count(s)?,
        Field::Unknown => return Err(RankError::Unknown { field: "rating count" }),
    };
    Ok(normalize(r, n, prior))
}

pub fn parse_rating(text: &str) -> Result<f64, RankError> {
    let t = text.trim();
    let value: f64 = t.parse().map_err(|_| RankError::NotNumeric {
        field: "rating",
        value: s!(t),
    })?;
    if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
        return Err(RankError::OutOfRange { value });
    }
    Ok(value)
}

/// `"1,234,567"` → `1234567`. Thousands separators are stripped before parsing.
pub fn parse_count(text: &str) -> Result<u64, RankError> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect();
    digits.parse().map_err(|_| RankError::NotNumeric {
        field: "rating count",
        value: s!(text.trim()),
    })
}

/// Two decimals, rounded from the exact decimal value of `x`
/// (3.525 is stored as 3.52499… and rounds to 3.52).
fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

/* ---------------- Raw vs smoothed ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    PulledDown,
    PulledUp,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    pub raw: f64,
    pub count: u64,
    pub score: f64,
    /// `raw - score`
    pub difference: f64,
    pub effect: Effect,
}

pub fn compare(raw_rating: f64, rating_count: u64, prior: &Prior) -> Comparison {
    let score = normalize(raw_rating, rating_count, prior);
    let difference = round2(raw_rating - score);
    let effect = if difference > 0.0 {
        Effect::PulledDown
    } else if difference < 0.0 {
        Effect::PulledUp
    } else {
        Effect::Unchanged
    };
    Comparison { raw: raw_rating, count: rating_count, score, difference, effect }
}
