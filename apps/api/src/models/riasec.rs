use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Upper bound of every trait score.
pub const MAX_SCORE: f64 = 100.0;

/// One of the six RIASEC axes.
///
/// Variant order is the canonical order (R < I < A < S < E < C); derived `Ord`
/// relies on it for tie-breaking and for `BTreeMap` iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TraitAxis {
    #[serde(rename = "R", alias = "Realistic")]
    Realistic,
    #[serde(rename = "I", alias = "Investigative")]
    Investigative,
    #[serde(rename = "A", alias = "Artistic")]
    Artistic,
    #[serde(rename = "S", alias = "Social")]
    Social,
    #[serde(rename = "E", alias = "Enterprising")]
    Enterprising,
    #[serde(rename = "C", alias = "Conventional")]
    Conventional,
}

impl TraitAxis {
    pub const ALL: [TraitAxis; 6] = [
        TraitAxis::Realistic,
        TraitAxis::Investigative,
        TraitAxis::Artistic,
        TraitAxis::Social,
        TraitAxis::Enterprising,
        TraitAxis::Conventional,
    ];

    pub fn letter(self) -> char {
        match self {
            TraitAxis::Realistic => 'R',
            TraitAxis::Investigative => 'I',
            TraitAxis::Artistic => 'A',
            TraitAxis::Social => 'S',
            TraitAxis::Enterprising => 'E',
            TraitAxis::Conventional => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TraitAxis::Realistic => "Realistic",
            TraitAxis::Investigative => "Investigative",
            TraitAxis::Artistic => "Artistic",
            TraitAxis::Social => "Social",
            TraitAxis::Enterprising => "Enterprising",
            TraitAxis::Conventional => "Conventional",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        TraitAxis::ALL
            .into_iter()
            .find(|axis| axis.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for TraitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Trait scores keyed by axis, each finite and within [0, 100].
///
/// Vectors built by the normalizer and the skills mapper always carry all six
/// axes. Vectors deserialized from callers may carry a subset; `score` reads a
/// missing axis as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<TraitAxis, f64>", into = "BTreeMap<TraitAxis, f64>")]
pub struct TraitVector {
    scores: BTreeMap<TraitAxis, f64>,
}

impl TraitVector {
    /// Builds a complete vector from scores in canonical axis order.
    pub fn new(scores: [f64; 6]) -> Result<Self, ScoringError> {
        let map = TraitAxis::ALL.into_iter().zip(scores).collect();
        Self::from_map(map)
    }

    pub fn from_map(scores: BTreeMap<TraitAxis, f64>) -> Result<Self, ScoringError> {
        for (&axis, &value) in &scores {
            if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
                return Err(ScoringError::InvalidScore { axis, value });
            }
        }
        Ok(Self { scores })
    }

    /// Score for `axis`, 0 when the axis is absent.
    pub fn score(&self, axis: TraitAxis) -> f64 {
        self.scores.get(&axis).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, axis: TraitAxis) -> bool {
        self.scores.contains_key(&axis)
    }

    pub fn axes(&self) -> impl Iterator<Item = TraitAxis> + '_ {
        self.scores.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitAxis, f64)> + '_ {
        self.scores.iter().map(|(&axis, &score)| (axis, score))
    }

    pub fn is_complete(&self) -> bool {
        self.scores.len() == TraitAxis::ALL.len()
    }

    /// All six scores in canonical order, missing axes as 0.
    pub fn to_array(&self) -> [f64; 6] {
        TraitAxis::ALL.map(|axis| self.score(axis))
    }

    /// Axes ordered by score descending, ties in canonical order.
    /// Always yields all six axes.
    pub fn ranked_axes(&self) -> [TraitAxis; 6] {
        let mut ranked = TraitAxis::ALL;
        // sort_by is stable and ALL is already canonical, so equal scores keep R<I<A<S<E<C
        ranked.sort_by(|a, b| self.score(*b).total_cmp(&self.score(*a)));
        ranked
    }
}

impl TryFrom<BTreeMap<TraitAxis, f64>> for TraitVector {
    type Error = ScoringError;

    fn try_from(scores: BTreeMap<TraitAxis, f64>) -> Result<Self, Self::Error> {
        Self::from_map(scores)
    }
}

impl From<TraitVector> for BTreeMap<TraitAxis, f64> {
    fn from(vector: TraitVector) -> Self {
        vector.scores
    }
}

/// Three distinct axes, highest-scoring first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HollandCode([TraitAxis; 3]);

impl HollandCode {
    pub(crate) fn from_ranked(ranked: [TraitAxis; 6]) -> Self {
        Self([ranked[0], ranked[1], ranked[2]])
    }

    pub fn axes(&self) -> [TraitAxis; 3] {
        self.0
    }

    pub fn primary(&self) -> TraitAxis {
        self.0[0]
    }

    pub fn secondary(&self) -> [TraitAxis; 2] {
        [self.0[1], self.0[2]]
    }
}

impl fmt::Display for HollandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.0 {
            write!(f, "{}", axis.letter())?;
        }
        Ok(())
    }
}

impl Serialize for HollandCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
