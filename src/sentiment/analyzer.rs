//! Lexicon-based polarity scorer
//!
//! Scores a cleaned comment by summing word valences, adjusted for
//! boosters, negations and a contrastive "but", then squashes the sum into
//! a compound score in [-1, 1].

use serde::Serialize;
use std::sync::Arc;

use super::lexicon::Lexicon;

/// Scale applied to a valence preceded by a negation
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected sum
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How far back boosters and negations are looked for
const LOOKBACK: usize = 3;

/// Scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    fn empty() -> Self {
        Self {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// Sentiment scorer over a shared, immutable lexicon
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::with_lexicon(Arc::new(Lexicon::builtin()))
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text. Input is expected to be cleaned (lowercase letters and
    /// spaces); anything else is lowercased and split on whitespace.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split_whitespace()
            .filter(|t| t.len() > 1)
            .collect();

        if tokens.is_empty() {
            return PolarityScores::empty();
        }

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, i))
            .collect();

        apply_but_shift(&tokens, &mut valences);

        let total: f64 = valences.iter().sum();
        let compound = normalize(total);

        let (pos_sum, neg_sum, neu_count) = valences.iter().fold(
            (0.0_f64, 0.0_f64, 0.0_f64),
            |(pos, neg, neu), &v| {
                if v > 0.0 {
                    (pos + v + 1.0, neg, neu)
                } else if v < 0.0 {
                    (pos, neg + v - 1.0, neu)
                } else {
                    (pos, neg, neu + 1.0)
                }
            },
        );

        let denominator = pos_sum + neg_sum.abs() + neu_count;
        PolarityScores {
            neg: round3(neg_sum.abs() / denominator),
            neu: round3(neu_count / denominator),
            pos: round3(pos_sum / denominator),
            compound: round4(compound),
        }
    }

    fn token_valence(&self, tokens: &[&str], i: usize) -> f64 {
        let token = tokens[i];

        // Boosters only modify their neighbour
        if self.lexicon.booster(token).is_some() {
            return 0.0;
        }
        // "kind of" is a dampener, not kindness
        if token == "kind" && tokens.get(i + 1) == Some(&"of") {
            return 0.0;
        }

        let mut valence = match self.lexicon.valence(token) {
            Some(v) => v,
            None => return 0.0,
        };

        for distance in 1..=LOOKBACK.min(i) {
            let previous = tokens[i - distance];
            if self.lexicon.valence(previous).is_none() {
                if let Some(scalar) = self.lexicon.booster(previous) {
                    let scalar = if valence < 0.0 { -scalar } else { scalar };
                    valence += match distance {
                        1 => scalar,
                        2 => scalar * 0.95,
                        _ => scalar * 0.9,
                    };
                }
            }
            if self.lexicon.is_negation(previous) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Words before "but" count half, words after count one and a half.
fn apply_but_shift(tokens: &[&str], valences: &mut [f64]) {
    if let Some(but_index) = tokens.iter().position(|t| *t == "but") {
        for (i, v) in valences.iter_mut().enumerate() {
            if i < but_index {
                *v *= 0.5;
            } else if i > but_index {
                *v *= 1.5;
            }
        }
    }
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}
