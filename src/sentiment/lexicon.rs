//! Built-in sentiment lexicon
//!
//! Holds:
//! - word valences on a -4.0..+4.0 scale
//! - booster/dampener words that scale the next sentiment word
//! - negation words

use std::collections::{HashMap, HashSet};

const LEXICON_DATA: &str = include_str!("lexicon.tsv");

/// Valence added (or removed) by a booster word
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Valence removed (or added) by a dampener word
pub const BOOSTER_DECREMENT: f64 = -0.293;

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
    "fabulously", "fully", "greatly", "hella", "highly", "hugely", "incredibly",
    "intensely", "majorly", "more", "most", "particularly", "purely", "quite",
    "really", "remarkably", "so", "substantially", "thoroughly", "totally",
    "tremendously", "uber", "unbelievably", "unusually", "utterly", "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally",
    "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
];

// Contractions lose their apostrophe during cleaning ("don't" -> "don t"),
// so the bare stems are listed alongside the joined forms.
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "never", "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt",
    "shant", "shouldnt", "uhuh", "wasnt", "werent", "without", "wont", "wouldnt",
    "rarely", "seldom", "despite",
    "aren", "couldn", "didn", "doesn", "don", "hadn", "hasn", "haven", "isn",
    "mightn", "mustn", "shouldn", "wasn", "weren", "wouldn",
];

/// Word lists backing the sentiment scorer. Immutable once built.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    /// The lexicon shipped with the crate.
    pub fn builtin() -> Self {
        let valences = parse_valences(LEXICON_DATA);

        let boosters = BOOSTERS_UP
            .iter()
            .map(|w| (*w, BOOSTER_INCREMENT))
            .chain(BOOSTERS_DOWN.iter().map(|w| (*w, BOOSTER_DECREMENT)))
            .collect();

        let negations = NEGATIONS.iter().copied().collect();

        Self {
            valences,
            boosters,
            negations,
        }
    }

    /// Valence of a lowercase word, if it carries sentiment
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Booster scalar of a lowercase word, if it is a booster or dampener
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn parse_valences(data: &str) -> HashMap<String, f64> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let word = fields.next()?.trim();
            let valence = fields.next()?.trim().parse::<f64>().ok()?;
            Some((word.to_lowercase(), valence))
        })
        .collect()
}
