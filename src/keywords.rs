//! Keyword frequency extraction
//!
//! Comments are joined, cleaned, split on whitespace and filtered against an
//! English stopword list; what remains is counted. Equal counts keep the
//! order in which the terms first appeared.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use utoipa::ToSchema;

use crate::cleaner::clean_text;

/// How many keywords the bar chart shows
pub const TOP_KEYWORDS: usize = 10;

/// NLTK's English stopword corpus
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as",
    "until", "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m",
    "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't",
    "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
    "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// One keyword and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct KeywordCount {
    pub term: String,
    pub count: usize,
}

/// Immutable stopword set, built once and shared
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

/// Cleaned, filtered tokens of the whole batch, in order
pub fn keyword_tokens(comments: &[String], stopwords: &Stopwords) -> Vec<String> {
    let blob = clean_text(&comments.join(" "));
    blob.split_whitespace()
        .filter(|token| token.len() > 1 && !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}

/// Full frequency distribution, count descending, ties by first appearance.
pub fn frequency_distribution(comments: &[String], stopwords: &Stopwords) -> Vec<KeywordCount> {
    let tokens = keyword_tokens(comments, stopwords);

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<KeywordCount> = Vec::new();

    for token in &tokens {
        match index.get(token.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push(KeywordCount {
                    term: token.clone(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `top_n` most frequent keywords. An empty batch yields an empty list.
pub fn extract_keywords(comments: &[String], stopwords: &Stopwords, top_n: usize) -> Vec<KeywordCount> {
    let mut distribution = frequency_distribution(comments, stopwords);
    distribution.truncate(top_n);
    distribution
}
