use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::width::WidthOptions;

/// Abbreviations a sentence does not end after, unless overridden
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Mt.", "vs.", "etc.", "e.g.",
    "i.e.", "Inc.", "Ltd.", "Co.", "Corp.", "No.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.",
    "Jul.", "Aug.", "Sep.", "Sept.", "Oct.", "Nov.", "Dec.",
];

fn default_abbreviations() -> Arc<FxHashSet<String>> {
    static ABBREVIATIONS: OnceLock<Arc<FxHashSet<String>>> = OnceLock::new();
    ABBREVIATIONS
        .get_or_init(|| {
            let set = DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect();
            Arc::new(set)
        })
        .clone()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Options {
    pub width: WidthOptions,
    pub sentence: SentenceOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SentenceOptions {
    /// Whitespace delimited tokens ending in a full stop that do not end a
    /// sentence, for example "Mr.". Matched exactly.
    pub abbreviations: Arc<FxHashSet<String>>,
}

impl SentenceOptions {
    pub fn new<I, S>(abbreviations: I) -> SentenceOptions
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SentenceOptions {
            abbreviations: Arc::new(abbreviations.into_iter().map(Into::into).collect()),
        }
    }

    /// No abbreviations, sentences are split exactly as in UAX #29
    pub fn none() -> SentenceOptions {
        SentenceOptions {
            abbreviations: Arc::new(FxHashSet::default()),
        }
    }
}

impl Default for SentenceOptions {
    fn default() -> Self {
        SentenceOptions {
            abbreviations: default_abbreviations(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_shared() {
        let a = SentenceOptions::default();
        let b = SentenceOptions::default();
        assert!(Arc::ptr_eq(&a.abbreviations, &b.abbreviations));
        assert!(a.abbreviations.contains("Mr."));
        assert!(!a.abbreviations.contains("Mr"));
    }

    #[test]
    fn custom() {
        let opts = SentenceOptions::new(["approx."]);
        assert_eq!(1, opts.abbreviations.len());
        assert!(SentenceOptions::none().abbreviations.is_empty());
    }
}
