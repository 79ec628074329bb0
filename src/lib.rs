pub mod classify;
pub mod config;
pub mod conjugator;
pub mod core;
pub mod dictionary;
pub mod rules;
pub mod sentence;
pub mod tag;

pub use config::{load_config, save_config, ConjugatorConfig};
pub use conjugator::{conjugate, Conjugation, Conjugator};
pub use crate::core::{compose, compose_str, decompose, decompose_str, Syllable};
pub use dictionary::{DictionaryError, ReuDictionary};
pub use rules::harmony::harmonize;
pub use rules::RuleKind;
pub use sentence::{Morpheme, Reconstructor, SentenceError};
