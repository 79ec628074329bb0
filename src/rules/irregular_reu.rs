//! 르 불규칙: 르의 ㅡ가 떨어지고 ㄹ이 하나 덧붙음 (흐르 + 어 -> 흘러)
//!
//! 태그로 구분하지 않고 사전(`ReuDictionary`)에 있는 어간에만 적용한다.

use std::sync::Arc;

use crate::classify::{is_vowel_initial, leading_vowel};
use crate::core::{compose_str, decompose_str};
use crate::dictionary::ReuDictionary;
use crate::rules::contraction::attach_vowel_ending;
use crate::rules::harmony::harmonize;
use crate::rules::{ending_jamo, Rule, RuleInput, RuleKind};

pub struct ReuIrregular {
    dictionary: Arc<ReuDictionary>,
}

impl ReuIrregular {
    pub fn new(dictionary: Arc<ReuDictionary>) -> Self {
        Self { dictionary }
    }
}

impl Rule for ReuIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::ReuIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        input.stem.ends_with('르')
            && self.dictionary.contains(input.stem)
            && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        // 으 어미는 규칙 활용 (흐르 + 으면 -> 흐르면)
        if leading_vowel(input.ending) == Some('ㅡ') {
            return None;
        }

        let base = input.stem.strip_suffix('르').filter(|b| !b.is_empty())?;
        let harmonized = harmonize(base, input.ending);

        let mut left = decompose_str(base);
        left.push_str("ㄹㄹ");
        let seq = attach_vowel_ending(&left, &ending_jamo(&harmonized));
        Some(compose_str(&seq))
    }
}
