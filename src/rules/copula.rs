//! 서술격 조사 '이다' 활용
//!
//! 앞 단어가 모음으로 끝나면 이 + 어/에/야 가 여/예/야 로 줄어든다 (나무 + 이 + 에요 -> 나무예요).
//! 받침이 있거나 앞 단어를 모르면 줄이지 않는다 (학생이에요).

use crate::classify::{has_final_consonant, is_vowel_initial};
use crate::core::{compose_str, decompose_str};
use crate::rules::contraction::{attach_vowel_ending, restore_null_initials, Contraction};
use crate::rules::{ending_jamo, Rule, RuleInput, RuleKind};

const COPULA_STEM: &str = "이";

pub struct Copula;

impl Rule for Copula {
    fn kind(&self) -> RuleKind {
        RuleKind::Copula
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        input.stem == COPULA_STEM
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let stem_jamo = decompose_str(input.stem);
        let after_vowel = input.preceding.is_some_and(|word| !has_final_consonant(word));

        if !after_vowel || !is_vowel_initial(input.ending) {
            let mut seq = stem_jamo;
            seq.push_str(&decompose_str(input.ending));
            return Some(compose_str(&seq));
        }

        let seq = attach_vowel_ending(&stem_jamo, &ending_jamo(input.ending));
        let seq = restore_null_initials(&Contraction::Copula.apply(&seq));
        Some(compose_str(&seq))
    }
}
