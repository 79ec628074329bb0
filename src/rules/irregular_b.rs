//! ㅂ 불규칙: 모음 어미 앞에서 받침 ㅂ이 오/우로 바뀜
//!
//! 한 음절 양성 어간은 오 (돕 + 아 -> 도와), 나머지는 우 (춥 + 어 -> 추워).
//! 으로 시작하는 어미는 으가 우에 흡수된다 (돕 + 으면 -> 도우면).

use crate::classify::{final_consonant, is_bright, is_vowel_initial, leading_vowel, syllable_count};
use crate::core::jamo::NULL_INITIAL;
use crate::core::{compose_str, decompose_str};
use crate::rules::contraction::{attach_vowel_ending, restore_null_initials, Contraction};
use crate::rules::harmony::harmonize_as;
use crate::rules::{ending_jamo, split_last, Rule, RuleInput, RuleKind};
use crate::tag::IrregularClass;

pub struct BIrregular;

impl Rule for BIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::BIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        input.tag.marks(IrregularClass::B)
            && final_consonant(input.stem) == Some('ㅂ')
            && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let (prefix, last) = split_last(input.stem)?;

        let inserted = if leading_vowel(input.ending) == Some('ㅡ') {
            'ㅜ'
        } else if syllable_count(input.stem) == 1 && is_bright(Some(last.medial)) {
            'ㅗ'
        } else {
            'ㅜ'
        };
        let harmonized = harmonize_as(inserted == 'ㅗ', input.ending);

        let mut left = decompose_str(prefix);
        left.push_str(&last.with_coda(None).to_jamo());
        left.push(NULL_INITIAL);
        left.push(inserted);

        let seq = attach_vowel_ending(&left, &ending_jamo(&harmonized));
        let seq = restore_null_initials(&Contraction::BIrregular.apply(&seq));
        Some(compose_str(&seq))
    }
}
