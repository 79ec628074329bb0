//! 러 불규칙: 르 어간 뒤에서 어미 어가 러로 바뀜 (이르 + 어 -> 이르러)

use crate::classify::{is_vowel_initial, leading_vowel};
use crate::core::jamo::NULL_INITIAL;
use crate::core::{compose_str, decompose_str};
use crate::rules::contraction::Contraction;
use crate::rules::{ending_jamo, strip_leading_vowel, Rule, RuleInput, RuleKind};
use crate::tag::IrregularClass;

pub struct ReoIrregular;

impl Rule for ReoIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::ReoIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        input.tag.marks(IrregularClass::Reo)
            && input.stem.ends_with('르')
            && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        // 으 어미는 르 어간에 그대로 붙는다 (이르 + 으면 -> 이르면)
        if leading_vowel(input.ending) == Some('ㅡ') {
            return None;
        }

        let ending = ending_jamo(input.ending);
        let mut seq = decompose_str(input.stem);
        seq.push('ㄹ');
        seq.push(NULL_INITIAL);
        seq.push('ㅓ');
        seq.push_str(strip_leading_vowel(&ending));

        Some(compose_str(&Contraction::ReoIrregular.apply(&seq)))
    }
}
