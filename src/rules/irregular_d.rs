//! ㄷ 불규칙: 모음 어미 앞에서 받침 ㄷ이 ㄹ로 바뀜 (듣 + 어 -> 들어)

use crate::classify::{final_consonant, is_vowel_initial};
use crate::core::{compose_str, decompose_str};
use crate::rules::harmony::harmonize;
use crate::rules::{ending_jamo, split_last, Rule, RuleInput, RuleKind};
use crate::tag::IrregularClass;

pub struct DIrregular;

impl Rule for DIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::DIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        input.tag.marks(IrregularClass::D)
            && final_consonant(input.stem) == Some('ㄷ')
            && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let harmonized = harmonize(input.stem, input.ending);
        let (prefix, last) = split_last(input.stem)?;

        let mut seq = decompose_str(prefix);
        seq.push_str(&last.with_coda(Some('ㄹ')).to_jamo());
        seq.push_str(&ending_jamo(&harmonized));
        Some(compose_str(&seq))
    }
}
