//! 규칙 활용 (다른 규칙이 모두 적용되지 않을 때)

use crate::classify::{ending_class, last_syllable, EndingClass};
use crate::core::{compose_str, decompose_str};
use crate::rules::contraction::{attach_vowel_ending, restore_null_initials, should_contract, Contraction};
use crate::rules::harmony::harmonize;
use crate::rules::{attach_bare_jamo, ending_jamo, Rule, RuleInput, RuleKind};

pub struct Regular;

impl Regular {
    /// 항상 결과를 내는 규칙 활용
    pub fn conjugate(&self, stem: &str, ending: &str) -> String {
        match ending_class(ending) {
            EndingClass::BareJamo => attach_bare_jamo(stem, ending),
            EndingClass::ConsonantInitial | EndingClass::Opaque => format!("{}{}", stem, ending),
            EndingClass::VowelInitial => {
                let harmonized = harmonize(stem, ending);
                let stem_jamo = decompose_str(stem);
                let ending = ending_jamo(&harmonized);

                let open = last_syllable(stem).is_some_and(|s| s.coda.is_none());
                let mut seq = if open {
                    attach_vowel_ending(&stem_jamo, &ending)
                } else {
                    stem_jamo + &ending
                };
                if should_contract(stem) {
                    seq = Contraction::Regular.apply(&seq);
                }
                compose_str(&restore_null_initials(&seq))
            }
        }
    }
}

impl Rule for Regular {
    fn kind(&self) -> RuleKind {
        RuleKind::Regular
    }

    fn check(&self, _input: &RuleInput<'_>) -> bool {
        true
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        Some(self.conjugate(input.stem, input.ending))
    }
}
