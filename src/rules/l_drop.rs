//! ㄹ 탈락: ㄹ 받침 어간 + 느 계열 어미 또는 낱자음 ㄴ/ㅂ/ㅅ/ㅁ

use crate::classify::{final_consonant, first_syllable};
use crate::rules::{attach_bare_jamo, split_last, Rule, RuleInput, RuleKind};

/// ㄹ이 떨어지는 낱자음 어미
const DROPPING_JAMO: [char; 4] = ['ㄴ', 'ㅂ', 'ㅅ', 'ㅁ'];

pub struct LDrop;

fn is_neu_series(ending: &str) -> bool {
    first_syllable(ending).is_some_and(|s| s.initial == 'ㄴ' && s.medial == 'ㅡ')
}

impl Rule for LDrop {
    fn kind(&self) -> RuleKind {
        RuleKind::LDrop
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        if final_consonant(input.stem) != Some('ㄹ') {
            return false;
        }
        is_neu_series(input.ending)
            || input
                .ending
                .chars()
                .next()
                .is_some_and(|c| DROPPING_JAMO.contains(&c))
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let (prefix, last) = split_last(input.stem)?;
        let mut open_stem = prefix.to_string();
        open_stem.push(last.with_coda(None).to_char()?);
        // ㄹ이 떨어진 어간은 열린 음절이라 매개모음이 들어가지 않는다
        Some(attach_bare_jamo(&open_stem, input.ending))
    }
}
