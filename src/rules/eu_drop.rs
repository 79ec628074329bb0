//! 으 탈락: 받침 없는 ㅡ 어간 + 어/아 어미 (쓰 + 어 -> 써, 바쁘 + 아 -> 바빠)
//!
//! 조화는 ㅡ 앞 음절 모음을 따른다. 한 음절 어간이면 음성으로 본다.

use crate::classify::{has_final_consonant, is_vowel_initial, last_vowel, leading_vowel};
use crate::core::{compose_str, decompose_str};
use crate::rules::contraction::{attach_vowel_ending, restore_null_initials, Contraction};
use crate::rules::harmony::harmonize;
use crate::rules::{ending_jamo, split_last, Rule, RuleInput, RuleKind};

pub struct EuDrop;

impl Rule for EuDrop {
    fn kind(&self) -> RuleKind {
        RuleKind::EuDrop
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        !has_final_consonant(input.stem)
            && last_vowel(input.stem) == Some('ㅡ')
            && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        if leading_vowel(input.ending) == Some('ㅡ') {
            return None;
        }

        let (prefix, last) = split_last(input.stem)?;
        let harmonized = harmonize(prefix, input.ending);

        // ㅡ가 떨어진 초성에 어미 모음이 바로 붙는다
        let mut left = decompose_str(prefix);
        left.push(last.initial);
        let seq = attach_vowel_ending(&left, &ending_jamo(&harmonized));
        let seq = restore_null_initials(&Contraction::Regular.apply(&seq));
        Some(compose_str(&seq))
    }
}
