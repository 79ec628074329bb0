//! ㅎ 불규칙: 받침 ㅎ이 떨어지고 어간 모음과 어미 모음이 합쳐짐
//!
//! 파랗 + 아 -> 파래, 하얗 + 아 -> 하얘, 파랗 + 으면 -> 파라면.
//! 좋다는 항상 규칙 활용. 태그 없는 ㅎ 받침 어간은 `by_default`를 따른다.

use crate::classify::{final_consonant, is_vowel_initial, leading_vowel};
use crate::core::{compose_str, decompose_str};
use crate::rules::contraction::Contraction;
use crate::rules::harmony::harmonize;
use crate::rules::{ending_jamo, split_last, strip_leading_vowel, Rule, RuleInput, RuleKind};
use crate::tag::IrregularClass;

const REGULAR_H_STEMS: [&str; 1] = ["좋"];

pub struct HIrregular {
    by_default: bool,
}

impl HIrregular {
    pub fn new(by_default: bool) -> Self {
        Self { by_default }
    }
}

impl Rule for HIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::HIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        let tagged = input.tag.marks(IrregularClass::H) || self.by_default;
        tagged
            && final_consonant(input.stem) == Some('ㅎ')
            && !REGULAR_H_STEMS.contains(&input.stem)
            && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let (prefix, last) = split_last(input.stem)?;
        let mut seq = decompose_str(prefix);
        seq.push_str(&last.with_coda(None).to_jamo());

        if leading_vowel(input.ending) == Some('ㅡ') {
            seq.push_str(strip_leading_vowel(&ending_jamo(input.ending)));
            return Some(compose_str(&seq));
        }

        let harmonized = harmonize(input.stem, input.ending);
        seq.push_str(&ending_jamo(&harmonized));
        Some(compose_str(&Contraction::HIrregular.apply(&seq)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &HIrregular, stem: &str, ending: &str, tag: Option<&str>) -> Option<String> {
        let input = RuleInput::new(stem, ending, tag, None);
        rule.check(&input).then(|| rule.apply(&input)).flatten()
    }

    #[test]
    fn test_contraction() {
        let rule = HIrregular::new(true);
        assert_eq!(run(&rule, "파랗", "아", None).as_deref(), Some("파래"));
        assert_eq!(run(&rule, "빨갛", "아", None).as_deref(), Some("빨개"));
        assert_eq!(run(&rule, "하얗", "아", None).as_deref(), Some("하얘"));
        assert_eq!(run(&rule, "누렇", "어", None).as_deref(), Some("누레"));
        assert_eq!(run(&rule, "파랗", "았다", None).as_deref(), Some("파랬다"));
    }

    #[test]
    fn test_eu_ending_absorbed() {
        let rule = HIrregular::new(true);
        assert_eq!(run(&rule, "파랗", "으면", None).as_deref(), Some("파라면"));
        assert_eq!(run(&rule, "파랗", "은", None).as_deref(), Some("파란"));
    }

    #[test]
    fn test_joh_is_regular() {
        let rule = HIrregular::new(true);
        assert_eq!(run(&rule, "좋", "아", Some("VA+ㅎ불규칙")), None);
        assert_eq!(run(&rule, "좋", "아", None), None);
    }

    #[test]
    fn test_default_policy() {
        let rule = HIrregular::new(false);
        assert_eq!(run(&rule, "놓", "아", None), None);
        assert_eq!(run(&rule, "노랗", "아", Some("VA+ㅎ불규칙")).as_deref(), Some("노래"));
    }

    #[test]
    fn test_consonant_ending() {
        let rule = HIrregular::new(true);
        assert_eq!(run(&rule, "파랗", "고", None), None);
    }
}
