//! ㅅ 불규칙: 모음 어미 앞에서 받침 ㅅ 탈락 (짓 + 어 -> 지어)
//!
//! 태그 없이 들어온 ㅅ 받침 어간은 `by_default`에 따라 불규칙으로 본다.
//! 태그가 있는데 ㅅ불규칙 표지가 없으면 규칙 활용 (씻 + 어 -> 씻어).

use crate::classify::{final_consonant, is_vowel_initial};
use crate::core::{compose_str, decompose_str};
use crate::rules::harmony::harmonize;
use crate::rules::{ending_jamo, split_last, Rule, RuleInput, RuleKind};
use crate::tag::IrregularClass;

pub struct SIrregular {
    by_default: bool,
}

impl SIrregular {
    pub fn new(by_default: bool) -> Self {
        Self { by_default }
    }
}

impl Rule for SIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::SIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        let tagged = input.tag.marks(IrregularClass::S) || (input.tag.is_absent() && self.by_default);
        tagged && final_consonant(input.stem) == Some('ㅅ') && is_vowel_initial(input.ending)
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let harmonized = harmonize(input.stem, input.ending);
        let (prefix, last) = split_last(input.stem)?;

        // 탈락 후에도 모음끼리 줄이지 않는다 (나 + 아 -> 나아)
        let mut seq = decompose_str(prefix);
        seq.push_str(&last.with_coda(None).to_jamo());
        seq.push_str(&ending_jamo(&harmonized));
        Some(compose_str(&seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &SIrregular, stem: &str, ending: &str, tag: Option<&str>) -> Option<String> {
        let input = RuleInput::new(stem, ending, tag, None);
        rule.check(&input).then(|| rule.apply(&input)).flatten()
    }

    #[test]
    fn test_tagged() {
        let rule = SIrregular::new(false);
        assert_eq!(run(&rule, "짓", "어", Some("VV+ㅅ불규칙")).as_deref(), Some("지어"));
        assert_eq!(run(&rule, "낫", "아", Some("VA+ㅅ불규칙")).as_deref(), Some("나아"));
        assert_eq!(run(&rule, "붓", "었다", Some("VV+ㅅ불규칙")).as_deref(), Some("부었다"));
        assert_eq!(run(&rule, "짓", "으면", Some("VV+ㅅ불규칙")).as_deref(), Some("지으면"));
    }

    #[test]
    fn test_harmonizes_ending() {
        let rule = SIrregular::new(true);
        assert_eq!(run(&rule, "낫", "어", None).as_deref(), Some("나아"));
        assert_eq!(run(&rule, "짓", "아요", None).as_deref(), Some("지어요"));
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(run(&SIrregular::new(true), "잇", "어", None).as_deref(), Some("이어"));
        assert_eq!(run(&SIrregular::new(false), "잇", "어", None), None);
    }

    #[test]
    fn test_tag_without_marker_is_regular() {
        let rule = SIrregular::new(true);
        assert_eq!(run(&rule, "씻", "어", Some("VV")), None);
    }

    #[test]
    fn test_consonant_ending() {
        let rule = SIrregular::new(true);
        assert_eq!(run(&rule, "짓", "고", None), None);
    }
}
