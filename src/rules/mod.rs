//! 활용 규칙
//!
//! 규칙마다 `check`(발동 조건)와 `apply`(변형)를 가진다. `apply`는 조건이 맞아도
//! None을 돌려 다음 규칙에 넘길 수 있다. 우선순위는 `Conjugator`가 정한다.

pub mod contraction;
pub mod copula;
pub mod eu_drop;
pub mod harmony;
pub mod irregular_b;
pub mod irregular_d;
pub mod irregular_h;
pub mod irregular_reo;
pub mod irregular_reu;
pub mod irregular_s;
pub mod irregular_u;
pub mod irregular_yeo;
pub mod l_drop;
pub mod regular;

use std::fmt;

use crate::core::jamo::{is_vowel, NULL_INITIAL};
use crate::core::{compose_str, decompose, decompose_str, Syllable};
use crate::tag::Tag;

/// 규칙 종류 (우선순위 순)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    LDrop,
    Copula,
    SIrregular,
    DIrregular,
    BIrregular,
    ReoIrregular,
    HIrregular,
    UIrregular,
    YeoIrregular,
    ReuIrregular,
    EuDrop,
    Regular,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::LDrop => "ㄹ탈락",
            RuleKind::Copula => "이다",
            RuleKind::SIrregular => "ㅅ불규칙",
            RuleKind::DIrregular => "ㄷ불규칙",
            RuleKind::BIrregular => "ㅂ불규칙",
            RuleKind::ReoIrregular => "러불규칙",
            RuleKind::HIrregular => "ㅎ불규칙",
            RuleKind::UIrregular => "우불규칙",
            RuleKind::YeoIrregular => "여불규칙",
            RuleKind::ReuIrregular => "르불규칙",
            RuleKind::EuDrop => "으탈락",
            RuleKind::Regular => "규칙 활용",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 규칙에 넘기는 한 번의 활용 요청
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub stem: &'a str,
    pub ending: &'a str,
    pub tag: Tag,
    /// 앞 단어 (이다 활용에서만 사용)
    pub preceding: Option<&'a str>,
}

impl<'a> RuleInput<'a> {
    pub fn new(stem: &'a str, ending: &'a str, tag: Option<&str>, preceding: Option<&'a str>) -> Self {
        Self {
            stem,
            ending,
            tag: Tag::parse(tag),
            preceding,
        }
    }
}

/// 우선순위 목록에 들어가는 활용 규칙
pub trait Rule: Send + Sync {
    fn kind(&self) -> RuleKind;

    /// 발동 조건
    fn check(&self, input: &RuleInput<'_>) -> bool;

    /// 변형 결과. None이면 다음 규칙으로 넘어감
    fn apply(&self, input: &RuleInput<'_>) -> Option<String>;
}

/// 어간을 (마지막 음절 앞부분, 마지막 음절)로 나눔
pub(crate) fn split_last(stem: &str) -> Option<(&str, Syllable)> {
    let (idx, last) = stem.char_indices().next_back()?;
    Some((&stem[..idx], decompose(last)?))
}

/// 어미를 자모열로 분해. 낱모음으로 시작하면 앞에 초성 ㅇ을 채운다
pub(crate) fn ending_jamo(ending: &str) -> String {
    let jamo = decompose_str(ending);
    match jamo.chars().next() {
        Some(c) if is_vowel(c) => {
            let mut s = String::with_capacity(jamo.len() + 3);
            s.push(NULL_INITIAL);
            s.push_str(&jamo);
            s
        }
        _ => jamo,
    }
}

/// 낱자음 어미(ㄴ, ㅂ니다 ...) 접합. 어간에 받침이 있으면 매개모음 으를 넣는다
pub(crate) fn attach_bare_jamo(stem: &str, ending: &str) -> String {
    let mut seq = decompose_str(stem);
    if crate::classify::has_final_consonant(stem) {
        seq.push(NULL_INITIAL);
        seq.push('ㅡ');
    }
    seq.push_str(&decompose_str(ending));
    compose_str(&seq)
}

/// 모음 어미 자모열에서 첫 모음 자리(초성 ㅇ + 중성)를 떼어냄
pub(crate) fn strip_leading_vowel(ending_jamo: &str) -> &str {
    let mut chars = ending_jamo.chars();
    match (chars.next(), chars.next()) {
        (Some(NULL_INITIAL), Some(v)) if is_vowel(v) => chars.as_str(),
        _ => ending_jamo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_last() {
        let (prefix, last) = split_last("아름답").unwrap();
        assert_eq!(prefix, "아름");
        assert_eq!(last.to_char(), Some('답'));

        let (prefix, last) = split_last("돕").unwrap();
        assert_eq!(prefix, "");
        assert_eq!(last.coda, Some('ㅂ'));

        assert!(split_last("").is_none());
        assert!(split_last("ab").is_none());
    }

    #[test]
    fn test_ending_jamo() {
        assert_eq!(ending_jamo("어요"), "ㅇㅓㅇㅛ");
        assert_eq!(ending_jamo("ㅓ요"), "ㅇㅓㅇㅛ");
        assert_eq!(ending_jamo("ㄴ"), "ㄴ");
        assert_eq!(ending_jamo(""), "");
    }

    #[test]
    fn test_attach_bare_jamo() {
        assert_eq!(attach_bare_jamo("잡", "ㄴ"), "잡은");
        assert_eq!(attach_bare_jamo("가", "ㄴ"), "간");
        assert_eq!(attach_bare_jamo("가", "ㅂ니다"), "갑니다");
        assert_eq!(attach_bare_jamo("살", "ㅁ"), "살음");
    }

    #[test]
    fn test_strip_leading_vowel() {
        assert_eq!(strip_leading_vowel("ㅇㅓㅆㄷㅏ"), "ㅆㄷㅏ");
        assert_eq!(strip_leading_vowel("ㅇㅓ"), "");
        assert_eq!(strip_leading_vowel("ㄱㅗ"), "ㄱㅗ");
    }

    #[test]
    fn test_rule_input_parses_tag() {
        let input = RuleInput::new("짓", "어", Some("VV+ㅅ불규칙"), None);
        assert!(input.tag.marks(crate::tag::IrregularClass::S));
        assert!(RuleInput::new("먹", "어", None, None).tag.is_absent());
    }

    #[test]
    fn test_rule_kind_display() {
        assert_eq!(RuleKind::BIrregular.to_string(), "ㅂ불규칙");
        assert_eq!(RuleKind::Regular.to_string(), "규칙 활용");
    }
}
