//! 우 불규칙: 푸 + 어 -> 퍼

use crate::classify::leading_vowel;
use crate::core::compose_str;
use crate::rules::{ending_jamo, split_last, strip_leading_vowel, Rule, RuleInput, RuleKind};

/// 우 불규칙 어간 (푸다 하나뿐)
const U_IRREGULAR_STEM: &str = "푸";

pub struct UIrregular;

impl Rule for UIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::UIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        input.stem == U_IRREGULAR_STEM && matches!(leading_vowel(input.ending), Some('ㅓ' | 'ㅏ'))
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let (_, last) = split_last(input.stem)?;
        let mut seq = last.with_medial('ㅓ').to_jamo();
        seq.push_str(strip_leading_vowel(&ending_jamo(input.ending)));
        Some(compose_str(&seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(stem: &str, ending: &str) -> Option<String> {
        let input = RuleInput::new(stem, ending, None, None);
        UIrregular.check(&input).then(|| UIrregular.apply(&input)).flatten()
    }

    #[test]
    fn test_pu() {
        assert_eq!(run("푸", "어").as_deref(), Some("퍼"));
        assert_eq!(run("푸", "었다").as_deref(), Some("펐다"));
        assert_eq!(run("푸", "어요").as_deref(), Some("퍼요"));
        assert_eq!(run("푸", "아서").as_deref(), Some("퍼서"));
    }

    #[test]
    fn test_not_triggered() {
        assert_eq!(run("푸", "고"), None);
        assert_eq!(run("푸", "으면"), None);
        assert_eq!(run("주", "어"), None);
    }
}
