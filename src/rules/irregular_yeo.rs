//! 여 불규칙: 하 + 어/아 -> 해 (했다, 해요)
//!
//! 품사 태그가 있으면 동사(VV)나 동사 파생 접미사(XSV)일 때만 적용한다.

use crate::classify::leading_vowel;
use crate::core::compose_str;
use crate::rules::{ending_jamo, strip_leading_vowel, Rule, RuleInput, RuleKind};
use crate::tag::Category;

const HA_STEM: &str = "하";
const HAE_JAMO: &str = "ㅎㅐ";

pub struct YeoIrregular;

impl Rule for YeoIrregular {
    fn kind(&self) -> RuleKind {
        RuleKind::YeoIrregular
    }

    fn check(&self, input: &RuleInput<'_>) -> bool {
        let verbal = matches!(
            input.tag.category,
            None | Some(Category::Verb) | Some(Category::VerbSuffix)
        );
        verbal && input.stem == HA_STEM && matches!(leading_vowel(input.ending), Some('ㅓ' | 'ㅏ'))
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<String> {
        let mut seq = HAE_JAMO.to_string();
        seq.push_str(strip_leading_vowel(&ending_jamo(input.ending)));
        Some(compose_str(&seq))
    }
}
