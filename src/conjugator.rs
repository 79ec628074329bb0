//! 용언 활용기
//!
//! 규칙을 우선순위대로 시도해 처음으로 결과를 낸 규칙의 출력을 돌려준다.
//! 모든 규칙이 물러나면 규칙 활용으로 마무리하므로 항상 문자열을 반환한다.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::config::ConjugatorConfig;
use crate::dictionary::{DictionaryError, ReuDictionary};
use crate::rules::copula::Copula;
use crate::rules::eu_drop::EuDrop;
use crate::rules::irregular_b::BIrregular;
use crate::rules::irregular_d::DIrregular;
use crate::rules::irregular_h::HIrregular;
use crate::rules::irregular_reo::ReoIrregular;
use crate::rules::irregular_reu::ReuIrregular;
use crate::rules::irregular_s::SIrregular;
use crate::rules::irregular_u::UIrregular;
use crate::rules::irregular_yeo::YeoIrregular;
use crate::rules::l_drop::LDrop;
use crate::rules::regular::Regular;
use crate::rules::{Rule, RuleInput, RuleKind};

lazy_static! {
    /// 기본 설정 활용기 (처음 쓸 때 한 번만 생성)
    static ref DEFAULT_CONJUGATOR: Conjugator = Conjugator::new();
}

/// 활용 결과와 적용된 규칙
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub surface: String,
    /// 빈 어간/어미처럼 규칙을 거치지 않으면 None
    pub rule: Option<RuleKind>,
}

/// 용언 활용기 (생성 후 불변, 스레드 간 공유 가능)
pub struct Conjugator {
    rules: Vec<Box<dyn Rule>>,
    fallback: Regular,
    dictionary: Arc<ReuDictionary>,
}

impl Conjugator {
    /// 내장 사전과 기본 설정
    pub fn new() -> Self {
        Self::with_dictionary(ReuDictionary::builtin(), &ConjugatorConfig::default())
    }

    /// 설정에 따라 사전을 읽어 생성
    pub fn from_config(config: &ConjugatorConfig) -> Result<Self, DictionaryError> {
        let mut dictionary = match &config.reu_stems_path {
            Some(path) => ReuDictionary::load(path)?,
            None => ReuDictionary::builtin(),
        };
        dictionary.extend(&config.extra_reu_stems);
        Ok(Self::with_dictionary(dictionary, config))
    }

    /// 주어진 사전으로 생성 (`config`의 사전 관련 항목은 무시)
    pub fn with_dictionary(dictionary: ReuDictionary, config: &ConjugatorConfig) -> Self {
        let dictionary = Arc::new(dictionary);
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(LDrop),
            Box::new(Copula),
            Box::new(SIrregular::new(config.untagged_s_irregular)),
            Box::new(DIrregular),
            Box::new(BIrregular),
            Box::new(ReoIrregular),
            Box::new(HIrregular::new(config.untagged_h_irregular)),
            Box::new(UIrregular),
            Box::new(YeoIrregular),
            Box::new(ReuIrregular::new(Arc::clone(&dictionary))),
            Box::new(EuDrop),
        ];
        Self {
            rules,
            fallback: Regular,
            dictionary,
        }
    }

    pub fn dictionary(&self) -> &ReuDictionary {
        &self.dictionary
    }

    /// 어간과 어미를 활용형으로 결합
    ///
    /// `tag`는 분석기 품사 태그(`VV+ㅂ불규칙` 등), `preceding`은 앞 단어로 '이다' 활용에만 쓰인다.
    pub fn conjugate(&self, stem: &str, ending: &str, tag: Option<&str>, preceding: Option<&str>) -> String {
        self.conjugate_traced(stem, ending, tag, preceding).surface
    }

    /// 활용 결과와 함께 적용된 규칙을 반환
    pub fn conjugate_traced(
        &self,
        stem: &str,
        ending: &str,
        tag: Option<&str>,
        preceding: Option<&str>,
    ) -> Conjugation {
        if stem.is_empty() || ending.is_empty() {
            return Conjugation {
                surface: stem.to_string(),
                rule: None,
            };
        }

        let input = RuleInput::new(stem, ending, tag, preceding);
        for rule in &self.rules {
            if !rule.check(&input) {
                continue;
            }
            match rule.apply(&input) {
                Some(surface) if !surface.is_empty() => {
                    log::debug!("{} + {} -> {} ({})", stem, ending, surface, rule.kind());
                    return Conjugation {
                        surface,
                        rule: Some(rule.kind()),
                    };
                }
                _ => log::trace!("{} 규칙 보류: {} + {}", rule.kind(), stem, ending),
            }
        }

        let surface = self.fallback.conjugate(stem, ending);
        log::debug!("{} + {} -> {} ({})", stem, ending, surface, RuleKind::Regular);
        Conjugation {
            surface,
            rule: Some(RuleKind::Regular),
        }
    }
}

impl Default for Conjugator {
    fn default() -> Self {
        Self::new()
    }
}

/// 기본 설정 활용기로 활용
pub fn conjugate(stem: &str, ending: &str, tag: Option<&str>, preceding: Option<&str>) -> String {
    DEFAULT_CONJUGATOR.conjugate(stem, ending, tag, preceding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(conjugator: &Conjugator, stem: &str, ending: &str, tag: Option<&str>) -> Option<RuleKind> {
        conjugator.conjugate_traced(stem, ending, tag, None).rule
    }

    #[test]
    fn test_empty_inputs() {
        let c = Conjugator::new();
        assert_eq!(c.conjugate("", "어요", None, None), "");
        assert_eq!(c.conjugate("먹", "", None, None), "먹");
        assert_eq!(c.conjugate_traced("", "", None, None).rule, None);
    }

    #[test]
    fn test_rule_selection() {
        let c = Conjugator::new();
        assert_eq!(kind_of(&c, "살", "는", None), Some(RuleKind::LDrop));
        assert_eq!(kind_of(&c, "짓", "어", None), Some(RuleKind::SIrregular));
        assert_eq!(kind_of(&c, "듣", "어", Some("VV+ㄷ불규칙")), Some(RuleKind::DIrregular));
        assert_eq!(kind_of(&c, "돕", "아", Some("VV+ㅂ불규칙")), Some(RuleKind::BIrregular));
        assert_eq!(kind_of(&c, "이르", "어", Some("VV+러불규칙")), Some(RuleKind::ReoIrregular));
        assert_eq!(kind_of(&c, "파랗", "아", None), Some(RuleKind::HIrregular));
        assert_eq!(kind_of(&c, "푸", "어", None), Some(RuleKind::UIrregular));
        assert_eq!(kind_of(&c, "하", "어", None), Some(RuleKind::YeoIrregular));
        assert_eq!(kind_of(&c, "흐르", "어", None), Some(RuleKind::ReuIrregular));
        assert_eq!(kind_of(&c, "쓰", "어", None), Some(RuleKind::EuDrop));
        assert_eq!(kind_of(&c, "먹", "어", None), Some(RuleKind::Regular));
    }

    #[test]
    fn test_copula_rule() {
        let c = Conjugator::new();
        let result = c.conjugate_traced("이", "에요", Some("VCP"), Some("나무"));
        assert_eq!(result.surface, "예요");
        assert_eq!(result.rule, Some(RuleKind::Copula));
    }

    #[test]
    fn test_reo_marker_beats_dictionary() {
        // 이르는 르 불규칙 사전에도 있지만 러불규칙 표지가 우선
        let c = Conjugator::new();
        assert_eq!(c.conjugate("이르", "어", Some("VV+러불규칙"), None), "이르러");
        assert_eq!(c.conjugate("이르", "어", None, None), "일러");
    }

    #[test]
    fn test_declined_rule_falls_through() {
        let c = Conjugator::new();
        let result = c.conjugate_traced("쓰", "으면", None, None);
        assert_eq!(result.surface, "쓰면");
        assert_eq!(result.rule, Some(RuleKind::Regular));

        let result = c.conjugate_traced("흐르", "으면", None, None);
        assert_eq!(result.surface, "흐르면");
        assert_eq!(result.rule, Some(RuleKind::Regular));
    }

    #[test]
    fn test_untagged_policies() {
        let strict = Conjugator::with_dictionary(
            ReuDictionary::builtin(),
            &ConjugatorConfig::new()
                .with_untagged_s_irregular(false)
                .with_untagged_h_irregular(false),
        );
        assert_eq!(strict.conjugate("씻", "어", None, None), "씻어");
        assert_eq!(strict.conjugate("놓", "아", None, None), "놓아");
        assert_eq!(strict.conjugate("짓", "어", Some("VV+ㅅ불규칙"), None), "지어");
        assert_eq!(strict.conjugate("파랗", "아", Some("VA+ㅎ불규칙"), None), "파래");
    }

    #[test]
    fn test_custom_dictionary() {
        let c = Conjugator::with_dictionary(ReuDictionary::parse("따르"), &ConjugatorConfig::default());
        assert_eq!(c.conjugate("따르", "아", None, None), "딸라");
        // 사전에서 빠진 어간은 으 탈락
        assert_eq!(c.conjugate("흐르", "어", None, None), "흐러");
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reu.txt");
        std::fs::write(&path, "흐르\n").unwrap();

        let config = ConjugatorConfig::new()
            .with_reu_stems_path(&path)
            .with_extra_reu_stem("부르");
        let c = Conjugator::from_config(&config).unwrap();
        assert_eq!(c.dictionary().len(), 2);
        assert_eq!(c.conjugate("부르", "어", None, None), "불러");
        assert_eq!(c.conjugate("모르", "아", None, None), "모라");
    }

    #[test]
    fn test_default_function() {
        assert_eq!(conjugate("먹", "었다", None, None), "먹었다");
        assert_eq!(conjugate("가", "아요", None, None), "가요");
    }
}
