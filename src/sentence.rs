//! 형태소 분석 결과로 문장 복원
//!
//! 분석기가 나눈 어간과 어미를 다시 활용형으로 붙인다.
//! 입력은 어절 배열이고, 어절은 형태소 배열이다.
//!
//! # JSON 형식
//! ```json
//! [
//!   [{"form": "나", "tag": "NP", "start": 0, "end": 1}, ["는", "JX", 1, 2]],
//!   [["먹", "VV", 6, 7], ["었", "EP", 7, 8], ["어요", "EF", 8, 10]]
//! ]
//! ```
//! 형태소는 객체나 `[형태, 태그, 시작, 끝]` 배열 둘 다 받는다.

use serde::{Deserialize, Serialize};

use crate::conjugator::Conjugator;

/// 용언 품사 태그
const PREDICATE_TAGS: [&str; 7] = ["VV", "VA", "VX", "VCP", "VCN", "XSV", "XSA"];
/// 어미 태그
const ENDING_TAGS: [&str; 5] = ["EP", "EF", "EC", "ETN", "ETM"];

/// 문장 복원 에러
#[derive(Debug)]
pub enum SentenceError {
    /// 분석 결과 JSON 파싱 실패
    Parse(String),
}

impl std::fmt::Display for SentenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentenceError::Parse(s) => write!(f, "분석 결과 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for SentenceError {}

impl From<serde_json::Error> for SentenceError {
    fn from(e: serde_json::Error) -> Self {
        SentenceError::Parse(e.to_string())
    }
}

/// 형태소 하나 (원문 내 문자 오프셋 포함)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMorpheme")]
pub struct Morpheme {
    pub form: String,
    pub tag: String,
    pub start: usize,
    pub end: usize,
}

impl Morpheme {
    pub fn new(form: impl Into<String>, tag: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            form: form.into(),
            tag: tag.into(),
            start,
            end,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMorpheme {
    Object {
        form: String,
        tag: String,
        start: usize,
        end: usize,
    },
    Tuple(String, String, usize, usize),
}

impl From<RawMorpheme> for Morpheme {
    fn from(raw: RawMorpheme) -> Self {
        match raw {
            RawMorpheme::Object {
                form,
                tag,
                start,
                end,
            }
            | RawMorpheme::Tuple(form, tag, start, end) => Morpheme {
                form,
                tag,
                start,
                end,
            },
        }
    }
}

/// 태그 첫 부분만 본다 (`VV+ㅂ불규칙` -> VV)
fn base_tag(tag: &str) -> &str {
    tag.split('+').next().unwrap_or(tag)
}

/// 용언 어간 태그인지 확인
pub fn is_predicate_tag(tag: &str) -> bool {
    PREDICATE_TAGS.contains(&base_tag(tag))
}

/// 어미 태그인지 확인
pub fn is_ending_tag(tag: &str) -> bool {
    ENDING_TAGS.contains(&base_tag(tag))
}

/// 문장 복원기
pub struct Reconstructor<'a> {
    conjugator: &'a Conjugator,
}

impl<'a> Reconstructor<'a> {
    pub fn new(conjugator: &'a Conjugator) -> Self {
        Self { conjugator }
    }

    /// 어절 하나 복원
    ///
    /// 용언 어간 뒤의 어미들을 차례로 활용하며 앞 결과를 다음 어간으로 넘긴다.
    /// `preceding_word`는 어절 첫머리 '이다'의 앞 단어로 쓰인다.
    pub fn reconstruct_word(&self, morphemes: &[Morpheme], preceding_word: Option<&str>) -> String {
        let mut output = String::new();
        let mut i = 0;

        while i < morphemes.len() {
            let stem = &morphemes[i];
            i += 1;
            if !is_predicate_tag(&stem.tag) {
                output.push_str(&stem.form);
                continue;
            }

            let preceding = if output.is_empty() {
                preceding_word.map(str::to_string)
            } else {
                Some(output.clone())
            };

            let mut current = stem.form.clone();
            while let Some(ending) = morphemes.get(i).filter(|m| is_ending_tag(&m.tag)) {
                current = self.conjugator.conjugate(
                    &current,
                    &ending.form,
                    Some(&stem.tag),
                    preceding.as_deref(),
                );
                i += 1;
            }
            output.push_str(&current);
        }

        output
    }

    /// 어절들을 복원해 이어 붙임. 원문 오프셋에 틈이 있으면 공백 하나를 넣는다
    pub fn reconstruct(&self, words: &[Vec<Morpheme>]) -> String {
        let mut sentence = String::new();
        let mut previous: Option<(String, usize)> = None;

        for word in words {
            let Some(first) = word.first() else {
                continue;
            };
            if let Some((_, prev_end)) = &previous {
                if first.start > *prev_end {
                    sentence.push(' ');
                }
            }

            let text = self.reconstruct_word(word, previous.as_ref().map(|(text, _)| text.as_str()));
            sentence.push_str(&text);

            let end = word.last().map_or(first.end, |m| m.end);
            previous = Some((text, end));
        }

        sentence
    }

    /// 분석 결과 JSON을 파싱해 복원
    pub fn reconstruct_json(&self, json: &str) -> Result<String, SentenceError> {
        let words: Vec<Vec<Morpheme>> = serde_json::from_str(json)?;
        Ok(self.reconstruct(&words))
    }
}
