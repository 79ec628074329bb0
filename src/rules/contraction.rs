//! 모음 축약과 어간-어미 접합
//!
//! 축약은 자모열 위에서 순서대로 치환 표를 적용한다. 접합 단계에서 어미의 초성 ㅇ을
//! 지우면 모음이 맞닿게 되고, 축약 후에도 맞닿아 남은 모음 사이에는 ㅇ을 되살린다.

use lazy_static::lazy_static;

use crate::core::jamo::{is_vowel, NULL_INITIAL};

/// 규칙 활용: 같은 모음 합치기 후 이중모음화
const REGULAR_TABLE: [(&str, &str); 5] = [
    ("ㅏㅏ", "ㅏ"),
    ("ㅓㅓ", "ㅓ"),
    ("ㅣㅓ", "ㅕ"),
    ("ㅜㅓ", "ㅝ"),
    ("ㅗㅏ", "ㅘ"),
];

const B_IRREGULAR_TABLE: [(&str, &str); 2] = [("ㅗㅏ", "ㅘ"), ("ㅜㅓ", "ㅝ")];

/// ㅎ 탈락 후 남은 모음과 어미 모음의 축약 (초성 ㅇ이 남아 있는 상태에서 적용)
const H_IRREGULAR_TABLE: [(&str, &str); 4] = [
    ("ㅏㅇㅏ", "ㅐ"),
    ("ㅓㅇㅓ", "ㅔ"),
    ("ㅑㅇㅏ", "ㅒ"),
    ("ㅕㅇㅓ", "ㅖ"),
];

const COPULA_TABLE: [(&str, &str); 3] = [("ㅇㅣㅓ", "ㅇㅕ"), ("ㅇㅣㅔ", "ㅇㅖ"), ("ㅇㅣㅑ", "ㅇㅑ")];

/// 규칙 활용에서 축약하지 않는 어간 끝 음절
const NON_CONTRACTING_SYLLABLES: [char; 4] = ['기', '미', '비', '띠'];

/// 현대 한글 중성 21자
const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

lazy_static! {
    /// 러 불규칙: 덧붙은 ㄹ 뒤 초성 ㅇ 제거 (ㄹㅇㅓ -> ㄹㅓ)
    static ref REO_IRREGULAR_TABLE: Vec<(String, String)> = VOWELS
        .iter()
        .map(|&v| (format!("ㄹ{}{}", NULL_INITIAL, v), format!("ㄹ{}", v)))
        .collect();
}

/// 축약 표 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contraction {
    Regular,
    BIrregular,
    ReoIrregular,
    HIrregular,
    Copula,
}

impl Contraction {
    /// 자모열에 축약 표를 순서대로 적용
    pub fn apply(self, jamo_seq: &str) -> String {
        match self {
            Contraction::Regular => replace_all(jamo_seq, &REGULAR_TABLE),
            Contraction::BIrregular => replace_all(jamo_seq, &B_IRREGULAR_TABLE),
            Contraction::HIrregular => replace_all(jamo_seq, &H_IRREGULAR_TABLE),
            Contraction::Copula => replace_all(jamo_seq, &COPULA_TABLE),
            Contraction::ReoIrregular => REO_IRREGULAR_TABLE
                .iter()
                .fold(jamo_seq.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to)),
        }
    }
}

fn replace_all(jamo_seq: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(jamo_seq.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// 규칙 활용에서 모음 축약을 할 어간인지 확인
pub fn should_contract(stem: &str) -> bool {
    stem.chars()
        .next_back()
        .map_or(true, |last| !NON_CONTRACTING_SYLLABLES.contains(&last))
}

/// 열린 자모열(모음이나 모음이 떨어진 자음으로 끝남)에 모음 어미를 붙임
///
/// 어미의 초성 ㅇ을 지우고, 왼쪽이 모음으로 끝나면 매개모음 ㅡ도 함께 지운다
/// (가 + 으면 -> 가면). 어미가 ㅇ+모음으로 시작하지 않으면 그대로 이어 붙인다.
pub fn attach_vowel_ending(left: &str, ending_jamo: &str) -> String {
    let mut result = String::with_capacity(left.len() + ending_jamo.len());
    result.push_str(left);

    let mut rest = ending_jamo.chars();
    match (rest.next(), rest.clone().next()) {
        (Some(NULL_INITIAL), Some(v)) if is_vowel(v) => {
            let left_open_vowel = left.chars().next_back().is_some_and(is_vowel);
            if v == 'ㅡ' && left_open_vowel {
                rest.next();
            }
            result.push_str(rest.as_str());
        }
        _ => result.push_str(ending_jamo),
    }
    result
}

/// 축약되지 않고 맞닿은 모음 사이에 초성 ㅇ 복원 (ㄱㅣㅓ -> ㄱㅣㅇㅓ)
pub fn restore_null_initials(jamo_seq: &str) -> String {
    let mut result = String::with_capacity(jamo_seq.len() + 6);
    let mut prev_vowel = false;
    for c in jamo_seq.chars() {
        let vowel = is_vowel(c);
        if vowel && prev_vowel {
            result.push(NULL_INITIAL);
        }
        result.push(c);
        prev_vowel = vowel;
    }
    result
}
