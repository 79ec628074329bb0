//! 모음조화
//!
//! 어간 마지막 모음이 양성(ㅏ ㅗ ㅑ ㅛ ㅘ)이면 어미 첫머리의 어/여/에 계열을
//! 아/야/애 계열로, 음성이면 반대로 바꾼다. 받침은 유지된다(었 <-> 았).
//! 선어말 어미(았/었/였/겠)로 끝나 받침이 ㅆ인 어간 뒤는 항상 음성이다 (갔 + 아요 -> 갔어요).

use crate::classify::{final_consonant, is_bright, last_vowel};
use crate::core::jamo::{is_vowel, NULL_INITIAL};
use crate::core::decompose;

/// 음성 -> 양성
fn to_bright(v: char) -> char {
    match v {
        'ㅓ' => 'ㅏ',
        'ㅕ' => 'ㅑ',
        'ㅔ' => 'ㅐ',
        other => other,
    }
}

/// 양성 -> 음성
fn to_dark(v: char) -> char {
    match v {
        'ㅏ' => 'ㅓ',
        'ㅑ' => 'ㅕ',
        'ㅐ' => 'ㅔ',
        other => other,
    }
}

/// 어간 마지막 모음에 맞춰 어미 조화
pub fn harmonize(stem: &str, ending: &str) -> String {
    let bright = final_consonant(stem) != Some('ㅆ') && is_bright(last_vowel(stem));
    harmonize_as(bright, ending)
}

/// 양성/음성을 직접 지정해 어미 조화
///
/// 바꾸는 것은 첫 모음 음절뿐이고 나머지 음절은 뒤 형태소의 것이라 그대로 둔다.
pub fn harmonize_as(bright: bool, ending: &str) -> String {
    let mut chars = ending.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let shift = if bright { to_bright } else { to_dark };

    let head = if is_vowel(first) {
        shift(first)
    } else {
        match decompose(first) {
            Some(s) if s.initial == NULL_INITIAL => s.with_medial(shift(s.medial)).to_char().unwrap_or(first),
            _ => first,
        }
    };

    let mut result = String::with_capacity(ending.len());
    result.push(head);
    result.push_str(chars.as_str());
    result
}
