//! 어간/어미의 음운 부류 판정
//!
//! 어간은 마지막 음절(받침 유무, 마지막 모음)을, 어미는 첫 글자를 본다.

use crate::core::jamo::{is_consonant, is_vowel, NULL_INITIAL};
use crate::core::{decompose, Syllable};

/// 양성 모음
const BRIGHT_VOWELS: [char; 5] = ['ㅏ', 'ㅗ', 'ㅑ', 'ㅛ', 'ㅘ'];

/// 어미의 첫 글자 부류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingClass {
    /// 낱자음으로 시작 (ㄴ, ㅂ니다 ...)
    BareJamo,
    /// 실제 초성이 있는 음절로 시작 (고, 는다 ...)
    ConsonantInitial,
    /// 모음으로 시작: 초성 ㅇ 음절이거나 낱모음 (어요, 었다, ㅓ ...)
    VowelInitial,
    /// 한글이 아닌 문자로 시작하거나 비어 있음
    Opaque,
}

/// 마지막 글자를 음절로 분해 (한글 음절이 아니면 None)
pub fn last_syllable(text: &str) -> Option<Syllable> {
    text.chars().next_back().and_then(decompose)
}

/// 첫 글자를 음절로 분해 (한글 음절이 아니면 None)
pub fn first_syllable(text: &str) -> Option<Syllable> {
    text.chars().next().and_then(decompose)
}

/// 마지막 글자의 받침
pub fn final_consonant(text: &str) -> Option<char> {
    last_syllable(text).and_then(|s| s.coda)
}

/// 마지막 글자에 받침이 있는지 확인
pub fn has_final_consonant(text: &str) -> bool {
    final_consonant(text).is_some()
}

/// 마지막 글자의 모음 (한글 음절이 아니면 None)
pub fn last_vowel(text: &str) -> Option<char> {
    last_syllable(text).map(|s| s.medial)
}

/// 양성 모음인지 확인 (모음이 없으면 음성으로 취급)
pub fn is_bright(vowel: Option<char>) -> bool {
    vowel.is_some_and(|v| BRIGHT_VOWELS.contains(&v))
}

/// 한글 음절 수
pub fn syllable_count(text: &str) -> usize {
    text.chars().filter(|&c| decompose(c).is_some()).count()
}

/// 어미의 첫 글자 부류 판정
pub fn ending_class(ending: &str) -> EndingClass {
    let Some(first) = ending.chars().next() else {
        return EndingClass::Opaque;
    };

    if is_consonant(first) {
        return EndingClass::BareJamo;
    }
    if is_vowel(first) {
        return EndingClass::VowelInitial;
    }
    match decompose(first) {
        Some(s) if s.initial == NULL_INITIAL => EndingClass::VowelInitial,
        Some(_) => EndingClass::ConsonantInitial,
        None => EndingClass::Opaque,
    }
}

/// 어미가 모음으로 시작하는지 확인
pub fn is_vowel_initial(ending: &str) -> bool {
    ending_class(ending) == EndingClass::VowelInitial
}

/// 어미 첫머리의 모음 (초성 ㅇ 음절의 중성 또는 낱모음)
pub fn leading_vowel(ending: &str) -> Option<char> {
    let first = ending.chars().next()?;
    if is_vowel(first) {
        return Some(first);
    }
    decompose(first)
        .filter(|s| s.initial == NULL_INITIAL)
        .map(|s| s.medial)
}
