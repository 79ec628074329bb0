//! 호환용 자모 문자 분류
//!
//! 자모열(jamo sequence)은 초성/중성/종성을 구분하지 않고 같은 호환용 자모
//! 문자(ㄱ, ㅏ, ㄺ ...)로 표현한다. 어느 자리에 쓰일 수 있는지는 여기서 판정한다.

use crate::core::unicode::{jamo_char_to_choseong, jamo_char_to_jongseong, jamo_char_to_jungseong};

/// 초성 자리의 ㅇ (음가 없는 초성)
pub const NULL_INITIAL: char = 'ㅇ';

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, None이면 초성 불가 / jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: Option<u32>,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 초성 인덱스 반환 (초성 가능한 자음인 경우만)
    pub fn choseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Consonant { cho_index, .. } => *cho_index,
            Jamo::Vowel { .. } => None,
        }
    }

    /// 중성 인덱스 반환 (모음인 경우만)
    pub fn jungseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Vowel { jung_index } => Some(*jung_index),
            Jamo::Consonant { .. } => None,
        }
    }

    /// 종성 인덱스 반환 (종성 가능한 자음인 경우만)
    pub fn jongseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Consonant { jong_index, .. } => *jong_index,
            Jamo::Vowel { .. } => None,
        }
    }

    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel { .. })
    }
}

/// 호환용 자모 문자 하나를 분류
/// 자모가 아닌 문자(완성형 음절, 영문, 숫자 등)는 None 반환
pub fn classify_jamo(c: char) -> Option<Jamo> {
    if let Some(jung_index) = jamo_char_to_jungseong(c) {
        return Some(Jamo::Vowel { jung_index });
    }

    let cho_index = jamo_char_to_choseong(c);
    let jong_index = jamo_char_to_jongseong(c);
    if cho_index.is_none() && jong_index.is_none() {
        return None;
    }
    Some(Jamo::Consonant {
        cho_index,
        jong_index,
    })
}

/// 자음 자모인지 확인 (겹받침 포함)
pub fn is_consonant(c: char) -> bool {
    classify_jamo(c).is_some_and(|j| j.is_consonant())
}

/// 모음 자모인지 확인
pub fn is_vowel(c: char) -> bool {
    classify_jamo(c).is_some_and(|j| j.is_vowel())
}
