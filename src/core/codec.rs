//! 한글 음절 <-> 자모열 변환기

use crate::core::composer::{compose_jamo, SyllableComposer};
use crate::core::unicode::{
    choseong_to_jamo_char, decompose_syllable, jongseong_to_jamo_char, jungseong_to_jamo_char,
};

/// 완성형 음절 하나의 초성/중성/종성 (모두 호환용 자모 문자)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: char,
    pub medial: char,
    /// 받침 (없으면 None)
    pub coda: Option<char>,
}

impl Syllable {
    /// 완성형 음절로 다시 조합
    pub fn to_char(self) -> Option<char> {
        compose_jamo(self.initial, self.medial, self.coda)
    }

    /// 받침만 바꾼 음절
    pub fn with_coda(self, coda: Option<char>) -> Self {
        Self { coda, ..self }
    }

    /// 모음만 바꾼 음절
    pub fn with_medial(self, medial: char) -> Self {
        Self { medial, ..self }
    }

    /// 자모열 표현 (받침 없으면 두 글자)
    pub fn to_jamo(self) -> String {
        let mut s = String::with_capacity(9);
        s.push(self.initial);
        s.push(self.medial);
        if let Some(c) = self.coda {
            s.push(c);
        }
        s
    }
}

/// 완성형 음절을 초성/중성/종성으로 분해
/// 한글 음절이 아니면 None
pub fn decompose(c: char) -> Option<Syllable> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some(Syllable {
        initial: choseong_to_jamo_char(cho)?,
        medial: jungseong_to_jamo_char(jung)?,
        coda: jongseong_to_jamo_char(jong),
    })
}

/// 초성/중성/(종성)을 음절 하나로 조합
/// 자리에 맞지 않는 자모가 섞이면 세 인자를 그대로 이어 붙인 문자열 반환
///
/// 종성 자리에 올 수 없는 자음(ㄸ, ㅃ, ㅉ)도 버리지 않는다. `compose('ㄱ', 'ㅏ', Some('ㄸ'))`은 "가"가 아니라 "ㄱㅏㄸ"이다.
pub fn compose(initial: char, medial: char, coda: Option<char>) -> String {
    match compose_jamo(initial, medial, coda) {
        Some(c) => c.to_string(),
        None => {
            let mut s = String::new();
            s.push(initial);
            s.push(medial);
            if let Some(c) = coda {
                s.push(c);
            }
            s
        }
    }
}

/// 문자열을 자모열로 분해
/// 한글 음절이 아닌 문자는 그대로 유지
pub fn decompose_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        match decompose(c) {
            Some(syllable) => {
                result.push(syllable.initial);
                result.push(syllable.medial);
                if let Some(coda) = syllable.coda {
                    result.push(coda);
                }
            }
            None => result.push(c),
        }
    }
    result
}

/// 자모열을 완성형 한글 문자열로 조합
pub fn compose_str(jamo_seq: &str) -> String {
    SyllableComposer::new(jamo_seq).finish()
}
