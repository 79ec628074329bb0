//! 자모열 -> 완성형 한글 조합 상태 기계
//!
//! 자음 뒤에 모음이 오면 그 자음은 항상 다음 음절의 초성이 되고,
//! 그 밖의 경우(자음, 자모가 아닌 문자, 입력 끝)에는 현재 음절의 종성이 된다.
//! 이 판정은 `take_coda` 한 곳에서만 이뤄진다.

use crate::core::jamo::{classify_jamo, Jamo};
use crate::core::unicode::compose_syllable;

/// 조합 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 조합 중인 음절 없음
    Empty,
    /// 초성만 읽음
    Choseong,
    /// 초성+중성 (종성 여부는 미리보기로 결정)
    ChoseongJungseong,
}

/// 읽은 자모 문자와 그 자리의 인덱스
#[derive(Debug, Clone, Copy)]
struct Slot {
    jamo: char,
    index: u32,
}

impl Slot {
    const EMPTY: Slot = Slot { jamo: ' ', index: 0 };
}

/// 인덱스 버퍼 위에서 동작하는 음절 조합기
pub struct SyllableComposer {
    state: State,
    /// 입력 자모열
    buf: Vec<char>,
    /// 다음에 읽을 위치
    pos: usize,
    /// 현재 초성
    choseong: Slot,
    /// 현재 중성
    jungseong: Slot,
    /// 출력 버퍼
    output: String,
}

impl SyllableComposer {
    /// 자모열로 조합기 생성
    pub fn new(jamo_seq: &str) -> Self {
        let buf: Vec<char> = jamo_seq.chars().collect();
        let capacity = buf.len();
        Self {
            state: State::Empty,
            buf,
            pos: 0,
            choseong: Slot::EMPTY,
            jungseong: Slot::EMPTY,
            output: String::with_capacity(capacity * 3),
        }
    }

    /// 입력 끝까지 상태 전이 후 결과 반환
    pub fn finish(mut self) -> String {
        while self.step() {}
        self.flush_current(None);
        self.output
    }

    /// 한 번의 상태 전이. 더 읽을 입력이 없으면 false
    fn step(&mut self) -> bool {
        match self.state {
            State::Empty => {
                let Some(&c) = self.buf.get(self.pos) else {
                    return false;
                };
                self.pos += 1;
                match classify_jamo(c).and_then(|j| j.choseong_index()) {
                    Some(index) => {
                        self.choseong = Slot { jamo: c, index };
                        self.state = State::Choseong;
                    }
                    // 모음 단독, 초성 불가 겹받침, 자모가 아닌 문자는 그대로 출력
                    None => self.output.push(c),
                }
                true
            }
            State::Choseong => match self.peek_jamo(0).and_then(|(c, j)| Some((c, j.jungseong_index()?))) {
                Some((c, index)) => {
                    self.pos += 1;
                    self.jungseong = Slot { jamo: c, index };
                    self.state = State::ChoseongJungseong;
                    true
                }
                None => {
                    // 모음이 따라오지 않는 초성은 단독 자모로 확정
                    self.flush_current(None);
                    self.pos < self.buf.len()
                }
            },
            State::ChoseongJungseong => {
                let coda = self.take_coda();
                self.flush_current(coda);
                self.pos < self.buf.len()
            }
        }
    }

    /// 종성 미리보기: 다음 자음이 종성 가능하고, 그 뒤가 모음이 아닐 때만 종성으로 소비
    fn take_coda(&mut self) -> Option<Slot> {
        let (c, jamo) = self.peek_jamo(0)?;
        let index = jamo.jongseong_index()?;
        if self.peek_jamo(1).is_some_and(|(_, next)| next.is_vowel()) {
            // 다음 음절의 초성
            return None;
        }
        self.pos += 1;
        Some(Slot { jamo: c, index })
    }

    fn peek_jamo(&self, offset: usize) -> Option<(char, Jamo)> {
        let c = *self.buf.get(self.pos + offset)?;
        classify_jamo(c).map(|j| (c, j))
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self, coda: Option<Slot>) {
        match self.state {
            State::Empty => {}
            State::Choseong => self.output.push(self.choseong.jamo),
            State::ChoseongJungseong => {
                let jong = coda.map_or(0, |slot| slot.index);
                match compose_syllable(self.choseong.index, self.jungseong.index, jong) {
                    Some(c) => self.output.push(c),
                    None => {
                        self.output.push(self.choseong.jamo);
                        self.output.push(self.jungseong.jamo);
                        if let Some(slot) = coda {
                            self.output.push(slot.jamo);
                        }
                    }
                }
            }
        }
        self.state = State::Empty;
    }
}

/// 자모 문자 세 개로 음절 하나 조합 (하나라도 자리에 맞지 않으면 None)
pub(crate) fn compose_jamo(initial: char, medial: char, coda: Option<char>) -> Option<char> {
    let cho = classify_jamo(initial)?.choseong_index()?;
    let jung = classify_jamo(medial)?.jungseong_index()?;
    let jong = match coda {
        Some(c) => classify_jamo(c)?.jongseong_index()?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}
