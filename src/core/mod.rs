//! 한글 자모 코덱: 음절 분해/조합과 자모열 처리

pub mod codec;
pub mod composer;
pub mod jamo;
pub mod unicode;

pub use codec::{compose, compose_str, decompose, decompose_str, Syllable};
