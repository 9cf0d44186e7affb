//! 음차 변환 핵심 모듈

mod composer;
mod phonetic;
mod substitution;
pub mod transliterator;
pub mod unicode;

pub use composer::compose_jamo;
pub use transliterator::{transliterate, TargetLang, Transliterator};
