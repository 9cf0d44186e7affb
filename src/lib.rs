//! jako - 일본어 -> 한국어 음차 변환 엔진

pub mod config;
pub mod core;
pub mod dict;

pub use crate::core::{compose_jamo, transliterate, TargetLang, Transliterator};
