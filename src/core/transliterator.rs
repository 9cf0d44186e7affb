//! 일본어 -> 한국어 음차 변환 드라이버
//!
//! 3단계 파이프라인: 단어 사전 치환 -> 발음 매핑 -> 한글 조합.
//! 대상 언어가 일본어면 입력을 그대로 반환합니다 (항등 변환).

use std::str::FromStr;

use crate::core::composer::compose_jamo;
use crate::core::phonetic::map_phonetic;
use crate::core::substitution::{substitute, substitute_with};

/// 변환 대상 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLang {
    /// 일본어 표시 (변환 없음)
    Ja,
    /// 한국어 음차 표기
    Ko,
}

impl TargetLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLang::Ja => "ja",
            TargetLang::Ko => "ko",
        }
    }
}

impl FromStr for TargetLang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(TargetLang::Ja),
            "ko" => Ok(TargetLang::Ko),
            other => Err(format!("지원하지 않는 대상 언어: {}", other)),
        }
    }
}

/// 일본어 텍스트를 대상 언어 표기로 변환
/// 모든 입력에 대해 성공하며, 변환할 수 없는 문자는 그대로 유지
pub fn transliterate(text: &str, lang: TargetLang) -> String {
    match lang {
        TargetLang::Ja => text.to_string(),
        TargetLang::Ko => compose_jamo(&map_phonetic(&substitute(text))),
    }
}

/// 사용자 사전 항목을 가진 변환기
/// 생성 후 불변이므로 여러 스레드에서 공유해도 안전
pub struct Transliterator {
    user_words: Vec<(String, String)>,
}

impl Transliterator {
    /// 내장 사전만 사용하는 변환기
    pub fn new() -> Self {
        Self {
            user_words: Vec::new(),
        }
    }

    /// 사용자 (일본어, 한국어) 항목을 추가한 변환기
    /// 내장 사전과 합쳐 길이 내림차순으로 적용됨
    pub fn with_user_words(user_words: Vec<(String, String)>) -> Self {
        Self { user_words }
    }

    pub fn transliterate(&self, text: &str, lang: TargetLang) -> String {
        match lang {
            TargetLang::Ja => text.to_string(),
            TargetLang::Ko => {
                compose_jamo(&map_phonetic(&substitute_with(text, &self.user_words)))
            }
        }
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}
