//! 음차 변환용 정적 사전 테이블
//!
//! 모든 테이블은 프로세스 시작 후 읽기 전용입니다. 매칭 순서가
//! 중요한 테이블(단어 사전, 가타카나 복합 패턴)은 초기화 시
//! 키 길이 내림차순으로 정렬됩니다.

pub mod hiragana;
pub mod kanji;
pub mod katakana;
pub mod words;

pub use hiragana::hiragana_single;
pub use kanji::kanji_reading;
pub use katakana::{katakana_single, KATAKANA_COMPOUNDS};
pub use words::WORD_DICT;
