//! 2단계: 문자 단위 발음 매핑
//!
//! 커서를 왼쪽에서 오른쪽으로 한 번 이동하며, 위치마다
//! 가타카나 복합 패턴 -> 장음 기호 -> 단일 가타카나 -> 단일 히라가나
//! -> 한자 폴백 순으로 시도합니다. 어디에도 없는 문자는 그대로 통과.
//! 역추적(backtracking)은 없습니다.

use crate::dict::{hiragana_single, kanji_reading, katakana_single, KATAKANA_COMPOUNDS};

/// 장음 기호 -> 무시 (모음 연장은 시도하지 않음)
const PROLONGED_SOUND_MARK: char = 'ー';

/// 현재 위치에서 가타카나 복합 패턴 매칭
/// 테이블이 길이 내림차순이므로 3문자 패턴이 2문자 접두사보다 우선
fn match_compound(rest: &[char]) -> Option<(usize, &'static str)> {
    for (pattern, mapped) in KATAKANA_COMPOUNDS.iter() {
        let len = pattern.chars().count();
        if rest.len() >= len && pattern.chars().zip(rest.iter()).all(|(p, &c)| p == c) {
            return Some((len, mapped));
        }
    }
    None
}

/// 발음 매핑 스캔
pub fn map_phonetic(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some((len, mapped)) = match_compound(&chars[i..]) {
            output.push_str(mapped);
            i += len;
            continue;
        }

        let c = chars[i];
        if c == PROLONGED_SOUND_MARK {
            // 장음은 출력 없음
        } else if let Some(s) = katakana_single(c) {
            output.push_str(s);
        } else if let Some(s) = hiragana_single(c) {
            output.push_str(s);
        } else if let Some(s) = kanji_reading(c) {
            output.push_str(s);
        } else {
            output.push(c);
        }
        i += 1;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_katakana() {
        assert_eq!(map_phonetic("アイウ"), "아이우");
        assert_eq!(map_phonetic("カラオケ"), "카라오케");
    }

    #[test]
    fn test_single_hiragana() {
        assert_eq!(map_phonetic("さくら"), "사쿠라");
        assert_eq!(map_phonetic("の"), "노");
    }

    #[test]
    fn test_compound_before_single() {
        // シャ 가 シ+ャ 로 쪼개지면 "시야"가 되므로 복합 패턴이 먼저
        assert_eq!(map_phonetic("シャワー"), "샤와");
        assert_eq!(map_phonetic("ジュース"), "주스");
    }

    #[test]
    fn test_three_char_compound_before_two() {
        // ッショ 는 ッ+ショ(ㅅ쇼)와 결과가 같지만 3문자 패턴이 먼저 매칭됨
        assert_eq!(map_phonetic("ファッション"), "파ㅅ쇼ㄴ");
    }

    #[test]
    fn test_prolonged_sound_dropped() {
        assert_eq!(map_phonetic("コーヒー"), "코히");
        assert_eq!(map_phonetic("ー"), "");
    }

    #[test]
    fn test_nasal_and_sokuon_emit_bare_jamo() {
        // 조합 전 단계이므로 낱자모가 그대로 남음
        assert_eq!(map_phonetic("サン"), "사ㄴ");
        assert_eq!(map_phonetic("サッポロ"), "사ㅅ포로");
    }

    #[test]
    fn test_kanji_fallback() {
        assert_eq!(map_phonetic("大会"), "대회");
        assert_eq!(map_phonetic("東"), "동");
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(map_phonetic("10:00-12:00"), "10:00-12:00");
        assert_eq!(map_phonetic("abc"), "abc");
        assert_eq!(map_phonetic(""), "");
        // 이미 한글인 텍스트는 그대로
        assert_eq!(map_phonetic("도쿄"), "도쿄");
    }

    #[test]
    fn test_mixed_script() {
        assert_eq!(map_phonetic("さくらA1"), "사쿠라A1");
    }
}
