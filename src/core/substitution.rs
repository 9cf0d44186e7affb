//! 1단계: 단어 사전 치환
//!
//! 사전 키를 길이 내림차순으로 하나씩 전체 치환(global replace)합니다.
//! 긴 키를 먼저 처리하므로 복합 지명이 구성 요소로 쪼개져
//! 치환되는 일이 없습니다 (예: 東京都 -> 도쿄도, 東京 -> 도쿄 아님).

use crate::dict::WORD_DICT;

/// 내장 사전만으로 치환
pub fn substitute(text: &str) -> String {
    substitute_with(text, &[])
}

/// 사용자 항목을 내장 사전과 합쳐서 치환
/// 합친 목록도 키 길이 내림차순, 같은 길이면 사용자 항목 우선
pub fn substitute_with(text: &str, user_words: &[(String, String)]) -> String {
    let mut entries: Vec<(&str, &str)> = user_words
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .chain(WORD_DICT.iter().copied())
        .collect();
    entries.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));

    let mut result = text.to_string();
    for (key, replacement) in entries {
        if key.is_empty() {
            continue;
        }
        if result.contains(key) {
            result = result.replace(key, replacement);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitution() {
        assert_eq!(substitute("新宿"), "신주쿠");
        assert_eq!(substitute("フットサル"), "풋살");
    }

    #[test]
    fn test_longest_match_first() {
        // 東京都 전체가 치환되어야 함 (東京 + 都 아님)
        assert_eq!(substitute("東京都"), "도쿄도");
        assert_eq!(substitute("神奈川県"), "가나가와현");
    }

    #[test]
    fn test_global_replace() {
        // 같은 키의 모든 출현이 치환됨
        assert_eq!(substitute("東京と東京"), "도쿄と도쿄");
    }

    #[test]
    fn test_multiple_keys() {
        assert_eq!(substitute("新宿フットサル大会"), "신주쿠풋살대회");
    }

    #[test]
    fn test_unmatched_passthrough() {
        assert_eq!(substitute("hello 123"), "hello 123");
        assert_eq!(substitute(""), "");
    }

    #[test]
    fn test_user_words_override() {
        let user = vec![("新宿".to_string(), "시무주쿠".to_string())];
        // 같은 길이면 사용자 항목이 먼저 치환됨
        assert_eq!(substitute_with("新宿", &user), "시무주쿠");
        // 내장 사전은 그대로 동작
        assert_eq!(substitute_with("渋谷", &user), "시부야");
    }

    #[test]
    fn test_user_word_longer_than_builtin() {
        let user = vec![("新宿駅前".to_string(), "신주쿠역앞".to_string())];
        assert_eq!(substitute_with("新宿駅前", &user), "신주쿠역앞");
    }

    #[test]
    fn test_empty_user_key_ignored() {
        let user = vec![(String::new(), "x".to_string())];
        assert_eq!(substitute_with("abc", &user), "abc");
    }
}
