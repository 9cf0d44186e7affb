//! 낱자모 -> 완성형 한글 조합 스캐너
//!
//! 음차 변환 단계가 남긴 낱자모(초성/중성/종성 호환 자모)와
//! 완성형 음절 뒤에 붙은 받침 후보를 한 번의 스캔으로 합칩니다.
//!
//! 모음 사이에 낀 자음은 왼쪽 음절의 받침일 수도, 오른쪽 음절의
//! 초성일 수도 있으므로 최대 4글자 선독(lookahead)으로 판별합니다:
//! 자음 바로 뒤에 중성이 오면 다음 음절의 초성으로 양보합니다.

use crate::core::unicode::{
    choseong_index, compose_syllable, decompose_syllable, jongseong_index, jungseong_index,
};

/// 낱자모 시퀀스를 완성형 음절로 조합
/// 조합할 수 없는 자모나 한글 외 문자는 그대로 통과
pub fn compose_jamo(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // 완성형 음절 + 종성 후보 자모 (ん -> ㄴ, っ -> ㅅ 의 반자모 출력)
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            if jong == 0 {
                if let Some(new_jong) = chars.get(i + 1).copied().and_then(jongseong_index) {
                    // 자음 뒤에 중성이 오면 그 자음은 다음 음절의 초성
                    let starts_next = chars
                        .get(i + 2)
                        .copied()
                        .and_then(jungseong_index)
                        .is_some();
                    if !starts_next {
                        if let Some(merged) = compose_syllable(cho, jung, new_jong) {
                            output.push(merged);
                            i += 2;
                            continue;
                        }
                    }
                }
            }
            output.push(c);
            i += 1;
            continue;
        }

        // 낱자모 초성 + 중성 (+ 종성)
        if let (Some(cho), Some(jung)) = (
            choseong_index(c),
            chars.get(i + 1).copied().and_then(jungseong_index),
        ) {
            let mut jong = 0;
            let mut consumed = 2;
            if let Some(jong_candidate) = chars.get(i + 2).copied().and_then(jongseong_index) {
                // 종성 후보 뒤에 중성이 오면 받침으로 삼지 않음
                let starts_next = chars
                    .get(i + 3)
                    .copied()
                    .and_then(jungseong_index)
                    .is_some();
                if !starts_next {
                    jong = jong_candidate;
                    consumed = 3;
                }
            }
            if let Some(syllable) = compose_syllable(cho, jung, jong) {
                output.push(syllable);
                i += consumed;
                continue;
            }
        }

        // 조합 불가 (단독 자음/모음, 한글 외 문자)
        output.push(c);
        i += 1;
    }

    output
}
