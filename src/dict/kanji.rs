//! 한자 -> 한국 한자음 폴백 매핑
//!
//! 단어 사전과 가나 테이블에서 해소되지 않은 한자 한 글자를
//! 근사 한자음 한 음절로 치환합니다. 다음자(多音字)는 지명에서
//! 흔한 읽기 하나만 수록합니다.

/// 단일 한자 -> 한국 한자음
#[rustfmt::skip]
pub fn kanji_reading(c: char) -> Option<&'static str> {
    match c {
        // 숫자
        '一' => Some("일"), '二' => Some("이"), '三' => Some("삼"), '四' => Some("사"), '五' => Some("오"),
        '六' => Some("육"), '七' => Some("칠"), '八' => Some("팔"), '九' => Some("구"), '十' => Some("십"),
        '百' => Some("백"), '千' => Some("천"), '万' => Some("만"), '円' => Some("엔"),
        // 방위/위치
        '東' => Some("동"), '西' => Some("서"), '南' => Some("남"), '北' => Some("북"),
        '上' => Some("상"), '下' => Some("하"), '内' => Some("내"), '外' => Some("외"),
        '前' => Some("전"), '後' => Some("후"), '左' => Some("좌"), '右' => Some("우"), '中' => Some("중"),
        // 행정/지리
        '都' => Some("도"), '府' => Some("부"), '県' => Some("현"), '市' => Some("시"),
        '区' => Some("구"), '町' => Some("정"), '村' => Some("촌"), '京' => Some("경"),
        '山' => Some("산"), '川' => Some("천"), '田' => Some("전"), '島' => Some("도"),
        '海' => Some("해"), '空' => Some("공"), '天' => Some("천"), '地' => Some("지"),
        '原' => Some("원"), '野' => Some("야"), '森' => Some("삼"), '林' => Some("림"),
        '橋' => Some("교"), '石' => Some("석"), '花' => Some("화"), '光' => Some("광"),
        // 날짜/시간
        '年' => Some("년"), '月' => Some("월"), '日' => Some("일"), '時' => Some("시"),
        '分' => Some("분"), '間' => Some("간"), '曜' => Some("요"),
        '火' => Some("화"), '水' => Some("수"), '木' => Some("목"), '金' => Some("금"), '土' => Some("토"),
        // 시설/행사
        '会' => Some("회"), '場' => Some("장"), '館' => Some("관"), '室' => Some("실"),
        '体' => Some("체"), '育' => Some("육"), '競' => Some("경"), '技' => Some("기"),
        '運' => Some("운"), '動' => Some("동"), '公' => Some("공"), '園' => Some("원"),
        '学' => Some("학"), '校' => Some("교"), '教' => Some("교"), '駅' => Some("역"),
        '門' => Some("문"), '宮' => Some("궁"), '寺' => Some("사"), '社' => Some("사"), '神' => Some("신"),
        // 일반
        '大' => Some("대"), '小' => Some("소"), '高' => Some("고"), '新' => Some("신"), '古' => Some("고"),
        '人' => Some("인"), '国' => Some("국"), '生' => Some("생"), '先' => Some("선"), '名' => Some("명"),
        '本' => Some("본"), '文' => Some("문"), '化' => Some("화"), '明' => Some("명"),
        '子' => Some("자"), '女' => Some("녀"), '男' => Some("남"), '王' => Some("왕"),
        '白' => Some("백"), '青' => Some("청"), '赤' => Some("적"), '黒' => Some("흑"),
        '手' => Some("수"), '足' => Some("족"), '口' => Some("구"), '目' => Some("목"),
        '車' => Some("차"), '道' => Some("도"), '戸' => Some("호"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_lookup() {
        assert_eq!(kanji_reading('東'), Some("동"));
        assert_eq!(kanji_reading('京'), Some("경"));
        assert_eq!(kanji_reading('駅'), Some("역"));
        assert_eq!(kanji_reading('一'), Some("일"));
    }

    #[test]
    fn test_unknown_kanji() {
        assert_eq!(kanji_reading('鬱'), None);
        assert_eq!(kanji_reading('あ'), None);
        assert_eq!(kanji_reading('A'), None);
    }

    #[test]
    fn test_readings_are_single_syllable() {
        // 폴백 읽기는 항상 완성형 한 음절
        for c in ['東', '西', '南', '北', '駅', '場', '会'] {
            let reading = kanji_reading(c).unwrap();
            assert_eq!(reading.chars().count(), 1);
            assert!(crate::core::unicode::is_syllable(reading.chars().next().unwrap()));
        }
    }
}
