//! 단어 사전 (지명/역명/외래어/한자어 복합어)
//!
//! 음차 변환 1단계에서 통째로 치환되는 항목들입니다.
//! 긴 키가 먼저 매칭되어야 하므로 (예: 東京都 를 東京 보다 먼저)
//! 테이블은 초기화 시 키 길이 내림차순으로 정렬됩니다.

use std::sync::LazyLock;

/// 원본 항목 (입력 순서는 의미 없음, 정렬은 WORD_DICT 초기화에서)
#[rustfmt::skip]
const RAW_WORDS: &[(&str, &str)] = &[
    // 도도부현
    ("東京都", "도쿄도"),
    ("北海道", "홋카이도"),
    ("神奈川県", "가나가와현"),
    ("埼玉県", "사이타마현"),
    ("千葉県", "지바현"),
    ("大阪府", "오사카부"),
    ("京都府", "교토부"),
    ("愛知県", "아이치현"),
    ("兵庫県", "효고현"),
    ("福岡県", "후쿠오카현"),
    ("神奈川", "가나가와"),
    ("埼玉", "사이타마"),
    ("千葉", "지바"),
    ("東京", "도쿄"),
    ("大阪", "오사카"),
    ("京都", "교토"),
    ("愛知", "아이치"),
    ("兵庫", "효고"),
    ("福岡", "후쿠오카"),
    ("沖縄", "오키나와"),
    // 주요 도시
    ("横浜", "요코하마"),
    ("川崎", "가와사키"),
    ("名古屋", "나고야"),
    ("神戸", "고베"),
    ("札幌", "삿포로"),
    ("仙台", "센다이"),
    ("広島", "히로시마"),
    // 도쿄 시내 지명/역명
    ("新宿", "신주쿠"),
    ("渋谷", "시부야"),
    ("池袋", "이케부쿠로"),
    ("品川", "시나가와"),
    ("秋葉原", "아키하바라"),
    ("吉祥寺", "기치조지"),
    ("武蔵小杉", "무사시코스기"),
    ("代々木", "요요기"),
    ("原宿", "하라주쿠"),
    ("恵比寿", "에비스"),
    ("六本木", "롯폰기"),
    ("銀座", "긴자"),
    ("上野", "우에노"),
    ("浅草", "아사쿠사"),
    ("中野", "나카노"),
    ("立川", "다치카와"),
    ("町田", "마치다"),
    ("五反田", "고탄다"),
    ("大井町", "오이마치"),
    ("お台場", "오다이바"),
    ("葛西", "가사이"),
    ("江戸川", "에도가와"),
    ("世田谷", "세타가야"),
    // 외래어 (시설/스포츠)
    ("フットサル", "풋살"),
    ("サッカー", "사커"),
    ("テニス", "테니스"),
    ("バスケット", "바스켓"),
    ("スタジアム", "스타디움"),
    ("アリーナ", "아레나"),
    ("グラウンド", "그라운드"),
    ("フィールド", "필드"),
    ("スポーツ", "스포츠"),
    ("センター", "센터"),
    ("コート", "코트"),
    ("パーク", "파크"),
    ("プラザ", "플라자"),
    ("クラブ", "클럽"),
    ("チーム", "팀"),
    ("リーグ", "리그"),
    ("カップ", "컵"),
    ("エンジョイ", "엔조이"),
    ("ミックス", "믹스"),
    ("レディース", "레이디스"),
    ("ビギナー", "비기너"),
    ("オープン", "오픈"),
    // 한자어 복합어 (시설/모집 문구)
    ("体育館", "체육관"),
    ("競技場", "경기장"),
    ("運動場", "운동장"),
    ("駐車場", "주차장"),
    ("個人参加", "개인참가"),
    ("初心者", "초심자"),
    ("経験者", "경험자"),
    ("公園", "공원"),
    ("大会", "대회"),
    ("試合", "시합"),
    ("教室", "교실"),
    ("募集", "모집"),
    ("無料", "무료"),
    ("有料", "유료"),
    ("曜日", "요일"),
    ("駅前", "역전"),
    ("駅", "역"),
];

/// 키 길이(문자 수) 내림차순으로 정렬된 단어 사전
pub static WORD_DICT: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut entries = RAW_WORDS.to_vec();
    // 안정 정렬: 같은 길이끼리는 입력 순서 유지
    entries.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));
    entries
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_longest_first() {
        let lengths: Vec<usize> = WORD_DICT
            .iter()
            .map(|(key, _)| key.chars().count())
            .collect();
        for pair in lengths.windows(2) {
            assert!(pair[0] >= pair[1], "사전이 길이 내림차순이 아님");
        }
    }

    #[test]
    fn test_compound_precedes_component() {
        // 東京都 가 東京 보다 앞에 있어야 부분 치환이 일어나지 않음
        let pos_long = WORD_DICT.iter().position(|(k, _)| *k == "東京都").unwrap();
        let pos_short = WORD_DICT.iter().position(|(k, _)| *k == "東京").unwrap();
        assert!(pos_long < pos_short);

        let pos_long = WORD_DICT
            .iter()
            .position(|(k, _)| *k == "神奈川県")
            .unwrap();
        let pos_short = WORD_DICT.iter().position(|(k, _)| *k == "神奈川").unwrap();
        assert!(pos_long < pos_short);
    }

    #[test]
    fn test_known_entries() {
        let lookup = |key: &str| {
            WORD_DICT
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
        };
        assert_eq!(lookup("新宿"), Some("신주쿠"));
        assert_eq!(lookup("フットサル"), Some("풋살"));
        assert_eq!(lookup("東京都"), Some("도쿄도"));
        assert_eq!(lookup("駅"), Some("역"));
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut keys: Vec<&str> = RAW_WORDS.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len());
    }
}
