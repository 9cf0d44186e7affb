//! 가타카나 -> 한글 발음 매핑
//!
//! 복합 패턴(요음/촉음, 2~3문자)을 단일 문자보다 먼저 매칭합니다.
//! 촉음(ッ)과 발음(ン)은 완성 음절이 아닌 낱자모 종성(ㅅ/ㄴ)으로
//! 출력되어 조합 단계에서 앞 음절의 받침으로 합쳐집니다.

use std::sync::LazyLock;

/// 원본 복합 패턴 (정렬은 KATAKANA_COMPOUNDS 초기화에서)
#[rustfmt::skip]
const RAW_COMPOUNDS: &[(&str, &str)] = &[
    // 3문자: 촉음 + 요음
    ("ッシャ", "ㅅ샤"),
    ("ッシュ", "ㅅ슈"),
    ("ッショ", "ㅅ쇼"),
    ("ッチャ", "ㅅ차"),
    ("ッチュ", "ㅅ추"),
    ("ッチョ", "ㅅ초"),
    ("ッキャ", "ㅅ캬"),
    ("ッキュ", "ㅅ큐"),
    ("ッキョ", "ㅅ쿄"),
    // 2문자: 요음
    ("キャ", "캬"), ("キュ", "큐"), ("キョ", "쿄"),
    ("ギャ", "갸"), ("ギュ", "규"), ("ギョ", "교"),
    ("シャ", "샤"), ("シュ", "슈"), ("ショ", "쇼"), ("シェ", "셰"),
    ("ジャ", "자"), ("ジュ", "주"), ("ジョ", "조"), ("ジェ", "제"),
    ("チャ", "차"), ("チュ", "추"), ("チョ", "초"), ("チェ", "체"),
    ("ニャ", "냐"), ("ニュ", "뉴"), ("ニョ", "뇨"),
    ("ヒャ", "햐"), ("ヒュ", "휴"), ("ヒョ", "효"),
    ("ビャ", "뱌"), ("ビュ", "뷰"), ("ビョ", "뵤"),
    ("ピャ", "퍄"), ("ピュ", "퓨"), ("ピョ", "표"),
    ("ミャ", "먀"), ("ミュ", "뮤"), ("ミョ", "묘"),
    ("リャ", "랴"), ("リュ", "류"), ("リョ", "료"),
    // 2문자: 외래어 표기 확장
    ("ファ", "파"), ("フィ", "피"), ("フェ", "페"), ("フォ", "포"),
    ("ヴァ", "바"), ("ヴィ", "비"), ("ヴェ", "베"), ("ヴォ", "보"),
    ("ウィ", "위"), ("ウェ", "웨"), ("ウォ", "워"),
    ("ティ", "티"), ("テュ", "튜"), ("トゥ", "투"),
    ("ディ", "디"), ("デュ", "듀"), ("ドゥ", "두"),
    ("ツァ", "차"), ("ツィ", "치"), ("ツェ", "체"), ("ツォ", "초"),
];

/// 패턴 길이(문자 수) 내림차순으로 정렬된 복합 패턴 테이블
/// 2문자 패턴이 3문자 패턴의 접두사를 가로채지 않도록 순서가 보장됨
pub static KATAKANA_COMPOUNDS: LazyLock<Vec<(&'static str, &'static str)>> =
    LazyLock::new(|| {
        let mut entries = RAW_COMPOUNDS.to_vec();
        entries.sort_by_key(|(pattern, _)| std::cmp::Reverse(pattern.chars().count()));
        entries
    });

/// 단일 가타카나 -> 한글 음절 (ン/ッ 은 낱자모 종성)
#[rustfmt::skip]
pub fn katakana_single(c: char) -> Option<&'static str> {
    match c {
        'ア' => Some("아"), 'イ' => Some("이"), 'ウ' => Some("우"), 'エ' => Some("에"), 'オ' => Some("오"),
        'カ' => Some("카"), 'キ' => Some("키"), 'ク' => Some("쿠"), 'ケ' => Some("케"), 'コ' => Some("코"),
        'ガ' => Some("가"), 'ギ' => Some("기"), 'グ' => Some("구"), 'ゲ' => Some("게"), 'ゴ' => Some("고"),
        'サ' => Some("사"), 'シ' => Some("시"), 'ス' => Some("스"), 'セ' => Some("세"), 'ソ' => Some("소"),
        'ザ' => Some("자"), 'ジ' => Some("지"), 'ズ' => Some("즈"), 'ゼ' => Some("제"), 'ゾ' => Some("조"),
        'タ' => Some("타"), 'チ' => Some("치"), 'ツ' => Some("츠"), 'テ' => Some("테"), 'ト' => Some("토"),
        'ダ' => Some("다"), 'ヂ' => Some("지"), 'ヅ' => Some("즈"), 'デ' => Some("데"), 'ド' => Some("도"),
        'ナ' => Some("나"), 'ニ' => Some("니"), 'ヌ' => Some("누"), 'ネ' => Some("네"), 'ノ' => Some("노"),
        'ハ' => Some("하"), 'ヒ' => Some("히"), 'フ' => Some("후"), 'ヘ' => Some("헤"), 'ホ' => Some("호"),
        'バ' => Some("바"), 'ビ' => Some("비"), 'ブ' => Some("부"), 'ベ' => Some("베"), 'ボ' => Some("보"),
        'パ' => Some("파"), 'ピ' => Some("피"), 'プ' => Some("푸"), 'ペ' => Some("페"), 'ポ' => Some("포"),
        'マ' => Some("마"), 'ミ' => Some("미"), 'ム' => Some("무"), 'メ' => Some("메"), 'モ' => Some("모"),
        'ヤ' => Some("야"), 'ユ' => Some("유"), 'ヨ' => Some("요"),
        'ラ' => Some("라"), 'リ' => Some("리"), 'ル' => Some("루"), 'レ' => Some("레"), 'ロ' => Some("로"),
        'ワ' => Some("와"), 'ヲ' => Some("오"), 'ヴ' => Some("부"),
        // 소문자 (단독 출현 시)
        'ァ' => Some("아"), 'ィ' => Some("이"), 'ゥ' => Some("우"), 'ェ' => Some("에"), 'ォ' => Some("오"),
        'ャ' => Some("야"), 'ュ' => Some("유"), 'ョ' => Some("요"),
        // 발음/촉음 -> 낱자모 종성 (조합 단계에서 받침으로)
        'ン' => Some("ㄴ"),
        'ッ' => Some("ㅅ"),
        _ => None,
    }
}
