//! 히라가나 -> 한글 발음 매핑
//!
//! 읽기는 가타카나 테이블과 동일합니다. ん/っ 은 낱자모 종성(ㄴ/ㅅ)으로
//! 출력되어 조합 단계에서 앞 음절의 받침이 됩니다.

/// 단일 히라가나 -> 한글 음절
#[rustfmt::skip]
pub fn hiragana_single(c: char) -> Option<&'static str> {
    match c {
        'あ' => Some("아"), 'い' => Some("이"), 'う' => Some("우"), 'え' => Some("에"), 'お' => Some("오"),
        'か' => Some("카"), 'き' => Some("키"), 'く' => Some("쿠"), 'け' => Some("케"), 'こ' => Some("코"),
        'が' => Some("가"), 'ぎ' => Some("기"), 'ぐ' => Some("구"), 'げ' => Some("게"), 'ご' => Some("고"),
        'さ' => Some("사"), 'し' => Some("시"), 'す' => Some("스"), 'せ' => Some("세"), 'そ' => Some("소"),
        'ざ' => Some("자"), 'じ' => Some("지"), 'ず' => Some("즈"), 'ぜ' => Some("제"), 'ぞ' => Some("조"),
        'た' => Some("타"), 'ち' => Some("치"), 'つ' => Some("츠"), 'て' => Some("테"), 'と' => Some("토"),
        'だ' => Some("다"), 'ぢ' => Some("지"), 'づ' => Some("즈"), 'で' => Some("데"), 'ど' => Some("도"),
        'な' => Some("나"), 'に' => Some("니"), 'ぬ' => Some("누"), 'ね' => Some("네"), 'の' => Some("노"),
        'は' => Some("하"), 'ひ' => Some("히"), 'ふ' => Some("후"), 'へ' => Some("헤"), 'ほ' => Some("호"),
        'ば' => Some("바"), 'び' => Some("비"), 'ぶ' => Some("부"), 'べ' => Some("베"), 'ぼ' => Some("보"),
        'ぱ' => Some("파"), 'ぴ' => Some("피"), 'ぷ' => Some("푸"), 'ぺ' => Some("페"), 'ぽ' => Some("포"),
        'ま' => Some("마"), 'み' => Some("미"), 'む' => Some("무"), 'め' => Some("메"), 'も' => Some("모"),
        'や' => Some("야"), 'ゆ' => Some("유"), 'よ' => Some("요"),
        'ら' => Some("라"), 'り' => Some("리"), 'る' => Some("루"), 'れ' => Some("레"), 'ろ' => Some("로"),
        'わ' => Some("와"), 'を' => Some("오"),
        // 소문자 (단독 출현 시)
        'ぁ' => Some("아"), 'ぃ' => Some("이"), 'ぅ' => Some("우"), 'ぇ' => Some("에"), 'ぉ' => Some("오"),
        'ゃ' => Some("야"), 'ゅ' => Some("유"), 'ょ' => Some("요"),
        // 발음/촉음 -> 낱자모 종성 (조합 단계에서 받침으로)
        'ん' => Some("ㄴ"),
        'っ' => Some("ㅅ"),
        _ => None,
    }
}
