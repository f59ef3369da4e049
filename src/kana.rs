/// Half-width katakana readings for weather and warning vocabulary
const KANA_NAMES: &[(&str, &str)] = &[
    ("快晴", "ｶｲｾｲ"), ("晴れ", "ﾊﾚ"), ("薄曇り", "ｳｽｸﾓﾘ"), ("曇り", "ｸﾓﾘ"),
    ("煙霧", "ｴﾝﾑ"), ("砂じん嵐", "ｻｼﾞﾝｱﾗｼ"), ("地ふぶき", "ｼﾞﾌﾌﾞｷ"), ("霧", "ｷﾘ"),
    ("霧雨", "ｷﾘｻﾒ"), ("雨", "ｱﾒ"), ("みぞれ", "ﾐｿﾞﾚ"), ("雪", "ﾕｷ"),
    ("強雨", "ｷｮｳｳ"),
    ("あられ", "ｱﾗﾚ"), ("ひょう", "ﾋｮｳ"), ("雷", "ｶﾐﾅﾘ"),
    ("時々", "ﾄｷﾄﾞｷ"), ("一時", "ｲﾁｼﾞ"), ("のち", "ﾉﾁ"), ("続く", "ﾂﾂﾞｸ"),
    ("後", "ﾉﾁ"), ("今日", "ｷｮｳ "), ("今夜", "ｺﾝﾔ "), ("明日", "ｱｼﾀ "), ("明後日", "ｱｻｯﾃ "),
    ("大雨", "ｵｵｱﾒ"), ("洪水", "ｺｳｽﾞｲ"), ("強風", "ｷｮｳﾌｳ"),
    ("風雪", "ﾌｳｾﾂ"), ("大雪", "ｵｵﾕｷ"), ("波浪", "ﾊﾛｳ"),
    ("高潮", "ﾀｶｼｵ"), ("融雪", "ﾕｳｾﾂ"),
    ("濃霧", "ﾉｳﾑ"), ("乾燥", "ｶﾝｿｳ"), ("なだれ", "ﾅﾀﾞﾚ"),
    ("低温", "ﾃｲｵﾝ"), ("霜", "ｼﾓ"), ("着氷", "ﾁｬｸﾋｮｳ"),
    ("着雪", "ﾁｬｸｾﾂ"), ("暴風", "ﾎﾞｳﾌｳ"), ("暴風雪", "ﾎﾞｳﾌｳｾﾂ"),
    ("特別警報", "ﾄｸﾍﾞﾂｹｲﾎｳ"), ("警報", "ｹｲﾎｳ"), ("注意報", "ﾁｭｳｲﾎｳ"),
    ("解除", "ｶｲｼﾞｮ"), ("無し", "ﾅｼ"), ("警報・注意報", "ｹｲﾎｳ･ﾁｭｳｲﾎｳ"),
    ("曇", "ｸﾓﾘ"), ("晴", "ﾊﾚ"),
];

/// Replaces every known word in the text by its katakana reading, preferring the
/// longest word at each position. Unknown characters are kept as is.
///
/// # Arguments
///
/// * 'text' - the text to transliterate
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let longest = KANA_NAMES
            .iter()
            .filter(|(w, _)| rest.starts_with(w))
            .max_by_key(|(w, _)| w.len());

        match longest {
            Some((w, k)) => {
                out.push_str(k);
                rest = &rest[w.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_words() {
        assert_eq!(transliterate("快晴"), "ｶｲｾｲ");
        assert_eq!(transliterate("台風"), "台風");
    }

    #[test]
    fn longest_word_wins() {
        assert_eq!(transliterate("暴風雪"), "ﾎﾞｳﾌｳｾﾂ");
        assert_eq!(transliterate("霧雨"), "ｷﾘｻﾒ");
        assert_eq!(transliterate("警報・注意報"), "ｹｲﾎｳ･ﾁｭｳｲﾎｳ");
    }

    #[test]
    fn phrases_and_unknown_characters() {
        assert_eq!(transliterate("晴れ時々曇り"), "ﾊﾚﾄｷﾄﾞｷｸﾓﾘ");
        assert_eq!(transliterate("曇りのち雨 10%"), "ｸﾓﾘﾉﾁｱﾒ 10%");
        assert_eq!(transliterate(""), "");
    }
}
