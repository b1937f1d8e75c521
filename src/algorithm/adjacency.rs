//! 单字符编辑邻接判定
//!
//! 两个词相邻，当且仅当一个词可以通过一次替换、插入或删除单个字符得到另一个词。
//! 输入必须已经规范化（去空白、统一大小写），这里不做任何规范化。

/// 判断两个词是否单编辑相邻
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    if word1 == word2 {
        return false;
    }

    let chars1: Vec<char> = word1.chars().collect();
    let chars2: Vec<char> = word2.chars().collect();

    match chars1.len().abs_diff(chars2.len()) {
        0 => differs_by_substitution(&chars1, &chars2),
        1 if chars1.len() > chars2.len() => differs_by_deletion(&chars1, &chars2),
        1 => differs_by_deletion(&chars2, &chars1),
        _ => false,
    }
}

/// 可缺省输入版本：任一方缺失时视为不相邻
pub fn is_adjacent_opt(word1: Option<&str>, word2: Option<&str>) -> bool {
    match (word1, word2) {
        (Some(a), Some(b)) => is_adjacent(a, b),
        _ => false,
    }
}

/// 等长：恰好一个位置不同
fn differs_by_substitution(a: &[char], b: &[char]) -> bool {
    a.iter().zip(b).filter(|(x, y)| x != y).count() == 1
}

/// 长度差 1：从较长词中删去恰好一个字符后与较短词相同
fn differs_by_deletion(longer: &[char], shorter: &[char]) -> bool {
    (0..longer.len()).any(|skip| {
        longer
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, c)| c)
            .eq(shorter.iter())
    })
}
