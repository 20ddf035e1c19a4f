//! 题目规整服务 - 业务能力层
//!
//! 把一道原始题目转换为导出条目：
//! HTML 实体解码 → 选项乱序 → 定位正确答案 → 换算分值

use crate::models::{Difficulty, NormalizedQuestion, RawQuestion};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// 把一道原始题目转换为导出条目及其桶内键
///
/// # 参数
/// - `raw`: 原始题目
/// - `index`: 桶内序号（从 1 开始）
/// - `rng`: 选项乱序使用的随机数发生器
///
/// # 返回
/// 返回 (键, 条目)，键形如 q0001
pub fn convert_question<R: Rng>(
    raw: &RawQuestion,
    index: usize,
    rng: &mut R,
) -> (String, NormalizedQuestion) {
    // 题干和所有选项文本先解码 HTML 实体，落库的是可读字符
    let question_text = htmlize::unescape(&raw.question).into_owned();
    let correct = htmlize::unescape(&raw.correct_answer).into_owned();

    let mut all_options: Vec<String> = raw
        .incorrect_answers
        .iter()
        .map(|a| htmlize::unescape(a).into_owned())
        .collect();
    all_options.push(correct.clone());
    all_options.shuffle(rng);

    // correct 必然在列表中；如果 API 给出与正确答案同文的干扰项，取第一个命中位置
    let correct_option_index = all_options
        .iter()
        .position(|opt| *opt == correct)
        .unwrap_or(0);

    // 选项以字符串键 "0"–"3" 的 Map 形式存储
    let options: BTreeMap<String, String> = all_options
        .into_iter()
        .enumerate()
        .map(|(i, opt)| (i.to_string(), opt))
        .collect();

    let key = format!("q{:04}", index);
    let entry = NormalizedQuestion {
        question_text,
        options,
        correct_option_index,
        explanation: format!("The correct answer is: {}", correct),
        difficulty: raw.difficulty.clone(),
        points: Difficulty::points_for_label(&raw.difficulty),
    };

    (key, entry)
}

/// 把一个分类桶内的原始题目依次转换为导出条目
///
/// 桶内键从 q0001 开始连续编号，与桶大小无关
pub fn convert_bucket<R: Rng>(
    items: &[RawQuestion],
    rng: &mut R,
) -> BTreeMap<String, NormalizedQuestion> {
    items
        .iter()
        .enumerate()
        .map(|(idx, raw)| convert_question(raw, idx + 1, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// 创建测试用的原始题目
    fn sample_question(correct: &str, incorrect: &[&str], difficulty: &str) -> RawQuestion {
        RawQuestion {
            question: "Sample question?".to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
            difficulty: difficulty.to_string(),
        }
    }

    #[test]
    fn test_correct_index_points_at_correct_answer() {
        let raw = sample_question("Paris", &["Lyon", "Marseille", "Nice"], "easy");

        // 多个种子下不变式都要成立
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (_, entry) = convert_question(&raw, 1, &mut rng);

            assert_eq!(entry.options.len(), 4);
            assert_eq!(
                entry.options[&entry.correct_option_index.to_string()],
                "Paris"
            );
            assert!(entry.correct_option_index <= 3);
        }
    }

    #[test]
    fn test_decode_html_entities() {
        let raw = sample_question(
            "Qu&eacute;bec",
            &["&quot;Ottawa&quot;", "Toronto &amp; Hull", "Montr&#233;al"],
            "medium",
        );

        let mut rng = StdRng::seed_from_u64(7);
        let (_, entry) = convert_question(&raw, 1, &mut rng);

        // 解码后不应残留任何转义序列
        let texts: Vec<&String> = entry.options.values().collect();
        assert!(texts.iter().any(|t| t.as_str() == "Québec"));
        assert!(texts.iter().any(|t| t.as_str() == "\"Ottawa\""));
        assert!(texts.iter().any(|t| t.as_str() == "Toronto & Hull"));
        assert!(texts.iter().any(|t| t.as_str() == "Montréal"));

        assert_eq!(
            entry.options[&entry.correct_option_index.to_string()],
            "Québec"
        );
        assert_eq!(entry.explanation, "The correct answer is: Québec");
    }

    #[test]
    fn test_plain_text_unchanged() {
        // 已经是纯文本的输入必须原样返回
        let raw = sample_question("Paris", &["Lyon", "Marseille", "Nice"], "easy");
        let mut rng = StdRng::seed_from_u64(1);

        let (_, entry) = convert_question(&raw, 1, &mut rng);

        assert_eq!(entry.question_text, "Sample question?");
        assert_eq!(
            entry.options[&entry.correct_option_index.to_string()],
            "Paris"
        );
    }

    #[test]
    fn test_options_follow_incorrect_count() {
        // 干扰项不足 3 个时不做校验，选项数 = 干扰项数 + 1
        let raw = sample_question("Paris", &["Lyon", "Nice"], "easy");
        let mut rng = StdRng::seed_from_u64(3);

        let (_, entry) = convert_question(&raw, 1, &mut rng);

        assert_eq!(entry.options.len(), 3);
        for key in ["0", "1", "2"] {
            assert!(entry.options.contains_key(key));
        }
        assert_eq!(
            entry.options[&entry.correct_option_index.to_string()],
            "Paris"
        );
    }

    #[test]
    fn test_points_by_difficulty() {
        let mut rng = StdRng::seed_from_u64(5);

        let (_, easy) = convert_question(&sample_question("A", &["B"], "easy"), 1, &mut rng);
        let (_, medium) = convert_question(&sample_question("A", &["B"], "medium"), 1, &mut rng);
        let (_, hard) = convert_question(&sample_question("A", &["B"], "hard"), 1, &mut rng);
        let (_, other) = convert_question(&sample_question("A", &["B"], "legendary"), 1, &mut rng);

        assert_eq!(easy.points, 1);
        assert_eq!(medium.points, 1);
        assert_eq!(hard.points, 2);
        assert_eq!(other.points, 1);

        // 难度标签原样写入条目
        assert_eq!(other.difficulty, "legendary");
    }

    #[test]
    fn test_key_format_zero_padded() {
        let raw = sample_question("Paris", &["Lyon"], "easy");
        let mut rng = StdRng::seed_from_u64(9);

        let (key, _) = convert_question(&raw, 1, &mut rng);
        assert_eq!(key, "q0001");

        let (key, _) = convert_question(&raw, 42, &mut rng);
        assert_eq!(key, "q0042");

        let (key, _) = convert_question(&raw, 1234, &mut rng);
        assert_eq!(key, "q1234");
    }

    #[test]
    fn test_convert_bucket_keys_contiguous() {
        let items: Vec<RawQuestion> = (0..12)
            .map(|i| sample_question(&format!("Answer {}", i), &["X", "Y", "Z"], "easy"))
            .collect();

        let mut rng = StdRng::seed_from_u64(11);
        let bucket = convert_bucket(&items, &mut rng);

        // 键从 q0001 开始连续无空洞
        assert_eq!(bucket.len(), 12);
        for i in 1..=12 {
            assert!(bucket.contains_key(&format!("q{:04}", i)));
        }
    }
}
