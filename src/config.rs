use phf::phf_map;

/// 输出 JSON 的分类标签，顺序即轮转分发顺序
pub const CATEGORIES: [&str; 8] = [
    "world",
    "europe",
    "asia",
    "americas",
    "africa",
    "capitals",
    "flags",
    "landmarks",
];

/// 分类标签 → Open Trivia DB 分类 ID
///
/// 目前所有标签都指向 Geography（22），为将来各分类接入
/// 独立题库分类预留映射位置
pub static CATEGORY_IDS: phf::Map<&'static str, u32> = phf_map! {
    "world" => 22,
    "europe" => 22,
    "asia" => 22,
    "americas" => 22,
    "africa" => 22,
    "capitals" => 22,
    "flags" => 22,
    "landmarks" => 22,
};

/// 找不到映射时使用的题库分类 ID（Geography）
const DEFAULT_TRIVIA_CATEGORY_ID: u32 = 22;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 每个难度档位一次抓取的题目数量（API 单次上限 50）
    pub questions_per_batch: u32,
    /// 题库 API 基础地址
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 每档抓取后的礼貌等待（秒）
    pub courtesy_delay_secs: u64,
    /// 输出 JSON 文件路径
    pub output_file: String,
    /// 抓取使用的题库分类 ID
    pub trivia_category_id: u32,
    /// 分类标签列表，顺序即轮转分发顺序
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_per_batch: 50,
            api_base_url: "https://opentdb.com/api.php".to_string(),
            request_timeout_secs: 10,
            courtesy_delay_secs: 1,
            output_file: "trivia_questions.json".to_string(),
            trivia_category_id: CATEGORY_IDS
                .get(CATEGORIES[0])
                .copied()
                .unwrap_or(DEFAULT_TRIVIA_CATEGORY_ID),
            categories: CATEGORIES.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            questions_per_batch: std::env::var("QUESTIONS_PER_BATCH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.questions_per_batch),
            api_base_url: std::env::var("TRIVIA_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            courtesy_delay_secs: std::env::var("COURTESY_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.courtesy_delay_secs),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            trivia_category_id: std::env::var("TRIVIA_CATEGORY_ID").ok().and_then(|v| v.parse().ok()).unwrap_or(default.trivia_category_id),
            categories: default.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.questions_per_batch, 50);
        assert_eq!(config.trivia_category_id, 22);
        assert_eq!(config.categories.len(), 8);
        assert_eq!(config.categories[0], "world");
    }

    #[test]
    fn test_category_ids_cover_all_categories() {
        // 每个分类标签都必须有对应的题库分类 ID
        for tag in CATEGORIES {
            assert!(CATEGORY_IDS.contains_key(tag), "缺少分类映射: {}", tag);
        }
    }
}
