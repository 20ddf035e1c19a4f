/// 难度档位枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单
    Easy,
    /// 中等
    Medium,
    /// 困难
    Hard,
}

impl Difficulty {
    /// 抓取时遍历的固定档位顺序
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 获取 API 查询参数值
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 获取该档位对应的分值
    pub fn points(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// 从难度标签解析档位（精确匹配）
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// 标签对应的分值
    ///
    /// 无法识别的标签一律按 1 分处理
    pub fn points_for_label(label: &str) -> u32 {
        Self::from_label(label).map_or(1, Self::points)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
