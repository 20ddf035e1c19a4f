use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题库 API 返回的原始题目
///
/// 文本字段保持 API 原样（含 HTML 实体），由规整阶段统一解码。
/// 上游额外字段（category、type）不关心，反序列化时直接忽略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    /// 难度标签，缺失时按 medium 处理
    ///
    /// 保持字符串形式，让无法识别的标签原样流过
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// 题库 API 的整体响应
///
/// response_code 为 0 表示成功；失败时 results 通常缺失
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// 写入导出文件的题目条目
///
/// 选项以字符串键 "0"–"3" 的 Map 形式存储（目标库导入格式要求），
/// 键的排序即乱序后的展示顺序
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuestion {
    pub question_text: String,
    pub options: BTreeMap<String, String>,
    pub correct_option_index: usize,
    pub explanation: String,
    pub difficulty: String,
    pub points: u32,
}

/// 最终写盘的导出文档
///
/// 根键 questions 下按分类聚合，分类顺序与配置一致；
/// 桶内键从 q0001 开始连续编号
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExportDocument {
    pub questions: IndexMap<String, BTreeMap<String, NormalizedQuestion>>,
}

impl ExportDocument {
    /// 文档中的题目总数
    pub fn total_questions(&self) -> usize {
        self.questions.values().map(|bucket| bucket.len()).sum()
    }
}
