//! 导出写入服务 - 业务能力层
//!
//! 只负责"把导出文档写成 JSON 文件"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::ExportDocument;
use tokio::fs;
use tracing::debug;

/// 导出写入服务
///
/// 职责：
/// - 序列化为 2 空格缩进的 JSON，非 ASCII 字符原样保留
/// - 整体覆盖写入目标文件，不做合并
///   （多次运行的结果合并是操作者的手工步骤）
pub struct ExportWriter {
    output_path: String,
}

impl ExportWriter {
    /// 创建新的导出写入服务
    pub fn new(config: &crate::config::Config) -> Self {
        Self {
            output_path: config.output_file.clone(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 写入导出文档
    ///
    /// 一次性写入全量内容，没有原子重命名保护，
    /// 写入中途崩溃可能留下截断文件
    pub async fn write(&self, document: &ExportDocument) -> AppResult<()> {
        let json = serde_json::to_string_pretty(document)?;

        debug!("写入导出文件: {} ({} 字节)", self.output_path, json.len());

        fs::write(&self.output_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(self.output_path.clone(), e))?;

        Ok(())
    }
}
