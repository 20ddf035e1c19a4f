//! 题库 API 客户端
//!
//! 封装所有与 Open Trivia DB 的 HTTP 交互：构造查询、解析响应、
//! 校验响应码

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{RawQuestion, TriviaResponse};
use std::time::Duration;
use tracing::debug;

/// 表示成功的响应码
pub const RESPONSE_CODE_OK: i64 = 0;

/// 题库 API 客户端
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: String,
    amount: u32,
}

impl TriviaClient {
    /// 创建新的题库客户端
    ///
    /// 请求超时由配置决定，对所有请求生效
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::api_request_failed(config.api_base_url.clone(), e))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            amount: config.questions_per_batch,
        })
    }

    /// 按分类与难度抓取一批选择题
    ///
    /// # 参数
    /// - `category_id`: 题库分类 ID
    /// - `difficulty`: 难度标签（easy/medium/hard）
    ///
    /// # 返回
    /// 返回响应 results 字段中的原始题目列表
    pub async fn fetch_questions(
        &self,
        category_id: u32,
        difficulty: &str,
    ) -> AppResult<Vec<RawQuestion>> {
        debug!(
            "请求题库: amount={} category={} difficulty={}",
            self.amount, category_id, difficulty
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("amount", self.amount.to_string()),
                ("category", category_id.to_string()),
                ("difficulty", difficulty.to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(self.base_url.clone(), e))?;

        let body: TriviaResponse = response
            .json()
            .await
            .map_err(|e| AppError::api_request_failed(self.base_url.clone(), e))?;

        if body.response_code != RESPONSE_CODE_OK {
            return Err(AppError::api_bad_response(
                self.base_url.clone(),
                Some(body.response_code),
            ));
        }

        debug!("题库返回 {} 道题目", body.results.len());

        Ok(body.results)
    }
}
