//! 抓取服务 - 业务能力层
//!
//! 只负责"按难度档位抓取一批原始题目"能力，不关心流程

use crate::clients::TriviaClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Difficulty, RawQuestion};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// 抓取服务
///
/// 职责：
/// - 每个难度档位发起一次请求，不做重试
/// - 任何抓取失败都降级为空列表，绝不向上传播
/// - 提供抓取之间的礼貌等待
pub struct FetchService {
    client: TriviaClient,
    category_id: u32,
    courtesy_delay: Duration,
}

impl FetchService {
    /// 创建新的抓取服务
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            client: TriviaClient::new(config)?,
            category_id: config.trivia_category_id,
            courtesy_delay: Duration::from_secs(config.courtesy_delay_secs),
        })
    }

    /// 抓取一个难度档位的题目
    ///
    /// 网络错误、超时、JSON 解析失败或非零响应码都只记录诊断日志，
    /// 返回空列表，本档位按零道题处理，整个运行继续
    pub async fn fetch_tier(&self, difficulty: Difficulty) -> Vec<RawQuestion> {
        match self
            .client
            .fetch_questions(self.category_id, difficulty.as_str())
            .await
        {
            Ok(results) => results,
            Err(e) => {
                warn!("  [{}] 抓取失败: {}", difficulty, e);
                Vec::new()
            }
        }
    }

    /// 礼貌等待
    ///
    /// 每档抓取后的固定停顿，给免费 API 留出喘息时间；
    /// 不是限流协议，没有退避和限流探测
    pub async fn courtesy_pause(&self) {
        sleep(self.courtesy_delay).await;
    }
}
