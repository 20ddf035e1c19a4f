//! # Trivia Fetch
//!
//! 从 Open Trivia DB 抓取地理选择题，并转换为 GeoSphere 使用的
//! 层级键值库导入格式的批处理工具
//!
//! ## 流水线设计
//!
//! 整个系统是一条顺序流水线，共四个阶段：
//!
//! ### ① 抓取（Fetch）
//! - `clients/trivia_client` - 题库 API 的 HTTP 交互
//! - `services/fetch_service` - 按难度档位抓取，失败降级为空列表
//!
//! ### ② 分发（Distribute）
//! - `services/distributor` - 题目池乱序后轮转分发到各分类桶
//!
//! ### ③ 规整（Normalize）
//! - `services/normalizer` - HTML 实体解码、选项乱序、定位正确答案、换算分值
//!
//! ### ④ 导出（Export）
//! - `services/export_writer` - 序列化为带缩进的 JSON 并整体覆盖写入
//!
//! 注意分发发生在规整之前：轮转分配作用于原始题目池，
//! 每个分类桶内再独立从 q0001 开始编号。
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

// 重新导出常用类型
pub use app::App;
pub use clients::TriviaClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, ExportDocument, NormalizedQuestion, RawQuestion, TriviaResponse};
pub use services::{ExportWriter, FetchService};
