use crate::config::Config;
use crate::models::{Difficulty, ExportDocument, RawQuestion};
use crate::services::{distributor, normalizer, ExportWriter, FetchService};
use anyhow::Result;
use rand::thread_rng;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self { config }
    }

    /// 运行 抓取 → 分发 → 规整 → 导出 流水线
    ///
    /// 抓取失败只会缩小题目池，不会中断运行；
    /// 只有最终写盘失败才会返回错误
    pub async fn run(&self) -> Result<()> {
        let fetch_service = FetchService::new(&self.config)?;

        // 逐难度档位抓取，汇总到一个题目池
        let mut pool: Vec<RawQuestion> = Vec::new();
        for difficulty in Difficulty::ALL {
            info!("[{}] 正在从题库抓取...", difficulty.as_str().to_uppercase());

            let batch = fetch_service.fetch_tier(difficulty).await;
            info!("  → 获得 {} 道题目", batch.len());

            pool.extend(batch);
            fetch_service.courtesy_pause().await;
        }

        info!("");
        info!("共抓取 {} 道题目", pool.len());
        info!("正在分发到各分类...");
        info!("");

        let mut rng = thread_rng();

        // 乱序 + 轮转分发，作用于原始题目池
        let buckets = distributor::distribute(pool, &self.config.categories, &mut rng);

        // 每个桶独立规整，桶内键从 q0001 开始
        let mut document = ExportDocument::default();
        for (tag, items) in &buckets {
            let bucket = normalizer::convert_bucket(items, &mut rng);
            info!("  {}: {} 道题目", tag, bucket.len());
            document.questions.insert(tag.clone(), bucket);
        }

        let writer = ExportWriter::new(&self.config);
        writer.write(&document).await?;

        print_final_stats(document.total_questions(), &self.config);

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    let tiers = Difficulty::ALL.len();
    info!("{}", "=".repeat(50));
    info!("🌍 题库抓取导出工具");
    info!(
        "📊 每档 {} 道 × {} 个难度 = 最多 {} 道原始题目",
        config.questions_per_batch,
        tiers,
        config.questions_per_batch as usize * tiers
    );
    info!("{}", "=".repeat(50));
}

fn print_final_stats(total: usize, config: &Config) {
    info!("");
    info!("{}", "=".repeat(50));
    info!("✅ 完成！{} 道题目已写入 '{}'", total, config.output_file);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(50));
    info!("");
    info!("后续步骤:");
    info!("  1. 打开 Firebase 控制台 → Realtime Database");
    info!("  2. 选择 导入 JSON");
    info!("  3. 上传 '{}'", config.output_file);
    info!("");
    info!(
        "💡 提示: 多次运行并手动合并 JSON 可以扩充题库，每次最多 {} 道（API 限制）",
        config.questions_per_batch as usize * Difficulty::ALL.len()
    );
}
