//! 分发服务 - 业务能力层
//!
//! 把原始题目池乱序后按轮转方式分发到各分类桶。
//! 分类的分配只取决于题目在乱序后的位置，与内容无关

use crate::models::RawQuestion;
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// 乱序分发题目池
///
/// 先整体乱序，再把位置 i 的题目分给 categories[i % K]，
/// 桶内保持接收顺序。任意两个桶的大小差不超过 1，
/// 每个分类都会得到一个桶，即使一道题都没分到
///
/// # 参数
/// - `pool`: 所有难度档位汇总的原始题目池
/// - `categories`: 分类标签列表，顺序即轮转顺序
/// - `rng`: 乱序使用的随机数发生器
pub fn distribute<R: Rng>(
    mut pool: Vec<RawQuestion>,
    categories: &[String],
    rng: &mut R,
) -> IndexMap<String, Vec<RawQuestion>> {
    let mut buckets: IndexMap<String, Vec<RawQuestion>> = categories
        .iter()
        .map(|tag| (tag.clone(), Vec::new()))
        .collect();

    if categories.is_empty() {
        return buckets;
    }

    pool.shuffle(rng);

    for (i, question) in pool.into_iter().enumerate() {
        let tag = &categories[i % categories.len()];
        if let Some(bucket) = buckets.get_mut(tag) {
            bucket.push(question);
        }
    }

    buckets
}
