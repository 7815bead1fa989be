use serde::Serialize;

use super::entities::{SearchHit, SearchSource};

/// 聚合搜索结果
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchResponse {
    pub query: String,
    pub items: Vec<SearchHit>,
    pub total: usize,
    /// 合并后的结果超过上限被截断
    pub truncated: bool,
    /// 查询失败而被忽略的数据来源
    pub failed_sources: Vec<SearchSource>,
}
