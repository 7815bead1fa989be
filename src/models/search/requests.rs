use serde::Deserialize;

// 全局搜索参数
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
