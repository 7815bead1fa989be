//! 多数据源搜索的扇出与合并

use std::future::Future;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::errors::Result;
use crate::models::search::{
    entities::{SearchHit, SearchSource},
    responses::SearchResponse,
};

/// 对每个数据源并发调用 `fetch`，等待全部完成后按 `sources` 的顺序拼接。
///
/// 查询先去掉首尾空白，短于 `min_query_length` 时不发出任何查询。
/// 失败的数据源记录日志后计入 `failed_sources`，不影响其余结果。
/// 合并后只保留前 `max_results` 条，不排序也不去重。
pub async fn aggregate<F, Fut>(
    query: &str,
    sources: &[SearchSource],
    limits: SearchConfig,
    fetch: F,
) -> SearchResponse
where
    F: Fn(SearchSource, String) -> Fut,
    Fut: Future<Output = Result<Vec<SearchHit>>>,
{
    let needle = query.trim();
    if needle.chars().count() < limits.min_query_length {
        return SearchResponse {
            query: needle.to_string(),
            ..Default::default()
        };
    }

    let branches = sources.iter().map(|&source| {
        let branch = fetch(source, needle.to_string());
        async move { (source, branch.await) }
    });
    let outcomes = join_all(branches).await;

    let mut items = Vec::new();
    let mut failed_sources = Vec::new();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(hits) => {
                debug!("Search source {} returned {} rows", source, hits.len());
                items.extend(hits.into_iter().take(limits.per_source_limit as usize));
            }
            Err(e) => {
                warn!("Search source {} failed, skipping: {}", source, e);
                failed_sources.push(source);
            }
        }
    }

    let truncated = items.len() > limits.max_results;
    items.truncate(limits.max_results);

    SearchResponse {
        query: needle.to_string(),
        total: items.len(),
        truncated,
        failed_sources,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PortalError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn rows(source: SearchSource, n: usize) -> Vec<SearchHit> {
        (0..n)
            .map(|i| SearchHit::new(source, i as i64 + 1, format!("{source} {i}"), None))
            .collect()
    }

    #[tokio::test]
    async fn test_short_query_never_fetches() {
        let calls = AtomicUsize::new(0);
        let result = aggregate(" a ", &SearchSource::ALL, SearchConfig::default(), |s, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(rows(s, 1)) }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.query, "a");
    }

    #[tokio::test]
    async fn test_results_follow_source_order_despite_completion_order() {
        let sources = [SearchSource::Profiles, SearchSource::Classes, SearchSource::Exams];
        let result = aggregate("gr", &sources, SearchConfig::default(), |s, _| async move {
            // 先声明的数据源最后完成
            let delay = match s {
                SearchSource::Profiles => 30,
                SearchSource::Classes => 10,
                _ => 0,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(rows(s, 2))
        })
        .await;
        let order: Vec<_> = result.items.iter().map(|h| h.source).collect();
        assert_eq!(
            order,
            vec![
                SearchSource::Profiles,
                SearchSource::Profiles,
                SearchSource::Classes,
                SearchSource::Classes,
                SearchSource::Exams,
                SearchSource::Exams,
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_branch_is_skipped() {
        let sources = [SearchSource::Events, SearchSource::Courses, SearchSource::FeeRecords];
        let result = aggregate("science", &sources, SearchConfig::default(), |s, _| async move {
            if s == SearchSource::Courses {
                Err(PortalError::database_operation("relation does not exist"))
            } else {
                Ok(rows(s, 3))
            }
        })
        .await;
        assert_eq!(result.total, 6);
        assert_eq!(result.failed_sources, vec![SearchSource::Courses]);
        assert!(result.items.iter().all(|h| h.source != SearchSource::Courses));
    }

    #[tokio::test]
    async fn test_merged_results_are_capped() {
        let result = aggregate("grade", &SearchSource::ALL, SearchConfig::default(), |s, _| {
            async move { Ok(rows(s, 10)) }
        })
        .await;
        assert_eq!(result.total, 50);
        assert!(result.truncated);
        // 前五个数据源各 10 条
        assert_eq!(result.items[49].source, SearchSource::ALL[4]);
    }

    #[tokio::test]
    async fn test_per_source_limit_applies_to_oversized_branch() {
        let result = aggregate(
            "grade",
            &[SearchSource::LibraryBooks],
            SearchConfig::default(),
            |s, _| async move { Ok(rows(s, 25)) },
        )
        .await;
        assert_eq!(result.total, 10);
        assert!(!result.truncated);
    }

    #[tokio::test]
    async fn test_needle_is_trimmed_before_fetch() {
        let result = aggregate("  Physics  ", &[SearchSource::Subjects], SearchConfig::default(), |s, needle| {
            async move {
                assert_eq!(needle, "Physics");
                Ok(rows(s, 1))
            }
        })
        .await;
        assert_eq!(result.query, "Physics");
        assert_eq!(result.total, 1);
    }
}
