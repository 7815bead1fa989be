//! 聊天记录存储
//!
//! 每个会话一个键 `chat:transcript:{session}`，值为消息的 JSON 数组。

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheResult, ObjectCache, ObjectCacheExt};
use crate::models::chat::entities::ChatMessage;

const APPEND_LOCKS: usize = 64;

pub struct TranscriptStore {
    cache: Arc<dyn ObjectCache>,
    ttl: u64,
    // 按会话哈希分片的写锁，只保证本进程内的追加有序
    append_locks: [Mutex<()>; APPEND_LOCKS],
}

impl TranscriptStore {
    pub fn new(cache: Arc<dyn ObjectCache>, ttl: u64) -> Self {
        Self {
            cache,
            ttl,
            append_locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    fn append_lock(&self, session_id: &str) -> &Mutex<()> {
        let mut hasher = DefaultHasher::new();
        session_id.hash(&mut hasher);
        &self.append_locks[(hasher.finish() % APPEND_LOCKS as u64) as usize]
    }

    pub fn key(session_id: &str) -> String {
        format!("chat:transcript:{session_id}")
    }

    /// 不存在或无法解析的记录按空处理
    pub async fn read(&self, session_id: &str) -> Vec<ChatMessage> {
        match self
            .cache
            .get_json::<Vec<ChatMessage>>(&Self::key(session_id))
            .await
        {
            CacheResult::Found(messages) => messages,
            _ => Vec::new(),
        }
    }

    /// 追加后整体写回，返回追加后的记录
    ///
    /// 读改写在分片锁内完成，同一会话的并发追加不会互相覆盖。
    /// 多实例共用 Redis 时锁不跨进程。
    pub async fn append(&self, session_id: &str, message: ChatMessage) -> Vec<ChatMessage> {
        let _guard = self.append_lock(session_id).lock().await;
        let mut messages = self.read(session_id).await;
        messages.push(message);
        self.cache
            .insert_json(Self::key(session_id), &messages, self.ttl)
            .await;
        messages
    }

    pub async fn clear(&self, session_id: &str) {
        self.cache.remove(&Self::key(session_id)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::models::chat::entities::Speaker;

    fn store() -> (Arc<dyn ObjectCache>, TranscriptStore) {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        (cache.clone(), TranscriptStore::new(cache, 60))
    }

    #[tokio::test]
    async fn test_append_read_clear() {
        let (_, store) = store();
        assert!(store.read("s-1").await.is_empty());

        store.append("s-1", ChatMessage::user("hi")).await;
        let messages = store.append("s-1", ChatMessage::assistant("hello")).await;
        assert_eq!(messages.len(), 2);

        let read = store.read("s-1").await;
        assert_eq!(read[0].role, Speaker::User);
        assert_eq!(read[1].content, "hello");
        assert!(store.read("s-2").await.is_empty());

        store.clear("s-1").await;
        assert!(store.read("s-1").await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_every_message() {
        let (_, store) = store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .append("s-busy", ChatMessage::user(format!("question {i}")))
                        .await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let read = store.read("s-busy").await;
        assert_eq!(read.len(), 32);
        for i in 0..32 {
            let content = format!("question {i}");
            assert!(read.iter().any(|m| m.content == content));
        }
    }

    #[tokio::test]
    async fn test_unreadable_transcript_is_empty() {
        let (cache, store) = store();
        cache
            .insert_raw(TranscriptStore::key("s-9"), "{not json".to_string(), 0)
            .await;
        assert!(store.read("s-9").await.is_empty());

        let messages = store.append("s-9", ChatMessage::user("again")).await;
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test]
    async fn test_stored_value_is_a_json_array() {
        let (cache, store) = store();
        store.append("s-3", ChatMessage::user("fees?")).await;
        let raw = cache
            .get_raw(&TranscriptStore::key("s-3"))
            .await
            .found()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["role"], "user");
        assert_eq!(value[0]["content"], "fees?");
    }
}
