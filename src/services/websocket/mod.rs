/*!
 * 管理员实时通知
 *
 * 客户端通过 `ws://host/api/v1/ws?token=<access_token>` 连接，
 * 只有已审批的管理员可以连接。
 *
 * ## 服务端推送
 * ```json
 * {"type": "connected", "profile_id": 1}
 * {"type": "pending_approvals", "count": 3}
 * ```
 *
 * ## 心跳
 * ```json
 * {"type": "ping"}
 * {"type": "pong"}
 * ```
 */

use actix_ws::Message;
use dashmap::DashMap;
use futures_util::StreamExt;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

static CONNECTION_MANAGER: Lazy<ConnectionManager> = Lazy::new(ConnectionManager::new);

const HEARTBEAT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// 待审批注册数量变化
    PendingApprovals { count: u64 },
    Ping,
    Pong,
    Connected { profile_id: i64 },
    Error { message: String },
}

/// profile id -> 广播发送器；同一用户的多个标签页共享一个发送器
pub struct ConnectionManager {
    connections: DashMap<i64, broadcast::Sender<WsMessage>>,
}

impl ConnectionManager {
    fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    pub fn get() -> &'static Self {
        &CONNECTION_MANAGER
    }

    pub fn register(&self, profile_id: i64) -> broadcast::Receiver<WsMessage> {
        self.connections
            .entry(profile_id)
            .or_insert_with(|| broadcast::channel(32).0)
            .subscribe()
    }

    /// 只有没有订阅者时才移除
    pub fn unregister(&self, profile_id: i64) {
        self.connections
            .remove_if(&profile_id, |_, sender| sender.receiver_count() == 0);
    }

    /// 发给所有在线连接，返回送达的连接数
    pub fn broadcast(&self, message: WsMessage) -> usize {
        self.connections
            .iter()
            .filter_map(|entry| entry.value().send(message.clone()).ok())
            .sum()
    }

    /// 强制断开某个用户（例如被降级或删除）
    pub fn disconnect(&self, profile_id: i64) {
        self.connections.remove(&profile_id);
    }

    pub fn online_count(&self) -> usize {
        self.connections
            .iter()
            .filter(|entry| entry.receiver_count() > 0)
            .count()
    }
}

pub struct WebSocketService;

impl WebSocketService {
    pub async fn handle_connection(
        profile_id: i64,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
        initial_pending: Option<u64>,
    ) {
        let mut rx = ConnectionManager::get().register(profile_id);
        info!(
            "WebSocket connected for profile: {} ({} online)",
            profile_id,
            ConnectionManager::get().online_count()
        );

        let mut greeting = vec![WsMessage::Connected { profile_id }];
        if let Some(count) = initial_pending {
            greeting.push(WsMessage::PendingApprovals { count });
        }
        for msg in greeting {
            if let Ok(json) = serde_json::to_string(&msg)
                && session.text(json).await.is_err()
            {
                ConnectionManager::get().unregister(profile_id);
                return;
            }
        }

        let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);

        loop {
            tokio::select! {
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            match serde_json::from_str::<WsMessage>(&text) {
                                Ok(WsMessage::Ping) => {
                                    let pong = serde_json::to_string(&WsMessage::Pong)
                                        .unwrap_or_else(|_| r#"{"type":"pong"}"#.to_string());
                                    if session.text(pong).await.is_err() {
                                        break;
                                    }
                                }
                                Ok(other) => {
                                    debug!("Ignoring message from profile {}: {:?}", profile_id, other);
                                }
                                Err(_) => {
                                    debug!("Unreadable message from profile {}", profile_id);
                                }
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if session.pong(&data).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            break;
                        }
                        Some(Err(e)) => {
                            warn!("WebSocket error for profile {}: {:?}", profile_id, e);
                            break;
                        }
                        _ => {}
                    }
                }

                msg = rx.recv() => {
                    match msg {
                        Ok(ws_msg) => {
                            if let Ok(json) = serde_json::to_string(&ws_msg)
                                && session.text(json).await.is_err()
                            {
                                break;
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            warn!("WebSocket for profile {} lagged by {} messages", profile_id, n);
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            break;
                        }
                    }
                }

                _ = heartbeat.tick() => {
                    if session.ping(b"").await.is_err() {
                        break;
                    }
                }
            }
        }

        drop(rx);
        let _ = session.close(None).await;
        ConnectionManager::get().unregister(profile_id);
        info!("WebSocket disconnected for profile: {}", profile_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_string(&WsMessage::PendingApprovals { count: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"pending_approvals","count":3}"#);
        let ping: WsMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert_eq!(ping, WsMessage::Ping);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_registered_profile() {
        let manager = ConnectionManager::new();
        let mut a = manager.register(1);
        let mut b = manager.register(2);
        assert_eq!(manager.online_count(), 2);

        let delivered = manager.broadcast(WsMessage::PendingApprovals { count: 5 });
        assert_eq!(delivered, 2);
        assert_eq!(a.recv().await.unwrap(), WsMessage::PendingApprovals { count: 5 });
        assert_eq!(b.recv().await.unwrap(), WsMessage::PendingApprovals { count: 5 });

        drop(a);
        manager.unregister(1);
        assert_eq!(manager.online_count(), 1);
    }
}
