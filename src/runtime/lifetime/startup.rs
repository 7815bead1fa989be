use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::profiles::entities::{ApprovalStatus, Role, SubRole};
use crate::models::profiles::requests::CreateProfileRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

type StartupError = Box<dyn std::error::Error>;

const DEFAULT_ADMIN_EMAIL: &str = "admin@theaaryans.in";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn try_cache_backend(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let Some(constructor) = get_object_cache_plugin(name) else {
        warn!("Cache backend '{}' not found in registry", name);
        return None;
    };
    match constructor().await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>, StartupError> {
    let cache_type = &AppConfig::get().cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);
    if let Some(cache) = try_cache_backend(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to memory cache");
        if let Some(cache) = try_cache_backend("moka").await {
            return Ok(cache);
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 生成随机密码，保证满足密码策略
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";
    let mut rng = rand::rng();
    let body: String = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!("{body}Aa1!")
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个已审批的 head 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_profiles().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} profile(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No profiles found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count profiles: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let admin_request = CreateProfileRequest {
        email,
        password_hash,
        full_name: "School Administrator".to_string(),
        role: Role::Admin,
        sub_role: Some(SubRole::Head),
        approval_status: ApprovalStatus::Approved,
        phone: None,
        class_name: None,
    };

    match storage.create_profile(admin_request).await {
        Ok(profile) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                profile.id, profile.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文：存储、迁移、默认账号与缓存
pub async fn prepare_server_startup() -> Result<StartupContext, StartupError> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| "Failed to install rustls crypto provider")?;

    if cfg!(debug_assertions) {
        debug!(
            "Registered cache backends: {:?}",
            crate::cache::register::registered_object_cache_plugins()
        );
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    let cache = create_cache().await?;

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_generated_password_meets_policy() {
        for _ in 0..20 {
            let password = generate_random_password(16);
            assert_eq!(password.len(), 20);
            assert!(validate_password(&password).is_ok());
        }
    }
}
