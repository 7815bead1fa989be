use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use crate::config::{AppConfig, Argon2Config};
use crate::errors::PortalError;

fn hasher(cfg: &Argon2Config) -> Result<Argon2<'static>, PortalError> {
    let params = Params::new(cfg.memory_cost, cfg.time_cost, cfg.parallelism, None)
        .map_err(|e| PortalError::validation(format!("Invalid argon2 parameters: {e}")))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

pub fn hash_password(password: &str) -> Result<String, PortalError> {
    hash_password_with(password, &AppConfig::get().argon2)
}

pub fn hash_password_with(password: &str, cfg: &Argon2Config) -> Result<String, PortalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(cfg)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PortalError::validation(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// 参数从哈希串本身读取，因此与配置变更无关
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with("Aaryans2026", &cheap()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Aaryans2026", &hash));
        assert!(!verify_password("aaryans2026", &hash));
    }

    #[test]
    fn test_verify_garbage_hash() {
        assert!(!verify_password("anything", "not-a-hash"));
    }
}
