use serde::{Deserialize, Serialize};

// 粗粒度角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,     // 管理层
    Professor, // 教职工
    Student,   // 学生
}

impl Role {
    pub const ADMIN: &'static str = "admin";
    pub const PROFESSOR: &'static str = "professor";
    pub const STUDENT: &'static str = "student";

    pub fn staff_roles() -> &'static [&'static Role] {
        &[&Self::Admin, &Self::Professor]
    }
    pub fn all_roles() -> &'static [&'static Role] {
        &[&Self::Admin, &Self::Professor, &Self::Student]
    }

    /// 子角色必须属于对应的角色，学生没有子角色
    pub fn accepts_sub_role(self, sub_role: SubRole) -> bool {
        match self {
            Role::Admin => matches!(sub_role, SubRole::Head | SubRole::Principal | SubRole::Hod),
            Role::Professor => matches!(sub_role, SubRole::Coordinator | SubRole::Teacher),
            Role::Student => false,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Role>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid role: '{s}'. Supported roles: admin, professor, student"
            ))
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", Role::ADMIN),
            Role::Professor => write!(f, "{}", Role::PROFESSOR),
            Role::Student => write!(f, "{}", Role::STUDENT),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Role::ADMIN => Ok(Role::Admin),
            Role::PROFESSOR => Ok(Role::Professor),
            Role::STUDENT => Ok(Role::Student),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

// 细粒度角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubRole {
    Head,        // 校长/董事
    Principal,   // 校长
    Hod,         // 系主任
    Coordinator, // 协调员
    Teacher,     // 任课教师
}

impl std::fmt::Display for SubRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubRole::Head => write!(f, "head"),
            SubRole::Principal => write!(f, "principal"),
            SubRole::Hod => write!(f, "hod"),
            SubRole::Coordinator => write!(f, "coordinator"),
            SubRole::Teacher => write!(f, "teacher"),
        }
    }
}

impl std::str::FromStr for SubRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(SubRole::Head),
            "principal" => Ok(SubRole::Principal),
            "hod" => Ok(SubRole::Hod),
            "coordinator" => Ok(SubRole::Coordinator),
            "teacher" => Ok(SubRole::Teacher),
            _ => Err(format!("Invalid sub role: {s}")),
        }
    }
}

// 注册审批状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {s}")),
        }
    }
}

// 用户资料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub sub_role: Option<SubRole>,
    pub approval_status: ApprovalStatus,
    pub house: Option<String>,
    pub duties: Vec<String>,
    pub phone: Option<String>,
    pub class_name: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Profile {
    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("Failed to generate token pair: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_role_membership() {
        assert!(Role::Admin.accepts_sub_role(SubRole::Principal));
        assert!(!Role::Admin.accepts_sub_role(SubRole::Coordinator));
        assert!(Role::Professor.accepts_sub_role(SubRole::Coordinator));
        assert!(!Role::Professor.accepts_sub_role(SubRole::Hod));
        assert!(!Role::Student.accepts_sub_role(SubRole::Teacher));
    }

    #[test]
    fn test_role_round_trips_through_strings() {
        for role in Role::all_roles() {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), **role);
        }
        assert!("teacher".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_deserialize_reports_supported_values() {
        let err = serde_json::from_str::<Role>("\"janitor\"").unwrap_err();
        assert!(err.to_string().contains("admin, professor, student"));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let now = chrono::Utc::now();
        let profile = Profile {
            id: 1,
            email: "a@b.in".into(),
            password_hash: "secret".into(),
            full_name: "Asha".into(),
            role: Role::Student,
            sub_role: None,
            approval_status: ApprovalStatus::Pending,
            house: None,
            duties: vec![],
            phone: None,
            class_name: Some("8-B".into()),
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"approval_status\":\"pending\""));
    }
}
