use serde::Serialize;

/// 业务错误码，序列化进 `ApiResponse.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    RateLimitExceeded = 1005,
    InternalServerError = 1006,

    // 认证
    AuthFailed = 2000,
    RegisterFailed = 2001,
    EmailAlreadyExists = 2002,
    EmailInvalid = 2003,
    PasswordPolicyViolation = 2004,
    ApprovalPending = 2005,
    ApprovalRejected = 2006,

    // 用户资料
    ProfileNotFound = 3000,
    ProfileUpdateFailed = 3001,
    ProfileDeleteFailed = 3002,

    // 考试
    ExamNotFound = 4000,
    ExamCreationFailed = 4001,
    ExamDeleteFailed = 4002,

    // 转学证明
    CertificateNotFound = 4100,
    CertificateIssueFailed = 4101,

    // 联系表单
    ContactSubmitFailed = 4200,

    // 搜索
    SearchFailed = 4300,

    // 聊天
    ChatFailed = 4400,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as i32)
    }
}
