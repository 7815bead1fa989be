/*!
 * 基于角色的访问控制中间件
 *
 * 必须在 RequireJWT 之后执行（actix 中后 wrap 的先执行，所以写在 RequireJWT 之前）。
 * 除角色外还检查审批状态：待审批与已拒绝的账号一律拦截。
 *
 * ```rust,ignore
 * web::scope("/profiles")
 *     .wrap(RequireRole::new(&Role::Admin))
 *     .wrap(RequireJWT)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    profiles::entities::{ApprovalStatus, Profile, Role},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    required_roles: Vec<Role>,
}

impl RequireRole {
    /// 创建需要特定角色的中间件
    pub fn new(role: &Role) -> Self {
        Self {
            required_roles: vec![*role],
        }
    }

    /// 创建需要任一角色的中间件
    pub fn new_any(roles: &[&Role]) -> Self {
        Self {
            required_roles: roles.iter().map(|r| **r).collect(),
        }
    }
}

/// 审批状态与角色检查，返回拒绝时的状态码、错误码与消息
pub fn check_access(
    profile: &Profile,
    required_roles: &[Role],
) -> Result<(), (StatusCode, ErrorCode, &'static str)> {
    match profile.approval_status {
        ApprovalStatus::Approved => {}
        ApprovalStatus::Pending => {
            return Err((
                StatusCode::FORBIDDEN,
                ErrorCode::ApprovalPending,
                "Your account is awaiting administrator approval",
            ));
        }
        ApprovalStatus::Rejected => {
            return Err((
                StatusCode::FORBIDDEN,
                ErrorCode::ApprovalRejected,
                "Your registration was rejected, please contact the school office",
            ));
        }
    }

    if required_roles.contains(&profile.role) {
        Ok(())
    } else {
        Err((StatusCode::FORBIDDEN, ErrorCode::Forbidden, "Access denied."))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<Role>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let required_roles = self.required_roles.clone();

        Box::pin(async move {
            let profile = req.extensions().get::<Profile>().cloned();

            match profile {
                Some(profile) => match check_access(&profile, &required_roles) {
                    Ok(()) => {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    }
                    Err((status, code, message)) => {
                        info!(
                            "Access denied for profile {} (role: {}, status: {}). Required roles: {:?}",
                            profile.id, profile.role, profile.approval_status, required_roles
                        );
                        Ok(req.into_response(
                            create_error_response(status, code, message).map_into_right_body(),
                        ))
                    }
                },
                None => {
                    info!(
                        "Role check failed: No profile found in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role, status: ApprovalStatus) -> Profile {
        let now = chrono::Utc::now();
        Profile {
            id: 1,
            email: "p@theaaryans.in".to_string(),
            password_hash: String::new(),
            full_name: "Test Profile".to_string(),
            role,
            sub_role: None,
            approval_status: status,
            house: None,
            duties: vec![],
            phone: None,
            class_name: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_pending_profile_is_blocked_before_role_check() {
        let err = check_access(
            &profile(Role::Admin, ApprovalStatus::Pending),
            &[Role::Admin],
        )
        .unwrap_err();
        assert_eq!(err.1, ErrorCode::ApprovalPending);

        let err = check_access(
            &profile(Role::Student, ApprovalStatus::Rejected),
            &[Role::Student],
        )
        .unwrap_err();
        assert_eq!(err.1, ErrorCode::ApprovalRejected);
    }

    #[test]
    fn test_role_membership() {
        let teacher = profile(Role::Professor, ApprovalStatus::Approved);
        assert!(check_access(&teacher, &[Role::Admin, Role::Professor]).is_ok());
        let err = check_access(&teacher, &[Role::Admin]).unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);
        assert_eq!(err.1, ErrorCode::Forbidden);
    }
}
