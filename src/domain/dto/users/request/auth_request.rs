//! 인증 요청 관련 DTO
//!
//! 로그인과 회원가입 요청 정보를 매핑합니다.
//!
//! 모든 필드가 `Option`인 이유: 필드 누락을 역직렬화 에러(422/400의
//! 프레임워크 기본 본문)로 처리하면 프론트엔드가 기대하는 정확한
//! 메시지를 반환할 수 없습니다. 존재 여부 검사는 서비스 계층이
//! 원본 계약의 순서대로 수행합니다.

use serde::Deserialize;

/// 로그인 요청 구조체
///
/// `POST /login` 본문과 매핑됩니다.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 회원가입 요청 구조체
///
/// `POST /register` 본문과 매핑됩니다. `role` 등 다른 필드가 본문에
/// 포함되어 있어도 역직렬화 단계에서 버려지므로 역할 상승은 요청으로
/// 불가능합니다.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();

        assert!(req.name.is_none());
        assert_eq!(req.email.as_deref(), Some("a@b.com"));
        assert!(req.password.is_none());
        assert!(req.confirm_password.is_none());
    }

    #[test]
    fn test_register_request_confirm_password_key() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"John","email":"a@b.com","password":"secret1","confirmPassword":"secret1"}"#,
        )
        .unwrap();

        assert_eq!(req.confirm_password.as_deref(), Some("secret1"));
    }

    #[test]
    fn test_register_request_ignores_role_field() {
        // 요청에 role이 와도 타입에 존재하지 않으므로 버려짐
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":"x","email":"a@b.com","role":"admin"}"#).unwrap();

        assert_eq!(req.name.as_deref(), Some("x"));
    }

    #[test]
    fn test_login_request_missing_password() {
        let req: LoginRequest = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();

        assert!(req.password.is_none());
    }
}
