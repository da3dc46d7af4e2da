//! 프로필 수정 요청 DTO
//!
//! `PUT /users/{id}` 본문과 매핑됩니다. 수정 가능한 필드만 타입에
//! 존재하므로 `id`, `password_hash`, `createdAt`, `role`은 본문에
//! 실려 와도 역직렬화 단계에서 버려집니다.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::user::UserPreferences;

/// 프로필 수정 요청 구조체
///
/// 모든 필드는 선택적이며, 제공된 필드만 부분 업데이트됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 변경할 이름
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    /// 변경할 이메일
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// 변경할 구매 성향 정보
    pub preferences: Option<UserPreferences>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_protected_fields_are_dropped() {
        // role/password_hash/createdAt는 구조체에 없으므로 버려짐
        let req: UpdateUserRequest = serde_json::from_str(
            r#"{"name":"New Name","role":"admin","password_hash":"x","createdAt":"2020-01-01","id":"abc"}"#,
        )
        .unwrap();

        assert_eq!(req.name.as_deref(), Some("New Name"));
        assert!(req.email.is_none());
    }

    #[test]
    fn test_validates_email_when_present() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"email":"not-an-email"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"email":"new@example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_body_is_valid() {
        // 빈 본문도 유효한 부분 수정 요청 (updatedAt만 갱신됨)
        let req: UpdateUserRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none() && req.email.is_none() && req.preferences.is_none());
    }

    #[test]
    fn test_preferences_parse() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"preferences":{"budget":1500,"usage":"gaming"}}"#).unwrap();

        let prefs = req.preferences.unwrap();
        assert_eq!(prefs.budget, 1500.0);
        assert_eq!(prefs.usage, "gaming");
    }
}
