//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 인증, 역할 구분, 구매 성향 정보를 포함하는
//! 사용자 모델을 제공합니다.

use chrono::{SecondsFormat, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 회원가입으로 생성되는 사용자는 항상 [`UserRole::User`]입니다.
/// 역할 변경은 어떤 요청 경로로도 허용되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 관리자 계정
    Admin,
    /// 일반 사용자 계정
    User,
}

/// 사용자 구매 성향 정보
///
/// 프론트엔드 호환을 위해 값이 없는 사용자에게는
/// `{budget: 0, usage: ""}` 기본값이 제공됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// 예산 (기본값 0)
    #[serde(default)]
    pub budget: f64,
    /// 사용 목적 (기본값 빈 문자열)
    #[serde(default)]
    pub usage: String,
}

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 매핑되는 핵심 도메인 엔티티입니다.
/// 이메일은 등록 시점에 소문자/trim 정규화되며, 유일성은 스토어 제약이
/// 아니라 삽입 전 조회로만 보장됩니다 (동시 가입 경합 시 중복 가능 —
/// 문서화된 공백).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (소문자 정규화, 애플리케이션 레벨 유일성)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 생성 시간 (RFC 3339 문자열)
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// 수정 시간 (RFC 3339 문자열)
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// 구매 성향 정보
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

impl User {
    /// 회원가입으로 새 사용자 생성
    ///
    /// 역할은 요청 내용과 무관하게 항상 `user`로 고정되며,
    /// 생성/수정 시간은 현재 시각으로 설정됩니다.
    pub fn new_registered(name: String, email: String, password_hash: String) -> Self {
        let now = Self::now_timestamp();

        Self {
            id: None,
            name,
            email,
            password_hash,
            role: UserRole::User,
            created_at: now.clone(),
            updated_at: now,
            preferences: Some(UserPreferences::default()),
        }
    }

    /// 현재 시각을 저장 포맷(밀리초 정밀도 RFC 3339)으로 반환
    pub fn now_timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registered_forces_user_role() {
        let user = User::new_registered(
            "John".to_string(),
            "john@example.com".to_string(),
            "hash".to_string(),
        );

        assert_eq!(user.role, UserRole::User);
        assert!(user.id.is_none());
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.preferences, Some(UserPreferences::default()));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let admin = serde_json::to_value(&UserRole::Admin).unwrap();
        let user = serde_json::to_value(&UserRole::User).unwrap();

        assert_eq!(admin, serde_json::json!("admin"));
        assert_eq!(user, serde_json::json!("user"));
    }

    #[test]
    fn test_timestamp_fields_use_camel_case() {
        let user = User::new_registered(
            "John".to_string(),
            "john@example.com".to_string(),
            "hash".to_string(),
        );

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_default_preferences_shape() {
        let prefs = UserPreferences::default();
        let value = serde_json::to_value(&prefs).unwrap();

        assert_eq!(value, serde_json::json!({ "budget": 0.0, "usage": "" }));
    }
}
