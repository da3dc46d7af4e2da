//! 사용자 응답 DTO
//!
//! 로그인/회원가입/프로필 응답의 정확한 JSON 형태를 정의합니다.
//! 엔티티에서 DTO로의 변환 시 `password_hash`는 타입에 필드가
//! 없으므로 어떤 경로로도 직렬화될 수 없습니다.
//!
//! ## 프론트엔드 호환 계약
//!
//! - 로그인 응답은 `user` 객체 외에 최상위에 `id`와 `role`을 중복으로
//!   포함합니다 (기존 프론트엔드 호환).
//! - 로그인/회원가입 응답의 `preferences`는 값이 없는 사용자에게
//!   `{budget: 0, usage: ""}` 기본값으로 채워집니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{User, UserPreferences, UserRole};

/// 공개 사용자 정보 (프로필/목록 조회용)
///
/// 엔티티에서 비밀번호 해시만 제거한 형태입니다. `preferences`는
/// 저장된 값 그대로이며, 없으면 키가 생략됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            name,
            email,
            role,
            created_at,
            updated_at,
            preferences,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            role,
            created_at,
            updated_at,
            preferences,
        }
    }
}

/// 로그인 응답에 포함되는 사용자 정보
///
/// [`PublicUser`]와 달리 `preferences`가 항상 존재합니다
/// (값이 없으면 기본값으로 대체).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub preferences: UserPreferences,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            name,
            email,
            role,
            created_at,
            updated_at,
            preferences,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            role,
            created_at,
            updated_at,
            preferences: preferences.unwrap_or_default(),
        }
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthenticatedUser,
    /// 최상위 중복 필드 (프론트엔드 호환)
    pub id: String,
    pub role: UserRole,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: User, token: String) -> Self {
        let authenticated = AuthenticatedUser::from(user);

        Self {
            token,
            id: authenticated.id.clone(),
            role: authenticated.role.clone(),
            user: authenticated,
        }
    }
}

/// 회원가입 응답 DTO
///
/// 생성된 사용자의 공개 필드를 최상위에 평탄화하여 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub preferences: UserPreferences,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub id: String,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            name,
            email,
            role,
            created_at,
            updated_at,
            preferences,
            ..
        } = user;

        Self {
            name,
            email,
            role,
            preferences: preferences.unwrap_or_default(),
            created_at,
            updated_at,
            id,
        }
    }
}

/// 프로필 조회 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub user: PublicUser,
}

/// 사용자 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<PublicUser>,
    pub total: usize,
}
