//! # 사용자 관리 서비스 구현
//!
//! 로그인, 회원가입, 프로필 조회/수정, 사용자 목록 조회의
//! 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │  Registration   │  │  Authentication │  │  Profile Mgmt   │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Field Checks  │  │ • Field Checks  │  │ • Partial Upd   │  │
//! │  │ • Password Ver  │  │ • Hash Compare  │  │ • Field Strip   │  │
//! │  │ • Email Format  │  │ • Uniform Error │  │ • updatedAt     │  │
//! │  │ • Duplicate Chk │  │ • Token Issue   │  │ • Entity→DTO    │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └────────────────────────────────┬────────────────────────────────┘
//!                                  │
//! ┌────────────────────────────────▼────────────────────────────────┐
//! │                        UserRepository                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 검증 순서 계약
//!
//! 회원가입 검증은 고정된 순서로 수행되며, 여러 문제가 동시에 있을 때
//! 순서상 앞선 검사의 메시지가 반환됩니다:
//!
//! 1. 필수 필드 존재 → `All fields are required`
//! 2. 비밀번호 일치 → `Passwords do not match`
//! 3. 비밀번호 길이 → `Password must be at least 6 characters long`
//! 4. 이메일 형식 → `Invalid email format`
//! 5. 이메일 중복 → `User with this email already exists` (409)
//!
//! ## 인증 보안
//!
//! 로그인 실패는 원인(계정 없음 vs 비밀번호 불일치)과 무관하게
//! 항상 동일한 401 `Invalid email or password`로 응답합니다.

use std::sync::Arc;

use bcrypt::hash;
use mongodb::bson::{to_bson, Document};
use validator::{Validate, ValidationErrors};

use crate::config::PasswordConfig;
use crate::domain::dto::users::request::auth_request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::request::update_user::UpdateUserRequest;
use crate::domain::dto::users::response::user_response::{
    LoginResponse, PublicUser, RegisterResponse, UserListResponse, UserProfileResponse,
};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::{is_valid_email_format, trim_string};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 시작 시점에 명시적으로 생성되어 `web::Data`로 핸들러에 주입됩니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
    /// 로그인 성공 시 세션 토큰 발급
    token_service: TokenService,
}

impl UserService {
    /// 새 서비스 인스턴스 생성
    pub fn new(user_repo: Arc<UserRepository>, token_service: TokenService) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// 로그인 처리
    ///
    /// # 인자
    ///
    /// * `request` - 이메일과 비밀번호를 담은 로그인 요청
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginResponse)` - 토큰과 사용자 정보 (최상위 id/role 중복 포함)
    /// * `Err(AppError::ValidationError)` - 이메일 또는 비밀번호 누락 (400)
    /// * `Err(AppError::AuthenticationError)` - 자격 증명 불일치 (401)
    ///
    /// # 보안
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 동일한 메시지로 응답하여
    /// 계정 존재 여부를 노출하지 않습니다. 해시 비교 자체가 실패하면
    /// (손상된 해시 등) 401이 아니라 500으로 처리됩니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let (email, password) = match (request.email, request.password) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
            _ => {
                log::debug!("로그인 요청에 이메일 또는 비밀번호 누락");
                return Err(AppError::ValidationError(
                    "Email and password are required".to_string(),
                ));
            }
        };

        log::info!("로그인 시도: {}", email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                log::debug!("로그인 실패 - 사용자 없음: {}", email);
                AppError::AuthenticationError("Invalid email or password".to_string())
            })?;

        let is_valid = bcrypt::verify(&password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::debug!("로그인 실패 - 비밀번호 불일치: {}", email);
            return Err(AppError::AuthenticationError(
                "Invalid email or password".to_string(),
            ));
        }

        let user_id = user.id_string().unwrap_or_default();
        let token = self.token_service.issue(&user_id);

        log::info!("로그인 성공: {}", email);
        Ok(LoginResponse::new(user, token))
    }

    /// 회원가입 처리
    ///
    /// 모듈 문서에 기술된 고정 순서로 검증을 수행한 뒤, 이름은 trim,
    /// 이메일은 소문자/trim 정규화하여 저장합니다. 역할은 요청 내용과
    /// 무관하게 항상 `user`입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(RegisterResponse)` - 생성된 사용자의 공개 필드 (201용)
    /// * `Err(AppError::ValidationError)` - 검증 실패 (400)
    /// * `Err(AppError::ConflictError)` - 이메일 중복 (409)
    ///
    /// # 알려진 공백
    ///
    /// 이메일 유일성은 삽입 전 조회로만 보장되므로 동일 이메일의 동시
    /// 가입 경합에서는 중복 문서가 생길 수 있습니다.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let (name, email, password) = validate_registration(request)?;

        log::info!("회원가입 시도: {}", email);

        // 저장 형태와 동일하게 정규화한 뒤 중복 검사
        let email = email.trim().to_lowercase();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::debug!("회원가입 거부 - 이메일 중복: {}", email);
            return Err(AppError::ConflictError(
                "User with this email already exists".to_string(),
            ));
        }

        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        let password_hash = hash(&password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = User::new_registered(trim_string(&name), email.clone(), password_hash);

        let id = self.user_repo.create(&user).await?;

        // 스토어에 저장된 형태 그대로 응답 (할당된 ID 포함)
        let created = self.user_repo.find_by_id(&id).await?.ok_or_else(|| {
            AppError::InternalError("생성된 사용자를 재조회할 수 없습니다".to_string())
        })?;

        log::info!("회원가입 성공: {} (ID: {})", email, id);
        Ok(RegisterResponse::from(created))
    }

    /// 프로필 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserProfileResponse)` - `user` 키로 감싼 공개 사용자 정보
    /// * `Err(AppError::NotFound)` - 사용자 없음 또는 잘못된 ID 형식 (404)
    pub async fn get_profile(&self, id: &str) -> AppResult<UserProfileResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserProfileResponse {
            user: PublicUser::from(user),
        })
    }

    /// 프로필 부분 수정
    ///
    /// 타입에 존재하는 필드(name/email/preferences)만 반영되며,
    /// `updatedAt`은 요청 본문과 무관하게 항상 현재 시각으로 갱신됩니다.
    /// 빈 본문도 유효한 요청이며 `updatedAt`만 갱신합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 수정 성공
    /// * `Err(AppError::ValidationError)` - 필드 값 검증 실패 (400)
    /// * `Err(AppError::NotFound)` - 사용자 없음 (404)
    pub async fn update_profile(&self, id: &str, request: UpdateUserRequest) -> AppResult<()> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(first_validation_message(&e)))?;

        let mut update = Document::new();

        if let Some(name) = request.name {
            update.insert("name", name);
        }
        if let Some(email) = request.email {
            update.insert("email", email);
        }
        if let Some(preferences) = request.preferences {
            let value = to_bson(&preferences)
                .map_err(|e| AppError::InternalError(format!("preferences 직렬화 실패: {}", e)))?;
            update.insert("preferences", value);
        }
        update.insert("updatedAt", User::now_timestamp());

        let updated = self.user_repo.update(id, update).await?;

        if !updated {
            log::debug!("프로필 수정 실패 - 사용자 없음: {}", id);
            return Err(AppError::NotFound(
                "User not found or update failed".to_string(),
            ));
        }

        log::info!("프로필 수정 완료: {}", id);
        Ok(())
    }

    /// 전체 사용자 목록 조회
    ///
    /// 각 사용자에서 비밀번호 해시를 제거한 공개 형태로 반환합니다.
    pub async fn list_users(&self) -> AppResult<UserListResponse> {
        let users = self.user_repo.find_all().await?;

        let users: Vec<PublicUser> = users.into_iter().map(PublicUser::from).collect();
        let total = users.len();

        log::debug!("사용자 목록 조회됨 - total: {}", total);
        Ok(UserListResponse { users, total })
    }
}

/// 회원가입 요청 검증
///
/// 모듈 문서에 기술된 고정 순서로 검사하고, 통과하면 원본 입력값
/// (name, email, password)을 반환합니다. 정규화는 호출자의 책임입니다.
fn validate_registration(request: RegisterRequest) -> AppResult<(String, String, String)> {
    let (name, email, password, confirm_password) = match (
        request.name,
        request.email,
        request.password,
        request.confirm_password,
    ) {
        (Some(n), Some(e), Some(p), Some(c))
            if !n.is_empty() && !e.is_empty() && !p.is_empty() && !c.is_empty() =>
        {
            (n, e, p, c)
        }
        _ => {
            return Err(AppError::ValidationError(
                "All fields are required".to_string(),
            ));
        }
    };

    if password != confirm_password {
        return Err(AppError::ValidationError(
            "Passwords do not match".to_string(),
        ));
    }

    if password.chars().count() < 6 {
        return Err(AppError::ValidationError(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    if !is_valid_email_format(&email) {
        return Err(AppError::ValidationError(
            "Invalid email format".to_string(),
        ));
    }

    Ok((name, email, password))
}

/// validator 에러에서 첫 번째 필드 메시지 추출
///
/// 클라이언트 계약상 에러 본문은 단일 `message` 문자열이므로
/// 여러 검증 실패 중 하나만 전달합니다.
fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(json: &str) -> RegisterRequest {
        serde_json::from_str(json).unwrap()
    }

    fn validation_message(request: RegisterRequest) -> String {
        match validate_registration(request) {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("검증 에러가 아님: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_register_missing_field_message() {
        let request = register_request(r#"{"email":"a@b.com","password":"secret1"}"#);
        assert_eq!(validation_message(request), "All fields are required");

        // 빈 문자열도 누락으로 취급
        let request = register_request(
            r#"{"name":"","email":"a@b.com","password":"secret1","confirmPassword":"secret1"}"#,
        );
        assert_eq!(validation_message(request), "All fields are required");
    }

    #[test]
    fn test_register_password_mismatch_message() {
        let request = register_request(
            r#"{"name":"John","email":"a@b.com","password":"secret1","confirmPassword":"secret2"}"#,
        );
        assert_eq!(validation_message(request), "Passwords do not match");
    }

    #[test]
    fn test_register_short_password_message() {
        let request = register_request(
            r#"{"name":"John","email":"a@b.com","password":"five5","confirmPassword":"five5"}"#,
        );
        assert_eq!(
            validation_message(request),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_register_invalid_email_message() {
        let request = register_request(
            r#"{"name":"John","email":"not-an-email","password":"secret1","confirmPassword":"secret1"}"#,
        );
        assert_eq!(validation_message(request), "Invalid email format");
    }

    #[test]
    fn test_register_check_order_mismatch_before_length() {
        // 비밀번호가 짧으면서 동시에 불일치하면 불일치 메시지가 우선
        let request = register_request(
            r#"{"name":"John","email":"a@b.com","password":"abc","confirmPassword":"def"}"#,
        );
        assert_eq!(validation_message(request), "Passwords do not match");
    }

    #[test]
    fn test_register_valid_request_passes() {
        let request = register_request(
            r#"{"name":"John","email":"john@example.com","password":"secret1","confirmPassword":"secret1"}"#,
        );

        let (name, email, password) = validate_registration(request).unwrap();
        assert_eq!(name, "John");
        assert_eq!(email, "john@example.com");
        assert_eq!(password, "secret1");
    }

    #[test]
    fn test_first_validation_message_extracts_field_message() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"email":"not-an-email"}"#).unwrap();
        let errors = request.validate().unwrap_err();

        assert_eq!(first_validation_message(&errors), "Invalid email format");
    }

    #[test]
    fn test_valid_update_request_passes_validation() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"name":"New Name","email":"new@example.com"}"#).unwrap();

        assert!(request.validate().is_ok());
    }
}
