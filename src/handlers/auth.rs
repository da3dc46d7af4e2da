//! # Authentication HTTP Handlers
//!
//! 로그인과 회원가입 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 상태 코드 |
//! |--------|------|------|---------------|
//! | `POST` | `/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `POST` | `/register` | 회원가입 | 201 Created |
//!
//! 두 핸들러 모두 `/users/login`, `/users/register` 경로로도
//! 등록됩니다 (기존 프론트엔드 호환 별칭).

use actix_web::{post, web, HttpResponse};

use crate::domain::dto::users::request::auth_request::{LoginRequest, RegisterRequest};
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 로그인 처리
///
/// # 요청 본문
///
/// ```json
/// { "email": "user@example.com", "password": "secret123" }
/// ```
///
/// # 응답
///
/// * `200 OK` - 토큰과 사용자 정보
/// * `400 Bad Request` - 이메일 또는 비밀번호 누락
/// * `401 Unauthorized` - 자격 증명 불일치
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 회원가입 처리
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "password": "secret123",
///   "confirmPassword": "secret123"
/// }
/// ```
///
/// 본문에 `role` 등 다른 필드가 포함되어 있어도 무시됩니다.
///
/// # 응답
///
/// * `201 Created` - 생성된 사용자의 공개 필드
/// * `400 Bad Request` - 필드 누락, 비밀번호 불일치/길이, 이메일 형식
/// * `409 Conflict` - 이메일 중복
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
