//! # User Management HTTP Handlers
//!
//! 사용자 프로필 조회/수정과 사용자 목록 엔드포인트를 처리하는
//! 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 상태 코드 |
//! |--------|------|------|---------------|
//! | `GET` | `/users` | 전체 사용자 목록 | 200 OK |
//! | `GET` | `/users/{id}` | 프로필 조회 | 200 OK |
//! | `PUT` | `/users/{id}` | 프로필 부분 수정 | 200 OK |
//!
//! 모든 응답에서 비밀번호 해시는 DTO 타입에 필드가 없으므로
//! 어떤 경로로도 직렬화되지 않습니다.

use actix_web::{get, put, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::users::request::update_user::UpdateUserRequest;
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 프로필 조회
///
/// # 응답
///
/// * `200 OK` - `{"user": {...}}` 형태의 공개 사용자 정보
/// * `404 Not Found` - 사용자 없음 (잘못된 ID 형식 포함)
#[get("/{id}")]
pub async fn get_user_profile(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let response = service.get_profile(&id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 프로필 부분 수정
///
/// 본문에 `role`, `password_hash`, `createdAt`, `id`가 실려 와도
/// 요청 타입에 필드가 없으므로 반영되지 않습니다.
///
/// # 응답
///
/// * `200 OK` - `{"message": "Profile updated successfully"}`
/// * `400 Bad Request` - 필드 값 검증 실패
/// * `404 Not Found` - 사용자 없음
#[put("/{id}")]
pub async fn update_user_profile(
    service: web::Data<UserService>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.update_profile(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile updated successfully"
    })))
}

/// 전체 사용자 목록 조회
///
/// # 응답
///
/// * `200 OK` - `{"users": [...], "total": n}`
#[get("")]
pub async fn get_all_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = service.list_users().await?;

    Ok(HttpResponse::Ok().json(response))
}
