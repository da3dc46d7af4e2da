//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 상품 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # 라우트 테이블
//!
//! ## 루트 별칭 (기존 프론트엔드 호환)
//! - `POST /login` - 로그인
//! - `POST /register` - 회원가입
//! - `GET /recommendations` - 상품 추천
//!
//! ## 상품
//! - `GET /products` - 목록 (필터/정렬/페이지네이션)
//! - `GET /products/categories` - 카테고리 태그
//! - `GET /products/recommendations` - 추천
//! - `GET /products/{id}` - 상세
//!
//! ## 사용자
//! - `POST /users/login`, `POST /users/register` - 인증 별칭
//! - `GET /users` - 목록
//! - `GET /users/{id}` - 프로필 조회
//! - `PUT /users/{id}` - 프로필 수정
//!
//! ## 기타
//! - `GET /` - 환영 메시지
//! - `GET /health` - 헬스체크
//!
//! # 매칭 순서 주의
//!
//! `/products/{id}`는 `/products/categories`,
//! `/products/recommendations`보다 나중에 등록되어야 합니다.
//! 경로 변수가 리터럴 세그먼트를 가리면 안 되기 때문입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 루트 레벨 엔드포인트
    cfg.service(welcome);
    cfg.service(health_check);

    // 루트 별칭 (기존 프론트엔드 호환)
    cfg.service(handlers::auth::login);
    cfg.service(handlers::auth::register);
    cfg.service(handlers::products::get_recommendations);

    // 기능별 라우트
    configure_product_routes(cfg);
    configure_user_routes(cfg);
}

/// 상품 관련 라우트를 설정합니다
///
/// 리터럴 경로(`/categories`, `/recommendations`)를 경로 변수
/// (`/{id}`)보다 먼저 등록합니다.
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .service(handlers::products::get_recommendations)
            .service(handlers::products::get_categories)
            .service(handlers::products::get_all_products)
            .service(handlers::products::get_product),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 인증 별칭(`/users/login`, `/users/register`)과 프로필 CRUD를
/// 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            // 인증 별칭
            .service(handlers::auth::login)
            .service(handlers::auth::register)
            // 사용자 관리
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user_profile)
            .service(handlers::users::update_user_profile),
    );
}

/// 환영 메시지 엔드포인트
///
/// 프론트엔드/배포 확인용 단순 텍스트 응답입니다.
#[get("/")]
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the E-commerce Backend!")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데
/// 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:4000/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "shop_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
