//! # Product HTTP Handlers
//!
//! 상품 목록/상세/카테고리/추천 엔드포인트를 처리하는 핸들러
//! 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/products` | 필터/정렬/페이지네이션 목록 |
//! | `GET` | `/products/categories` | 전체 카테고리 태그 |
//! | `GET` | `/products/recommendations` | 무작위 추천 |
//! | `GET` | `/products/{id}` | 상품 상세 |
//!
//! `/recommendations`는 루트 경로로도 등록됩니다 (별칭).
//!
//! ## 쿼리 문자열 파싱
//!
//! 목록 핸들러는 `categories[]` 같은 대괄호 키와 반복 키를 다뤄야
//! 하므로 프레임워크 추출기 대신 원시 쿼리 문자열을
//! [`PaginationParams::from_query_str`]로 직접 정규화합니다.
//! 비정상 값은 에러가 아니라 기본값(page=1, limit=10)으로
//! 처리됩니다.

use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::domain::dto::products::query::PaginationParams;
use crate::errors::errors::AppError;
use crate::services::products::product_service::ProductService;

/// 상품 목록 조회
///
/// # 쿼리 파라미터
///
/// * `page` - 1 기반 페이지 번호 (기본값 1)
/// * `limit` - 페이지 크기 (기본값 10)
/// * `sort` - `best_rating` | `newest` | `price_low_to_high` | `price_high_to_low`
/// * `categories[]` 또는 `categories` - 카테고리 필터 (반복 가능)
///
/// # 응답
///
/// * `200 OK` - `{"products": [...], "total": n, "page": p, "limit": l}`,
///   필터가 적용된 경우에만 `filters.categories` 키 포함
#[get("")]
pub async fn get_all_products(
    service: web::Data<ProductService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = PaginationParams::from_query_str(req.query_string());
    let response = service.list_products(params).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 상품 상세 조회
///
/// # 응답
///
/// * `200 OK` - 상품 정보
/// * `404 Not Found` - 상품 없음 (잘못된 ID 형식 포함)
#[get("/{id}")]
pub async fn get_product(
    service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let response = service.get_product(&id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 카테고리 태그 조회
///
/// # 응답
///
/// * `200 OK` - `{"categories": [...], "total": n}` (오름차순 정렬)
#[get("/categories")]
pub async fn get_categories(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let response = service.get_categories().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 상품 추천 조회
///
/// 전체 상품 중 하나를 무작위로 선택해 반환합니다.
///
/// # 응답
///
/// * `200 OK` - `{"recommendations": [...], "total": 1, "message": "..."}`,
///   상품이 없으면 `total` 키 없이 빈 목록과 안내 메시지
#[get("/recommendations")]
pub async fn get_recommendations(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let response = service.get_recommendations().await?;

    Ok(HttpResponse::Ok().json(response))
}
