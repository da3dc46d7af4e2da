//! # 상품 서비스 구현
//!
//! 상품 목록/상세/카테고리/추천의 비즈니스 로직을 구현합니다.
//! 페이지네이션 쿼리 구성은 리포지토리가 담당하고, 이 계층은
//! 응답 형태 조립을 담당합니다.
//!
//! ## 응답 형태 규칙
//!
//! - 목록 응답의 `page`/`limit`은 실제 쿼리에 사용된 정규화 후의
//!   값을 그대로 에코합니다 (클라이언트가 보낸 원문이 아님).
//! - `filters` 키는 카테고리 필터가 적용된 경우에만 존재합니다.
//! - 범위를 벗어난 페이지는 빈 `products`와 변하지 않은 `total`로
//!   응답합니다 (에러 아님).

use std::sync::Arc;

use rand::Rng;

use crate::domain::dto::products::query::PaginationParams;
use crate::domain::dto::products::response::{
    AppliedFilters, CategoriesResponse, ProductListResponse, ProductResponse,
    RecommendationsResponse,
};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::products::product_repo::ProductRepository;

/// 상품 비즈니스 로직 서비스
pub struct ProductService {
    /// 상품 데이터 액세스 리포지토리
    product_repo: Arc<ProductRepository>,
}

impl ProductService {
    /// 새 서비스 인스턴스 생성
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// ID로 상품 상세 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(ProductResponse)` - 상품 정보
    /// * `Err(AppError::NotFound)` - 상품 없음 또는 잘못된 ID 형식 (404)
    pub async fn get_product(&self, id: &str) -> AppResult<ProductResponse> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        Ok(ProductResponse::from(product))
    }

    /// 필터/정렬/페이지네이션이 적용된 상품 목록 조회
    ///
    /// # 인자
    ///
    /// * `params` - 정규화된 페이지네이션 파라미터
    ///
    /// # 반환값
    ///
    /// 목록, 필터 집합 전체 개수, 에코된 page/limit, 그리고 필터가
    /// 적용된 경우에만 `filters` 키를 담은 응답
    pub async fn list_products(&self, params: PaginationParams) -> AppResult<ProductListResponse> {
        let page = self.product_repo.find_page(&params).await?;

        let products: Vec<ProductResponse> =
            page.items.into_iter().map(ProductResponse::from).collect();

        let filters = if params.has_category_filter() {
            Some(AppliedFilters {
                categories: params.categories.clone(),
            })
        } else {
            None
        };

        log::debug!(
            "상품 목록 응답 - products: {}, total: {}, page: {}, limit: {}",
            products.len(),
            page.total,
            params.page,
            params.limit
        );

        Ok(ProductListResponse {
            products,
            total: page.total,
            page: params.page,
            limit: params.limit,
            filters,
        })
    }

    /// 전체 카테고리 태그 목록 조회
    ///
    /// 모든 상품의 태그를 중복 제거하고 오름차순으로 정렬하여 반환합니다.
    pub async fn get_categories(&self) -> AppResult<CategoriesResponse> {
        let categories = self.product_repo.categories().await?;
        let total = categories.len();

        Ok(CategoriesResponse { categories, total })
    }

    /// 상품 추천 조회
    ///
    /// 전체 상품 중 하나를 무작위로 선택하여 반환합니다.
    /// 상품이 하나도 없으면 `total` 키 없이 빈 목록과 안내 메시지로
    /// 응답합니다.
    pub async fn get_recommendations(&self) -> AppResult<RecommendationsResponse> {
        let products = self.product_repo.find_all().await?;

        if products.is_empty() {
            return Ok(RecommendationsResponse {
                recommendations: Vec::new(),
                total: None,
                message: "No products available for recommendations".to_string(),
            });
        }

        let index = rand::thread_rng().gen_range(0..products.len());
        let picked = products.into_iter().nth(index).ok_or_else(|| {
            AppError::InternalError("추천 상품 인덱스가 범위를 벗어났습니다".to_string())
        })?;

        log::debug!("추천 상품 선택됨: {}", picked.id_string().unwrap_or_default());

        Ok(RecommendationsResponse {
            recommendations: vec![ProductResponse::from(picked)],
            total: Some(1),
            message: "Product recommendation based on your preferences".to_string(),
        })
    }
}
