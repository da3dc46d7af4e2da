//! # Product Data Transfer Objects Module
//!
//! 상품 목록 API의 쿼리 정규화와 응답 셰이핑을 담당하는 모듈입니다.
//!
//! - [`query`] - 원시 쿼리 스트링 → 타입화된 [`PaginationParams`](query::PaginationParams)
//! - [`response`] - 목록/카테고리/추천 응답 DTO (조건부 `filters` 키 포함)

pub mod query;
pub mod response;

pub use query::{PaginationParams, SortKey};
pub use response::{
    AppliedFilters, CategoriesResponse, ProductListResponse, ProductResponse,
    RecommendationsResponse,
};
