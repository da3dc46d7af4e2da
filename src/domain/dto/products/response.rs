//! 상품 응답 DTO
//!
//! 목록/카테고리/추천 응답의 정확한 JSON 형태를 정의합니다.
//!
//! ## 조건부 `filters` 키
//!
//! 목록 응답의 `filters.categories` 키는 카테고리 필터가 실제로 적용된
//! 경우에만 존재합니다. 필터가 없을 때 `null`이나 빈 객체를 넣는 것이
//! 아니라 키 자체를 생략해야 합니다 — 특정 프론트엔드와의 호환 요구사항.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::entities::products::product::Product;

/// 상품 응답 DTO
///
/// 엔티티의 ObjectId를 16진수 문자열 `id`로 변환한 형태입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub category: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub specs: HashMap<String, String>,
    pub images: Vec<String>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let id = product.id_string().unwrap_or_default();
        let Product {
            category,
            description,
            discount,
            name,
            price,
            rating,
            specs,
            images,
            stock,
            usage,
            created_at,
            ..
        } = product;

        Self {
            id,
            category,
            description,
            discount,
            name,
            price,
            rating,
            specs,
            images,
            stock,
            usage,
            created_at,
        }
    }
}

/// 적용된 필터 정보 (목록 응답의 `filters` 키)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub categories: Vec<String>,
}

/// 상품 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    /// 카테고리 필터가 적용된 경우에만 존재
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<AppliedFilters>,
}

/// 카테고리 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub total: usize,
}

/// 추천 응답 DTO
///
/// 상품이 없는 스토어에서는 `total` 키 없이 빈 목록과 메시지만
/// 반환됩니다 (원본 계약).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ProductResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product_response() -> ProductResponse {
        ProductResponse {
            id: "abc123".to_string(),
            category: vec!["laptops".to_string()],
            description: "A laptop".to_string(),
            discount: None,
            name: "Laptop".to_string(),
            price: 999.0,
            rating: 4.5,
            specs: HashMap::new(),
            images: vec![],
            stock: 3,
            usage: None,
            created_at: None,
        }
    }

    #[test]
    fn test_filters_key_omitted_without_categories() {
        let response = ProductListResponse {
            products: vec![sample_product_response()],
            total: 1,
            page: 1,
            limit: 10,
            filters: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("filters").is_none());
        assert_eq!(value["total"], 1);
        assert_eq!(value["page"], 1);
        assert_eq!(value["limit"], 10);
    }

    #[test]
    fn test_filters_key_present_with_categories() {
        let response = ProductListResponse {
            products: vec![],
            total: 0,
            page: 1,
            limit: 10,
            filters: Some(AppliedFilters {
                categories: vec!["laptops".to_string()],
            }),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value["filters"],
            serde_json::json!({ "categories": ["laptops"] })
        );
    }

    #[test]
    fn test_recommendations_total_omitted_when_empty() {
        let response = RecommendationsResponse {
            recommendations: vec![],
            total: None,
            message: "No products available for recommendations".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("total").is_none());
        assert_eq!(value["recommendations"], serde_json::json!([]));
    }
}
