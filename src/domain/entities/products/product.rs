//! Product Entity Implementation
//!
//! 상품 엔티티의 핵심 구현체입니다. `products` 컬렉션의 문서와 매핑되며,
//! 카테고리 태그 배열(`category`)은 any-of 필터링의 대상이 되고
//! `rating`/`price`/`createdAt` 필드는 정렬 키로 사용됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 상품 엔티티
///
/// 문서 식별자는 스토어가 할당합니다. 스키마리스 스토어 특성상
/// 일부 필드가 없는 문서도 존재할 수 있어 컬렉션형 필드에는
/// `serde(default)`를 적용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 카테고리 태그 (순서 있는 문자열 배열, any-of 필터 대상)
    #[serde(default)]
    pub category: Vec<String>,
    /// 상품 설명
    #[serde(default)]
    pub description: String,
    /// 할인율 (없을 수 있음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// 상품명
    pub name: String,
    /// 가격 (정렬 키)
    pub price: f64,
    /// 평점 (정렬 키)
    #[serde(default)]
    pub rating: f64,
    /// 사양 (키-값 맵)
    #[serde(default)]
    pub specs: HashMap<String, String>,
    /// 이미지 URL 목록 (순서 유지)
    #[serde(default)]
    pub images: Vec<String>,
    /// 재고 수량
    #[serde(default)]
    pub stock: i64,
    /// 사용 목적 (없을 수 있음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// 생성 시간 (RFC 3339 문자열, `newest` 정렬 키)
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_sparse_document() {
        // 스토어에는 category/specs/images가 빠진 문서도 존재함
        let doc = serde_json::json!({
            "name": "Basic Mouse",
            "price": 19.99
        });

        let product: Product = serde_json::from_value(doc).unwrap();
        assert!(product.category.is_empty());
        assert!(product.specs.is_empty());
        assert_eq!(product.stock, 0);
        assert_eq!(product.rating, 0.0);
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let product = Product {
            id: None,
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
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("discount").is_none());
        assert!(value.get("usage").is_none());
        assert!(value.get("createdAt").is_none());
    }
}
