//! # 상품 리포지토리 구현
//!
//! 상품 목록의 필터/정렬/페이지네이션 쿼리 구성을 담당하는
//! 데이터 액세스 계층입니다. 이 저장소에서 가장 구조화된 로직이
//! 모여 있는 곳입니다.
//!
//! ## 쿼리 구성 계약
//!
//! 1. 카테고리 필터가 있으면 카운트 쿼리와 아이템 쿼리 **양쪽**에
//!    동일한 any-of 술어를 적용합니다. 두 쿼리는 하나의 필터 문서를
//!    공유하며, 페이지네이션/정렬만 다릅니다. 따라서 `total`은 항상
//!    `items`가 추출된 것과 같은 필터 집합의 개수입니다.
//! 2. 정렬 키는 최대 하나이며 고정된 enum → 필드 매핑을 따릅니다.
//!    없거나 인식되지 않으면 스토어 자연 순서입니다.
//! 3. 카운트를 먼저 실행하고, 0이면 두 번째 쿼리 없이 바로
//!    빈 결과를 반환합니다.
//! 4. 결과 범위를 넘는 오프셋은 빈 아이템 목록과 변하지 않은
//!    `total`을 냅니다.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::dto::products::query::{PaginationParams, SortKey};
use crate::domain::entities::products::product::Product;
use crate::errors::errors::AppError;

/// 컬렉션 이름
const COLLECTION_NAME: &str = "products";

/// 페이지 조회 결과
///
/// `total`은 요청된 페이지와 무관하게 필터 집합 전체의 개수입니다.
#[derive(Debug)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
}

/// 상품 데이터 액세스 리포지토리
pub struct ProductRepository {
    /// MongoDB 데이터베이스 연결 (시작 시점에 주입)
    db: Arc<Database>,
}

impl ProductRepository {
    /// 새 리포지토리 인스턴스 생성
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db
            .get_database()
            .collection::<Product>(COLLECTION_NAME)
    }

    /// ID로 상품 조회
    ///
    /// ObjectId 형식이 아닌 ID는 `Ok(None)`으로 처리됩니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => {
                log::debug!("유효하지 않은 상품 ID 형식: {}", id);
                return Ok(None);
            }
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 상품 조회 (추천/카테고리 집계용)
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터/정렬/페이지네이션이 적용된 상품 페이지 조회
    ///
    /// # 알고리즘
    ///
    /// 1. 하나의 필터 문서를 만들어 카운트와 아이템 쿼리에 공유
    /// 2. 카운트 먼저 실행, 0이면 즉시 빈 페이지 반환 (두 번째 쿼리 생략)
    /// 3. 정렬(최대 1개 키) + offset/limit을 적용한 아이템 쿼리 실행
    ///
    /// # 인자
    ///
    /// * `params` - 정규화된 페이지네이션 파라미터
    ///
    /// # 반환값
    ///
    /// * `Ok(ProductPage)` - 아이템 목록과 필터 집합 전체 개수
    /// * `Err(AppError::DatabaseError)` - 스토어 호출 실패
    pub async fn find_page(&self, params: &PaginationParams) -> Result<ProductPage, AppError> {
        // 카운트와 아이템 쿼리가 공유하는 단일 필터 문서
        let filter = category_filter(&params.categories).unwrap_or_default();

        log::debug!(
            "상품 페이지 쿼리 구성 - page: {}, limit: {}, offset: {}, filter: {:?}, sort: {:?}",
            params.page,
            params.limit,
            params.offset(),
            filter,
            params.sort
        );

        let total = self
            .collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 매칭 문서가 없으면 아이템 쿼리를 생략
        if total == 0 {
            return Ok(ProductPage {
                items: Vec::new(),
                total: 0,
            });
        }

        let collection = self.collection();
        let mut find = collection.find(filter);
        if let Some(sort) = sort_doc(params.sort) {
            find = find.sort(sort);
        }

        let cursor = find
            .skip(params.offset())
            .limit(params.limit as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let items: Vec<Product> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::debug!("상품 페이지 조회됨 - items: {}, total: {}", items.len(), total);

        Ok(ProductPage { items, total })
    }

    /// 전체 카테고리 태그 집계
    ///
    /// 각 상품의 태그 배열을 평탄화하고 중복을 제거한 뒤
    /// 오름차순으로 정렬하여 반환합니다.
    pub async fn categories(&self) -> Result<Vec<String>, AppError> {
        let products = self.find_all().await?;

        let set: BTreeSet<String> = products
            .into_iter()
            .flat_map(|p| p.category)
            .collect();

        Ok(set.into_iter().collect())
    }
}

/// 카테고리 any-of 필터 문서 구성
///
/// 태그 배열 필드(`category`)가 주어진 후보 태그 집합과 교집합을 갖는
/// 문서를 매칭합니다. 빈 후보 집합은 필터 없음입니다.
fn category_filter(categories: &[String]) -> Option<Document> {
    if categories.is_empty() {
        return None;
    }

    Some(doc! { "category": { "$in": categories.to_vec() } })
}

/// 정렬 키 → 정렬 문서 매핑
///
/// 고정된 매핑만 존재합니다: `best_rating → rating desc`,
/// `newest → createdAt desc`, `price_low_to_high → price asc`,
/// `price_high_to_low → price desc`.
fn sort_doc(sort: Option<SortKey>) -> Option<Document> {
    match sort? {
        SortKey::BestRating => Some(doc! { "rating": -1 }),
        SortKey::Newest => Some(doc! { "createdAt": -1 }),
        SortKey::PriceLowToHigh => Some(doc! { "price": 1 }),
        SortKey::PriceHighToLow => Some(doc! { "price": -1 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_categories_produce_no_filter() {
        assert_eq!(category_filter(&[]), None);
    }

    #[test]
    fn test_category_filter_uses_any_of_predicate() {
        let categories = vec!["laptops".to_string(), "phones".to_string()];
        let filter = category_filter(&categories).unwrap();

        assert_eq!(
            filter,
            doc! { "category": { "$in": ["laptops", "phones"] } }
        );
    }

    #[test]
    fn test_count_and_item_queries_share_filter() {
        // 두 쿼리는 같은 빌더 출력에서 복제되므로 술어가 항상 동일함
        let categories = vec!["audio".to_string()];
        let filter = category_filter(&categories).unwrap_or_default();
        let count_filter = filter.clone();

        assert_eq!(filter, count_filter);
    }

    #[test]
    fn test_sort_mapping_is_fixed() {
        assert_eq!(
            sort_doc(Some(SortKey::BestRating)),
            Some(doc! { "rating": -1 })
        );
        assert_eq!(
            sort_doc(Some(SortKey::Newest)),
            Some(doc! { "createdAt": -1 })
        );
        assert_eq!(
            sort_doc(Some(SortKey::PriceLowToHigh)),
            Some(doc! { "price": 1 })
        );
        assert_eq!(
            sort_doc(Some(SortKey::PriceHighToLow)),
            Some(doc! { "price": -1 })
        );
    }

    #[test]
    fn test_absent_sort_means_natural_order() {
        assert_eq!(sort_doc(None), None);
    }
}
