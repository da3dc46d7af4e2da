//! 상품 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`ProductRepository`](product_repo::ProductRepository)를 통해
//! 필터/정렬/페이지네이션 쿼리 구성과 `products` 컬렉션 조회를 제공합니다.

pub mod product_repo;
