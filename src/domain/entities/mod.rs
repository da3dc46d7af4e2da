//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **직렬화/역직렬화**: BSON/JSON ↔ Rust 구조체 변환 지원
//!
//! ## 컬렉션 매핑
//!
//! | 엔티티 | 컬렉션 | 식별자 |
//! |--------|--------|--------|
//! | [`users::user::User`] | `users` | 스토어가 할당한 ObjectId |
//! | [`products::product::Product`] | `products` | 스토어가 할당한 ObjectId |
//!
//! 타임스탬프 필드(`createdAt`/`updatedAt`)는 원본 스토어 포맷과 동일하게
//! RFC 3339 문자열로 저장됩니다. `newest` 정렬이 `createdAt`의 사전순
//! 정렬에 의존하므로 이 포맷을 유지해야 합니다.

pub mod users;
pub mod products;
