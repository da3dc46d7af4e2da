//! # Data Transfer Objects Module
//!
//! HTTP 요청/응답의 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간 데이터 교환을 위한 계약을 정의하며,
//! 응답 DTO는 프론트엔드가 기대하는 정확한 JSON 형태를 보장합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/      # 로그인, 회원가입, 프로필 수정 요청
//! │   └── response/     # 로그인, 회원가입, 프로필 응답 (해시 제외)
//! └── products/
//!     ├── query.rs      # 쿼리 스트링 정규화 → PaginationParams
//!     └── response.rs   # 목록/카테고리/추천 응답 셰이핑
//! ```
//!
//! ## 응답 계약 주의사항
//!
//! - 상품 목록 응답의 `filters` 키는 카테고리 필터가 실제로 적용된
//!   경우에만 존재합니다 (null/빈 객체가 아니라 키 자체가 생략됨).
//! - 사용자 응답에는 `password_hash`가 구조적으로 포함될 수 없습니다.

pub mod users;
pub mod products;
