//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 데이터와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 문서와 매핑)
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB 컬렉션과 1:1로 대응되는 영속 가능한 객체들입니다.
//! `users` 컬렉션의 [`User`](entities::users::user::User)와
//! `products` 컬렉션의 [`Product`](entities::products::product::Product)를 포함합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 요청/응답의 계약을 정의합니다. 응답 DTO는 민감 정보
//! (비밀번호 해시)를 구조적으로 제외하며, 프론트엔드가 기대하는
//! 정확한 JSON 형태를 보장합니다.

pub mod entities;
pub mod dto;
