//! 쇼핑 서비스 백엔드
//!
//! Rust 기반의 소규모 전자상거래 백엔드 서비스입니다.
//! 이메일/비밀번호 인증, 사용자 프로필 관리, 그리고
//! 필터/정렬/페이지네이션이 적용된 상품 카탈로그를 제공합니다.
//!
//! # Features
//!
//! - **인증**: 로그인/회원가입, bcrypt 비밀번호 해싱, 세션 토큰 발급
//! - **사용자 관리**: 프로필 조회/부분 수정, 사용자 목록
//! - **상품 카탈로그**: 카테고리 필터, 4종 정렬, offset 페이지네이션
//! - **추천/카테고리**: 무작위 상품 추천, 카테고리 태그 집계
//! - **MongoDB**: 사용자/상품 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # 의존성 구성
//!
//! 모든 서비스는 시작 시점에 명시적으로 생성됩니다. 데이터베이스
//! 핸들에서 리포지토리, 리포지토리에서 서비스 순서로 조립된 뒤
//! `web::Data`로 핸들러에 주입됩니다:
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new().await?);
//! let user_repo = Arc::new(UserRepository::new(database.clone()));
//! let user_service = web::Data::new(UserService::new(user_repo, TokenService::new()));
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
