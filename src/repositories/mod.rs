//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 애플리케이션 시작 시점에 명시적으로
//! 생성된 [`Database`](crate::db::Database) 핸들을 주입받아 동작합니다.
//!
//! # Features
//!
//! - 타입화된 쿼리 파라미터 → 필터/정렬/페이지네이션된 결과 셋 변환
//! - 컬렉션 단위 get/query/add/update 연산
//! - 명시적 생성자 기반 의존성 주입 (전역 싱글톤 없음)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod products;
