//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 이메일/비밀번호 기반 인증과 프로필 관리를 지원하는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 신규 사용자 생성 (역할은 항상 "user"로 고정)
//! let user = User::new_registered(
//!     "John Doe".to_string(),
//!     "john@example.com".to_string(),
//!     hashed_password,
//! );
//! ```

pub mod user;
