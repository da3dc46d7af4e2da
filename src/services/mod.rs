//! # 비즈니스 로직 서비스 계층
//!
//! 핸들러와 리포지토리 사이에서 도메인 규칙을 구현하는 계층입니다.
//! 각 서비스는 시작 시점에 명시적으로 생성되어 `web::Data`로
//! 핸들러에 주입됩니다.
//!
//! ## 계층 구조
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │            Handlers                 │
//! └──────────────────┬──────────────────┘
//!                    │
//! ┌──────────────────▼──────────────────┐
//! │            Services                 │
//! │  • UserService    (인증/프로필)     │
//! │  • ProductService (목록/추천)       │
//! │  • TokenService   (세션 토큰)       │
//! └──────────────────┬──────────────────┘
//!                    │
//! ┌──────────────────▼──────────────────┐
//! │          Repositories               │
//! └─────────────────────────────────────┘
//! ```

pub mod auth;
pub mod products;
pub mod users;
