//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었으며, 요청 파싱과
//! 응답 변환만 담당하고 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Frontend App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 모든 핸들러는 시작 시점에 `web::Data`로 등록된 서비스 인스턴스를
//! 주입받습니다:
//!
//! ```rust,ignore
//! #[post("/login")]
//! pub async fn login(
//!     service: web::Data<UserService>,
//!     payload: web::Json<LoginRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = service.login(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 서비스의 `AppError`를 `?`로 전파하기만 하면 되고,
//! 상태 코드와 `{"message": "..."}` 본문 변환은 `ResponseError`
//! 구현이 담당합니다.

pub mod auth;
pub mod products;
pub mod users;
