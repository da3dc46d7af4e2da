//! 애플리케이션 전역 에러 모듈
//!
//! 모든 계층에서 공유하는 [`AppError`](errors::AppError) 타입과
//! [`AppResult`](errors::AppResult) 별칭을 제공합니다.

pub mod errors;
