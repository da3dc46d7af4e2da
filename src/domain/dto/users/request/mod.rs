//! 사용자 요청 DTO 모듈
//!
//! 로그인, 회원가입, 프로필 수정 요청의 데이터 구조를 제공합니다.

pub mod auth_request;
pub mod update_user;

pub use auth_request::{LoginRequest, RegisterRequest};
pub use update_user::UpdateUserRequest;
