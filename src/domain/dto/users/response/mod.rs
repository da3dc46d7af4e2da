//! 사용자 응답 DTO 모듈
//!
//! 로그인, 회원가입, 프로필 조회 응답의 데이터 구조를 제공합니다.
//! 모든 응답 타입은 비밀번호 해시를 구조적으로 제외합니다.

pub mod user_response;

pub use user_response::{
    AuthenticatedUser, LoginResponse, PublicUser, RegisterResponse, UserListResponse,
    UserProfileResponse,
};
