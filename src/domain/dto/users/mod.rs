//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                  # 클라이언트 → 서버 요청 DTO
//! │   ├── auth_request.rs       # 로그인/회원가입 요청
//! │   └── update_user.rs        # 프로필 수정 요청
//! └── response/                 # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs      # 공개 사용자/로그인/회원가입 응답
//! ```
//!
//! ## 설계 노트
//!
//! 로그인/회원가입 요청의 필드는 모두 `Option`입니다. 누락된 필드를
//! 역직렬화 단계에서 거부하면 프론트엔드 계약인
//! `"Email and password are required"` / `"All fields are required"`
//! 메시지를 만들 수 없으므로, 존재 검사는 서비스 계층에서 순서대로
//! 수행합니다.

pub mod request;
pub mod response;
