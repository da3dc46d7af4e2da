//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리 및 이메일 형식 검증 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{trim_string, is_valid_email_format};
//!
//! let name = trim_string("  John  ");
//! assert!(is_valid_email_format("john@example.com"));
//! ```

pub mod string_utils;
