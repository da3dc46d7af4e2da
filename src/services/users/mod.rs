//! 사용자 관련 서비스 모듈

pub mod user_service;
