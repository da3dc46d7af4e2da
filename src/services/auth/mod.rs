//! 인증 토큰 관련 서비스 모듈

pub mod token_service;
