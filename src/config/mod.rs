//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 비밀번호 해싱 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 안전한 기본값
//!
//! - 민감한 설정은 환경 변수로만 제공
//! - 파싱 실패 시 환경별 기본값으로 폴백
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="4000"
//!
//! # 실행 환경
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 비밀번호 해싱 강도
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
