//! 상품 관련 서비스 모듈

pub mod product_service;
