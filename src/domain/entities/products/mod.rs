//! Products Entity Module
//!
//! 상품 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 카테고리 태그 배열, 사양 맵, 이미지 목록을 포함하는
//! Product 엔티티를 포함합니다.

pub mod product;
