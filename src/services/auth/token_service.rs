//! # 세션 토큰 발급 서비스
//!
//! 로그인 성공 시 클라이언트에 전달되는 불투명(opaque) 세션 토큰을
//! 발급합니다.
//!
//! ## 토큰 형식
//!
//! 토큰은 `{사용자ID}:{발급시각 밀리초}` 문자열의 base64 표준 인코딩입니다.
//!
//! ```text
//! base64("507f1f77bcf86cd799439011:1704067200000")
//! ```
//!
//! 서명이나 암호화가 없는 단순 식별 토큰이며, 서버는 이 토큰을
//! 검증하는 보호 라우트를 제공하지 않습니다 (기존 클라이언트 계약).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;

/// 세션 토큰 발급 서비스
///
/// 상태가 없는 서비스이지만 다른 서비스들과 동일하게 명시적으로
/// 생성되어 주입됩니다.
#[derive(Debug, Clone, Default)]
pub struct TokenService;

impl TokenService {
    /// 새 토큰 서비스 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 사용자 ID에 대한 세션 토큰 발급
    ///
    /// # 인자
    ///
    /// * `user_id` - 인증된 사용자의 ObjectId 16진수 문자열
    ///
    /// # 반환값
    ///
    /// `{user_id}:{현재시각 밀리초}`를 base64 인코딩한 토큰 문자열
    pub fn issue(&self, user_id: &str) -> String {
        let raw = format!("{}:{}", user_id, Utc::now().timestamp_millis());
        STANDARD.encode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decodes_to_id_and_millis() {
        let service = TokenService::new();
        let token = service.issue("507f1f77bcf86cd799439011");

        let decoded = STANDARD.decode(&token).unwrap();
        let decoded = String::from_utf8(decoded).unwrap();

        let (id, millis) = decoded.split_once(':').unwrap();
        assert_eq!(id, "507f1f77bcf86cd799439011");
        assert!(millis.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn test_tokens_are_valid_base64() {
        let service = TokenService::new();
        let token = service.issue("abc");

        assert!(STANDARD.decode(&token).is_ok());
    }
}
