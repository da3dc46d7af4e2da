//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 회원가입/프로필 수정 시 입력값 정리와 이메일 형식 검증에 사용됩니다.

/// 문자열 정리 (trim 후 반환)
///
/// 단순히 앞뒤 공백을 제거합니다.
///
/// # 인자
/// * `value` - 정리할 문자열
///
/// # 반환값
/// * 앞뒤 공백이 제거된 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::trim_string;
///
/// assert_eq!(trim_string("  Hello World  "), "Hello World");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 형식 검증
///
/// 회원가입 시 사용하는 단순한 `local@domain.tld` 형태 검증입니다.
/// 공백과 `@`를 포함하지 않는 로컬 파트, `@` 하나, 점을 포함하는 도메인
/// 파트를 요구합니다. RFC 전체를 검증하지 않습니다.
///
/// # 인자
/// * `email` - 검증할 이메일 주소
///
/// # 반환값
/// * `true` - 형식이 유효한 경우
/// * `false` - 형식이 유효하지 않은 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_email_format;
///
/// assert!(is_valid_email_format("user@example.com"));
/// assert!(!is_valid_email_format("user@example"));
/// assert!(!is_valid_email_format("not-an-email"));
/// ```
pub fn is_valid_email_format(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');

    let local = match parts.next() {
        Some(l) => l,
        None => return false,
    };
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };

    let valid_part = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace) && !s.contains('@');

    // 도메인은 점으로 구분된 두 부분 이상이어야 함 (domain.tld)
    let valid_domain = || {
        let mut labels = domain.split('.');
        let has_dot = domain.contains('.');
        has_dot && labels.all(|label| !label.is_empty())
    };

    valid_part(local) && valid_part(domain) && valid_domain()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("Hello"), "Hello");
        assert_eq!(trim_string("  World  "), "World");
        assert_eq!(trim_string("\t\n"), "");
    }

    #[test]
    fn test_valid_email_formats() {
        assert!(is_valid_email_format("user@example.com"));
        assert!(is_valid_email_format("first.last@sub.example.co"));
        assert!(is_valid_email_format("a@b.c"));
    }

    #[test]
    fn test_invalid_email_formats() {
        // @ 없음
        assert!(!is_valid_email_format("not-an-email"));
        // 도메인에 점 없음
        assert!(!is_valid_email_format("user@example"));
        // 빈 로컬/도메인 파트
        assert!(!is_valid_email_format("@example.com"));
        assert!(!is_valid_email_format("user@"));
        // 공백 포함
        assert!(!is_valid_email_format("us er@example.com"));
        assert!(!is_valid_email_format("user@exa mple.com"));
        // 점이 끝에 붙은 도메인
        assert!(!is_valid_email_format("user@example."));
        assert!(!is_valid_email_format("user@.com"));
        // @ 두 개
        assert!(!is_valid_email_format("user@@example.com"));
    }
}
