//! 상품 목록 쿼리 정규화
//!
//! 원시 쿼리 스트링을 타입화된 페이지네이션 파라미터로 변환합니다.
//!
//! ## 정규화 규칙
//!
//! - `page`/`limit`: 정수로 파싱. 없거나 숫자가 아니거나 0 이하이면
//!   각각 1과 10으로 폴백합니다. 에러를 내지 않는 폴백 자체가 계약이므로
//!   "교정"하지 않습니다.
//! - 카테고리 필터: `categories[]` 또는 `categories` 키를 모두 허용.
//!   단일 값도 1개짜리 배열로 정규화하고, 반복된 값은 주어진 순서를
//!   유지합니다. 두 키가 동시에 오면 병합하지 않고 `categories[]`가
//!   우선합니다 (원본 쿼리 라이브러리의 동작 재현).
//! - `sort`: 알려진 네 가지 값만 정렬 키로 매핑하고, 그 외 값은 에러
//!   없이 자연 순서로 처리합니다.

use std::borrow::Cow;

/// 정렬 키
///
/// 각 값은 데이터 액세스 계층에서 단일 필드 정렬로 매핑됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// 평점 내림차순
    BestRating,
    /// 생성일 내림차순
    Newest,
    /// 가격 오름차순
    PriceLowToHigh,
    /// 가격 내림차순
    PriceHighToLow,
}

impl SortKey {
    /// 원시 정렬 파라미터를 정렬 키로 매핑
    ///
    /// 인식되지 않는 값은 `None` (자연 순서)입니다.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "best_rating" => Some(SortKey::BestRating),
            "newest" => Some(SortKey::Newest),
            "price_low_to_high" => Some(SortKey::PriceLowToHigh),
            "price_high_to_low" => Some(SortKey::PriceHighToLow),
            _ => None,
        }
    }
}

/// 타입화된 페이지네이션 파라미터
///
/// 불변식: `page >= 1`, `limit >= 1`, `offset == (page - 1) * limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<SortKey>,
    /// any-of 매칭 대상 카테고리 태그 (비어 있으면 필터 없음)
    pub categories: Vec<String>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort: None,
            categories: Vec::new(),
        }
    }
}

impl PaginationParams {
    /// 페이지네이션 오프셋 (파생값)
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// 카테고리 필터가 적용되는지 확인
    pub fn has_category_filter(&self) -> bool {
        !self.categories.is_empty()
    }

    /// 원시 쿼리 스트링에서 파라미터를 정규화
    ///
    /// # 인자
    ///
    /// * `query` - 물음표를 제외한 원시 쿼리 스트링
    ///   (예: `page=2&limit=5&categories[]=laptops&categories[]=phones`)
    pub fn from_query_str(query: &str) -> Self {
        let mut page_raw: Option<String> = None;
        let mut limit_raw: Option<String> = None;
        let mut sort_raw: Option<String> = None;
        let mut bracketed: Vec<String> = Vec::new();
        let mut bare: Vec<String> = Vec::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let mut kv = pair.splitn(2, '=');
            let key = decode_component(kv.next().unwrap_or(""));
            let value = decode_component(kv.next().unwrap_or(""));

            match key.as_str() {
                "page" => page_raw = Some(value),
                "limit" => limit_raw = Some(value),
                "sort" => sort_raw = Some(value),
                "categories[]" => bracketed.push(value),
                "categories" => bare.push(value),
                _ => {}
            }
        }

        // 두 키를 병합하지 않음: 대괄호 키가 있으면 그것만 사용
        let categories = if !bracketed.is_empty() { bracketed } else { bare };

        Self {
            page: parse_positive(page_raw.as_deref(), 1),
            limit: parse_positive(limit_raw.as_deref(), 10),
            sort: sort_raw.as_deref().and_then(SortKey::parse),
            categories,
        }
    }
}

/// 양의 정수 파싱, 실패 시 기본값
///
/// 없음/비숫자/0 이하 입력 모두 기본값으로 폴백합니다.
fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// 쿼리 스트링 구성 요소 퍼센트 디코딩
///
/// 폼 인코딩의 `+` 공백 표기도 처리합니다. 디코딩 불가능한 입력은
/// 원문 그대로 둡니다.
fn decode_component(raw: &str) -> String {
    let plus_decoded: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let params = PaginationParams::from_query_str("");

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort, None);
        assert!(params.categories.is_empty());
    }

    #[test]
    fn test_defaults_on_non_numeric_input() {
        let params = PaginationParams::from_query_str("page=abc&limit=ten");

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_defaults_on_non_positive_input() {
        let params = PaginationParams::from_query_str("page=0&limit=-5");

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_offset_derivation() {
        for (page, limit) in [(1u32, 10u32), (2, 10), (3, 7), (100, 1)] {
            let params =
                PaginationParams::from_query_str(&format!("page={}&limit={}", page, limit));
            assert_eq!(params.offset(), (page as u64 - 1) * limit as u64);
        }
    }

    #[test]
    fn test_single_bracketed_category_becomes_one_element_vec() {
        let params = PaginationParams::from_query_str("categories[]=laptops");

        assert_eq!(params.categories, vec!["laptops".to_string()]);
        assert!(params.has_category_filter());
    }

    #[test]
    fn test_single_bare_category_becomes_one_element_vec() {
        let params = PaginationParams::from_query_str("categories=laptops");

        assert_eq!(params.categories, vec!["laptops".to_string()]);
    }

    #[test]
    fn test_repeated_categories_preserve_order() {
        let params =
            PaginationParams::from_query_str("categories[]=phones&categories[]=laptops&categories[]=audio");

        assert_eq!(
            params.categories,
            vec!["phones".to_string(), "laptops".to_string(), "audio".to_string()]
        );
    }

    #[test]
    fn test_both_keys_never_merged_bracketed_wins() {
        let params =
            PaginationParams::from_query_str("categories=phones&categories[]=laptops");

        assert_eq!(params.categories, vec!["laptops".to_string()]);
    }

    #[test]
    fn test_percent_encoded_category() {
        let params = PaginationParams::from_query_str("categories%5B%5D=Smart%20Home");

        assert_eq!(params.categories, vec!["Smart Home".to_string()]);
    }

    #[test]
    fn test_plus_encoded_space() {
        let params = PaginationParams::from_query_str("categories[]=Smart+Home");

        assert_eq!(params.categories, vec!["Smart Home".to_string()]);
    }

    #[test]
    fn test_known_sort_values() {
        assert_eq!(SortKey::parse("best_rating"), Some(SortKey::BestRating));
        assert_eq!(SortKey::parse("newest"), Some(SortKey::Newest));
        assert_eq!(
            SortKey::parse("price_low_to_high"),
            Some(SortKey::PriceLowToHigh)
        );
        assert_eq!(
            SortKey::parse("price_high_to_low"),
            Some(SortKey::PriceHighToLow)
        );
    }

    #[test]
    fn test_unrecognized_sort_falls_through() {
        let params = PaginationParams::from_query_str("sort=alphabetical");

        assert_eq!(params.sort, None);
    }

    #[test]
    fn test_full_query() {
        let params = PaginationParams::from_query_str(
            "page=3&limit=5&sort=price_low_to_high&categories[]=laptops&categories[]=phones",
        );

        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 5);
        assert_eq!(params.offset(), 10);
        assert_eq!(params.sort, Some(SortKey::PriceLowToHigh));
        assert_eq!(
            params.categories,
            vec!["laptops".to_string(), "phones".to_string()]
        );
    }
}
