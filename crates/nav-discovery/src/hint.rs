//! Hint extraction from route names.
//!
//! `decree_list` with keyword `list` yields the hint `decree`.

/// Keywords too generic to name an entity type on their own.
pub const GENERIC_KEYWORDS: [&str; 4] = ["list", "index", "view", "page"];

/// The keyword a route name matched and what is left after removing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHint {
    pub keyword: String,
    /// Empty when the route name is nothing but the keyword and separators.
    pub hint: String,
}

/// Find the first configured keyword contained in `route_name` (case-insensitive)
/// and strip it to produce a hint.
///
/// Only the first matching keyword, in configured order, is considered.
/// Removal of `_kw`, `-kw` and bare `kw` is case-sensitive; leading and
/// trailing `_`/`-` are trimmed afterwards.
#[must_use]
pub fn extract_hint(route_name: &str, keyword_tokens: &[String]) -> Option<RouteHint> {
    let lowered = route_name.to_lowercase();
    let keyword = keyword_tokens
        .iter()
        .find(|token| !token.is_empty() && lowered.contains(&token.to_lowercase()))?;

    let stripped = route_name
        .replace(&format!("_{keyword}"), "")
        .replace(&format!("-{keyword}"), "")
        .replace(keyword.as_str(), "");

    Some(RouteHint {
        keyword: keyword.clone(),
        hint: stripped.trim_matches(['_', '-']).to_string(),
    })
}

/// Generic keywords are never tried as entity names themselves.
#[must_use]
pub fn is_generic_keyword(keyword: &str) -> bool {
    GENERIC_KEYWORDS
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("decree_list", "decree")]
    #[case("decree-list", "decree")]
    #[case("list_decrees", "decrees")]
    #[case("decreelist", "decree")]
    #[case("list", "")]
    #[case("_list_", "")]
    #[case("old_decree_list", "old_decree")]
    fn strips_keyword_and_separators(#[case] route: &str, #[case] expected: &str) {
        let hint = extract_hint(route, &tokens(&["list"])).expect("keyword present");
        assert_eq!(hint.keyword, "list");
        assert_eq!(hint.hint, expected);
    }

    #[rstest]
    #[case("publications")]
    #[case("login")]
    #[case("")]
    #[case("user_detail")]
    fn routes_without_keyword_yield_none(#[case] route: &str) {
        assert_eq!(extract_hint(route, &tokens(&["list", "index"])), None);
    }

    #[test]
    fn containment_is_case_insensitive_but_removal_is_not() {
        let hint = extract_hint("Decree_LIST", &tokens(&["list"])).expect("contains LIST");
        assert_eq!(hint.hint, "Decree_LIST");
    }

    #[test]
    fn first_configured_keyword_wins() {
        let hint = extract_hint("tag_index_list", &tokens(&["index", "list"])).unwrap();
        assert_eq!(hint.keyword, "index");
        assert_eq!(hint.hint, "tag_list");
    }

    #[test]
    fn empty_tokens_never_match() {
        assert_eq!(extract_hint("decree_list", &tokens(&[""])), None);
    }

    #[test]
    fn generic_keywords_are_recognized() {
        assert!(is_generic_keyword("list"));
        assert!(is_generic_keyword("Page"));
        assert!(!is_generic_keyword("reports"));
    }
}
