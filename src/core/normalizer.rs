use crate::domain::model::UsernameSet;
use url::Url;

/// Reduce a raw form value to a bare GitHub handle.
///
/// Accepts a profile URL (`https://github.com/alice`), an `@alice` mention or a
/// plain `alice`. Nothing beyond that is checked; a malformed handle simply
/// fails to resolve later.
pub fn normalize_username(raw: &str) -> String {
    let value = raw.trim();

    if let Some(segment) = profile_url_handle(value) {
        return segment;
    }

    match value.strip_prefix('@') {
        Some(rest) => rest.to_string(),
        None => value.to_string(),
    }
}

fn profile_url_handle(value: &str) -> Option<String> {
    let url = Url::parse(value).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }

    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// Normalize every raw value into one set; blank cells are dropped.
pub fn collect_usernames<I, S>(raw_values: I) -> UsernameSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut usernames = UsernameSet::new();
    for raw in raw_values {
        let handle = normalize_username(raw.as_ref());
        if handle.is_empty() {
            tracing::warn!("Skipping empty username value {:?}", raw.as_ref());
            continue;
        }
        if !usernames.insert(handle.clone()) {
            tracing::debug!("Duplicate submission for {}", handle);
        }
    }
    usernames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_yields_last_segment() {
        assert_eq!(normalize_username("https://github.com/alice"), "alice");
        assert_eq!(normalize_username("http://www.github.com/Bob-Smith"), "Bob-Smith");
        assert_eq!(normalize_username("  https://github.com/carol  "), "carol");
    }

    #[test]
    fn test_profile_url_ignores_trailing_slash_and_query() {
        assert_eq!(normalize_username("https://github.com/alice/"), "alice");
        assert_eq!(normalize_username("https://github.com/alice?tab=repositories"), "alice");
    }

    #[test]
    fn test_url_without_path_falls_back_to_value() {
        assert_eq!(normalize_username("https://github.com"), "https://github.com");
    }

    #[test]
    fn test_at_prefix_stripped_once() {
        assert_eq!(normalize_username("@alice"), "alice");
        assert_eq!(normalize_username("@@alice"), "@alice");
        assert_eq!(normalize_username(" @dave "), "dave");
    }

    #[test]
    fn test_plain_value_is_trimmed() {
        assert_eq!(normalize_username("  erin\t"), "erin");
        assert_eq!(normalize_username("frank"), "frank");
        assert_eq!(normalize_username("not a url"), "not a url");
    }

    #[test]
    fn test_non_http_scheme_is_not_a_profile_url() {
        assert_eq!(normalize_username("mailto:alice"), "mailto:alice");
    }

    #[test]
    fn test_collect_deduplicates_across_shapes() {
        let usernames = collect_usernames(["alice", "https://github.com/alice", "@alice"]);
        assert_eq!(usernames.len(), 1);
        assert!(usernames.contains("alice"));
    }

    #[test]
    fn test_collect_skips_blank_cells() {
        let usernames = collect_usernames(["", "   ", "@", "bob"]);
        assert_eq!(usernames.into_vec(), vec!["bob".to_string()]);
    }
}
