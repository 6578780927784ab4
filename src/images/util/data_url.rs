use regex::Regex;

lazy_static! {
    static ref DATA_URL_PREFIX: Regex = Regex::new(r"^data:[^,]*,").unwrap();
}

/// Strips a leading `data:<mime>;base64,` scheme so only the payload remains.
pub fn strip_data_url_prefix(data: &str) -> &str {
    let data = data.trim();

    match DATA_URL_PREFIX.find(data) {
        Some(prefix) => &data[prefix.end()..],
        None => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix() {
        assert_eq!(strip_data_url_prefix("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_url_prefix("data:,AAAA"), "AAAA");
    }

    #[test]
    fn test_leaves_raw_payload() {
        assert_eq!(strip_data_url_prefix("AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix(" iVBORw0KGgo= "), "iVBORw0KGgo=");
    }

    #[test]
    fn test_prefix_only_is_empty() {
        assert_eq!(strip_data_url_prefix("data:image/png;base64,"), "");
    }
}
