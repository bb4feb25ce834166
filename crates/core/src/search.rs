use crate::KEYWORD_PLACEHOLDER;

/// Form-urlencodes a search keyword (spaces become `+`).
pub fn encode_keyword(keyword: &str) -> String {
    url::form_urlencoded::byte_serialize(keyword.as_bytes()).collect()
}

/// Substitutes the encoded keyword into every `{keyword}` placeholder.
pub fn fill_search_template(template: &str, keyword: &str) -> String {
    template.replace(KEYWORD_PLACEHOLDER, &encode_keyword(keyword))
}
