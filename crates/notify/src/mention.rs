use alerter_core::notify::entity::is_blank;

/// # Summary
/// Splits a comma separated list of phone numbers or user ids.
///
/// # Logic
/// 1. Blank input yields an empty list.
/// 2. Splits on `,` and trims whitespace around every token.
/// 3. Drops empty tokens left by trailing commas only; interior empty tokens,
///    order and duplicates are kept.
///
/// # Arguments
/// * `raw` - The raw delimited string from the receiver configuration.
///
/// # Returns
/// * The tokens in input order.
pub fn parse_mention_list(raw: &str) -> Vec<String> {
    if is_blank(raw) {
        return Vec::new();
    }

    let mut tokens: Vec<String> = raw
        .split(',')
        .map(|token| token.trim().to_string())
        .collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}
