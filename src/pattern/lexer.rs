use memchr::memchr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Literal(String),
    Param(String),
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Drops one trailing and then one leading `/` from a route pattern.
#[inline]
pub fn strip_outer_slashes(pattern: &str) -> &str {
    let trimmed = pattern.strip_suffix('/').unwrap_or(pattern);
    trimmed.strip_prefix('/').unwrap_or(trimmed)
}

/// Splits a pattern body into literal runs and `:name` parameters.
///
/// A `:` that is not followed by at least one ASCII word character stays
/// literal. No other syntax is recognised.
#[tracing::instrument(level = "trace", skip(body), fields(body = %body))]
pub fn tokenize(body: &str) -> Vec<PatternToken> {
    let bytes = body.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0usize;
    let mut cursor = 0usize;

    while let Some(rel) = memchr(b':', &bytes[cursor..]) {
        let colon = cursor + rel;
        let mut end = colon + 1;
        while end < bytes.len() && is_word_byte(bytes[end]) {
            end += 1;
        }

        if end == colon + 1 {
            cursor = colon + 1;
            continue;
        }

        if literal_start < colon {
            tokens.push(PatternToken::Literal(body[literal_start..colon].to_string()));
        }
        tokens.push(PatternToken::Param(body[colon + 1..end].to_string()));

        literal_start = end;
        cursor = end;
    }

    if literal_start < bytes.len() {
        tokens.push(PatternToken::Literal(body[literal_start..].to_string()));
    }

    tokens
}
