/// Collapses runs of `/` into one, drops a trailing slash and maps the empty
/// result to `/`.
///
/// This is a pure string transform. It does not add a leading slash to
/// relative input; see [`ensure_leading_slash`] for that.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str) -> String {
    let mut output = collapse_duplicate_slashes(path);
    trim_trailing_slash(&mut output);

    if output.is_empty() {
        "/".to_string()
    } else {
        output
    }
}

/// Prefixes `/` when the path does not already start with one.
#[inline]
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        let mut output = String::with_capacity(path.len() + 1);
        output.push('/');
        output.push_str(path);
        output
    }
}

fn trim_trailing_slash(value: &mut String) {
    if value.ends_with('/') {
        value.pop();
    }
}

fn collapse_duplicate_slashes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut prev_was_slash = false;
    for ch in input.chars() {
        if ch == '/' {
            if !prev_was_slash {
                output.push(ch);
                prev_was_slash = true;
            }
        } else {
            output.push(ch);
            prev_was_slash = false;
        }
    }
    output
}
