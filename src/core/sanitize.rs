// src/core/sanitize.rs

/// Decode the handful of entities the report pages actually emit.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_then_whitespace() {
        assert_eq!(normalize_ws(&normalize_entities("&nbsp; 12&nbsp;\n ")), "12");
        assert_eq!(normalize_entities("A&amp;lt;B"), "A&lt;B");
        // Full-width space counts as whitespace too
        assert_eq!(normalize_ws("橘\u{3000}萌生 "), "橘 萌生");
    }
}
