// src/core/html.rs
// Low-level HTML string helpers. Case-insensitive on ASCII tag/attribute names;
// ASCII-only lowering keeps byte offsets identical between `s` and `to_lower(s)`.

use super::sanitize::normalize_ws;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<open ...> ... close` block at or after `from`. Returns byte offsets
/// (start of the opening tag, end of the closing tag).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Start of the last `<tag` opener before `before` that is really that tag
/// (`<tr>` / `<tr class=..>`, not `<track>`). `lc` must already be lowered.
pub fn rfind_tag_open(lc: &str, tag: &str, before: usize) -> Option<usize> {
    let needle = format!("<{tag}");
    let mut end = before.min(lc.len());
    while let Some(pos) = lc.get(..end)?.rfind(&needle) {
        let next = lc.as_bytes().get(pos + needle.len()).copied();
        if matches!(next, Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/')) {
            return Some(pos);
        }
        end = pos;
    }
    None
}

/// The opening tag of a block, up to and including `>`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Lowered value of attribute `name` in an opening tag. The name must match
/// whole (`class`, not `data-class`); whitespace around `=` is allowed, and
/// the value may be double-, single- or un-quoted.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let name = to_lower(name);
    let bytes = lc.as_bytes();
    let mut from = 0usize;

    while let Some(rel) = lc.get(from..)?.find(&name) {
        let at = from + rel;
        from = at + name.len();
        if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }
        let Some(rest) = lc[from..].trim_start().strip_prefix('=') else { continue };
        let rest = rest.trim_start();
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => rest[1..].split(q).next().unwrap_or(""),
            _ => rest
                .split(|c: char| c.is_whitespace() || c == '>')
                .next()
                .unwrap_or(""),
        };
        return Some(value.to_string());
    }
    None
}

/// Whether an opening tag carries `class` among its class tokens.
pub fn tag_has_class(open_tag: &str, class: &str) -> bool {
    let want = to_lower(class);
    attr_value(open_tag, "class").is_some_and(|v| v.split_whitespace().any(|t| t == want))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
