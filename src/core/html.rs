// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

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
    super::sanitize::normalize_ws(&out)
}

/// The `<…>` open-tag prefix of a block (whole block if '>' is missing).
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Attribute value from an open tag, case-insensitive name, tolerant of
/// attribute order and single/double/no quoting.
pub fn attr_value_ci<'a>(open: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open);
    let needle = to_lower(name);
    let bytes = lc.as_bytes();
    let mut search = 0usize;

    while let Some(rel) = lc.get(search..)?.find(&needle) {
        let at = search + rel;
        search = at + needle.len();

        // name must start on a boundary
        if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }
        let mut i = at + needle.len();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() { i += 1; }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() { i += 1; }
        if i >= bytes.len() {
            return None;
        }
        return match bytes[i] {
            q @ (b'"' | b'\'') => {
                let start = i + 1;
                let end = open[start..].find(q as char)? + start;
                Some(&open[start..end])
            }
            _ => {
                let start = i;
                let end = open[start..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .map(|e| e + start)
                    .unwrap_or(open.len());
                Some(&open[start..end])
            }
        };
    }
    None
}

/// True if the open tag's class list contains `token` (whole token match).
pub fn has_class(open: &str, token: &str) -> bool {
    attr_value_ci(open, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(token)))
        .unwrap_or(false)
}

/// One scanned element: open tag plus inner markup (up to the matching
/// close tag, or end of input when the element is never closed).
pub struct Element<'a> {
    pub open: &'a str,
    pub inner: &'a str,
}

/// Scan forward from `from` for the first element whose class list contains
/// any of `classes`. Tag name is irrelevant, like a `.class` selector.
pub fn next_element_with_class<'a>(
    s: &'a str,
    classes: &[&str],
    from: usize,
) -> Option<Element<'a>> {
    let bytes = s.as_bytes();
    let mut i = from;

    while i < s.len() {
        let start = s.get(i..)?.find('<')? + i;
        let name_start = start + 1;
        if name_start >= s.len() || !bytes[name_start].is_ascii_alphabetic() {
            i = start + 1;
            continue;
        }
        let mut name_end = name_start;
        while name_end < s.len() && bytes[name_end].is_ascii_alphanumeric() {
            name_end += 1;
        }
        let Some(gt) = s[start..].find('>') else { return None; };
        let open_end = start + gt + 1;
        let open = &s[start..open_end];

        if classes.iter().any(|c| has_class(open, c)) {
            let close = join!("</", &to_lower(&s[name_start..name_end]), ">");
            let inner_end = to_lower(&s[open_end..])
                .find(&close)
                .map(|e| open_end + e)
                .unwrap_or(s.len());
            return Some(Element { open, inner: &s[open_end..inner_end] });
        }
        i = open_end;
    }
    None
}

pub fn first_element_with_class<'a>(s: &'a str, classes: &[&str]) -> Option<Element<'a>> {
    next_element_with_class(s, classes, 0)
}
