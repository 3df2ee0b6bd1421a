//! Minimal HTML entity decoding for trivia API payloads.
//!
//! The API escapes question and answer text with a small, fixed set of
//! entities. Unknown entities pass through unchanged.

pub(crate) fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';') else {
            // A lone '&' with no terminator is not an entity.
            out.push_str(tail);
            return out;
        };
        let entity = &tail[..=end];
        match replacement(entity) {
            Some(decoded) => out.push_str(decoded),
            None => out.push_str(entity),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

fn replacement(entity: &str) -> Option<&'static str> {
    Some(match entity {
        "&amp;" => "&",
        "&lt;" => "<",
        "&gt;" => ">",
        "&quot;" => "\"",
        "&#039;" => "'",
        "&ldquo;" => "\u{201c}",
        "&rdquo;" => "\u{201d}",
        "&lsquo;" => "\u{2018}",
        "&rsquo;" => "\u{2019}",
        "&hellip;" => "...",
        "&nbsp;" => " ",
        _ => return None,
    })
}
