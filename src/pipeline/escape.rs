//! HTML escaping with a fixed six-character map.
//!
//! Exactly these characters are transformed; everything else passes through
//! untouched:
//!
//! | char | entity    |
//! |------|-----------|
//! | `&`  | `&amp;`   |
//! | `<`  | `&lt;`    |
//! | `>`  | `&gt;`    |
//! | `"`  | `&quot;`  |
//! | `'`  | `&#39;`   |
//! | `/`  | `&#x2F;`  |
//!
//! `/` is in the set so that log content can never terminate a tag early
//! (`</span>` smuggled inside a message). The map is deliberately not
//! extensible: rendered output depends only on this table.

/// Escape a string for inclusion in HTML text or attribute content.
pub fn escape_html(input: &str) -> String {
    // Worst case every char becomes a 6-byte entity; reserve for the common
    // case of few or no escapes instead.
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_full_map() {
        assert_eq!(
            escape_html(r#"&<>"'/"#),
            "&amp;&lt;&gt;&quot;&#39;&#x2F;"
        );
    }

    #[test]
    fn passes_other_characters_through() {
        assert_eq!(escape_html("plain text 123 _-=+"), "plain text 123 _-=+");
        assert_eq!(escape_html("naïve café ☃"), "naïve café ☃");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn newlines_and_indentation_survive() {
        // The objects block relies on literal newlines and spaces inside <pre>.
        assert_eq!(escape_html("\n    {\n    }"), "\n    {\n    }");
    }

    #[test]
    fn neutralises_markup_injection() {
        assert_eq!(
            escape_html("</span><script>alert(1)</script>"),
            "&lt;&#x2F;span&gt;&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn characters_outside_the_map_are_stable_under_reescaping() {
        // Only the six mapped characters are ever rewritten; a string free
        // of them is a fixed point.
        let clean = "13:46:41 INFO app - started";
        assert_eq!(escape_html(clean), clean);
        assert_eq!(escape_html(&escape_html(clean)), clean);
    }
}
