//! Relaxation pass turning permissive JSON into strict JSON
//!
//! The vendor schema is hand-maintained and occasionally carries `//` or
//! `/* */` comments and trailing commas. Both are blanked out before the
//! document reaches `serde_json`. Removed characters are replaced with
//! spaces and newlines are kept, so parse errors still point at the right
//! line and column of the input file.

/// Strip comments and trailing commas from `text`
pub(crate) fn relax(text: &str) -> String {
    strip_trailing_commas(&strip_comments(text))
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                out.push(' ');
                while let Some(&skipped) = chars.peek() {
                    if skipped == '\n' {
                        break;
                    }
                    out.push(' ');
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    out.push(if skipped == '\n' { '\n' } else { ' ' });
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            ',' => {
                let closes = chars[i + 1..]
                    .iter()
                    .find(|ch| !ch.is_whitespace())
                    .is_some_and(|ch| matches!(ch, ']' | '}'));
                if closes {
                    out.push(' ');
                    continue;
                }
            }
            _ => {}
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
#[path = "relax/relax_tests.rs"]
mod relax_tests;
