//! Text transforms over marked-up strings
//!
//! Two stateless single-pass operations:
//! - `strip_codes`: remove every valid code sequence from a string
//! - `translate_alternate_codes`: rewrite an author-friendly alternate
//!   marker character into the canonical `MARKER`
//!
//! Both allocate a fresh output per call and perform no I/O.

use crate::code::{Code, MARKER};

/// Characters accepted after an alternate marker: both cases of every
/// identifying character.
const ALT_CODE_CHARS: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRr";

/// Remove every code sequence from `text`.
///
/// A code sequence is `MARKER` followed by a valid identifying character in
/// either case. Matches are non-overlapping and scanned left to right in a
/// single pass; a `MARKER` whose next character is not a valid identifier
/// (or that ends the string) is preserved.
///
/// Absent input propagates: `None` in, `None` out. Callers with possibly
/// missing message fields pass them straight through.
pub fn strip_codes(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == MARKER {
            if let Some(next) = chars.peek().copied() {
                if Code::from_char(next.to_ascii_lowercase()).is_some() {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    Some(out)
}

/// Rewrite `alt_char` markers in `text` into canonical `MARKER` form.
///
/// At each position except the last, if the character equals `alt_char` and
/// the next character is in the accepted set (`0-9`, `A-F`/`a-f`, `K-O`/`k-o`,
/// `R`/`r`), the marker becomes `MARKER` and the identifying character is
/// lowercased. The scan advances one position at a time and never re-examines
/// a replaced pair. Everything else, including a trailing `alt_char` with
/// nothing after it, is left untouched.
///
/// The output has the same number of chars as the input. Unlike
/// [`strip_codes`] there is no absent case: the text is always required.
pub fn translate_alternate_codes(alt_char: char, text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut rewritten = 0usize;

    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == alt_char && ALT_CODE_CHARS.contains(chars[i + 1]) {
            chars[i] = MARKER;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
            rewritten += 1;
        }
    }

    if rewritten > 0 {
        log::trace!("rewrote {} alternate code markers", rewritten);
    }

    chars.into_iter().collect()
}
