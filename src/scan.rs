use std::fmt;
use tracing::trace;

// Token classes recognised by the scanner. Each one is matched anchored at a position,
// never searched for further along the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,
    Assign,
    AddSub,
    MulDiv,
    Exponent,
    LParen,
    RParen,
    Space,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Assign => "\"=\"",
            TokenKind::AddSub => "\"+\" or \"-\"",
            TokenKind::MulDiv => "\"*\" or \"/\"",
            TokenKind::Exponent => "\"^\"",
            TokenKind::LParen => "\"(\"",
            TokenKind::RParen => "\")\"",
            TokenKind::Space => "space",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub text: &'a str,
    // offset just past the matched text
    pub end: usize,
}

fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|b| pred(**b)).count()
}

// Length of a number literal at the start of `bytes`: [+-]?[0-9]+(\.[0-9]+)?
fn number_len(bytes: &[u8]) -> usize {
    let sign = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0
    };
    let int = count_while(&bytes[sign..], |b| b.is_ascii_digit());
    if int == 0 { return 0 }
    let mut len = sign + int;
    // the fraction is only taken if at least one digit follows the dot
    if bytes.get(len) == Some(&b'.') {
        let frac = count_while(&bytes[len + 1..], |b| b.is_ascii_digit());
        if frac > 0 {
            len += 1 + frac;
        }
    }
    len
}

// Attempt to match a token of the given kind exactly at byte offset `at`.
// Returns None (and has no other effect) if there is no match there.
pub fn scan(kind: TokenKind, input: &str, at: usize) -> Option<Match<'_>> {
    let bytes = input.as_bytes().get(at..)?;
    let len = match kind {
        TokenKind::Identifier => match bytes.first() {
            Some(b) if b.is_ascii_alphabetic() => 1 + count_while(&bytes[1..], |b| b.is_ascii_alphanumeric() || b == b'_'),
            _ => 0
        },
        TokenKind::Number => number_len(bytes),
        TokenKind::Assign => single(bytes, |b| b == b'='),
        TokenKind::AddSub => single(bytes, |b| b == b'+' || b == b'-'),
        TokenKind::MulDiv => single(bytes, |b| b == b'*' || b == b'/'),
        TokenKind::Exponent => single(bytes, |b| b == b'^'),
        TokenKind::LParen => single(bytes, |b| b == b'('),
        TokenKind::RParen => single(bytes, |b| b == b')'),
        TokenKind::Space => count_while(bytes, |b| b == b' '),
    };
    if len == 0 { return None }
    // every token is pure ASCII, so at + len always lands on a char boundary
    let end = at + len;
    let text = &input[at..end];
    trace!(?kind, text, at, "scanned");
    Some(Match { text, end })
}

fn single(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    match bytes.first() {
        Some(b) if pred(*b) => 1,
        _ => 0
    }
}
