//! Leading-indentation scanner.
//!
//! Tree listings indent with box-drawing bars, ASCII pipes, runs of spaces or
//! tabs, often mixed. Each recognized unit counts as one nesting level. The
//! units are described by an ordered table of matchers; the first matcher
//! that accepts the text at the current position wins.

const BOX_BAR: char = '\u{2502}'; // │

/// What a matcher recognized at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// One nesting level.
    Level,
    /// Padding that does not change the depth.
    Noise,
}

/// A matcher returns the recognized token and the number of bytes it covers.
type Matcher = fn(&str) -> Option<(Token, usize)>;

const MATCHERS: [Matcher; 6] = [
    box_bar_two_spaces,
    pipe_two_spaces,
    three_spaces,
    tab,
    bar_with_spaces,
    stray_space,
];

fn fixed(s: &str, prefix: &str, token: Token) -> Option<(Token, usize)> {
    s.starts_with(prefix).then_some((token, prefix.len()))
}

/// `│` followed by two spaces.
fn box_bar_two_spaces(s: &str) -> Option<(Token, usize)> {
    fixed(s, "\u{2502}  ", Token::Level)
}

/// `|` followed by two spaces.
fn pipe_two_spaces(s: &str) -> Option<(Token, usize)> {
    fixed(s, "|  ", Token::Level)
}

fn three_spaces(s: &str) -> Option<(Token, usize)> {
    fixed(s, "   ", Token::Level)
}

fn tab(s: &str) -> Option<(Token, usize)> {
    fixed(s, "\t", Token::Level)
}

/// A lone `│` or `|` followed by one or more spaces; all the spaces go with it.
fn bar_with_spaces(s: &str) -> Option<(Token, usize)> {
    let after_bar = s.strip_prefix(|c: char| c == BOX_BAR || c == '|')?;
    let after_spaces = after_bar.trim_start_matches(' ');
    if after_spaces.len() == after_bar.len() {
        return None;
    }
    Some((Token::Level, s.len() - after_spaces.len()))
}

/// A single space that starts none of the patterns above.
fn stray_space(s: &str) -> Option<(Token, usize)> {
    fixed(s, " ", Token::Noise)
}

/// Consume leading indentation, returning the nesting depth and the
/// unconsumed remainder (not trimmed).
pub fn consume_indent(line: &str) -> (usize, &str) {
    let mut depth = 0;
    let mut rest = line;

    while let Some((token, len)) = MATCHERS.iter().find_map(move |matcher| matcher(rest)) {
        if token == Token::Level {
            depth += 1;
        }
        rest = &rest[len..];
    }

    (depth, rest)
}
