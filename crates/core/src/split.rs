//! Escape-aware splitting of a single raw argument at command delimiters.
//!
//! A delimiter is a split point when it starts the remaining text or follows
//! any character other than the escape character. An escaped delimiter is
//! literal and loses its escape in the produced text; other escape
//! characters are left alone.

use std::borrow::Cow;

use crate::config::SplitConfig;

/// Classification of a piece of a raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// Argument text between split points, with escaped delimiters unescaped.
    Text,
    /// An unescaped delimiter: the current commandline ends here.
    Delimiter,
}

/// A piece of one raw argument.
///
/// `start`/`end` are byte offsets into the raw argument. For [`PieceKind::Text`]
/// pieces, `text` may be shorter than `&arg[start..end]` because escapes in
/// front of literal delimiters have been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece<'a> {
    /// The classification of this piece.
    pub kind: PieceKind,
    /// Text of this piece, borrowed from the argument when nothing was unescaped.
    pub text: Cow<'a, str>,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Byte offset of the next split-point delimiter in `remainder`, if any.
///
/// Position 0 is always a split point when it holds the delimiter; the
/// escape rule only looks at the character immediately before.
pub fn next_split_point(remainder: &str, config: &SplitConfig) -> Option<usize> {
    let mut prev: Option<char> = None;
    for (i, c) in remainder.char_indices() {
        if c == config.delimiter && prev != Some(config.escape) {
            return Some(i);
        }
        prev = Some(c);
    }
    None
}

/// Remove the escape character in front of every literal delimiter.
///
/// Returns the input unchanged (borrowed) when it holds no escaped delimiter.
pub fn unescape_delimiters<'a>(segment: &'a str, config: &SplitConfig) -> Cow<'a, str> {
    let mut pattern = String::with_capacity(2);
    pattern.push(config.escape);
    pattern.push(config.delimiter);
    if !segment.contains(&pattern) {
        return Cow::Borrowed(segment);
    }

    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars().peekable();
    while let Some(c) = chars.next() {
        if c == config.escape && chars.peek() == Some(&config.delimiter) {
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Split one raw argument into text and delimiter pieces using the default
/// `;` delimiter and `\` escape.
pub fn split_arg(arg: &str) -> Vec<Piece<'_>> {
    split_arg_with_config(arg, &SplitConfig::default())
}

/// Split one raw argument into text and delimiter pieces.
///
/// An empty argument yields one empty [`PieceKind::Text`] piece, so it still
/// reaches the grammar as a token. Empty text between two delimiters (or
/// before a leading delimiter) is not emitted, so `";"` yields exactly one
/// [`PieceKind::Delimiter`] piece.
pub fn split_arg_with_config<'a>(arg: &'a str, config: &SplitConfig) -> Vec<Piece<'a>> {
    if arg.is_empty() {
        return vec![Piece {
            kind: PieceKind::Text,
            text: Cow::Borrowed(arg),
            start: 0,
            end: 0,
        }];
    }

    let mut pieces = Vec::new();
    let delim_len = config.delimiter.len_utf8();
    let mut offset = 0usize;

    while offset < arg.len() {
        let remainder = &arg[offset..];
        let Some(pos) = next_split_point(remainder, config) else {
            pieces.push(Piece {
                kind: PieceKind::Text,
                text: unescape_delimiters(remainder, config),
                start: offset,
                end: arg.len(),
            });
            break;
        };

        let split_at = offset + pos;
        if pos > 0 {
            pieces.push(Piece {
                kind: PieceKind::Text,
                text: unescape_delimiters(&remainder[..pos], config),
                start: offset,
                end: split_at,
            });
        }
        tracing::trace!(arg, offset = split_at, "split point");
        pieces.push(Piece {
            kind: PieceKind::Delimiter,
            text: Cow::Borrowed(&arg[split_at..split_at + delim_len]),
            start: split_at,
            end: split_at + delim_len,
        });
        offset = split_at + delim_len;
    }

    pieces
}
