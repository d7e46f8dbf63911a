use std::borrow::Cow;

pub const DEFAULT_ESCAPE_CHAR: char = '\\';
pub const DEFAULT_COMMENT_CHAR: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// 1-based number of the first physical line
    pub line: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// `% alias NAME` comment, as found in glibc charmaps
    Alias(&'a str),
    /// Trimmed line content, joined with its continuation lines if any
    Content(Cow<'a, str>),
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_newline(s: &str) -> Option<usize> {
    memchr::memchr(b'\n', s.as_bytes())
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_newline(s: &str) -> Option<usize> {
    s.find('\n')
}

/// Returns the line without its trailing escape character when it ends
/// with an unescaped one.
fn strip_continuation(line: &str, escape: char) -> Option<&str> {
    let t = line.trim_end();
    let run = t.chars().rev().take_while(|&c| c == escape).count();
    if run % 2 == 1 {
        Some(&t[..t.len() - escape.len_utf8()])
    } else {
        None
    }
}

/// The header lines that name the escape and comment characters may end
/// in the current escape character without continuing.
fn is_syntax_declaration(trimmed: &str) -> bool {
    trimmed.starts_with("<escape_char>") || trimmed.starts_with("<comment_char>")
}

pub fn scan(input: &str) -> Vec<ParsedLine<'_>> {
    iter(input).collect()
}

pub struct LineIter<'a> {
    rest: &'a str,
    line: usize,
    escape: char,
    comment: char,
}

pub fn iter(input: &str) -> LineIter<'_> {
    LineIter {
        rest: input,
        line: 0,
        escape: DEFAULT_ESCAPE_CHAR,
        comment: DEFAULT_COMMENT_CHAR,
    }
}

impl<'a> LineIter<'a> {
    pub fn escape_char(&self) -> char {
        self.escape
    }

    pub fn comment_char(&self) -> char {
        self.comment
    }

    /// Takes effect from the next line on.
    pub fn set_escape_char(&mut self, c: char) {
        self.escape = c;
    }

    /// Takes effect from the next line on.
    pub fn set_comment_char(&mut self, c: char) {
        self.comment = c;
    }

    /// Number of the last physical line consumed.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_physical(&mut self) -> Option<(usize, &'a str)> {
        if self.rest.is_empty() {
            return None;
        }
        self.line += 1;
        let raw = match find_newline(self.rest) {
            Some(pos) => {
                let (raw, remaining) = self.rest.split_at(pos);
                self.rest = &remaining[1..];
                raw
            }
            None => {
                let raw = self.rest;
                self.rest = "";
                raw
            }
        };
        Some((self.line, raw.strip_suffix('\r').unwrap_or(raw)))
    }

    fn comment_kind(&self, trimmed: &'a str) -> LineKind<'a> {
        let body = trimmed[self.comment.len_utf8()..].trim_start();
        match body.strip_prefix("alias") {
            Some(rest) if rest.starts_with(char::is_whitespace) && !rest.trim().is_empty() => {
                LineKind::Alias(rest.trim())
            }
            _ => LineKind::Comment,
        }
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ParsedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line, raw) = self.next_physical()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(ParsedLine {
                line,
                kind: LineKind::Blank,
            });
        }
        if trimmed.starts_with(self.comment) {
            let kind = self.comment_kind(trimmed);
            return Some(ParsedLine { line, kind });
        }

        let head = match strip_continuation(raw, self.escape) {
            Some(head) if !is_syntax_declaration(trimmed) => head,
            _ => {
                return Some(ParsedLine {
                    line,
                    kind: LineKind::Content(Cow::Borrowed(trimmed)),
                });
            }
        };

        let mut joined = String::from(head);
        while let Some((_, next)) = self.next_physical() {
            match strip_continuation(next, self.escape) {
                Some(part) => joined.push_str(part),
                None => {
                    joined.push_str(next);
                    break;
                }
            }
        }
        let content = joined.trim();
        let kind = if content.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Content(Cow::Owned(content.to_string()))
        };
        Some(ParsedLine { line, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuation_joins_lines() {
        let lines = scan("<a> \\\n   /x41\n<b> /x42\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 1);
        assert_eq!(lines[0].kind, LineKind::Content(Cow::Borrowed("<a>    /x41")));
        assert_eq!(lines[1].line, 3);
    }

    #[test]
    fn escaped_escape_does_not_continue() {
        let lines = scan("abc \\\\\nnext\n");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn crlf_is_trimmed() {
        let lines = scan("CHARMAP\r\nEND CHARMAP\r\n");
        assert_eq!(lines[0].kind, LineKind::Content(Cow::Borrowed("CHARMAP")));
        assert_eq!(lines[1].kind, LineKind::Content(Cow::Borrowed("END CHARMAP")));
    }
}
