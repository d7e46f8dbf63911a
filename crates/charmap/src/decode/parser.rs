use std::collections::HashMap;

use log::{debug, warn};

use crate::charmap::{CharEntry, Charmap};
use crate::decode::encoding::{format_encoding, increment, parse_encoding};
use crate::decode::scanner::{LineIter, LineKind, iter};
use crate::decode::symbol::{Target, expand_range, parse_symbol, parse_target, ucs_of_name};
use crate::decode::validation::{check_portable, validate_encoding_len, validate_widths};
use crate::error::{Error, Result};
use crate::options::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Charmap,
    AfterCharmap,
    Width,
}

pub struct Parser<'a> {
    lines: LineIter<'a>,
    options: Options,
    state: State,
    charmap: Charmap,
    first_by_bytes: HashMap<Vec<u8>, usize>,
}

fn is_keyword_line(content: &str, words: &[&str]) -> bool {
    content.split_whitespace().eq(words.iter().copied())
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &Options) -> Self {
        Self {
            lines: iter(input),
            options: options.clone(),
            state: State::Header,
            charmap: Charmap::new(),
            first_by_bytes: HashMap::new(),
        }
    }

    pub fn parse(mut self) -> Result<Charmap> {
        while let Some(pl) = self.lines.next() {
            match pl.kind {
                LineKind::Blank | LineKind::Comment => {}
                LineKind::Alias(alias) => {
                    if self.state == State::Header {
                        self.charmap.aliases.push(alias.to_string());
                    }
                }
                LineKind::Content(content) => match self.state {
                    State::Header => self.header_line(&content, pl.line)?,
                    State::Charmap => self.charmap_line(&content, pl.line)?,
                    State::AfterCharmap => self.trailer_line(&content, pl.line)?,
                    State::Width => self.width_line(&content, pl.line)?,
                },
            }
        }

        match self.state {
            State::Header => return Err(Error::Invalid("no CHARMAP section".to_string())),
            State::Charmap => {
                return Err(Error::syntax(self.lines.line(), "missing END CHARMAP"));
            }
            State::Width => return Err(Error::syntax(self.lines.line(), "missing END WIDTH")),
            State::AfterCharmap => {}
        }

        self.charmap.escape_char = self.lines.escape_char();
        self.charmap.comment_char = self.lines.comment_char();
        if self.options.require_portable {
            check_portable(&self.charmap, self.options.strict)?;
        }
        Ok(self.charmap)
    }

    /// Raise in strict mode, log and carry on otherwise.
    fn lenient(&self, line: usize, message: String) -> Result<()> {
        if self.options.strict {
            return Err(Error::syntax(line, message));
        }
        warn!("line {line}: {message}");
        Ok(())
    }

    fn header_line(&mut self, content: &str, line: usize) -> Result<()> {
        if is_keyword_line(content, &["CHARMAP"]) {
            validate_widths(self.charmap.mb_cur_min, self.charmap.mb_cur_max, line)?;
            self.state = State::Charmap;
            return Ok(());
        }
        if !content.starts_with('<') {
            return self.lenient(line, format!("unexpected text before CHARMAP: {content:?}"));
        }
        let escape = self.lines.escape_char();
        let (keyword, rest) = parse_symbol(content, escape).map_err(|m| Error::syntax(line, m))?;
        let value = rest.trim();
        match keyword.as_str() {
            "code_set_name" => {
                if value.is_empty() {
                    return Err(Error::syntax(line, "<code_set_name> needs a value"));
                }
                self.charmap.code_set_name = Some(value.to_string());
            }
            "mb_cur_min" => self.charmap.mb_cur_min = parse_width(&keyword, value, line)?,
            "mb_cur_max" => self.charmap.mb_cur_max = parse_width(&keyword, value, line)?,
            "escape_char" => self.lines.set_escape_char(single_char(&keyword, value, line)?),
            "comment_char" => self.lines.set_comment_char(single_char(&keyword, value, line)?),
            other => return self.lenient(line, format!("unknown header keyword <{other}>")),
        }
        Ok(())
    }

    fn charmap_line(&mut self, content: &str, line: usize) -> Result<()> {
        if is_keyword_line(content, &["END", "CHARMAP"]) {
            self.state = State::AfterCharmap;
            return Ok(());
        }
        let escape = self.lines.escape_char();
        let (target, rest) = parse_target(content, escape).map_err(|m| Error::syntax(line, m))?;
        let (bytes, comment) = parse_encoding(rest.trim_start(), escape, self.options.strict)
            .map_err(|m| Error::syntax(line, m))?;
        let comment = (!comment.is_empty()).then(|| comment.to_string());

        match target {
            Target::Single(name) => self.define(name, bytes, comment, line),
            Target::Range(range) => {
                let names = expand_range(&range).map_err(|m| Error::syntax(line, m))?;
                let last = names.len() - 1;
                let mut bytes = bytes;
                for (i, name) in names.into_iter().enumerate() {
                    self.define(name, bytes.clone(), comment.clone(), line)?;
                    if i < last && !increment(&mut bytes) {
                        return Err(Error::syntax(
                            line,
                            format!(
                                "encoding overflows within range <{}>..<{}>",
                                range.first, range.last
                            ),
                        ));
                    }
                }
                Ok(())
            }
        }
    }

    fn define(&mut self, name: String, bytes: Vec<u8>, comment: Option<String>, line: usize) -> Result<()> {
        validate_encoding_len(
            &name,
            &bytes,
            self.charmap.mb_cur_min,
            self.charmap.mb_cur_max,
            line,
        )?;
        if self.charmap.contains(&name) {
            return self.lenient(line, format!("duplicate character name <{name}>, keeping the first"));
        }
        let index = self.charmap.len();
        if let Some(&first) = self.first_by_bytes.get(&bytes) {
            if let Some(other) = self.charmap.iter().nth(first) {
                debug!(
                    "line {line}: <{name}> shares encoding {} with <{}>",
                    format_encoding(&bytes, self.lines.escape_char()),
                    other.name
                );
            }
        } else {
            self.first_by_bytes.insert(bytes.clone(), index);
        }
        let ucs = ucs_of_name(&name);
        self.charmap.insert(CharEntry {
            name,
            bytes,
            ucs,
            comment,
            width: None,
        });
        Ok(())
    }

    fn trailer_line(&mut self, content: &str, line: usize) -> Result<()> {
        if is_keyword_line(content, &["WIDTH"]) {
            self.state = State::Width;
            return Ok(());
        }
        let mut words = content.split_whitespace();
        if words.next() == Some("WIDTH_DEFAULT") {
            let value = words.next().unwrap_or("");
            if words.next().is_some() {
                return Err(Error::syntax(line, "WIDTH_DEFAULT takes a single value"));
            }
            self.charmap.width_default = value
                .parse()
                .map_err(|_| Error::syntax(line, format!("invalid WIDTH_DEFAULT {value:?}")))?;
            return Ok(());
        }
        self.lenient(line, format!("unexpected text after END CHARMAP: {content:?}"))
    }

    fn width_line(&mut self, content: &str, line: usize) -> Result<()> {
        if is_keyword_line(content, &["END", "WIDTH"]) {
            self.state = State::AfterCharmap;
            return Ok(());
        }
        let escape = self.lines.escape_char();
        let (target, rest) = parse_target(content, escape).map_err(|m| Error::syntax(line, m))?;
        let value = rest.trim();
        let width: u32 = value
            .parse()
            .map_err(|_| Error::syntax(line, format!("invalid width {value:?}")))?;
        let names = match target {
            Target::Single(name) => vec![name],
            Target::Range(range) => {
                // Ranges are resolved against the CHARMAP: both ends defined
                // selects every entry between them in file order.
                if let (Some(start), Some(end)) = (
                    self.charmap.position(&range.first),
                    self.charmap.position(&range.last),
                ) {
                    if end < start {
                        return Err(Error::syntax(
                            line,
                            format!(
                                "WIDTH range <{}>{}<{}> runs backwards",
                                range.first,
                                range.kind.separator(),
                                range.last
                            ),
                        ));
                    }
                    if let Some(entries) = self.charmap.between_mut(&range.first, &range.last) {
                        for entry in entries {
                            entry.width = Some(width);
                        }
                    }
                    return Ok(());
                }
                expand_range(&range).map_err(|m| Error::syntax(line, m))?
            }
        };
        for name in names {
            if !self.charmap.contains(&name) {
                self.lenient(line, format!("WIDTH for undefined character <{name}>"))?;
                continue;
            }
            if let Some(entry) = self.charmap.get_mut(&name) {
                entry.width = Some(width);
            }
        }
        Ok(())
    }
}

fn parse_width(keyword: &str, value: &str, line: usize) -> Result<u8> {
    value
        .parse()
        .map_err(|_| Error::syntax(line, format!("<{keyword}> expects a small integer, got {value:?}")))
}

fn single_char(keyword: &str, value: &str, line: usize) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err(Error::syntax(
            line,
            format!("<{keyword}> expects a single character, got {value:?}"),
        )),
    }
}

pub fn parse_str(input: &str, options: &Options) -> Result<Charmap> {
    Parser::new(input, options).parse()
}
