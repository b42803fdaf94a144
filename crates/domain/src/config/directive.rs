//! Server-block text form of the `deleg` directive.
//!
//! ```text
//! deleg [zone ...] {
//!     responses "<record>" ["<record>" ...]
//! }
//! ```
//!
//! A statement may share a line with either brace, so
//! `deleg example.org { responses "<record>" }` is one complete block.
//!
//! Only `deleg` directives are interpreted; any other top-level directive
//! (and its block) belongs to someone else and is skipped.

use super::deleg::DelegBlock;
use super::errors::ConfigError;

pub const DIRECTIVE: &str = "deleg";
const RESPONSES: &str = "responses";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Open,
    Close,
}

#[derive(Debug)]
struct Line {
    number: usize,
    tokens: Vec<Token>,
}

/// Parses every `deleg` directive in `input`.
///
/// Blocks are returned in declaration order with their zones as written; a
/// directive without zones yields a bare block (see [`DelegBlock::zones_or`]).
pub fn parse_directives(input: &str) -> Result<Vec<DelegBlock>, ConfigError> {
    let lines = tokenize(input)?;
    let mut blocks = Vec::new();
    let mut seen_bare = false;
    let mut iter = lines.into_iter();

    while let Some(line) = iter.next() {
        let (name, rest) = match line.tokens.split_first() {
            Some((Token::Word(name), rest)) => (name.as_str(), rest),
            Some((Token::Close, _)) => {
                return Err(ConfigError::Parse(format!(
                    "line {}: unexpected '}}'",
                    line.number
                )))
            }
            Some((Token::Open, _)) => {
                return Err(ConfigError::Parse(format!(
                    "line {}: unexpected '{{'",
                    line.number
                )))
            }
            None => continue,
        };

        let open = rest.iter().position(|token| *token == Token::Open);
        let args = &rest[..open.unwrap_or(rest.len())];

        if name != DIRECTIVE {
            let depth = brace_depth(rest);
            if depth > 0 {
                skip_block(&mut iter, depth, line.number)?;
            }
            continue;
        }

        let zones = words(args, line.number)?;
        if zones.is_empty() {
            if seen_bare {
                return Err(ConfigError::DuplicateBlock);
            }
            seen_bare = true;
        }

        let responses = match open {
            Some(pos) => {
                // Statements may follow the brace on the opening line.
                let inline = Line {
                    number: line.number,
                    tokens: rest[pos + 1..].to_vec(),
                };
                parse_block(&mut std::iter::once(inline).chain(iter.by_ref()), line.number)?
            }
            None => Vec::new(),
        };

        blocks.push(DelegBlock::new(zones, responses));
    }

    Ok(blocks)
}

fn parse_block(
    lines: &mut impl Iterator<Item = Line>,
    opened_at: usize,
) -> Result<Vec<String>, ConfigError> {
    let mut responses = Vec::new();

    for line in lines.by_ref() {
        let (statement, closes) = match line.tokens.split_last() {
            Some((Token::Close, statement)) => (statement, true),
            _ => (line.tokens.as_slice(), false),
        };

        match statement.split_first() {
            Some((Token::Word(keyword), args)) => match keyword.as_str() {
                RESPONSES => {
                    let records = words(args, line.number)?;
                    if records.is_empty() {
                        return Err(ConfigError::MissingArgument(RESPONSES.to_string()));
                    }
                    responses.extend(records);
                }
                other => return Err(ConfigError::UnknownDirective(other.to_string())),
            },
            Some(_) => {
                return Err(ConfigError::Parse(format!(
                    "line {}: unexpected brace",
                    line.number
                )))
            }
            None => {}
        }

        if closes {
            return Ok(responses);
        }
    }

    Err(ConfigError::Parse(format!(
        "unexpected end of input: block opened at line {} is not closed",
        opened_at
    )))
}

/// Net count of braces left open by `tokens`.
fn brace_depth(tokens: &[Token]) -> usize {
    tokens.iter().fold(0usize, |depth, token| match token {
        Token::Open => depth + 1,
        Token::Close => depth.saturating_sub(1),
        Token::Word(_) => depth,
    })
}

fn skip_block(
    lines: &mut impl Iterator<Item = Line>,
    mut depth: usize,
    opened_at: usize,
) -> Result<(), ConfigError> {
    for line in lines.by_ref() {
        for token in &line.tokens {
            match token {
                Token::Open => depth += 1,
                Token::Close => depth -= 1,
                Token::Word(_) => {}
            }
            if depth == 0 {
                return Ok(());
            }
        }
    }
    Err(ConfigError::Parse(format!(
        "unexpected end of input: block opened at line {} is not closed",
        opened_at
    )))
}

fn words(tokens: &[Token], line: usize) -> Result<Vec<String>, ConfigError> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Word(word) => Ok(word.clone()),
            _ => Err(ConfigError::Parse(format!(
                "line {}: unexpected brace in argument list",
                line
            ))),
        })
        .collect()
}

/// Splits input into lines of tokens. A quoted token may span lines; it is
/// attributed to the line it started on. Inside quotes only `\"` is an
/// escape, every other backslash is kept verbatim for the record parser.
fn tokenize(input: &str) -> Result<Vec<Line>, ConfigError> {
    let mut lines = Vec::new();
    let mut current = Line {
        number: 1,
        tokens: Vec::new(),
    };
    let mut line_number = 1;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => {
                line_number += 1;
                let finished = std::mem::replace(
                    &mut current,
                    Line {
                        number: line_number,
                        tokens: Vec::new(),
                    },
                );
                lines.push(finished);
            }
            c if c.is_whitespace() => {}
            '#' => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '"' => {
                let start = line_number;
                let mut value = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' if chars.peek() == Some(&'"') => {
                            chars.next();
                            value.push('"');
                        }
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\n' => {
                            line_number += 1;
                            value.push(c);
                        }
                        _ => value.push(c),
                    }
                }
                if !closed {
                    return Err(ConfigError::Parse(format!(
                        "line {}: unterminated quoted string",
                        start
                    )));
                }
                current.tokens.push(Token::Word(value));
            }
            _ => {
                let mut value = String::new();
                value.push(ch);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || next == '"' {
                        break;
                    }
                    value.push(next);
                    chars.next();
                }
                current.tokens.push(match value.as_str() {
                    "{" => Token::Open,
                    "}" => Token::Close,
                    _ => Token::Word(value),
                });
            }
        }
    }
    lines.push(current);

    Ok(lines)
}
