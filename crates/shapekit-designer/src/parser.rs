//! Path mini-language parser.
//!
//! Turns a `d` attribute such as `M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0`
//! into the structured [`CommandsDef`] accepted by
//! [`crate::PathCommands::from_defs`].
//!
//! Supported letters are `M L H V C S Z` in both cases. Each letter must be
//! followed by exactly its number of coordinates; consecutive pairs become
//! points. Numbers may be separated by whitespace or commas, and a sign (or
//! a second decimal point) starts a new number without a separator.

use shapekit_core::{PathError, Point};

use crate::command::{CommandArg, CommandDef, CommandKind, CommandsDef};

/// A lexical unit of path data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Split path data into command letters and numbers
pub fn tokenize(data: &str) -> Result<Vec<Token>, PathError> {
    split_tokens(data)
        .into_iter()
        .enumerate()
        .map(|(position, raw)| classify(position, &raw))
        .collect()
}

fn split_tokens(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            c if c.is_ascii_whitespace() || c == ',' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '-' | '+' => {
                // Keep the sign of an exponent, otherwise start a new number.
                if !current.is_empty() && !current.ends_with(['e', 'E']) {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            '.' => {
                if current.contains(['.', 'e', 'E']) {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            'e' | 'E' if current.chars().any(|c| c.is_ascii_digit()) && !current.contains(['e', 'E']) => {
                current.push(ch);
            }
            c if c.is_alphabetic() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn classify(position: usize, raw: &str) -> Result<Token, PathError> {
    let mut chars = raw.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_alphabetic() {
            return Ok(Token::Command(c));
        }
    }

    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Token::Number)
        .ok_or_else(|| PathError::syntax(position, format!("invalid number '{}'", raw)))
}

/// Parse a `d` attribute into command definitions.
///
/// Fails with [`PathError::Syntax`] if the data is empty, does not start
/// with `M`/`m`, contains an unsupported letter or an invalid number, or a
/// command is not followed by exactly its number of coordinates.
pub fn parse(data: &str) -> Result<CommandsDef, PathError> {
    let result = tokenize(data).and_then(|tokens| parse_tokens(&tokens));
    if let Err(err) = &result {
        tracing::warn!(error = %err, "rejected path data");
    }
    result
}

fn parse_tokens(tokens: &[Token]) -> Result<CommandsDef, PathError> {
    if tokens.is_empty() {
        return Err(PathError::syntax(0, "path data is empty"));
    }

    let mut defs = CommandsDef::new();
    let mut i = 0;

    while i < tokens.len() {
        let letter = match tokens[i] {
            Token::Command(letter) => letter,
            Token::Number(n) => {
                return Err(PathError::syntax(
                    i,
                    format!("expected a command letter, found number {}", n),
                ))
            }
        };
        let kind = CommandKind::from_letter(letter)
            .ok_or_else(|| PathError::syntax(i, format!("unsupported command '{}'", letter)))?;
        if defs.is_empty() && kind != CommandKind::MoveTo {
            return Err(PathError::syntax(
                i,
                format!("path data must start with M or m, found '{}'", letter),
            ));
        }

        let numbers: Vec<f64> = tokens[i + 1..]
            .iter()
            .map_while(|token| match token {
                Token::Number(n) => Some(*n),
                Token::Command(_) => None,
            })
            .collect();

        let expected = kind.number_count();
        if numbers.len() != expected {
            return Err(PathError::syntax(
                i,
                format!(
                    "'{}' expects {} number(s), got {}",
                    letter,
                    expected,
                    numbers.len()
                ),
            ));
        }

        defs.push(build(letter, kind, &numbers));
        i += 1 + numbers.len();
    }

    Ok(defs)
}

fn build(letter: char, kind: CommandKind, numbers: &[f64]) -> CommandDef {
    if kind.takes_number() {
        return CommandDef::new(letter, numbers.iter().map(|&n| CommandArg::Number(n)));
    }

    CommandDef::new(
        letter,
        numbers
            .chunks_exact(2)
            .map(|pair| CommandArg::Point(Point::new(pair[0], pair[1]))),
    )
}
