use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{number, CifError};

/// A single tag value: a scalar for plain `_tag value` pairs, or an ordered
/// list for tags declared in a `loop_`.
#[derive(Debug, Clone, PartialEq)]
pub enum CifValue {
    /// Scalar value
    Text(String),
    /// Column of a `loop_`
    List(Vec<String>),
}

impl CifValue {
    /// All values as a slice; a scalar is a one-element slice.
    pub fn values(&self) -> &[String] {
        match self {
            CifValue::Text(value) => std::slice::from_ref(value),
            CifValue::List(values) => values,
        }
    }

    /// First value, if any.
    pub fn first(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }
}

/// Flat tag dictionary of the first data block of a CIF file.
#[derive(Debug, Clone, Default)]
pub struct CifDocument {
    block_name: String,
    entries: Vec<(String, CifValue)>,
    positions: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Data(String),
    Loop,
    Tag(String),
    Value(String),
    Reserved,
}

impl CifDocument {
    /// Read and parse a CIF file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CifError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse CIF text. Only the first `data_` block is read.
    pub fn parse(input: &str) -> Result<Self, CifError> {
        let tokens = tokenize(input)?;
        let mut tokens = tokens.into_iter().peekable();

        let block_name = loop {
            match tokens.next() {
                Some(Token::Data(name)) => break name,
                Some(_) => continue,
                None => return Err(CifError::MissingDataBlock),
            }
        };

        let mut document = CifDocument {
            block_name,
            ..Default::default()
        };

        while let Some(token) = tokens.next() {
            match token {
                // Second block: stop, the rest belongs to another structure
                Token::Data(_) => break,
                Token::Reserved => continue,
                Token::Tag(tag) => match tokens.next() {
                    Some(Token::Value(value)) => document.insert(tag, CifValue::Text(value)),
                    _ => return Err(CifError::MissingValue(tag)),
                },
                Token::Loop => {
                    let mut tags = Vec::new();
                    while let Some(Token::Tag(_)) = tokens.peek() {
                        if let Some(Token::Tag(tag)) = tokens.next() {
                            tags.push(tag);
                        }
                    }
                    if tags.is_empty() {
                        return Err(CifError::EmptyLoop);
                    }

                    let mut values = Vec::new();
                    while let Some(Token::Value(_)) = tokens.peek() {
                        if let Some(Token::Value(value)) = tokens.next() {
                            values.push(value);
                        }
                    }
                    if values.len() % tags.len() != 0 {
                        return Err(CifError::RaggedLoop {
                            tags: tags.len(),
                            values: values.len(),
                        });
                    }

                    let width = tags.len();
                    for (column, tag) in tags.into_iter().enumerate() {
                        let column_values = values
                            .iter()
                            .skip(column)
                            .step_by(width)
                            .cloned()
                            .collect();
                        document.insert(tag, CifValue::List(column_values));
                    }
                }
                Token::Value(value) => return Err(CifError::UnexpectedValue(value)),
            }
        }

        Ok(document)
    }

    /// Name following `data_` in the block header
    pub fn block_name(&self) -> &str {
        &self.block_name
    }

    /// Look up a tag
    pub fn get(&self, tag: &str) -> Option<&CifValue> {
        self.positions.get(tag).map(|&i| &self.entries[i].1)
    }

    /// First value of a tag as text
    pub fn text(&self, tag: &str) -> Option<&str> {
        self.get(tag).and_then(CifValue::first)
    }

    /// First value of a tag as a number, ignoring standard uncertainties
    pub fn number(&self, tag: &str) -> Option<f64> {
        self.text(tag).and_then(number::parse_number)
    }

    /// Iterate over tags in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CifValue)> {
        self.entries.iter().map(|(tag, value)| (tag.as_str(), value))
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block has no tags
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, tag: String, value: CifValue) {
        match self.positions.get(&tag) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.positions.insert(tag.clone(), self.entries.len());
                self.entries.push((tag, value));
            }
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CifError> {
    let mut tokens = Vec::new();
    let mut lines = input.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let Some(first) = line.strip_prefix(';') else {
            tokenize_line(line, index + 1, &mut tokens)?;
            continue;
        };

        // Multi-line text field, closed by a line starting with ';'
        let mut text = first.to_string();
        let mut trailing = None;
        for (_, next) in lines.by_ref() {
            if let Some(rest) = next.strip_prefix(';') {
                trailing = Some(rest);
                break;
            }
            text.push('\n');
            text.push_str(next);
        }

        let Some(rest) = trailing else {
            return Err(CifError::UnterminatedTextField { line: index + 1 });
        };
        tokens.push(Token::Value(text.trim().to_string()));
        tokenize_line(rest, index + 1, &mut tokens)?;
    }

    Ok(tokens)
}

fn tokenize_line(line: &str, line_no: usize, tokens: &mut Vec<Token>) -> Result<(), CifError> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        if c == b'#' {
            break;
        }

        if c == b'\'' || c == b'"' {
            // A quote only closes when followed by whitespace or end of line
            let start = i + 1;
            let mut end = start;
            loop {
                if end >= bytes.len() {
                    return Err(CifError::UnterminatedQuote { line: line_no });
                }
                if bytes[end] == c && (end + 1 == bytes.len() || bytes[end + 1].is_ascii_whitespace()) {
                    break;
                }
                end += 1;
            }
            tokens.push(Token::Value(line[start..end].to_string()));
            i = end + 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        tokens.push(classify(&line[start..i]));
    }

    Ok(())
}

fn classify(word: &str) -> Token {
    let lower = word.to_ascii_lowercase();
    if lower.starts_with("data_") {
        Token::Data(word[5..].to_string())
    } else if lower == "loop_" {
        Token::Loop
    } else if lower.starts_with("save_") || lower == "global_" || lower == "stop_" {
        Token::Reserved
    } else if word.starts_with('_') {
        Token::Tag(word.to_string())
    } else {
        Token::Value(word.to_string())
    }
}
