use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Errors parsing a chemical formula
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormulaError {
    /// Nothing to parse
    #[error("empty formula")]
    Empty,

    /// A character that cannot start an element, group or count
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// Offending character
        character: char,
        /// Byte offset in the formula
        position: usize,
    },

    /// A group was opened and not closed, or closed with the wrong bracket
    #[error("unbalanced bracket at position {0}")]
    UnbalancedBracket(usize),

    /// A count could not be read as a number
    #[error("invalid count '{0}'")]
    InvalidCount(String),
}

/// Element → count mapping of a formula, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    elements: Vec<(String, f64)>,
}

impl Composition {
    /// Parse a formula such as `Fe2O3`, `Ca(OH)2` or `K0.5Na0.5NbO3`.
    ///
    /// Repeated elements are summed; a missing count is 1. Groups in `()`,
    /// `[]` or `{}` may carry a multiplier.
    pub fn parse(formula: &str) -> Result<Self, FormulaError> {
        if formula.trim().is_empty() {
            return Err(FormulaError::Empty);
        }

        let mut parser = Parser {
            chars: formula.char_indices().peekable(),
        };
        let composition = parser.group(None)?;
        if composition.elements.is_empty() {
            return Err(FormulaError::Empty);
        }
        if let Some((element, count)) = composition.elements.iter().find(|(_, n)| !n.is_finite()) {
            return Err(FormulaError::InvalidCount(format!("{element}{count}")));
        }
        Ok(composition)
    }

    /// Elements with their counts
    pub fn elements(&self) -> &[(String, f64)] {
        &self.elements
    }

    /// Count of one element, zero when absent
    pub fn count(&self, element: &str) -> f64 {
        self.elements
            .iter()
            .find(|(el, _)| el == element)
            .map_or(0.0, |(_, n)| *n)
    }

    fn add(&mut self, element: &str, count: f64) {
        match self.elements.iter_mut().find(|(el, _)| el == element) {
            Some((_, n)) => *n += count,
            None => self.elements.push((element.to_string(), count)),
        }
    }

    fn merge(&mut self, other: Composition, multiplier: f64) {
        for (element, count) in other.elements {
            self.add(&element, count * multiplier);
        }
    }
}

/// Renders element+count pairs with no separators; whole counts print without
/// a decimal point (`Fe2O3`, `Na1Cl1`, `K0.5Na0.5Nb1O3`).
impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, count) in &self.elements {
            write!(f, "{element}{count}")?;
        }
        Ok(())
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn group(&mut self, close: Option<(char, usize)>) -> Result<Composition, FormulaError> {
        let mut composition = Composition::default();

        while let Some(&(position, c)) = self.chars.peek() {
            match c {
                'A'..='Z' => {
                    self.chars.next();
                    let mut element = c.to_string();
                    while let Some(&(_, lower)) = self.chars.peek() {
                        if !lower.is_ascii_lowercase() {
                            break;
                        }
                        element.push(lower);
                        self.chars.next();
                    }
                    let count = self.count()?.unwrap_or(1.0);
                    composition.add(&element, count);
                }
                '(' | '[' | '{' => {
                    self.chars.next();
                    let inner = self.group(Some((closing(c), position)))?;
                    let multiplier = self.count()?.unwrap_or(1.0);
                    composition.merge(inner, multiplier);
                }
                ')' | ']' | '}' => {
                    return match close {
                        Some((expected, _)) if expected == c => {
                            self.chars.next();
                            Ok(composition)
                        }
                        _ => Err(FormulaError::UnbalancedBracket(position)),
                    };
                }
                _ => {
                    return Err(FormulaError::UnexpectedCharacter {
                        character: c,
                        position,
                    })
                }
            }
        }

        match close {
            Some((_, opened_at)) => Err(FormulaError::UnbalancedBracket(opened_at)),
            None => Ok(composition),
        }
    }

    fn count(&mut self) -> Result<Option<f64>, FormulaError> {
        let mut digits = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if !(c.is_ascii_digit() || c == '.') {
                break;
            }
            digits.push(c);
            self.chars.next();
        }

        if digits.is_empty() {
            return Ok(None);
        }
        match digits.parse::<f64>() {
            Ok(count) if count.is_finite() => Ok(Some(count)),
            _ => Err(FormulaError::InvalidCount(digits)),
        }
    }
}

fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}
