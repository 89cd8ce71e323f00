use TSPL::Parser;

use crate::formula::Cform;

pub const UNARY_OPERATORS: &[char] = &['~'];
pub const BINARY_OPERATORS: &[char] = &['^', 'V', '>', '-'];

// deeply nested input would otherwise exhaust the call stack
const MAX_NESTING_DEPTH: usize = 128;

pub fn is_pname(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_cname(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_unary_operator(c: char) -> bool {
    UNARY_OPERATORS.contains(&c)
}

pub fn is_binary_operator(c: char) -> bool {
    BINARY_OPERATORS.contains(&c)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub index: usize,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "char {}: {}", self.index, self.message)
    }
}

pub struct FormulaParser<'i> {
    input: &'i str,
    index: usize,
}

impl<'i> Parser<'i> for FormulaParser<'i> {
    fn input(&mut self) -> &'i str {
        &self.input
    }

    fn index(&mut self) -> &mut usize {
        &mut self.index
    }
}

impl<'i> FormulaParser<'i> {
    pub fn new(input: &'i str) -> Self {
        Self { input, index: 0 }
    }

    fn fail<T>(&self, message: impl Into<String>) -> Result<T, ParseError> {
        Err(ParseError {
            index: self.index,
            message: message.into(),
        })
    }

    pub fn parse_cform(&mut self) -> Result<Cform, ParseError> {
        self.cform(0)
    }

    fn cform(&mut self, depth: usize) -> Result<Cform, ParseError> {
        if depth > MAX_NESTING_DEPTH {
            return self.fail("formula nested too deeply");
        }
        match self.peek_one() {
            Some(c) if is_pname(c) => {
                self.advance_one();
                Ok(Cform::Pname(c as usize - '0' as usize))
            }
            Some(c) if is_cname(c) => {
                self.advance_one();
                Ok(Cform::Cname(c))
            }
            Some('(') => {
                self.advance_one();
                // the character after '(' decides unary vs binary, irrevocably
                match self.peek_one() {
                    Some(op) if is_unary_operator(op) => {
                        self.advance_one();
                        let operand = self.cform(depth + 1)?;
                        self.close_paren()?;
                        match op {
                            '~' => Ok(Cform::Negate(Box::new(operand))),
                            _ => unreachable!("unary operator {op:?} has no constructor"),
                        }
                    }
                    _ => {
                        let left = self.cform(depth + 1)?;
                        let op = match self.peek_one() {
                            Some(op) if is_binary_operator(op) => op,
                            _ => return self.fail("expected <binary>"),
                        };
                        self.advance_one();
                        let right = self.cform(depth + 1)?;
                        self.close_paren()?;
                        Ok(match op {
                            '^' => Cform::And(Box::new(left), Box::new(right)),
                            'V' => Cform::Or(Box::new(left), Box::new(right)),
                            '>' => Cform::Implies(Box::new(left), Box::new(right)),
                            '-' => Cform::Iff(Box::new(left), Box::new(right)),
                            _ => unreachable!("binary operator {op:?} has no constructor"),
                        })
                    }
                }
            }
            _ => self.fail("expected <pname>, <cname> or \"(\""),
        }
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        match self.peek_one() {
            Some(')') => {
                self.advance_one();
                Ok(())
            }
            _ => self.fail("expected \")\""),
        }
    }

    pub fn parse_definition(&mut self) -> Result<(char, Cform), ParseError> {
        let name = match self.peek_one() {
            Some(c) if is_cname(c) => c,
            _ => return self.fail("expected <cname>"),
        };
        self.advance_one();
        match self.peek_one() {
            Some('=') => {
                self.advance_one();
            }
            _ => return self.fail("expected \"=\""),
        }
        let cform = self.cform(0)?;
        if self.peek_one().is_some() {
            return self.fail("unexpected trailing characters after <cform>");
        }
        Ok((name, cform))
    }
}

pub fn parse_assignment(line: &str) -> Result<Vec<bool>, ParseError> {
    line.chars()
        .enumerate()
        .map(|(index, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(ParseError {
                index,
                message: format!("expected 0 or 1, found {c:?}"),
            }),
        })
        .collect()
}
