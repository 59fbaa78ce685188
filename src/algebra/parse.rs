use crate::algebra::CoefficientMap;
use std::ops::Range;

/// Parse a normalized equation (lowercase, no whitespace) into the
/// coefficients of its reduced form.
///
/// Everything on the right-hand side of the `=` gets moved across to the
/// left, so the resulting [`CoefficientMap`] describes `polynomial = 0`.
pub fn parse(s: &str) -> Result<CoefficientMap, SyntaxError> {
    Parser::new(s).parse()
}

/// A state machine which reads an equation one term at a time and sums the
/// coefficients for each power of `x`.
///
/// The grammar:
///
/// ```text
/// equation    := term+
///
/// term        := sign? coefficient? variable?
///
/// sign        := "+" | "-" | "=" | "=-"
/// coefficient := DIGITS ( "." DIGITS )?
/// variable    := "*"? "x" ( "^" DIGITS | "**" DIGITS | DIGITS )?
/// ```
///
/// Only the first term may omit its sign, and each term needs at least a
/// coefficient or a variable.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    src: &'a str,
    terms: Terms<'a>,
    right_hand_side: bool,
    coefficients: CoefficientMap,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Parser {
            src,
            terms: Terms::new(src),
            right_hand_side: false,
            coefficients: CoefficientMap::new(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<CoefficientMap, SyntaxError> {
        check_equation_shape(self.src)?;

        while let Some(term) = self.terms.next() {
            let term = term?;
            self.accumulate(&term)?;
        }

        self.coefficients.fill_missing();
        log::debug!("Parsed {:?} as {:?}", self.src, self.coefficients);

        Ok(self.coefficients)
    }

    fn accumulate(&mut self, term: &Term<'a>) -> Result<(), SyntaxError> {
        if term.sign.crosses_equals() {
            self.right_hand_side = true;
        }

        // negating for a "-" and again for being on the right-hand side
        // cancel out
        let flips =
            term.sign.is_negative() as i32 + self.right_hand_side as i32;
        let value = term.coefficient()? * (-1.0_f64).powi(flips);
        let power = term.power()?;

        if log::log_enabled!(log::Level::Trace) {
            let tokens: Vec<_> =
                term.tokens().map(|tok| (tok.kind, tok.text)).collect();
            log::trace!(
                "{:?} at {:?} ({:?}) contributes {} to x^{}",
                &self.src[term.span.clone()],
                term.span,
                tokens,
                value,
                power
            );
        }

        self.coefficients.accumulate(power, value);

        // finite terms can still add up to infinity
        if !self.coefficients.coefficient(power).is_finite() {
            return Err(SyntaxError::CoefficientOutOfRange {
                coefficient: self.src[term.span.clone()].to_string(),
            });
        }

        Ok(())
    }
}

/// The checks which look at the equation as a whole before any terms are
/// read.
fn check_equation_shape(src: &str) -> Result<(), SyntaxError> {
    if !src.contains('x') {
        return Err(SyntaxError::NoVariables);
    }

    let found = src.matches('=').count();
    if found != 1 {
        return Err(SyntaxError::EqualsCount { found });
    }

    if let Some(index) = src.find('=') {
        let next = src[index + 1..].chars().next();

        if index == 0 || next.is_none() || matches!(next, Some('+') | Some('*'))
        {
            return Err(SyntaxError::MisplacedEquals { index });
        }
    }

    Ok(())
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Syntax error! No variables detected.")]
    NoVariables,
    #[error("Syntax error! Unexpected number of '='.")]
    EqualsCount { found: usize },
    #[error("Syntax error near '='.")]
    MisplacedEquals { index: usize },
    #[error("Syntax error! Unexpected value: '{character}'")]
    UnexpectedValue { character: char, index: usize },
    #[error("Syntax error! Exponent out of range: '{exponent}'")]
    ExponentOutOfRange { exponent: String },
    #[error("Syntax error! Coefficient out of range: '{coefficient}'")]
    CoefficientOutOfRange { coefficient: String },
}

/// The sign in front of a term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Sign {
    /// The very first term doesn't need a sign.
    Implicit,
    Plus,
    Minus,
    Equals,
    EqualsMinus,
}

impl Sign {
    fn is_negative(self) -> bool {
        match self {
            Sign::Minus | Sign::EqualsMinus => true,
            _ => false,
        }
    }

    fn crosses_equals(self) -> bool {
        match self {
            Sign::Equals | Sign::EqualsMinus => true,
            _ => false,
        }
    }
}

/// The kinds of token that can make up a term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    Coefficient,
    Variable,
    Exponent,
}

#[derive(Debug, Clone, PartialEq)]
struct Token<'a> {
    text: &'a str,
    span: Range<usize>,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    fn from_text(
        original_source: &'a str,
        span: Range<usize>,
        kind: TokenKind,
    ) -> Self {
        Token {
            text: &original_source[span.clone()],
            span,
            kind,
        }
    }
}

/// A single signed monomial, `coefficient * x^exponent`.
#[derive(Debug, Clone, PartialEq)]
struct Term<'a> {
    sign: Sign,
    coefficient: Option<Token<'a>>,
    variable: Option<Token<'a>>,
    exponent: Option<Token<'a>>,
    span: Range<usize>,
}

impl<'a> Term<'a> {
    fn coefficient(&self) -> Result<f64, SyntaxError> {
        let token = match self.coefficient {
            Some(ref token) => token,
            None => return Ok(1.0),
        };

        let value: f64 =
            token.text.parse().expect("Guaranteed correct by the lexer");

        if value.is_finite() {
            Ok(value)
        } else {
            Err(SyntaxError::CoefficientOutOfRange {
                coefficient: token.text.to_string(),
            })
        }
    }

    fn power(&self) -> Result<u32, SyntaxError> {
        match (&self.variable, &self.exponent) {
            (None, _) => Ok(0),
            (Some(_), None) => Ok(1),
            (Some(_), Some(exponent)) => exponent.text.parse().map_err(|_| {
                SyntaxError::ExponentOutOfRange {
                    exponent: exponent.text.to_string(),
                }
            }),
        }
    }

    fn tokens(&self) -> impl Iterator<Item = &Token<'a>> + '_ {
        self.coefficient
            .iter()
            .chain(self.variable.iter())
            .chain(self.exponent.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Terms<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Terms<'a> {
    fn new(src: &'a str) -> Self { Terms { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn peek_nth(&self, n: usize) -> Option<char> { self.rest().chars().nth(n) }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn next_is_digit(&self, n: usize) -> bool {
        self.peek_nth(n).map(|c| c.is_ascii_digit()).unwrap_or(false)
    }

    fn take_while<P>(&mut self, mut predicate: P) -> Option<Range<usize>>
    where
        P: FnMut(char) -> bool,
    {
        let start = self.cursor;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }

        let end = self.cursor;

        if start != end {
            Some(start..end)
        } else {
            None
        }
    }

    fn chomp_integer(&mut self) -> Option<Range<usize>> {
        self.take_while(|c| c.is_ascii_digit())
    }

    fn chomp_sign(&mut self) -> Option<Sign> {
        let sign = match self.peek() {
            Some('+') => Sign::Plus,
            Some('-') => Sign::Minus,
            Some('=') if self.peek_nth(1) == Some('-') => {
                self.advance();
                Sign::EqualsMinus
            },
            Some('=') => Sign::Equals,
            _ if self.cursor == 0 => return Some(Sign::Implicit),
            _ => return None,
        };

        self.advance();
        Some(sign)
    }

    fn chomp_coefficient(&mut self) -> Option<Token<'a>> {
        let Range { start, .. } = self.chomp_integer()?;

        // only treat the "." as a decimal point when digits follow it
        if self.peek() == Some('.') && self.next_is_digit(1) {
            self.advance();
            self.chomp_integer();
        }

        let end = self.cursor;
        Some(Token::from_text(self.src, start..end, TokenKind::Coefficient))
    }

    fn chomp_variable(&mut self) -> Option<Token<'a>> {
        let start = self.cursor;

        match (self.peek(), self.peek_nth(1)) {
            (Some('*'), Some('x')) => {
                self.advance();
                self.advance();
            },
            (Some('x'), _) => {
                self.advance();
            },
            _ => return None,
        }

        let end = self.cursor;
        Some(Token::from_text(self.src, start..end, TokenKind::Variable))
    }

    fn chomp_exponent(&mut self) -> Option<Token<'a>> {
        match (self.peek(), self.peek_nth(1)) {
            (Some('^'), _) if self.next_is_digit(1) => {
                self.advance();
            },
            (Some('*'), Some('*')) if self.next_is_digit(2) => {
                self.advance();
                self.advance();
            },
            _ => {},
        }

        let span = self.chomp_integer()?;
        Some(Token::from_text(self.src, span, TokenKind::Exponent))
    }

    fn chomp_term(&mut self) -> Result<Term<'a>, SyntaxError> {
        let start = self.cursor;

        let term = self.chomp_sign().and_then(|sign| {
            let coefficient = self.chomp_coefficient();
            let variable = self.chomp_variable();
            let exponent = if variable.is_some() {
                self.chomp_exponent()
            } else {
                None
            };

            if coefficient.is_none() && variable.is_none() {
                return None;
            }

            Some(Term {
                sign,
                coefficient,
                variable,
                exponent,
                span: start..self.cursor,
            })
        });

        match term {
            Some(term) => Ok(term),
            None => {
                // point at where the term started, not where we gave up
                self.cursor = start;
                let character = self
                    .peek()
                    .expect("Terms::next() never reads past the end");
                Err(SyntaxError::UnexpectedValue {
                    character,
                    index: start,
                })
            },
        }
    }
}

impl<'a> Iterator for Terms<'a> {
    type Item = Result<Term<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest().is_empty() {
            return None;
        }

        let result = self.chomp_term();

        if result.is_err() {
            // no partial results after an error
            self.cursor = self.src.len();
        }

        Some(result)
    }
}
