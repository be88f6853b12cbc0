use std::iter::Peekable;
use std::str::Chars;

use log::debug;

use crate::calculation::errors::CalculationError;
use crate::calculation::ops::Operation;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Digits(String),
    Op(Operation),
    Open,
    Close,
}

fn tokenize(text: &str) -> Result<Vec<Token>, CalculationError> {
    let mut tokens = Vec::new();
    let mut chars: Peekable<Chars> = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            tokens.push(Token::Digits(digits));
        } else if c == '(' {
            tokens.push(Token::Open);
            chars.next();
        } else if c == ')' {
            tokens.push(Token::Close);
            chars.next();
        } else if let Some(op) = Operation::from_symbol(c) {
            tokens.push(Token::Op(op));
            chars.next();
        } else {
            return Err(CalculationError::UnexpectedToken(c.to_string()));
        }
    }

    Ok(tokens)
}

/// Recursive-descent reader over `operand (op operand)*`, folding left to right
struct Parser {
    tokens: Vec<Token>,
    position: usize,
    literals: Vec<i64>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            literals: Vec::new(),
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn parse_all(&mut self) -> Result<i64, CalculationError> {
        let value = self.parse_expression()?;
        match self.advance() {
            None => Ok(value),
            Some(token) => Err(CalculationError::UnexpectedToken(format!("{:?}", token))),
        }
    }

    fn parse_expression(&mut self) -> Result<i64, CalculationError> {
        let mut value = self.parse_operand()?;
        while let Some(Token::Op(op)) = self.peek().cloned() {
            self.position += 1;
            let rhs = self.parse_operand()?;
            value = apply_exact(op, value, rhs)?;
        }
        Ok(value)
    }

    fn parse_operand(&mut self) -> Result<i64, CalculationError> {
        match self.advance() {
            Some(Token::Digits(digits)) => self.literal(&digits),
            Some(Token::Op(Operation::Sub)) => match self.advance() {
                Some(Token::Digits(digits)) => self.literal(&format!("-{}", digits)),
                Some(token) => Err(CalculationError::UnexpectedToken(format!("{:?}", token))),
                None => Err(CalculationError::UnexpectedEnd),
            },
            Some(Token::Open) => {
                let value = self.parse_expression()?;
                match self.advance() {
                    Some(Token::Close) => Ok(value),
                    Some(token) => Err(CalculationError::UnexpectedToken(format!("{:?}", token))),
                    None => Err(CalculationError::UnexpectedEnd),
                }
            }
            Some(token) => Err(CalculationError::UnexpectedToken(format!("{:?}", token))),
            None => Err(CalculationError::UnexpectedEnd),
        }
    }

    fn literal(&mut self, text: &str) -> Result<i64, CalculationError> {
        let value = text
            .parse::<i64>()
            .map_err(|_| CalculationError::InvalidLiteral(text.to_string()))?;
        self.literals.push(value);
        Ok(value)
    }
}

/// Plain integer arithmetic, without the pruning rules used while searching
fn apply_exact(op: Operation, lhs: i64, rhs: i64) -> Result<i64, CalculationError> {
    match op {
        Operation::Add => lhs.checked_add(rhs).ok_or(CalculationError::Overflow),
        Operation::Sub => lhs.checked_sub(rhs).ok_or(CalculationError::Overflow),
        Operation::Mul => lhs.checked_mul(rhs).ok_or(CalculationError::Overflow),
        Operation::Div => {
            if rhs == 0 {
                debug!("Division by zero attempted");
                Err(CalculationError::DivisionByZero)
            } else if lhs % rhs != 0 {
                Err(CalculationError::InexactDivision {
                    dividend: lhs,
                    divisor: rhs,
                })
            } else {
                lhs.checked_div(rhs).ok_or(CalculationError::Overflow)
            }
        }
    }
}

/// Evaluate an infix expression with exact integer arithmetic.
///
/// # Errors
///
/// Returns an error when the text is not a well-formed expression, or when
/// evaluating it divides by zero, divides inexactly or overflows.
pub fn evaluate(text: &str) -> Result<i64, CalculationError> {
    debug!("Evaluating expression: {}", text);
    let mut parser = Parser::new(tokenize(text)?);
    let result = parser.parse_all();

    match &result {
        Ok(value) => debug!("Expression evaluated to: {}", value),
        Err(e) => debug!("Expression evaluation failed: {}", e),
    }

    result
}

/// The number literals of an expression, in order of appearance.
///
/// # Errors
///
/// Fails under the same conditions as [`evaluate`].
pub fn literals(text: &str) -> Result<Vec<i64>, CalculationError> {
    let mut parser = Parser::new(tokenize(text)?);
    parser.parse_all()?;
    Ok(parser.literals)
}
