use std::borrow::Cow;

use crate::calculation::ops::operations;

/// An arithmetic expression over some subset of the numbers, paired with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub value: i64,
    pub text: String,
    /// Set for a bare number, which never needs parentheses as an operand
    pub is_singleton: bool,
}

impl Calculation {
    pub fn singleton(number: i64) -> Self {
        Self {
            value: number,
            text: number.to_string(),
            is_singleton: true,
        }
    }

    /// Text of this calculation when embedded as an operand of a larger one
    pub fn operand_text(&self) -> Cow<'_, str> {
        if self.is_singleton {
            Cow::Borrowed(&self.text)
        } else {
            Cow::Owned(format!("({})", self.text))
        }
    }

    /// Combine two calculations through every admitted operation.
    ///
    /// Operands are ordered by value, larger first, regardless of which side
    /// supplied them.
    pub fn combine<'a>(
        a: &'a Calculation,
        b: &'a Calculation,
    ) -> impl Iterator<Item = Calculation> + 'a {
        let (larger, smaller) = if a.value < b.value { (b, a) } else { (a, b) };
        operations(larger.value, smaller.value).map(move |(op, value)| Calculation {
            value,
            text: format!(
                "{} {} {}",
                larger.operand_text(),
                op.symbol(),
                smaller.operand_text()
            ),
            is_singleton: false,
        })
    }
}
