/// One of the four arithmetic operations of the numbers game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '×',
            Operation::Div => '÷',
        }
    }

    /// Map an operator character to its operation, accepting ASCII aliases
    pub fn from_symbol(symbol: char) -> Option<Operation> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Sub),
            '×' | '*' | 'x' => Some(Operation::Mul),
            '÷' | '/' => Some(Operation::Div),
            _ => None,
        }
    }

    /// Apply the operation to `x` and `y` where the caller guarantees `x >= y`.
    ///
    /// Returns `None` when the operation is not admitted for the pair:
    /// - subtraction needs `x > y` (no zero or negative results)
    /// - multiplication needs both operands greater than one
    /// - division needs a divisor greater than one that divides `x` exactly
    ///
    /// Results that do not fit in an `i64` are rejected the same way.
    pub fn apply(self, x: i64, y: i64) -> Option<i64> {
        match self {
            Operation::Add => x.checked_add(y),
            Operation::Sub => {
                if x > y {
                    x.checked_sub(y)
                } else {
                    None
                }
            }
            Operation::Mul => {
                if x > 1 && y > 1 {
                    x.checked_mul(y)
                } else {
                    None
                }
            }
            Operation::Div => {
                if y > 1 && x % y == 0 {
                    Some(x / y)
                } else {
                    None
                }
            }
        }
    }
}

/// Lazily yield every admitted `(operation, result)` for the ordered pair `x >= y`
pub fn operations(x: i64, y: i64) -> impl Iterator<Item = (Operation, i64)> {
    Operation::ALL
        .into_iter()
        .filter_map(move |op| op.apply(x, y).map(|result| (op, result)))
}
