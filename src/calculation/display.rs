use std::fmt;

use crate::calculation::ast::Calculation;

/// `{}` prints the expression, `{:#}` prints `value = expression`
impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} = {}", self.value, self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}
