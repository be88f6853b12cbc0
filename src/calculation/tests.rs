use crate::calculation::{Calculation, CalculationError, Operation, evaluate, literals, operations};

#[test]
fn test_operations_all_four() {
    let results: Vec<_> = operations(6, 3).collect();
    assert_eq!(
        results,
        vec![
            (Operation::Add, 9),
            (Operation::Sub, 3),
            (Operation::Mul, 18),
            (Operation::Div, 2),
        ]
    );
}

#[test]
fn test_operations_equal_operands_skip_subtraction() {
    let results: Vec<_> = operations(4, 4).collect();
    assert_eq!(
        results,
        vec![
            (Operation::Add, 8),
            (Operation::Mul, 16),
            (Operation::Div, 1)
        ]
    );
}

#[test]
fn test_operations_one_is_never_a_factor_or_divisor() {
    let results: Vec<_> = operations(7, 1).collect();
    assert_eq!(results, vec![(Operation::Add, 8), (Operation::Sub, 6)]);
}

#[test]
fn test_operations_inexact_division_skipped() {
    let results: Vec<_> = operations(7, 2).collect();
    assert_eq!(
        results,
        vec![
            (Operation::Add, 9),
            (Operation::Sub, 5),
            (Operation::Mul, 14)
        ]
    );
}

#[test]
fn test_operations_overflow_skipped() {
    let results: Vec<_> = operations(i64::MAX, 2).collect();
    assert_eq!(results, vec![(Operation::Sub, i64::MAX - 2)]);
}

#[test]
fn test_operation_symbols() {
    let symbols: String = Operation::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-×÷");
    assert_eq!(Operation::from_symbol('*'), Some(Operation::Mul));
    assert_eq!(Operation::from_symbol('/'), Some(Operation::Div));
    assert_eq!(Operation::from_symbol('^'), None);
}

#[test]
fn test_singleton() {
    let calc = Calculation::singleton(25);
    assert_eq!(calc.value, 25);
    assert_eq!(calc.text, "25");
    assert!(calc.is_singleton);
    assert_eq!(calc.operand_text(), "25");
}

#[test]
fn test_combine_orders_by_value() {
    let three = Calculation::singleton(3);
    let five = Calculation::singleton(5);
    let texts: Vec<String> = Calculation::combine(&three, &five)
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["5 + 3", "5 - 3", "5 × 3"]);
}

#[test]
fn test_combine_parenthesizes_compound_operands() {
    let sum = Calculation {
        value: 8,
        text: "5 + 3".to_string(),
        is_singleton: false,
    };
    let two = Calculation::singleton(2);
    let combined: Vec<Calculation> = Calculation::combine(&two, &sum).collect();
    assert_eq!(combined.len(), 4);
    if let Some(product) = combined.get(2) {
        assert_eq!(product.text, "(5 + 3) × 2");
        assert_eq!(product.value, 16);
        assert!(!product.is_singleton);
    }
    if let Some(quotient) = combined.get(3) {
        assert_eq!(quotient.text, "(5 + 3) ÷ 2");
        assert_eq!(quotient.value, 4);
    }
}

#[test]
fn test_display() {
    let calc = Calculation {
        value: 15,
        text: "5 × 3".to_string(),
        is_singleton: false,
    };
    assert_eq!(format!("{}", calc), "5 × 3");
    assert_eq!(format!("{:#}", calc), "15 = 5 × 3");
}

#[test]
fn test_evaluate_nested() {
    assert_eq!(evaluate("((100 + 4) × 6) - 25"), Ok(599));
    assert_eq!(evaluate("(75 - 25) ÷ (7 - 2)"), Ok(10));
    assert_eq!(evaluate("42"), Ok(42));
}

#[test]
fn test_evaluate_negative_literals() {
    assert_eq!(evaluate("5 - -3"), Ok(8));
    assert_eq!(evaluate("-4"), Ok(-4));
}

#[test]
fn test_evaluate_ascii_aliases() {
    assert_eq!(evaluate("(6 * 4) / 3"), Ok(8));
}

#[test]
fn test_evaluate_errors() {
    assert_eq!(evaluate("4 ÷ 0"), Err(CalculationError::DivisionByZero));
    assert_eq!(
        evaluate("7 ÷ 2"),
        Err(CalculationError::InexactDivision {
            dividend: 7,
            divisor: 2
        })
    );
    assert_eq!(evaluate("(3 + 4"), Err(CalculationError::UnexpectedEnd));
    assert_eq!(evaluate("3 +"), Err(CalculationError::UnexpectedEnd));
    assert!(matches!(
        evaluate("3 4"),
        Err(CalculationError::UnexpectedToken(_))
    ));
    assert!(matches!(
        evaluate("99999999999999999999"),
        Err(CalculationError::InvalidLiteral(_))
    ));
}

#[test]
fn test_literals() {
    assert_eq!(literals("((100 + 4) × 6) - 25"), Ok(vec![100, 4, 6, 25]));
    assert_eq!(literals("5 - -3"), Ok(vec![5, -3]));
}

#[test]
fn test_combined_text_evaluates_to_value() {
    let a = Calculation::singleton(9);
    let b = Calculation::singleton(3);
    for calc in Calculation::combine(&a, &b) {
        assert_eq!(evaluate(&calc.text), Ok(calc.value), "{}", calc.text);
    }
}
