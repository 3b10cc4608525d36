use clicalc::{
    engine::{dispatch, operations},
    utils::{
        error::CalcError,
        types::Operation,
    },
};

const SAMPLES: &[&[f64]] = &[
    &[],
    &[7.0],
    &[1.0, 2.0, 3.0],
    &[10.0, 20.0, 1.0],
    &[-3.5, 4.0, 0.25, 8.0],
    &[1e10, -1e10, 3.0],
];

#[test]
fn test_add_matches_sum() {
    for xs in SAMPLES {
        let expected: f64 = xs.iter().sum();
        assert_eq!(operations::add(xs), expected, "add({:?})", xs);
    }
    assert_eq!(operations::add(&[]), 0.0);
    assert!(operations::add(&[]).is_sign_positive());
}

#[test]
fn test_subtract_is_first_minus_rest() {
    for xs in SAMPLES.iter().filter(|xs| !xs.is_empty()) {
        let expected = xs[0] - xs[1..].iter().sum::<f64>();
        assert_eq!(operations::subtract(xs), Ok(expected), "subtract({:?})", xs);
    }
}

#[test]
fn test_multiply_matches_product() {
    for xs in SAMPLES {
        let expected: f64 = xs.iter().product();
        assert_eq!(operations::multiply(xs), expected, "multiply({:?})", xs);
    }
    assert_eq!(operations::multiply(&[]), 1.0);
}

#[test]
fn test_divide_is_sequential() {
    for xs in SAMPLES.iter().filter(|xs| !xs.is_empty()) {
        let expected = xs[1..].iter().fold(xs[0], |acc, d| acc / d);
        assert_eq!(operations::divide(xs), Ok(expected), "divide({:?})", xs);
    }
}

#[test]
fn test_divide_rejects_zero_in_every_position() {
    let base = [64.0, 2.0, 4.0, 8.0];
    for position in 1..base.len() {
        let mut xs = base.to_vec();
        xs[position] = 0.0;
        assert_eq!(
            operations::divide(&xs),
            Err(CalcError::DivisionByZero { index: position })
        );
    }
}

#[test]
fn test_zero_dividend_is_allowed() {
    assert_eq!(operations::divide(&[0.0, 5.0]), Ok(0.0));
}

#[test]
fn test_empty_operands_for_subtract_and_divide() {
    for op in [Operation::Subtract, Operation::Divide] {
        match dispatch(op, vec![]) {
            Err(CalcError::EmptyOperands { operation }) => assert_eq!(operation, op.name()),
            other => panic!("Expected EmptyOperands for {}, got {:?}", op, other),
        }
    }
}

#[test]
fn test_scenarios() {
    let cases: &[(Operation, &[f64], f64)] = &[
        (Operation::Add, &[1.0, 2.0, 3.0], 6.0),
        (Operation::Subtract, &[10.0, 2.0], 8.0),
        (Operation::Multiply, &[1.0, 2.0, 3.0], 6.0),
        (Operation::Divide, &[50.0, 2.0, 5.0], 5.0),
        (Operation::Add, &[], 0.0),
    ];

    for (op, numbers, expected) in cases {
        let calc = dispatch(*op, numbers.to_vec()).unwrap();
        assert_eq!(calc.result, *expected, "{} {:?}", op, numbers);
        assert_eq!(
            calc.result.is_sign_negative(),
            expected.is_sign_negative(),
            "sign of {} {:?}",
            op,
            numbers
        );
    }

    assert_eq!(
        dispatch(Operation::Divide, vec![10.0, 0.0]),
        Err(CalcError::DivisionByZero { index: 1 })
    );
}
