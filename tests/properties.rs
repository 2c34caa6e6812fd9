use abacus::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::evaluator::core::Session,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::ZERO | prop::num::f64::SUBNORMAL
}

fn non_zero() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL
}

proptest! {
    #[test]
    fn literal_is_exact(x in finite()) {
        let mut session = Session::new();
        prop_assert_eq!(session.evaluate(&Expr::literal(x)).to_bits(), x.to_bits());
        prop_assert_eq!(session.diagnostics.count(), 0);
    }

    #[test]
    fn negate_and_abs(x in finite()) {
        let mut session = Session::new();
        let negated = session.evaluate(&Expr::unary(UnaryOperator::Negate, Expr::literal(x)));
        let absolute = session.evaluate(&Expr::unary(UnaryOperator::Abs, Expr::literal(x)));

        prop_assert_eq!(negated.to_bits(), (-x).to_bits());
        prop_assert_eq!(absolute.to_bits(), x.abs().to_bits());
    }

    #[test]
    fn division_matches_ieee(x in finite(), y in non_zero()) {
        let mut session = Session::new();
        let expr = Expr::binary(BinaryOperator::Div, Expr::literal(x), Expr::literal(y));
        let value = session.evaluate(&expr);

        prop_assert_eq!(value.to_bits(), (x / y).to_bits());
        prop_assert_eq!(session.diagnostics.count(), 0);
    }

    #[test]
    fn division_by_zero_always_raises(x in finite(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        for op in [BinaryOperator::Div, BinaryOperator::Mod] {
            let mut session = Session::new();
            let value = session.evaluate(&Expr::binary(op, Expr::literal(x), Expr::literal(zero)));

            prop_assert!(value.is_nan());
            prop_assert_eq!(session.diagnostics.count(), 1);
        }
    }

    #[test]
    fn remainder_takes_sign_of_dividend(x in finite(), y in non_zero()) {
        let mut session = Session::new();
        let value = session.evaluate(&Expr::binary(BinaryOperator::Mod,
                                                   Expr::literal(x),
                                                   Expr::literal(y)));

        prop_assert_eq!(value.to_bits(), (x % y).to_bits());
        prop_assert!(value == 0.0 || value.is_sign_negative() == x.is_sign_negative());
    }

    #[test]
    fn assignment_round_trips(name in "[a-z][a-z0-9_]{0,8}", x in finite()) {
        let mut session = Session::new();
        session.symbols.declare(&name).unwrap();

        prop_assert_eq!(session.evaluate(&Expr::assign(name.as_str(), Expr::literal(x))).to_bits(),
                        x.to_bits());
        prop_assert_eq!(session.evaluate(&Expr::variable(name.as_str())).to_bits(), x.to_bits());
        prop_assert_eq!(session.symbols.is_assigned(&name), Ok(true));
    }

    #[test]
    fn sentinel_implies_a_raised_error(a in -1e6f64..1e6, b in -3i32..3, c in -1e6f64..1e6) {
        // a / b + c with small integer divisors, zero included.
        let mut session = Session::new();
        let expr = Expr::binary(BinaryOperator::Add,
                                Expr::binary(BinaryOperator::Div,
                                             Expr::literal(a),
                                             Expr::literal(f64::from(b))),
                                Expr::literal(c));
        let value = session.evaluate(&expr);

        prop_assert_eq!(value.is_nan(), session.diagnostics.count() > 0);
    }
}
