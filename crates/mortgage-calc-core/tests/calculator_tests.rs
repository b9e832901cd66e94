use mortgage_calc_core::calculator::{self, LoanInputs, PaymentResult};
use mortgage_calc_core::form::{self, DisplayValue, RawLoanFields};
use mortgage_calc_core::{MortgageError, MortgageType};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fields(amount: &str, term: &str, rate: &str, kind: &str) -> RawLoanFields {
    RawLoanFields::new(amount, term, rate, kind)
}

fn payment(amount: &str, term: &str, rate: &str, kind: &str) -> PaymentResult {
    calculator::compute(&fields(amount, term, rate, kind))
}

// ===========================================================================
// Repayment
// ===========================================================================

#[test]
fn test_zero_rate_repayment_is_straight_line() {
    // 120,000 / 300 months
    assert_eq!(
        payment("120000", "25", "0", "repayment"),
        PaymentResult::Amount(dec!(400.00))
    );
}

#[test]
fn test_standard_amortization_matches_closed_form() {
    let result = payment("200000", "25", "5.25", "repayment");

    // Closed form evaluated in f64: 200000 * r * (1+r)^300 / ((1+r)^300 - 1)
    let r = 0.0525_f64 / 12.0;
    let growth = (1.0 + r).powi(300);
    let expected = 200_000.0 * r * growth / (growth - 1.0);
    let expected = Decimal::from_f64_retain(expected).unwrap().round_dp(2);

    assert_eq!(result, PaymentResult::Amount(expected));
    assert_eq!(result, PaymentResult::Amount(dec!(1198.50)));
}

#[test]
fn test_thirty_year_repayment() {
    // 350k at 3.5% over 30 years: 1571.66
    assert_eq!(
        payment("350000", "30", "3.5", "repayment"),
        PaymentResult::Amount(dec!(1571.66))
    );
}

#[test]
fn test_tiny_rate_is_close_to_zero_rate_case() {
    let result = payment("120000", "25", "0.0001", "repayment");
    let amount = result.amount().expect("tiny rate should be valid");
    assert!(amount >= dec!(400.00));
    assert!((amount - dec!(400.00)).abs() <= dec!(0.01), "got {amount}");
}

#[test]
fn test_fractional_term_uses_fractional_periods() {
    // 1.5 years at 0% = 18 months
    assert_eq!(
        payment("1800", "1.5", "0", "repayment"),
        PaymentResult::Amount(dec!(100.00))
    );
    // 10.04 years = 120.48 months, priced through ln/exp
    let amount = payment("100000", "10.04", "6", "repayment")
        .amount()
        .expect("fractional term should be valid");
    assert!(amount > dec!(1100) && amount < dec!(1111), "got {amount}");
}

// ===========================================================================
// Interest-only
// ===========================================================================

#[test]
fn test_interest_only_payment() {
    // 200000 * 0.0525 / 12
    assert_eq!(
        payment("200000", "25", "5.25", "interest-only"),
        PaymentResult::Amount(dec!(875.00))
    );
}

#[test]
fn test_zero_rate_interest_only_is_zero() {
    for (amount, term) in [("200000", "25"), ("1", "1"), ("987654.32", "40")] {
        assert_eq!(
            payment(amount, term, "0", "interest-only"),
            PaymentResult::Amount(Decimal::ZERO)
        );
    }
}

// ===========================================================================
// Invalid input
// ===========================================================================

#[test]
fn test_invalid_inputs() {
    let cases = [
        ("", "25", "5", "repayment"),
        ("200000", "0", "5", "repayment"),
        ("200000", "25", "-1", "repayment"),
        ("abc", "25", "5", "repayment"),
        ("200000", "twenty", "5", "repayment"),
        ("200000", "25", "5%", "repayment"),
        ("0", "25", "5", "repayment"),
        ("-100", "25", "5", "repayment"),
        ("200000", "-5", "5", "interest-only"),
        ("200000", "25", "5", ""),
        ("200000", "25", "5", "offset"),
        ("1_000", "25", "5", "repayment"),
        ("200000", "25", "1e", "repayment"),
    ];
    for (amount, term, rate, kind) in cases {
        assert!(
            payment(amount, term, rate, kind).is_invalid(),
            "expected Invalid for ({amount:?}, {term:?}, {rate:?}, {kind:?})"
        );
    }
}

#[test]
fn test_calculate_mortgage_reports_invalid_field() {
    match calculator::calculate_mortgage(&fields("200000", "0", "5", "repayment")) {
        Err(MortgageError::InvalidInput { field, .. }) => assert_eq!(field, "term_years"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_compute_is_deterministic() {
    let input = fields("315000", "27", "4.79", "repayment");
    let first = calculator::compute(&input);
    let second = calculator::compute(&input);
    assert_eq!(first, second);
}

#[test]
fn test_valid_ranges_never_negative() {
    for amount in ["1", "1000", "250000", "5000000"] {
        for term in ["1", "5", "25", "40"] {
            for rate in ["0", "0.01", "3.5", "12", "99"] {
                for kind in ["repayment", "interest-only"] {
                    match payment(amount, term, rate, kind) {
                        PaymentResult::Amount(m) => {
                            assert!(m >= Decimal::ZERO);
                            assert!(m.scale() <= 2);
                        }
                        PaymentResult::Invalid => {}
                    }
                }
            }
        }
    }
}

#[test]
fn test_parse_builds_loan_inputs() {
    let inputs = LoanInputs::parse(&fields(" 200000", "25 ", "5.25", "Interest-Only")).unwrap();
    assert_eq!(
        inputs,
        LoanInputs {
            amount: dec!(200000),
            term_years: dec!(25),
            annual_rate_percent: dec!(5.25),
            mortgage_type: MortgageType::InterestOnly,
        }
    );
}

// ===========================================================================
// Envelope
// ===========================================================================

#[test]
fn test_envelope_totals_for_repayment() {
    let out = calculator::calculate_mortgage(&fields("120000", "25", "0", "repayment")).unwrap();
    let b = &out.result;
    assert_eq!(b.monthly_payment, dec!(400.00));
    assert_eq!(b.number_of_payments, dec!(300));
    assert_eq!(b.total_repayment, dec!(120000));
    assert_eq!(b.total_interest, Decimal::ZERO);
    assert_eq!(b.display, "£400.00");
    assert_eq!(out.methodology, "Fixed-rate annuity");
    assert!(out.warnings.is_empty());
}

#[test]
fn test_envelope_totals_for_interest_only() {
    let out =
        calculator::calculate_mortgage(&fields("200000", "25", "5.25", "interest-only")).unwrap();
    let b = &out.result;
    // 875 * 300 interest, principal repaid at the end
    assert_eq!(b.total_repayment, dec!(462500));
    assert_eq!(b.total_interest, dec!(262500));
    assert_eq!(out.methodology, "Interest-only");
    assert_eq!(out.assumptions["mortgage_type"], "interest-only");
}

#[test]
fn test_envelope_warnings() {
    let out = calculator::calculate_mortgage(&fields("1000", "1.01", "0", "interest-only")).unwrap();
    assert_eq!(out.warnings.len(), 2, "warnings: {:?}", out.warnings);

    let out = calculator::calculate_mortgage(&fields("1000", "1", "150", "repayment")).unwrap();
    assert_eq!(out.warnings.len(), 1, "warnings: {:?}", out.warnings);
}

// ===========================================================================
// Form
// ===========================================================================

#[test]
fn test_form_round_trip() {
    assert_eq!(DisplayValue::default().to_string(), form::PENDING_TEXT);

    let shown = form::submit(&fields("200000", "25", "5.25", "repayment"));
    assert_eq!(shown, DisplayValue::Amount(dec!(1198.50)));
    assert_eq!(shown.to_string(), "£1198.50");

    let shown = form::submit(&RawLoanFields::cleared());
    assert_eq!(shown.to_string(), form::INVALID_TEXT);
}
