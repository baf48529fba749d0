use thiserror::Error;

/// Errors from the mortgage calculator
#[derive(Debug, Error, PartialEq)]
pub enum MortgageError {
    #[error("loan term must be at least one year, got {0}")]
    InvalidTerm(u32),
}

/// Loan principal after the down payment
///
/// `P = home_price * (1 - down_payment_percent / 100)`
#[inline]
pub fn loan_principal(home_price: f64, down_payment_percent: f64) -> f64 {
    home_price * (1.0 - down_payment_percent / 100.0)
}

/// Monthly payment for a fixed-rate amortized loan.
///
/// `M = P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n`
/// the number of payments. A zero interest rate degenerates the formula to
/// division by zero, so it is special-cased to `M = P / n`. A non-positive
/// term has no meaningful payment and is an explicit error.
pub fn amortized_monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<f64, MortgageError> {
    if term_years == 0 {
        return Err(MortgageError::InvalidTerm(term_years));
    }

    let payments = (term_years * 12) as f64;
    if annual_rate_percent == 0.0 {
        return Ok(principal / payments);
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(payments);

    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

/// Full quote for a home purchase
#[derive(Debug, Clone, Copy)]
pub struct MortgageQuote {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl MortgageQuote {
    /// Quote from the calculator inputs: home price, down payment percent,
    /// annual interest percent, and term in years
    pub fn calculate(
        home_price: f64,
        down_payment_percent: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Result<Self, MortgageError> {
        let principal = loan_principal(home_price, down_payment_percent);
        let monthly_payment =
            amortized_monthly_payment(principal, annual_rate_percent, term_years)?;
        let total_paid = monthly_payment * (term_years * 12) as f64;

        Ok(Self {
            principal,
            monthly_payment,
            total_paid,
            total_interest: total_paid - principal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quote() {
        // 500k home, 20% down, 3.5% for 30 years -> ~$1796.18/mo on 400k
        let quote = MortgageQuote::calculate(500_000.0, 20.0, 3.5, 30).unwrap();

        assert!((quote.principal - 400_000.0).abs() < 0.01);
        assert!((quote.monthly_payment - 1796.18).abs() < 0.01);
        assert!(quote.total_interest > 0.0);
    }

    #[test]
    fn test_zero_interest_divides_evenly() {
        let payment = amortized_monthly_payment(360_000.0, 0.0, 30).unwrap();
        assert!((payment - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_term_is_rejected() {
        let result = amortized_monthly_payment(400_000.0, 3.5, 0);
        assert_eq!(result, Err(MortgageError::InvalidTerm(0)));
    }

    #[test]
    fn test_payment_is_finite() {
        let payment = amortized_monthly_payment(400_000.0, 3.5, 30).unwrap();
        assert!(payment.is_finite());
        assert!(payment > 0.0);
    }

    #[test]
    fn test_loan_principal() {
        assert!((loan_principal(500_000.0, 20.0) - 400_000.0).abs() < 0.01);
        assert!((loan_principal(500_000.0, 0.0) - 500_000.0).abs() < 0.01);
    }
}
