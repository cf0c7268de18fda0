use serde::{Deserialize, Serialize};

use super::{ToolError, round_to};

#[derive(Debug, Clone, Deserialize)]
pub struct EmiInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_months: u32,
    #[serde(default)]
    pub schedule: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Installment {
    pub month: u32,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiResult {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<Installment>>,
}

/// Longest accepted tenure (100 years).
pub const MAX_TENURE_MONTHS: u32 = 1200;

/// Standard amortization formula, unrounded.
pub fn emi(principal: f64, annual_rate_percent: f64, months: u32) -> Result<f64, ToolError> {
    if months == 0 {
        return Err(ToolError::invalid("tenure must be at least one month"));
    }
    if months > MAX_TENURE_MONTHS {
        return Err(ToolError::invalid("tenure must be at most 1200 months"));
    }
    if !principal.is_finite() || principal < 0.0 {
        return Err(ToolError::invalid("principal must be a non-negative number"));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(ToolError::invalid("interest rate must be a non-negative number"));
    }

    let n = f64::from(months);
    let r = annual_rate_percent / 12.0 / 100.0;
    let growth = (1.0 + r).powf(n);
    // rates too small to move 1 + r behave like an interest-free loan
    let payment = if growth == 1.0 {
        principal / n
    } else {
        principal * r * growth / (growth - 1.0)
    };
    if !payment.is_finite() {
        return Err(ToolError::invalid("loan is too large to calculate"));
    }
    Ok(payment)
}

pub fn calculate(input: &EmiInput) -> Result<EmiResult, ToolError> {
    let payment = emi(input.principal, input.annual_rate_percent, input.tenure_months)?;
    let total = payment * f64::from(input.tenure_months);
    if !total.is_finite() {
        return Err(ToolError::invalid("loan is too large to calculate"));
    }

    let schedule = input.schedule.then(|| {
        let r = input.annual_rate_percent / 12.0 / 100.0;
        let mut balance = input.principal;
        (1..=input.tenure_months)
            .map(|month| {
                let interest = balance * r;
                let mut principal = payment - interest;
                if month == input.tenure_months {
                    principal = balance;
                }
                balance = (balance - principal).max(0.0);
                Installment {
                    month,
                    principal: round_to(principal, 2),
                    interest: round_to(interest, 2),
                    balance: round_to(balance, 2),
                }
            })
            .collect()
    });

    Ok(EmiResult {
        emi: round_to(payment, 2),
        total_payment: round_to(total, 2),
        total_interest: round_to(total - input.principal, 2),
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: f64, rate: f64, months: u32, schedule: bool) -> EmiInput {
        EmiInput {
            principal,
            annual_rate_percent: rate,
            tenure_months: months,
            schedule,
        }
    }

    #[test]
    fn known_loan() {
        let result = calculate(&input(100_000.0, 10.0, 12, false)).unwrap();
        assert_eq!(result.emi, 8791.59);
        assert_eq!(result.total_interest, 5499.06);
        assert!(result.schedule.is_none());
    }

    #[test]
    fn longer_loan() {
        let result = calculate(&input(500_000.0, 8.5, 60, false)).unwrap();
        assert_eq!(result.emi, 10258.27);
        assert_eq!(result.total_interest, 115_495.94);
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let result = calculate(&input(1200.0, 0.0, 12, false)).unwrap();
        assert_eq!(result.emi, 100.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn schedule_pays_off_balance() {
        let result = calculate(&input(100_000.0, 10.0, 12, true)).unwrap();
        let schedule = result.schedule.unwrap();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].interest, 833.33);
        assert_eq!(schedule.last().unwrap().balance, 0.0);
        let paid: f64 = schedule.iter().map(|i| i.principal).sum();
        assert!((paid - 100_000.0).abs() < 0.05);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(emi(1000.0, 10.0, 0).is_err());
        assert!(emi(-1.0, 10.0, 12).is_err());
        assert!(emi(1000.0, -0.5, 12).is_err());
        assert!(emi(f64::INFINITY, 10.0, 12).is_err());
    }

    #[test]
    fn rejects_tenure_beyond_a_century() {
        assert!(emi(1000.0, 10.0, MAX_TENURE_MONTHS).is_ok());
        let err = calculate(&input(1000.0, 10.0, u32::MAX, true)).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[test]
    fn negligible_rate_acts_like_zero_rate() {
        let result = calculate(&input(1200.0, 1e-20, 12, false)).unwrap();
        assert_eq!(result.emi, 100.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn overflowing_loan_is_rejected() {
        assert!(emi(f64::MAX, 1_000_000.0, 12).is_err());
        assert!(calculate(&input(f64::MAX, 10.0, 12, false)).is_err());
        assert!(calculate(&input(f64::MAX, 0.0, 1, false)).is_ok());
    }
}
