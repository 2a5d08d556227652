//! Numeric loan eligibility rules.
//!
//! Only numeric inputs participate; applicant identity is not an input.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoanPolicy {
    pub minimum_age_years: f64,
    pub minimum_credit_score: f64,
    pub minimum_annual_income: f64,
    pub minimum_employment_years: f64,
    /// Total debt (existing plus requested) divided by annual income.
    pub maximum_debt_to_income_ratio: f64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            minimum_age_years: 18.0,
            minimum_credit_score: 660.0,
            minimum_annual_income: 30_000.0,
            minimum_employment_years: 2.0,
            maximum_debt_to_income_ratio: 0.40,
        }
    }
}

impl LoanPolicy {
    pub fn validate(&self) -> Result<()> {
        let ratio = self.maximum_debt_to_income_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            bail!("maximum_debt_to_income_ratio must be > 0");
        }
        let minimums = [
            self.minimum_age_years,
            self.minimum_credit_score,
            self.minimum_annual_income,
            self.minimum_employment_years,
        ];
        if minimums.iter().any(|value| !value.is_finite()) {
            bail!("loan policy minimums must be finite numbers");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoanApplication {
    pub annual_income: f64,
    pub credit_score: f64,
    pub existing_debt: f64,
    pub employment_years: f64,
    pub loan_amount: f64,
    pub age: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoanDecision {
    pub approved: bool,
    /// One entry per violated rule, in rule order.
    pub reasons: Vec<String>,
    pub total_debt: f64,
    pub debt_to_income: f64,
}

pub fn evaluate(application: &LoanApplication, policy: &LoanPolicy) -> LoanDecision {
    let age = finite_or_zero(application.age);
    let credit_score = finite_or_zero(application.credit_score);
    let annual_income = finite_or_zero(application.annual_income);
    let employment_years = finite_or_zero(application.employment_years);

    let total_debt = finite_or_zero(application.existing_debt).max(0.0)
        + finite_or_zero(application.loan_amount).max(0.0);
    let debt_to_income = total_debt / annual_income.max(1.0);

    let mut reasons = Vec::new();
    if age < policy.minimum_age_years {
        reasons.push(format!(
            "Age {age} < minimum {}",
            policy.minimum_age_years
        ));
    }
    if credit_score < policy.minimum_credit_score {
        reasons.push(format!(
            "Credit score {credit_score} < minimum {}",
            policy.minimum_credit_score
        ));
    }
    if annual_income < policy.minimum_annual_income {
        reasons.push(format!(
            "Annual income ${} < minimum ${}",
            group_thousands(annual_income),
            group_thousands(policy.minimum_annual_income)
        ));
    }
    if employment_years < policy.minimum_employment_years {
        reasons.push(format!(
            "Employment length {employment_years}y < minimum {}y",
            policy.minimum_employment_years
        ));
    }
    if debt_to_income > policy.maximum_debt_to_income_ratio {
        reasons.push(format!(
            "Debt-to-income {:.1}% > max {:.0}%",
            debt_to_income * 100.0,
            policy.maximum_debt_to_income_ratio * 100.0
        ));
    }

    LoanDecision {
        approved: reasons.is_empty(),
        reasons,
        total_debt,
        debt_to_income,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Format with `,` thousands separators, e.g. `30000` -> `30,000`.
pub fn group_thousands(value: f64) -> String {
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
