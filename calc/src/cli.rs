//! CLI command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::fibonacci::FibonacciCache;
use crate::greeting::greet;
use crate::loan::{LoanApplication, LoanDecision, LoanPolicy, evaluate, group_thousands};
use crate::scoring::{Applicant, Assessment, Category, Weights, score};

const RULE: &str = "============================================================";

/// Print the first `n` Fibonacci numbers.
///
/// Invalid input is reported on stdout and is not a command failure.
pub fn fibonacci_terms(n: i64) -> Result<()> {
    let mut cache = FibonacciCache::new();
    match cache.sequence(n) {
        Ok(terms) => println!("Fibonacci sequence with {n} terms: {terms:?}"),
        Err(err) => {
            warn!(n, %err, "fibonacci input rejected");
            println!("Error: {err}");
        }
    }
    Ok(())
}

/// Print F(0) through F(`n`), space separated.
pub fn fibonacci_through(n: i64) -> Result<()> {
    let mut cache = FibonacciCache::new();
    // Filling up to F(n) first validates n and leaves every earlier term cached.
    let terms = cache
        .nth(n)
        .and_then(|_| (0..=n).map(|index| cache.nth(index)).collect::<Result<Vec<_>, _>>());
    match terms {
        Ok(terms) => {
            let line: Vec<String> = terms.iter().map(u64::to_string).collect();
            println!("{}", line.join(" "));
        }
        Err(err) => {
            warn!(n, %err, "fibonacci input rejected");
            println!("Error: {err}");
        }
    }
    Ok(())
}

pub fn greeting(name: &str, gender: &str) -> Result<()> {
    println!("{}", greet(name, gender));
    Ok(())
}

/// Read an applicant record; `.json` files are parsed as JSON, anything else as TOML.
pub fn load_applicant(path: &Path) -> Result<Applicant> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let applicant = if is_json {
        serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))?
    } else {
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?
    };
    Ok(applicant)
}

pub fn score_applicant(applicant: &Applicant, weights: &Weights, json: bool) -> Result<()> {
    let assessment = score(applicant, weights);
    debug!(
        total = assessment.total,
        recommendation = %assessment.recommendation,
        "scored applicant"
    );
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&assessment).context("serialize assessment")?
        );
    } else {
        print!("{}", render_assessment(&applicant.name, &assessment, weights));
    }
    Ok(())
}

pub fn evaluate_loan(application: &LoanApplication, policy: &LoanPolicy, json: bool) -> Result<()> {
    let decision = evaluate(application, policy);
    debug!(
        approved = decision.approved,
        reasons = decision.reasons.len(),
        "evaluated loan"
    );
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&decision).context("serialize decision")?
        );
    } else {
        print!("{}", render_loan_decision(&decision, policy));
    }
    Ok(())
}

/// Plain-text scoring report.
pub fn render_assessment(name: &str, assessment: &Assessment, weights: &Weights) -> String {
    let name = if name.trim().is_empty() { "N/A" } else { name.trim() };
    let mut buf = String::new();
    buf.push_str(&format!("{RULE}\nAPPLICANT: {name}\n{RULE}\n"));
    buf.push_str(&format!("TOTAL SCORE: {:.2}/100\n", assessment.total));
    buf.push_str(&format!("RECOMMENDATION: {}\n", assessment.recommendation));
    buf.push_str("\n--- Score Breakdown ---\n");
    for entry in &assessment.breakdown {
        buf.push_str(&format!(
            "{:<20}: {:6.2}/100 (Weighted: {:6.2})\n",
            entry.category.label(),
            entry.score,
            entry.weighted
        ));
    }
    buf.push_str("\n--- Scoring Weights ---\n");
    for category in Category::ALL {
        buf.push_str(&format!("{:<20}: {}%\n", category.label(), weights.of(category)));
    }
    buf.push_str(RULE);
    buf.push('\n');
    buf
}

/// Plain-text loan decision.
pub fn render_loan_decision(decision: &LoanDecision, policy: &LoanPolicy) -> String {
    let mut buf = String::new();
    buf.push_str(if decision.approved { "APPROVED\n" } else { "REJECTED\n" });
    buf.push_str(&format!(
        "Debt-to-income: {:.1}%\n",
        decision.debt_to_income * 100.0
    ));
    if decision.approved {
        buf.push_str("- All numeric rules satisfied.\n");
    }
    for reason in &decision.reasons {
        buf.push_str(&format!("- {reason}\n"));
    }
    buf.push_str(&format!(
        "Policy: minAge={}, minCredit={}, minIncome=${}, minEmployment={}y, maxDTI={:.0}%\n",
        policy.minimum_age_years,
        policy.minimum_credit_score,
        group_thousands(policy.minimum_annual_income),
        policy.minimum_employment_years,
        policy.maximum_debt_to_income_ratio * 100.0
    ));
    buf
}
