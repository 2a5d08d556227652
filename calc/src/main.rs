mod cli;
mod config;
mod fibonacci;
mod greeting;
mod loan;
mod scoring;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fifo::{exit_codes, logging};

use crate::config::{DEFAULT_CONFIG_FILE, load_config};
use crate::loan::LoanApplication;
use crate::scoring::Applicant;

#[derive(Parser)]
#[command(name = "calc", version, about = "Standalone calculators: Fibonacci, scoring, greetings, loans")]
struct Cli {
    /// Path to the TOML config file (scoring weights, loan policy).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first N Fibonacci numbers.
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Print F(0) through F(N).
    FibNth {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Greet someone, with a title matching their stated preference.
    Greet {
        name: String,
        #[arg(long, default_value = "")]
        gender: String,
    },
    /// Score a job applicant.
    Score(ScoreArgs),
    /// Evaluate a loan application against numeric rules.
    Loan(LoanArgs),
}

#[derive(Args)]
struct ScoreArgs {
    /// Read the applicant from a TOML or JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["name", "education", "experience_years", "skills", "interview", "portfolio", "certifications"])]
    file: Option<PathBuf>,
    /// Display only; not used in scoring.
    #[arg(long, default_value = "")]
    name: String,
    /// high_school, associates, bachelors, masters, or phd.
    #[arg(long, default_value = "")]
    education: String,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    experience_years: f64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    skills: i64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    interview: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    portfolio: f64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    certifications: i64,
    /// Print the assessment as JSON.
    #[arg(long)]
    json: bool,
}

impl ScoreArgs {
    fn applicant(&self) -> Applicant {
        Applicant {
            name: self.name.clone(),
            education: self.education.clone(),
            experience_years: self.experience_years,
            skills_count: self.skills,
            interview_score: self.interview,
            portfolio_score: self.portfolio,
            certifications_count: self.certifications,
        }
    }
}

#[derive(Args)]
struct LoanArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    annual_income: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    credit_score: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    existing_debt: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    employment_years: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    loan_amount: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    age: f64,
    /// Print the decision as JSON.
    #[arg(long)]
    json: bool,
}

impl LoanArgs {
    fn application(&self) -> LoanApplication {
        LoanApplication {
            annual_income: self.annual_income,
            credit_score: self.credit_score,
            existing_debt: self.existing_debt,
            employment_years: self.employment_years,
            loan_amount: self.loan_amount,
            age: self.age,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Fib { n } => cli::fibonacci_terms(n),
        Command::FibNth { n } => cli::fibonacci_through(n),
        Command::Greet { name, gender } => cli::greeting(&name, &gender),
        Command::Score(args) => {
            let config = load_config(&cli.config)?;
            let applicant = match &args.file {
                Some(path) => cli::load_applicant(path)?,
                None => args.applicant(),
            };
            cli::score_applicant(&applicant, &config.scoring, args.json)
        }
        Command::Loan(args) => {
            let config = load_config(&cli.config)?;
            cli::evaluate_loan(&args.application(), &config.loan, args.json)
        }
    }
}
