//! Weighted applicant scoring.
//!
//! Each category is scored on a 0-100 scale, then combined with integer
//! weights that sum to 100. Only job-relevant fields contribute; `name` is
//! carried for display.

use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

const EXPERIENCE_POINTS_PER_YEAR: f64 = 10.0;
const SKILL_POINTS: f64 = 12.5;
const CERTIFICATION_POINTS: f64 = 20.0;

const EDUCATION_SCORES: &[(&str, f64)] = &[
    ("high_school", 40.0),
    ("associates", 60.0),
    ("bachelors", 80.0),
    ("masters", 90.0),
    ("phd", 100.0),
];

/// Applicant record as read from flags or a TOML/JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Applicant {
    pub name: String,
    pub education: String,
    pub experience_years: f64,
    pub skills_count: i64,
    pub interview_score: f64,
    pub portfolio_score: f64,
    pub certifications_count: i64,
}

/// Category weights in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Weights {
    pub education: u32,
    pub experience: u32,
    pub skills: u32,
    pub interview: u32,
    pub portfolio: u32,
    pub certifications: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            education: 20,
            experience: 25,
            skills: 20,
            interview: 20,
            portfolio: 10,
            certifications: 5,
        }
    }
}

impl Weights {
    pub fn total(&self) -> u64 {
        Category::ALL
            .iter()
            .map(|category| u64::from(self.of(*category)))
            .sum()
    }

    pub fn of(&self, category: Category) -> u32 {
        match category {
            Category::Education => self.education,
            Category::Experience => self.experience,
            Category::Skills => self.skills,
            Category::Interview => self.interview,
            Category::Portfolio => self.portfolio,
            Category::Certifications => self.certifications,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            let weight = self.of(category);
            if weight > 100 {
                bail!(
                    "scoring weight for {} must be at most 100 (got {weight})",
                    category.label().to_lowercase()
                );
            }
        }
        let total = self.total();
        if total != 100 {
            bail!("scoring weights must sum to 100 (got {total})");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Experience,
    Skills,
    Interview,
    Portfolio,
    Certifications,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Education,
        Category::Experience,
        Category::Skills,
        Category::Interview,
        Category::Portfolio,
        Category::Certifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Experience => "Experience",
            Category::Skills => "Skills",
            Category::Interview => "Interview",
            Category::Portfolio => "Portfolio",
            Category::Certifications => "Certifications",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommendation {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Consider")]
    Consider,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Recommendation {
    fn for_total(total: f64) -> Self {
        if total >= 80.0 {
            Recommendation::HighlyRecommended
        } else if total >= 65.0 {
            Recommendation::Recommended
        } else if total >= 50.0 {
            Recommendation::Consider
        } else {
            Recommendation::NotRecommended
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::HighlyRecommended => "Highly Recommended",
            Recommendation::Recommended => "Recommended",
            Recommendation::Consider => "Consider",
            Recommendation::NotRecommended => "Not Recommended",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryScore {
    pub category: Category,
    /// Clamped 0-100 score before weighting.
    pub score: f64,
    /// `score * weight / 100`, rounded to 2 decimals.
    pub weighted: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assessment {
    /// 0-100, rounded to 2 decimals.
    pub total: f64,
    pub recommendation: Recommendation,
    pub breakdown: Vec<CategoryScore>,
}

/// Score an applicant against `weights`.
///
/// The recommendation is derived from the unrounded total.
pub fn score(applicant: &Applicant, weights: &Weights) -> Assessment {
    let mut total = 0.0;
    let breakdown = Category::ALL
        .iter()
        .map(|&category| {
            let score = category_score(applicant, category);
            let weighted = score * f64::from(weights.of(category)) / 100.0;
            total += weighted;
            CategoryScore {
                category,
                score,
                weighted: round2(weighted),
            }
        })
        .collect();

    Assessment {
        total: round2(total),
        recommendation: Recommendation::for_total(total),
        breakdown,
    }
}

fn category_score(applicant: &Applicant, category: Category) -> f64 {
    match category {
        Category::Education => education_score(&applicant.education),
        Category::Experience => {
            clamp_percent(applicant.experience_years * EXPERIENCE_POINTS_PER_YEAR)
        }
        Category::Skills => clamp_percent(applicant.skills_count as f64 * SKILL_POINTS),
        Category::Interview => clamp_percent(applicant.interview_score),
        Category::Portfolio => clamp_percent(applicant.portfolio_score),
        Category::Certifications => {
            clamp_percent(applicant.certifications_count as f64 * CERTIFICATION_POINTS)
        }
    }
}

/// Education level lookup; case-insensitive, spaces treated as underscores.
pub fn education_score(level: &str) -> f64 {
    let key = level.trim().to_lowercase().replace(' ', "_");
    EDUCATION_SCORES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(0.0, |(_, score)| *score)
}

/// Clamp to [0, 100]; non-finite input scores 0.
fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_applicant() -> Applicant {
        Applicant {
            name: "Avery".to_string(),
            education: "Masters".to_string(),
            experience_years: 6.0,
            skills_count: 6,
            interview_score: 85.0,
            portfolio_score: 70.0,
            certifications_count: 2,
        }
    }

    #[test]
    fn default_weights_sum_to_100() {
        assert_eq!(Weights::default().total(), 100);
        Weights::default().validate().expect("valid");
    }

    #[test]
    fn unbalanced_weights_are_rejected() {
        let weights = Weights {
            portfolio: 15,
            ..Weights::default()
        };
        let err = weights.validate().expect_err("should reject");
        assert!(err.to_string().contains("got 105"));
    }

    #[test]
    fn oversized_weights_are_rejected_without_overflow() {
        let weights = Weights {
            education: u32::MAX,
            experience: 0,
            skills: 0,
            interview: 0,
            portfolio: 0,
            certifications: 101,
        };
        assert_eq!(weights.total(), u64::from(u32::MAX) + 101);
        let err = weights.validate().expect_err("should reject");
        assert!(
            err.to_string().contains("education must be at most 100"),
            "{err}"
        );
    }

    #[test]
    fn scores_weighted_breakdown() {
        let assessment = score(&strong_applicant(), &Weights::default());
        let scores: Vec<(Category, f64, f64)> = assessment
            .breakdown
            .iter()
            .map(|entry| (entry.category, entry.score, entry.weighted))
            .collect();
        assert_eq!(
            scores,
            vec![
                (Category::Education, 90.0, 18.0),
                (Category::Experience, 60.0, 15.0),
                (Category::Skills, 75.0, 15.0),
                (Category::Interview, 85.0, 17.0),
                (Category::Portfolio, 70.0, 7.0),
                (Category::Certifications, 40.0, 2.0),
            ]
        );
        assert_eq!(assessment.total, 74.0);
        assert_eq!(assessment.recommendation, Recommendation::Recommended);
    }

    #[test]
    fn sub_scores_are_clamped() {
        let applicant = Applicant {
            education: "phd".to_string(),
            experience_years: 40.0,
            skills_count: -3,
            interview_score: 140.0,
            portfolio_score: f64::NAN,
            certifications_count: 12,
            ..Applicant::default()
        };
        let assessment = score(&applicant, &Weights::default());
        for entry in &assessment.breakdown {
            assert!((0.0..=100.0).contains(&entry.score), "{entry:?}");
        }
        let by_category = |category| {
            assessment
                .breakdown
                .iter()
                .find(|entry| entry.category == category)
                .map(|entry| entry.score)
        };
        assert_eq!(by_category(Category::Experience), Some(100.0));
        assert_eq!(by_category(Category::Skills), Some(0.0));
        assert_eq!(by_category(Category::Interview), Some(100.0));
        assert_eq!(by_category(Category::Portfolio), Some(0.0));
        assert_eq!(by_category(Category::Certifications), Some(100.0));
    }

    #[test]
    fn education_lookup_normalizes_input() {
        assert_eq!(education_score("High School"), 40.0);
        assert_eq!(education_score(" BACHELORS "), 80.0);
        assert_eq!(education_score("bootcamp"), 0.0);
        assert_eq!(education_score(""), 0.0);
    }

    #[test]
    fn recommendation_thresholds() {
        assert_eq!(
            Recommendation::for_total(80.0),
            Recommendation::HighlyRecommended
        );
        assert_eq!(Recommendation::for_total(79.99), Recommendation::Recommended);
        assert_eq!(Recommendation::for_total(65.0), Recommendation::Recommended);
        assert_eq!(Recommendation::for_total(50.0), Recommendation::Consider);
        assert_eq!(
            Recommendation::for_total(49.99),
            Recommendation::NotRecommended
        );
    }

    #[test]
    fn empty_applicant_is_not_recommended() {
        let assessment = score(&Applicant::default(), &Weights::default());
        assert_eq!(assessment.total, 0.0);
        assert_eq!(assessment.recommendation, Recommendation::NotRecommended);
        assert_eq!(assessment.breakdown.len(), 6);
    }

    #[test]
    fn serializes_recommendation_label() {
        let assessment = score(&strong_applicant(), &Weights::default());
        let json = serde_json::to_value(&assessment).expect("json");
        assert_eq!(json["recommendation"], "Recommended");
        assert_eq!(json["breakdown"][0]["category"], "education");
    }
}
