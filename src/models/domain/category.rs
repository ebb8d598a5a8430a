use std::{fmt, str::FromStr};

use crate::errors::AppError;

/// Trivia topic selectable on the wheel. Each maps to exactly one page of
/// the upstream site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Audits,
    FinancialReports,
    DataSites,
    Budget,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Audits,
        Category::FinancialReports,
        Category::DataSites,
        Category::Budget,
    ];

    /// Logical name as the client sends it.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Audits => "audits",
            Category::FinancialReports => "financial-reports",
            Category::DataSites => "data sites",
            Category::Budget => "budget",
        }
    }

    /// Path segment on the upstream site, unescaped.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::Audits => "audits-and-reports",
            Category::FinancialReports => "reports",
            Category::DataSites => "data",
            Category::Budget => "budgets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.name() == normalized)
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}
