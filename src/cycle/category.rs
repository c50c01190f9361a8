//! Review record categorisation.
//!
//! Categories are derived from the wage schema and free-text position title.
//! The position matching is plain case-insensitive substring search, so a typo
//! or a renamed position silently moves a record to another category. All of
//! those rules live in this module.

use serde::{Deserialize, Serialize};

/// Wage schema value for technical staff.
pub const WAGE_SCHEMA_TECHNIK: &str = "Technik";

/// Wage schema value for production staff.
pub const WAGE_SCHEMA_PRODUKTION: &str = "Produktion";

/// Position fragments that move a production record into CPO/QS.
pub const QUALITY_POSITION_KEYWORDS: [&str; 3] = ["cpo", "qualitätssicherung", "sortierung"];

/// The reporting bucket a review record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewCategory {
    /// Wage schema "Technik".
    Technik,
    /// Production staff in CPO, quality assurance or sorting.
    CpoQs,
    /// All other production staff.
    Produktion,
    /// Any other wage schema; only counted in the overall bucket.
    Unbekannt,
}

impl ReviewCategory {
    /// Returns the dashboard label of the category.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewCategory::Technik => "Technik",
            ReviewCategory::CpoQs => "CPO/QS",
            ReviewCategory::Produktion => "Produktion",
            ReviewCategory::Unbekannt => "Unbekannt",
        }
    }
}

impl std::fmt::Display for ReviewCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derives the reporting category of a review record.
///
/// # Rules
///
/// 1. Wage schema "Technik" → [`ReviewCategory::Technik`].
/// 2. Wage schema "Produktion": a position containing "cpo",
///    "qualitätssicherung" or "sortierung" (case-insensitive) →
///    [`ReviewCategory::CpoQs`], otherwise [`ReviewCategory::Produktion`].
/// 3. Anything else → [`ReviewCategory::Unbekannt`].
///
/// # Example
///
/// ```
/// use review_engine::cycle::{classify_review, ReviewCategory};
///
/// assert_eq!(classify_review("Technik", "Elektriker"), ReviewCategory::Technik);
/// assert_eq!(classify_review("Produktion", "Leitung Sortierung"), ReviewCategory::CpoQs);
/// assert_eq!(classify_review("Produktion", "Maschinenführer"), ReviewCategory::Produktion);
/// assert_eq!(classify_review("Verwaltung", "Buchhaltung"), ReviewCategory::Unbekannt);
/// ```
pub fn classify_review(wage_schema: &str, position: &str) -> ReviewCategory {
    if wage_schema == WAGE_SCHEMA_TECHNIK {
        return ReviewCategory::Technik;
    }
    if wage_schema != WAGE_SCHEMA_PRODUKTION {
        return ReviewCategory::Unbekannt;
    }

    let position = position.to_lowercase();
    if QUALITY_POSITION_KEYWORDS
        .iter()
        .any(|keyword| position.contains(keyword))
    {
        ReviewCategory::CpoQs
    } else {
        ReviewCategory::Produktion
    }
}

/// Display order of technical positions: electrical before mechanical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnikDiscipline {
    /// Position mentions "elektrik".
    Elektrik,
    /// Position mentions "mechanik".
    Mechanik,
    /// Neither.
    Other,
}

impl TechnikDiscipline {
    /// Derives the discipline from a position title.
    pub fn from_position(position: &str) -> Self {
        let position = position.to_lowercase();
        if position.contains("elektrik") {
            TechnikDiscipline::Elektrik
        } else if position.contains("mechanik") {
            TechnikDiscipline::Mechanik
        } else {
            TechnikDiscipline::Other
        }
    }
}

/// Display order of quality positions: CPO, QS, sorting, then the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityUnit {
    /// Position mentions "cpo".
    Cpo,
    /// Position mentions "qs" or "qualitätssicherung".
    Qs,
    /// Position mentions "sortierung".
    Sortierung,
    /// None of the above.
    Other,
}

impl QualityUnit {
    /// Derives the quality unit from a position title.
    pub fn from_position(position: &str) -> Self {
        let position = position.to_lowercase();
        if position.contains("cpo") {
            QualityUnit::Cpo
        } else if position.contains("qs") || position.contains("qualitätssicherung") {
            QualityUnit::Qs
        } else if position.contains("sortierung") {
            QualityUnit::Sortierung
        } else {
            QualityUnit::Other
        }
    }
}
