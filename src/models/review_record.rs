//! Review record model.
//!
//! A [`ReviewRecord`] is the flat row the storage layer supplies for each
//! conversation held in a report window.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{EngineError, EngineResult};

use super::{EmployeeStatus, ReviewPeriod};

/// The employee's overall satisfaction as recorded in the conversation.
///
/// Serializes as the exact German label. Deserialization goes through
/// [`Satisfaction::from_label`], so stored labels may differ in case or
/// carry surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Satisfaction {
    /// "Zufrieden"
    #[serde(rename = "Zufrieden")]
    Zufrieden,
    /// "Grundsätzlich zufrieden"
    #[serde(rename = "Grundsätzlich zufrieden")]
    GrundsaetzlichZufrieden,
    /// "Unzufrieden"
    #[serde(rename = "Unzufrieden")]
    Unzufrieden,
}

impl Satisfaction {
    /// Returns the label stored by the HR application.
    pub fn label(&self) -> &'static str {
        match self {
            Satisfaction::Zufrieden => "Zufrieden",
            Satisfaction::GrundsaetzlichZufrieden => "Grundsätzlich zufrieden",
            Satisfaction::Unzufrieden => "Unzufrieden",
        }
    }

    /// Parses a stored label, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use review_engine::models::Satisfaction;
    ///
    /// assert_eq!(
    ///     Satisfaction::from_label(" grundsätzlich Zufrieden "),
    ///     Some(Satisfaction::GrundsaetzlichZufrieden)
    /// );
    /// assert_eq!(Satisfaction::from_label(""), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "zufrieden" => Some(Satisfaction::Zufrieden),
            "grundsätzlich zufrieden" => Some(Satisfaction::GrundsaetzlichZufrieden),
            "unzufrieden" => Some(Satisfaction::Unzufrieden),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Satisfaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Satisfaction::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown satisfaction label '{}'", label)))
    }
}

impl std::fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One held review conversation, with the fields reporting consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// The reviewed employee.
    pub employee_id: String,
    /// The reviewed employee's display name.
    pub name: String,
    /// The reviewed employee's status; archived employees are not reported.
    pub employee_status: EmployeeStatus,
    /// When the conversation took place.
    pub date: NaiveDate,
    /// Wage schema ("Technik", "Produktion", ...).
    pub wage_schema: String,
    /// Free-text position title.
    pub position: String,
    /// Recorded satisfaction, if the question was answered.
    #[serde(default)]
    pub satisfaction: Option<Satisfaction>,
    /// Free-text reason given for (partial) dissatisfaction.
    #[serde(default)]
    pub dissatisfaction_reason: Option<String>,
    /// Date of the follow-up talent review, if one took place.
    #[serde(default)]
    pub talent_review_date: Option<NaiveDate>,
}

impl ReviewRecord {
    /// Returns true if the reviewed employee has been archived.
    pub fn is_archived(&self) -> bool {
        self.employee_status == EmployeeStatus::Archived
    }
}

/// An inclusive date range used to select review records for a report.
///
/// # Example
///
/// ```
/// use review_engine::models::ReportWindow;
/// use chrono::NaiveDate;
///
/// let window = ReportWindow::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// ).unwrap();
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First day of the window (inclusive).
    pub from: NaiveDate,
    /// Last day of the window (inclusive).
    pub to: NaiveDate,
}

impl ReportWindow {
    /// Creates a window, rejecting one that ends before it starts.
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if to < from {
            return Err(EngineError::InvalidReportWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// The conversation window of a review period, ending on the true last
    /// day of its end month.
    pub fn for_period(period: &ReviewPeriod) -> EngineResult<Self> {
        let (from, to) = period.window()?;
        Self::new(from, to)
    }

    /// Checks if `date` lies within the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
