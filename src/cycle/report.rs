//! Review report aggregation for the dashboards.
//!
//! A pure in-memory reduction over already-fetched review records. Every
//! record counts towards the overall bucket; the Technik, CPO/QS and
//! Produktion buckets partition it, with the remainder counted as Unbekannt.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ReviewRules;
use crate::models::{ReportWindow, ReviewRecord, Satisfaction};

use super::category::{QualityUnit, ReviewCategory, TechnikDiscipline, classify_review};

/// Computes `part / total` as a percentage rounded to one decimal place.
///
/// A zero total yields zero.
///
/// ```
/// use review_engine::cycle::percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percentage(1, 3), Decimal::new(333, 1));
/// assert_eq!(percentage(5, 0), Decimal::ZERO);
/// ```
pub fn percentage(part: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part as u64) * Decimal::ONE_HUNDRED / Decimal::from(total as u64)).round_dp(1)
}

/// Share of each rating among answered records, in percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionShares {
    /// Share rated "Zufrieden".
    pub zufrieden: Decimal,
    /// Share rated "Grundsätzlich zufrieden".
    pub grundsaetzlich_zufrieden: Decimal,
    /// Share rated "Unzufrieden".
    pub unzufrieden: Decimal,
}

/// Three-way satisfaction tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionTally {
    /// Records rated "Zufrieden".
    pub zufrieden: usize,
    /// Records rated "Grundsätzlich zufrieden".
    pub grundsaetzlich_zufrieden: usize,
    /// Records rated "Unzufrieden".
    pub unzufrieden: usize,
    /// Chart percentages, filled in once aggregation is complete.
    pub shares: SatisfactionShares,
}

impl SatisfactionTally {
    fn record(&mut self, satisfaction: Option<Satisfaction>) {
        match satisfaction {
            Some(Satisfaction::Zufrieden) => self.zufrieden += 1,
            Some(Satisfaction::GrundsaetzlichZufrieden) => self.grundsaetzlich_zufrieden += 1,
            Some(Satisfaction::Unzufrieden) => self.unzufrieden += 1,
            None => {}
        }
    }

    /// Returns the number of records with an answer.
    pub fn answered(&self) -> usize {
        self.zufrieden + self.grundsaetzlich_zufrieden + self.unzufrieden
    }

    /// Returns the count for one rating.
    pub fn count(&self, satisfaction: Satisfaction) -> usize {
        match satisfaction {
            Satisfaction::Zufrieden => self.zufrieden,
            Satisfaction::GrundsaetzlichZufrieden => self.grundsaetzlich_zufrieden,
            Satisfaction::Unzufrieden => self.unzufrieden,
        }
    }

    /// Returns the share of one rating among answered records, in percent.
    pub fn share(&self, satisfaction: Satisfaction) -> Decimal {
        percentage(self.count(satisfaction), self.answered())
    }

    fn update_shares(&mut self) {
        self.shares = SatisfactionShares {
            zufrieden: self.share(Satisfaction::Zufrieden),
            grundsaetzlich_zufrieden: self.share(Satisfaction::GrundsaetzlichZufrieden),
            unzufrieden: self.share(Satisfaction::Unzufrieden),
        };
    }
}

/// How often one keyword appeared in dissatisfaction reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    /// The vocabulary keyword.
    pub keyword: String,
    /// Number of records whose reason mentions it.
    pub count: usize,
}

/// Summary figures of one reporting bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// Number of reviews.
    pub total: usize,
    /// Number of reviews followed by a talent review.
    pub talent_reviews: usize,
    /// Talent reviews as a percentage of `total`.
    pub talent_review_share: Decimal,
    /// Satisfaction tally.
    pub satisfaction: SatisfactionTally,
    /// Keyword tally over dissatisfaction reasons, in vocabulary order.
    pub reasons: Vec<ReasonCount>,
}

impl BucketSummary {
    fn new(keywords: &[String]) -> Self {
        Self {
            total: 0,
            talent_reviews: 0,
            talent_review_share: Decimal::ZERO,
            satisfaction: SatisfactionTally::default(),
            reasons: keywords
                .iter()
                .map(|keyword| ReasonCount {
                    keyword: keyword.to_lowercase(),
                    count: 0,
                })
                .collect(),
        }
    }

    fn add(&mut self, record: &ReviewRecord) {
        self.total += 1;
        if record.talent_review_date.is_some() {
            self.talent_reviews += 1;
        }
        self.satisfaction.record(record.satisfaction);

        if record.satisfaction == Some(Satisfaction::Zufrieden) {
            return;
        }
        if let Some(reason) = &record.dissatisfaction_reason {
            let reason = reason.to_lowercase();
            for entry in &mut self.reasons {
                if reason.contains(&entry.keyword) {
                    entry.count += 1;
                }
            }
        }
    }

    fn finish(&mut self) {
        self.talent_review_share = percentage(self.talent_reviews, self.total);
        self.satisfaction.update_shares();
    }
}

/// One review in a tabular report listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The reviewed employee.
    pub employee_id: String,
    /// The reviewed employee's display name.
    pub name: String,
    /// Free-text position title.
    pub position: String,
    /// When the conversation took place.
    pub date: NaiveDate,
    /// Recorded satisfaction.
    pub satisfaction: Option<Satisfaction>,
    /// Date of the follow-up talent review.
    pub talent_review_date: Option<NaiveDate>,
}

impl From<&ReviewRecord> for ReportRow {
    fn from(record: &ReviewRecord) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            name: record.name.clone(),
            position: record.position.clone(),
            date: record.date,
            satisfaction: record.satisfaction,
            talent_review_date: record.talent_review_date,
        }
    }
}

/// Dashboard figures for a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReport {
    /// The window the report covers.
    pub window: ReportWindow,
    /// Every reported review.
    pub overall: BucketSummary,
    /// Wage schema "Technik".
    pub technik: BucketSummary,
    /// Production staff in CPO, QS or sorting.
    pub cpo_qs: BucketSummary,
    /// Remaining production staff.
    pub produktion: BucketSummary,
    /// Reviews outside the three named buckets.
    pub unbekannt: BucketSummary,
    /// Technik rows: Elektrik, then Mechanik, then others; by name within.
    pub technik_rows: Vec<ReportRow>,
    /// CPO/QS rows: CPO, QS, Sortierung, then others; by name within.
    pub cpo_qs_rows: Vec<ReportRow>,
    /// Produktion rows by name.
    pub produktion_rows: Vec<ReportRow>,
}

impl ReviewReport {
    /// Aggregates `records` for the dashboards.
    ///
    /// Records of archived employees and records dated outside `window` are
    /// ignored.
    pub fn aggregate(window: ReportWindow, records: &[ReviewRecord], rules: &ReviewRules) -> Self {
        let keywords = &rules.dissatisfaction_keywords;
        let mut report = Self {
            window,
            overall: BucketSummary::new(keywords),
            technik: BucketSummary::new(keywords),
            cpo_qs: BucketSummary::new(keywords),
            produktion: BucketSummary::new(keywords),
            unbekannt: BucketSummary::new(keywords),
            technik_rows: Vec::new(),
            cpo_qs_rows: Vec::new(),
            produktion_rows: Vec::new(),
        };

        for record in records
            .iter()
            .filter(|r| !r.is_archived() && window.contains(r.date))
        {
            report.overall.add(record);
            match classify_review(&record.wage_schema, &record.position) {
                ReviewCategory::Technik => {
                    report.technik.add(record);
                    report.technik_rows.push(record.into());
                }
                ReviewCategory::CpoQs => {
                    report.cpo_qs.add(record);
                    report.cpo_qs_rows.push(record.into());
                }
                ReviewCategory::Produktion => {
                    report.produktion.add(record);
                    report.produktion_rows.push(record.into());
                }
                ReviewCategory::Unbekannt => report.unbekannt.add(record),
            }
        }

        report.technik_rows.sort_by_cached_key(|row| {
            (
                TechnikDiscipline::from_position(&row.position),
                row.name.to_lowercase(),
            )
        });
        report.cpo_qs_rows.sort_by_cached_key(|row| {
            (
                QualityUnit::from_position(&row.position),
                row.name.to_lowercase(),
            )
        });
        report
            .produktion_rows
            .sort_by_cached_key(|row| row.name.to_lowercase());

        for bucket in [
            &mut report.overall,
            &mut report.technik,
            &mut report.cpo_qs,
            &mut report.produktion,
            &mut report.unbekannt,
        ] {
            bucket.finish();
        }

        report
    }

    /// Returns the summary of one category bucket.
    pub fn bucket(&self, category: ReviewCategory) -> &BucketSummary {
        match category {
            ReviewCategory::Technik => &self.technik,
            ReviewCategory::CpoQs => &self.cpo_qs,
            ReviewCategory::Produktion => &self.produktion,
            ReviewCategory::Unbekannt => &self.unbekannt,
        }
    }
}
