//! Client-side filtering and trend shaping for the upload history page.
//!
//! Blank filter fields are ignored. Score bounds are whole percentages
//! (`0..=100`) matched against the rounded AI percentage; date bounds are
//! inclusive calendar dates.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use chrono::NaiveDate;
use gateway::types::UploadRecord;

use crate::util::chart::Series;
use crate::util::score::ai_percent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilters {
    pub search: String,
    pub ai_score_min: String,
    pub ai_score_max: String,
    pub date_from: String,
    pub date_to: String,
}

impl HistoryFilters {
    pub fn is_empty(&self) -> bool {
        [&self.search, &self.ai_score_min, &self.ai_score_max, &self.date_from, &self.date_to]
            .iter()
            .all(|f| f.trim().is_empty())
    }

    /// Records matching every non-blank filter, in input order.
    pub fn apply(&self, records: &[UploadRecord]) -> Vec<UploadRecord> {
        let search = self.search.trim().to_lowercase();
        let min = parse_number(&self.ai_score_min);
        let max = parse_number(&self.ai_score_max);
        let from = parse_date(&self.date_from);
        let to = parse_date(&self.date_to);

        records
            .iter()
            .filter(|r| search.is_empty() || r.file_name.to_lowercase().contains(&search))
            .filter(|r| {
                let pct = f64::from(ai_percent(r.similarity_score));
                min.is_none_or(|m| pct >= m) && max.is_none_or(|m| pct <= m)
            })
            .filter(|r| {
                if from.is_none() && to.is_none() {
                    return true;
                }
                let Some(day) = r.uploaded_at().map(|ts| ts.date()) else {
                    return false;
                };
                from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t)
            })
            .cloned()
            .collect()
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Display form of a backend timestamp, falling back to the raw text.
pub fn display_date(raw: &str) -> String {
    gateway::types::parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%Y-%m-%d %H:%M").to_string())
}

/// Trend line: filtered records oldest first, one point per upload.
pub fn trend_series(records: &[UploadRecord]) -> Series {
    let mut ordered: Vec<&UploadRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.uploaded_at());

    Series {
        label: "AI Content %".to_owned(),
        labels: ordered
            .iter()
            .map(|r| r.uploaded_at().map_or_else(|| r.upload_date.clone(), |ts| ts.format("%Y-%m-%d").to_string()))
            .collect(),
        values: ordered.iter().map(|r| f64::from(ai_percent(r.similarity_score))).collect(),
    }
}
