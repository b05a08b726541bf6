//! Pure derivation functions over the record store. Each call takes the
//! records plus criteria and returns fresh output; nothing here holds
//! state, so view controllers can re-derive on every criteria change.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{
    AdmissionLead, Campus, Condition, CrossTab, CrossTabRow, DatePoint, Department,
    DigitalRequest, ItAsset, LeadStatus, NamedCount, Priority, RequestStatus,
};

/// One criterion of a table filter. `All` matches everything, an
/// unrecognized value matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Is(T),
    Unmatched,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: FromStr> Filter<T> {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            return Filter::All;
        }
        match raw.parse() {
            Ok(value) => Filter::Is(value),
            Err(_) => Filter::Unmatched,
        }
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Is(wanted) => wanted == value,
            Filter::Unmatched => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestCriteria {
    pub search: String,
    pub status: Filter<RequestStatus>,
    pub department: Filter<Department>,
    pub priority: Filter<Priority>,
}

#[derive(Debug, Clone, Default)]
pub struct LeadCriteria {
    pub search: String,
    pub status: Filter<LeadStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct AssetCriteria {
    pub search: String,
    pub campus: Filter<Campus>,
    pub condition: Filter<Condition>,
}

/// Search matches id, request type, description, or requester; all
/// criteria are conjunctive. Stable: output preserves input order.
pub fn filter_requests(
    records: &[DigitalRequest],
    criteria: &RequestCriteria,
) -> Vec<DigitalRequest> {
    let needle = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|req| {
            let matches_search = needle.is_empty()
                || req.id.to_lowercase().contains(&needle)
                || req.request_type.as_str().to_lowercase().contains(&needle)
                || req.description.to_lowercase().contains(&needle)
                || req.requested_by.to_lowercase().contains(&needle);

            matches_search
                && criteria.status.matches(&req.status)
                && criteria.department.matches(&req.department)
                && criteria.priority.matches(&req.priority)
        })
        .cloned()
        .collect()
}

/// Search matches student, parent, email case-insensitively; phone is a
/// raw substring match since phones are numeric.
pub fn filter_leads(records: &[AdmissionLead], criteria: &LeadCriteria) -> Vec<AdmissionLead> {
    let needle = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|lead| {
            let matches_search = criteria.search.is_empty()
                || lead.student_name.to_lowercase().contains(&needle)
                || lead.parent_name.to_lowercase().contains(&needle)
                || lead.email.to_lowercase().contains(&needle)
                || lead.phone.contains(&criteria.search);

            matches_search && criteria.status.matches(&lead.status)
        })
        .cloned()
        .collect()
}

pub fn filter_assets(records: &[ItAsset], criteria: &AssetCriteria) -> Vec<ItAsset> {
    let needle = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|asset| {
            let matches_search = needle.is_empty()
                || asset.asset_id.to_lowercase().contains(&needle)
                || asset.serial_no.to_lowercase().contains(&needle)
                || asset.room_no.to_lowercase().contains(&needle)
                || asset.vendor_name.to_lowercase().contains(&needle);

            matches_search
                && criteria.campus.matches(&asset.campus)
                && criteria.condition.matches(&asset.condition)
        })
        .cloned()
        .collect()
}

/// Tallies `key` occurrences, one entry per distinct key in
/// first-encountered order.
pub fn group_count<T>(records: &[T], key: impl Fn(&T) -> String) -> Vec<NamedCount> {
    let mut out: Vec<NamedCount> = Vec::new();
    for record in records {
        let name = key(record);
        match out.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.value += 1,
            None => out.push(NamedCount { name, value: 1 }),
        }
    }
    out
}

/// Like [`group_count`] but emits exactly one entry per key in
/// `fixed_order`, zero-filled, so funnel stages with no records still
/// render. Keys outside `fixed_order` are dropped.
pub fn group_count_ordered<T>(
    records: &[T],
    key: impl Fn(&T) -> String,
    fixed_order: &[&str],
) -> Vec<NamedCount> {
    let mut out: Vec<NamedCount> = fixed_order
        .iter()
        .map(|name| NamedCount {
            name: (*name).to_string(),
            value: 0,
        })
        .collect();
    for record in records {
        let name = key(record);
        if let Some(entry) = out.iter_mut().find(|entry| entry.name == name) {
            entry.value += 1;
        }
    }
    out
}

/// Daily counts, ascending, truncated to the last `window_days` distinct
/// dates actually present. No calendar padding.
pub fn time_series<T>(
    records: &[T],
    date: impl Fn(&T) -> NaiveDate,
    window_days: usize,
) -> Vec<DatePoint> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(date(record)).or_insert(0) += 1;
    }
    let skip = counts.len().saturating_sub(window_days);
    counts
        .into_iter()
        .skip(skip)
        .map(|(date, count)| DatePoint { date, count })
        .collect()
}

/// Row per distinct `row_key` (first-encountered order), a zero-filled
/// cell per member of `col_domain`. Column values outside the domain are
/// ignored.
pub fn cross_tab<T>(
    records: &[T],
    row_key: impl Fn(&T) -> String,
    col_key: impl Fn(&T) -> String,
    col_domain: &[&str],
) -> CrossTab {
    let columns: Vec<String> = col_domain.iter().map(|c| (*c).to_string()).collect();
    let mut rows: Vec<CrossTabRow> = Vec::new();

    for record in records {
        let name = row_key(record);
        let row = match rows.iter().position(|row| row.name == name) {
            Some(index) => &mut rows[index],
            None => {
                rows.push(CrossTabRow {
                    name,
                    values: vec![0; columns.len()],
                });
                let last = rows.len() - 1;
                &mut rows[last]
            }
        };
        if let Some(col) = col_domain.iter().position(|c| *c == col_key(record)) {
            row.values[col] += 1;
        }
    }

    CrossTab { columns, rows }
}

/// Headline metric: how many records satisfy `predicate`.
pub fn summary_count<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|record| predicate(record)).count()
}
