use std::fmt::Write;

use chrono::Utc;

use crate::models::{Condition, LeadStatus, RequestStatus};
use crate::query;
use crate::store::RecordStore;

/// Renders the whole portal as a markdown snapshot: headline metrics,
/// the chart series each screen would draw, and the most recent
/// requests.
pub fn build_snapshot(store: &RecordStore) -> String {
    let mut output = String::new();
    let today = Utc::now().date_naive();

    let _ = writeln!(output, "# Achariya Portal Snapshot");
    let _ = writeln!(output, "Generated on {today}");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Headline");
    let _ = writeln!(
        output,
        "- Digital requests: {} total, {} open",
        store.digital_requests.len(),
        query::summary_count(&store.digital_requests, |r| {
            r.status != RequestStatus::Completed && r.status != RequestStatus::Rejected
        })
    );
    let _ = writeln!(
        output,
        "- Admission leads: {} total, {} enrolled",
        store.admission_leads.len(),
        query::summary_count(&store.admission_leads, |l| l.status == LeadStatus::Enrolled)
    );
    let _ = writeln!(
        output,
        "- Senses panels: {} total, {} working",
        store.it_assets.len(),
        query::summary_count(&store.it_assets, |a| a.condition == Condition::Working)
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Request Status Mix");
    let status_mix = query::group_count(&store.digital_requests, |r| r.status.to_string());
    if status_mix.is_empty() {
        let _ = writeln!(output, "No requests recorded.");
    } else {
        for entry in status_mix.iter() {
            let _ = writeln!(output, "- {}: {}", entry.name, entry.value);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Admissions Funnel");
    let stages: Vec<&str> = LeadStatus::FUNNEL.iter().map(|s| s.as_str()).collect();
    let funnel = query::group_count_ordered(
        &store.admission_leads,
        |l| l.status.to_string(),
        &stages,
    );
    for entry in funnel.iter() {
        let _ = writeln!(output, "- {}: {}", entry.name, entry.value);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Panel Condition by Campus");
    let domain: Vec<&str> = Condition::VALUES.iter().map(|c| c.as_str()).collect();
    let breakdown = query::cross_tab(
        &store.it_assets,
        |a| a.campus.to_string(),
        |a| a.condition.to_string(),
        &domain,
    );
    if breakdown.rows.is_empty() {
        let _ = writeln!(output, "No panels recorded.");
    } else {
        for row in breakdown.rows.iter() {
            let cells: Vec<String> = breakdown
                .columns
                .iter()
                .zip(&row.values)
                .map(|(column, value)| format!("{value} {}", column.to_lowercase()))
                .collect();
            let _ = writeln!(output, "- {}: {}", row.name, cells.join(", "));
        }
    }

    let mut recent = store.digital_requests.clone();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Requests");
    if recent.is_empty() {
        let _ = writeln!(output, "No requests recorded.");
    } else {
        for request in recent.iter().take(5) {
            let _ = writeln!(
                output,
                "- {} ({}, {}) created {}, now {}",
                request.id,
                request.request_type,
                request.department,
                request.created_at,
                request.status
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RecordStore, StoreConfig};

    #[test]
    fn snapshot_renders_every_section() {
        let config = StoreConfig {
            seed: Some(7),
            ..StoreConfig::default()
        };
        let store = RecordStore::seed(&config).unwrap();
        let snapshot = build_snapshot(&store);

        assert!(snapshot.contains("# Achariya Portal Snapshot"));
        assert!(snapshot.contains("## Request Status Mix"));
        assert!(snapshot.contains("## Admissions Funnel"));
        assert!(snapshot.contains("## Panel Condition by Campus"));
        assert!(snapshot.contains("## Recent Requests"));
        assert!(snapshot.contains("- Digital requests: 60 total"));
    }

    #[test]
    fn empty_store_renders_fallbacks() {
        let config = StoreConfig {
            requests: 0,
            leads: 0,
            assets: 0,
            seed: Some(7),
        };
        let store = RecordStore::seed(&config).unwrap();
        let snapshot = build_snapshot(&store);

        assert!(snapshot.contains("No requests recorded."));
        assert!(snapshot.contains("No panels recorded."));
        // The funnel always shows its five stages, zero-filled.
        assert!(snapshot.contains("- Enrolled: 0"));
    }
}
