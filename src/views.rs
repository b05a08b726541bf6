//! Per-screen view controllers. Each owns its transient criteria and
//! selection, shares the seeded [`RecordStore`], and re-derives its
//! outputs through the query engine on demand. The engine itself never
//! holds view state.

use std::sync::Arc;

use serde::Serialize;

use crate::models::{
    AdmissionLead, AmcStatus, Condition, CrossTab, DatePoint, DigitalRequest, ItAsset, LeadStatus,
    NamedCount, Priority, RequestStatus,
};
use crate::query::{self, AssetCriteria, Filter, LeadCriteria, RequestCriteria};
use crate::store::RecordStore;

pub struct RequestsView {
    store: Arc<RecordStore>,
    criteria: RequestCriteria,
    selected_id: Option<String>,
}

impl RequestsView {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            criteria: RequestCriteria::default(),
            selected_id: None,
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.criteria.search = term.to_string();
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.criteria.status = Filter::parse(raw);
    }

    pub fn set_department_filter(&mut self, raw: &str) {
        self.criteria.department = Filter::parse(raw);
    }

    pub fn set_priority_filter(&mut self, raw: &str) {
        self.criteria.priority = Filter::parse(raw);
    }

    pub fn criteria(&self) -> &RequestCriteria {
        &self.criteria
    }

    /// The filtered table, in store order.
    pub fn rows(&self) -> Vec<DigitalRequest> {
        query::filter_requests(&self.store.digital_requests, &self.criteria)
    }

    /// Selection sticks only to an id present in the store.
    pub fn select(&mut self, id: &str) -> bool {
        let known = self
            .store
            .digital_requests
            .iter()
            .any(|req| req.id == id);
        if known {
            self.selected_id = Some(id.to_string());
        }
        known
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected(&self) -> Option<&DigitalRequest> {
        let id = self.selected_id.as_deref()?;
        self.store.digital_requests.iter().find(|req| req.id == id)
    }

    pub fn status_breakdown(&self) -> Vec<NamedCount> {
        query::group_count(&self.store.digital_requests, |req| req.status.to_string())
    }

    /// High or Critical priority that is still open.
    pub fn high_priority_open(&self) -> usize {
        query::summary_count(&self.store.digital_requests, |req| {
            req.priority >= Priority::High
                && req.status != RequestStatus::Completed
                && req.status != RequestStatus::Rejected
        })
    }
}

pub struct AdmissionsView {
    store: Arc<RecordStore>,
    criteria: LeadCriteria,
}

impl AdmissionsView {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            criteria: LeadCriteria::default(),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.criteria.search = term.to_string();
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.criteria.status = Filter::parse(raw);
    }

    pub fn criteria(&self) -> &LeadCriteria {
        &self.criteria
    }

    pub fn rows(&self) -> Vec<AdmissionLead> {
        query::filter_leads(&self.store.admission_leads, &self.criteria)
    }

    pub fn leads_by_source(&self) -> Vec<NamedCount> {
        query::group_count(&self.store.admission_leads, |lead| lead.source.to_string())
    }

    /// Five forward funnel stages, zero-filled; Closed leads drop out.
    pub fn funnel(&self) -> Vec<NamedCount> {
        let stages: Vec<&str> = LeadStatus::FUNNEL.iter().map(|s| s.as_str()).collect();
        query::group_count_ordered(
            &self.store.admission_leads,
            |lead| lead.status.to_string(),
            &stages,
        )
    }

    pub fn created_trend(&self, window_days: usize) -> Vec<DatePoint> {
        query::time_series(&self.store.admission_leads, |lead| lead.created_at, window_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetSummary {
    pub total: usize,
    pub working: usize,
    pub needs_service: usize,
    pub not_working: usize,
    pub active_amc: usize,
}

pub struct AssetsView {
    store: Arc<RecordStore>,
    criteria: AssetCriteria,
}

impl AssetsView {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            criteria: AssetCriteria::default(),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.criteria.search = term.to_string();
    }

    pub fn set_campus_filter(&mut self, raw: &str) {
        self.criteria.campus = Filter::parse(raw);
    }

    pub fn set_condition_filter(&mut self, raw: &str) {
        self.criteria.condition = Filter::parse(raw);
    }

    pub fn criteria(&self) -> &AssetCriteria {
        &self.criteria
    }

    pub fn rows(&self) -> Vec<ItAsset> {
        query::filter_assets(&self.store.it_assets, &self.criteria)
    }

    pub fn summary(&self) -> AssetSummary {
        let assets = &self.store.it_assets;
        AssetSummary {
            total: assets.len(),
            working: query::summary_count(assets, |a| a.condition == Condition::Working),
            needs_service: query::summary_count(assets, |a| a.condition == Condition::NeedsService),
            not_working: query::summary_count(assets, |a| a.condition == Condition::NotWorking),
            active_amc: query::summary_count(assets, |a| a.amc_status == AmcStatus::Active),
        }
    }

    pub fn campus_condition_breakdown(&self) -> CrossTab {
        let domain: Vec<&str> = Condition::VALUES.iter().map(|c| c.as_str()).collect();
        query::cross_tab(
            &self.store.it_assets,
            |asset| asset.campus.to_string(),
            |asset| asset.condition.to_string(),
            &domain,
        )
    }
}

/// Headline metrics for the landing screen, across all three
/// collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_requests: usize,
    pub open_requests: usize,
    pub high_priority_open: usize,
    pub total_leads: usize,
    pub enrolled_leads: usize,
    pub total_assets: usize,
    pub working_assets: usize,
    pub active_amc: usize,
}

pub struct DashboardView {
    store: Arc<RecordStore>,
}

impl DashboardView {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn headline(&self) -> DashboardSummary {
        let requests = &self.store.digital_requests;
        let leads = &self.store.admission_leads;
        let assets = &self.store.it_assets;

        DashboardSummary {
            total_requests: requests.len(),
            open_requests: query::summary_count(requests, |r| {
                r.status != RequestStatus::Completed && r.status != RequestStatus::Rejected
            }),
            high_priority_open: query::summary_count(requests, |r| {
                r.priority >= Priority::High
                    && r.status != RequestStatus::Completed
                    && r.status != RequestStatus::Rejected
            }),
            total_leads: leads.len(),
            enrolled_leads: query::summary_count(leads, |l| l.status == LeadStatus::Enrolled),
            total_assets: assets.len(),
            working_assets: query::summary_count(assets, |a| a.condition == Condition::Working),
            active_amc: query::summary_count(assets, |a| a.amc_status == AmcStatus::Active),
        }
    }

    pub fn requests_by_department(&self) -> Vec<NamedCount> {
        query::group_count(&self.store.digital_requests, |r| r.department.to_string())
    }

    pub fn leads_by_campus(&self) -> Vec<NamedCount> {
        query::group_count(&self.store.admission_leads, |l| l.campus.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RecordStore, StoreConfig};

    fn seeded_store() -> Arc<RecordStore> {
        let config = StoreConfig {
            seed: Some(42),
            ..StoreConfig::default()
        };
        Arc::new(RecordStore::seed(&config).unwrap())
    }

    #[test]
    fn requests_view_reacts_to_criteria_changes() {
        let store = seeded_store();
        let mut view = RequestsView::new(Arc::clone(&store));
        assert_eq!(view.rows().len(), store.digital_requests.len());

        view.set_status_filter("Completed");
        for row in view.rows() {
            assert_eq!(row.status, RequestStatus::Completed);
        }

        view.set_status_filter("All");
        assert_eq!(view.rows().len(), store.digital_requests.len());
    }

    #[test]
    fn selection_requires_a_known_id() {
        let store = seeded_store();
        let mut view = RequestsView::new(Arc::clone(&store));
        let first_id = store.digital_requests[0].id.clone();

        assert!(view.select(&first_id));
        assert_eq!(view.selected().map(|r| r.id.as_str()), Some(first_id.as_str()));

        assert!(!view.select("DR-1999-9999"));
        assert_eq!(view.selected().map(|r| r.id.as_str()), Some(first_id.as_str()));

        view.clear_selection();
        assert!(view.selected().is_none());
    }

    #[test]
    fn status_breakdown_covers_every_request() {
        let store = seeded_store();
        let view = RequestsView::new(Arc::clone(&store));
        let total: usize = view.status_breakdown().iter().map(|e| e.value).sum();
        assert_eq!(total, store.digital_requests.len());
    }

    #[test]
    fn funnel_has_five_stages_in_forward_order() {
        let store = seeded_store();
        let view = AdmissionsView::new(store);
        let funnel = view.funnel();
        let names: Vec<_> = funnel.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["New", "Contacted", "Campus Visit", "Application Submitted", "Enrolled"]
        );
    }

    #[test]
    fn asset_summary_partitions_by_condition() {
        let store = seeded_store();
        let view = AssetsView::new(store);
        let summary = view.summary();
        assert_eq!(
            summary.working + summary.needs_service + summary.not_working,
            summary.total
        );
    }

    #[test]
    fn cross_tab_rows_cover_every_asset() {
        let store = seeded_store();
        let view = AssetsView::new(Arc::clone(&store));
        let tab = view.campus_condition_breakdown();
        let total: usize = tab.rows.iter().flat_map(|row| row.values.iter()).sum();
        assert_eq!(total, store.it_assets.len());
    }

    #[test]
    fn dashboard_headline_is_internally_consistent() {
        let store = seeded_store();
        let view = DashboardView::new(Arc::clone(&store));
        let headline = view.headline();
        assert_eq!(headline.total_requests, store.digital_requests.len());
        assert!(headline.open_requests <= headline.total_requests);
        assert!(headline.high_priority_open <= headline.open_requests);
        assert!(headline.enrolled_leads <= headline.total_leads);
        assert!(headline.working_assets <= headline.total_assets);
    }

    #[test]
    fn views_share_one_store_instance() {
        let store = seeded_store();
        let requests = RequestsView::new(Arc::clone(&store));
        let dashboard = DashboardView::new(Arc::clone(&store));
        assert_eq!(
            requests.rows().len(),
            dashboard.headline().total_requests
        );
    }
}
