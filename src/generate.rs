use chrono::{Datelike, Duration, Months, NaiveDate, Utc};

use crate::models::{
    AdmissionLead, AmcStatus, AssetType, Campus, Comment, Condition, Department, DigitalRequest,
    ItAsset, LeadSource, LeadStatus, Priority, RequestStatus, RequestType, ServiceEntry,
    TimelineEvent,
};

#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // Avoid the degenerate all-zero state.
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    /// Seeds from the wall clock; runs are not reproducible unless the
    /// caller passes an explicit seed instead.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* (simple, fast, deterministic).
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform value in `0..upper`; `upper == 0` yields 0.
    pub fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() % (upper as u64)) as usize
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len())]
    }

    fn recent_date(&mut self, today: NaiveDate, within_days: usize) -> NaiveDate {
        today - Duration::days(self.below(within_days.max(1)) as i64)
    }

    fn future_date(&mut self, today: NaiveDate, within_days: usize) -> NaiveDate {
        today + Duration::days(1 + self.below(within_days.max(1)) as i64)
    }
}

const FIRST_NAMES: &[&str] = &[
    "Avery", "Jules", "Kiara", "Meera", "Rahul", "Anitha", "Suresh", "Divya", "Karthik", "Priya",
    "Sanjay", "Lakshmi", "Arjun", "Nisha",
];

const LAST_NAMES: &[&str] = &[
    "Iyer", "Sharma", "Kumar", "Nair", "Reddy", "Menon", "Pillai", "Das",
];

const COUNSELORS: &[&str] = &["Meera", "Rahul", "Anitha", "Suresh", "Divya"];

const VENDORS: &[&str] = &[
    "VendorTech Systems",
    "EduScreen Pvt Ltd",
    "ClassTech Solutions",
];

const GRADES: &[&str] = &[
    "Grade 1", "Grade 5", "Grade 8", "Grade 10", "Grade 12", "BSc CS", "BE CSE", "BCom",
];

const DESCRIPTIONS: &[&str] = &[
    "Refresh the landing page banner and align copy with the current campaign.",
    "Batch of creatives needed for the upcoming open-house weekend.",
    "Workflow should route approvals through the department head first.",
    "Thumbnail set for the new campus tour video series.",
    "Update staff directory photos and contact blocks on the website.",
    "Short promotional video covering the annual day highlights.",
    "Enquiry form submissions are not reaching the shared inbox.",
    "New page for the scholarship programme with an application link.",
];

const COMMENT_TEXTS: &[&str] = &[
    "Picking this up today.",
    "Waiting on assets from the requester.",
    "Draft shared for review.",
    "Needs sign-off before we proceed.",
];

fn full_name(rng: &mut XorShift64) -> String {
    format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES))
}

fn serial_no(rng: &mut XorShift64) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ0123456789";
    let tail: String = (0..10)
        .map(|_| ALPHABET[rng.below(ALPHABET.len())] as char)
        .collect();
    format!("SP-{tail}")
}

pub fn generate_requests(rng: &mut XorShift64, count: usize) -> Vec<DigitalRequest> {
    let today = Utc::now().date_naive();
    let year = today.year();
    let mut requests = Vec::with_capacity(count);

    for i in 0..count {
        let created_at = rng.recent_date(today, 30);
        let due_date = created_at + Duration::days(1 + rng.below(36) as i64);

        let comments = (0..rng.below(4))
            .map(|_| Comment {
                user: rng.pick(FIRST_NAMES).to_string(),
                text: rng.pick(COMMENT_TEXTS).to_string(),
                date: rng.recent_date(today, 5),
            })
            .collect();

        requests.push(DigitalRequest {
            id: format!("DR-{year}-{:04}", i + 1),
            request_type: rng.pick(RequestType::VALUES),
            department: rng.pick(Department::VALUES),
            requested_by: rng.pick(FIRST_NAMES).to_string(),
            priority: rng.pick(Priority::VALUES),
            status: rng.pick(RequestStatus::VALUES),
            created_at,
            due_date,
            assigned_to: rng.pick(FIRST_NAMES).to_string(),
            description: rng.pick(DESCRIPTIONS).to_string(),
            comments,
            timeline: vec![TimelineEvent {
                status: RequestStatus::New,
                date: created_at,
            }],
        });
    }

    requests
}

pub fn generate_leads(rng: &mut XorShift64, count: usize) -> Vec<AdmissionLead> {
    let today = Utc::now().date_naive();
    let year = today.year();
    let mut leads = Vec::with_capacity(count);

    for i in 0..count {
        let student_name = full_name(rng);
        let email = format!(
            "{}{}@example.com",
            student_name.to_lowercase().replace(' ', "."),
            rng.below(90) + 10,
        );

        leads.push(AdmissionLead {
            lead_id: format!("AL-{year}-{:04}", i + 101),
            student_name,
            parent_name: rng.pick(FIRST_NAMES).to_string(),
            email,
            phone: format!("+91 9{:09}", rng.next_u64() % 1_000_000_000),
            source: rng.pick(LeadSource::VALUES),
            campus: rng.pick(Campus::VALUES),
            grade_applied: rng.pick(GRADES).to_string(),
            status: rng.pick(LeadStatus::VALUES),
            counselor: rng.pick(COUNSELORS).to_string(),
            created_at: rng.recent_date(today, 60),
            last_contact_date: rng.recent_date(today, 30),
            probability_score: rng.below(101) as u8,
        });
    }

    leads
}

pub fn generate_assets(rng: &mut XorShift64, count: usize) -> Vec<ItAsset> {
    let today = Utc::now().date_naive();
    let mut assets = Vec::with_capacity(count);

    for i in 0..count {
        let purchase_date = rng.recent_date(today, 3 * 365);
        let installation_date = purchase_date + Duration::days(5);
        let warranty_expiry_date = purchase_date + Months::new(36);

        let service_history = (0..rng.below(3))
            .map(|_| ServiceEntry {
                date: rng.recent_date(today, 365),
                description: "Routine maintenance".to_string(),
                technician: full_name(rng),
            })
            .collect();

        assets.push(ItAsset {
            asset_id: format!("IT-SP-{:04}", i + 1),
            // This deployment tracks Senses Panels only.
            asset_type: AssetType::SensesPanel,
            campus: rng.pick(Campus::VALUES),
            room_no: format!("Room {}", 100 + rng.below(401)),
            serial_no: serial_no(rng),
            vendor_name: rng.pick(VENDORS).to_string(),
            condition: rng.pick(Condition::VALUES),
            purchase_date,
            installation_date,
            warranty_expiry_date,
            last_serviced_date: rng.recent_date(today, 365),
            next_service_date: rng.future_date(today, 365),
            amc_status: rng.pick(AmcStatus::VALUES),
            last_updated: rng.recent_date(today, 10),
            service_history,
        });
    }

    assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_count_yields_empty() {
        let mut rng = XorShift64::new(7);
        assert!(generate_requests(&mut rng, 0).is_empty());
        assert!(generate_leads(&mut rng, 0).is_empty());
        assert!(generate_assets(&mut rng, 0).is_empty());
    }

    #[test]
    fn request_ids_are_unique_and_sequential() {
        let mut rng = XorShift64::new(7);
        let requests = generate_requests(&mut rng, 60);
        let ids: HashSet<_> = requests.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 60);
        assert!(requests[0].id.starts_with("DR-"));
        assert!(requests[0].id.ends_with("-0001"));
        assert!(requests[59].id.ends_with("-0060"));
    }

    #[test]
    fn lead_ids_start_at_offset_101() {
        let mut rng = XorShift64::new(11);
        let leads = generate_leads(&mut rng, 3);
        assert!(leads[0].lead_id.ends_with("-0101"));
        assert!(leads[2].lead_id.ends_with("-0103"));
        let ids: HashSet<_> = leads.iter().map(|l| l.lead_id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn request_dates_are_ordered() {
        let mut rng = XorShift64::new(13);
        for request in generate_requests(&mut rng, 100) {
            assert!(request.created_at <= request.due_date);
        }
    }

    #[test]
    fn request_timeline_opens_with_creation() {
        let mut rng = XorShift64::new(17);
        for request in generate_requests(&mut rng, 40) {
            let first = &request.timeline[0];
            assert_eq!(first.status, crate::models::RequestStatus::New);
            assert_eq!(first.date, request.created_at);
        }
    }

    #[test]
    fn asset_dates_are_ordered() {
        let mut rng = XorShift64::new(19);
        for asset in generate_assets(&mut rng, 100) {
            assert!(asset.purchase_date <= asset.installation_date);
            assert!(asset.installation_date <= asset.warranty_expiry_date);
            assert_eq!(
                asset.installation_date,
                asset.purchase_date + Duration::days(5)
            );
        }
    }

    #[test]
    fn asset_ids_are_unique() {
        let mut rng = XorShift64::new(23);
        let assets = generate_assets(&mut rng, 50);
        let ids: HashSet<_> = assets.iter().map(|a| a.asset_id.as_str()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(assets[0].asset_id, "IT-SP-0001");
    }

    #[test]
    fn lead_probability_stays_in_range() {
        let mut rng = XorShift64::new(29);
        for lead in generate_leads(&mut rng, 200) {
            assert!(lead.probability_score <= 100);
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let a = generate_requests(&mut XorShift64::new(42), 10);
        let b = generate_requests(&mut XorShift64::new(42), 10);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.status, y.status);
            assert_eq!(x.created_at, y.created_at);
        }
    }
}
