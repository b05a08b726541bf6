use std::io;

use crate::models::{AdmissionLead, DigitalRequest, ItAsset};

/// Flat CSV of the request table; comments and timeline stay in the
/// detail view and are not exported.
pub fn write_requests_csv<W: io::Write>(
    writer: W,
    records: &[DigitalRequest],
) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "id",
        "request_type",
        "department",
        "requested_by",
        "priority",
        "status",
        "created_at",
        "due_date",
        "assigned_to",
        "description",
    ])?;
    for record in records {
        let created_at = record.created_at.to_string();
        let due_date = record.due_date.to_string();
        csv.write_record([
            record.id.as_str(),
            record.request_type.as_str(),
            record.department.as_str(),
            record.requested_by.as_str(),
            record.priority.as_str(),
            record.status.as_str(),
            created_at.as_str(),
            due_date.as_str(),
            record.assigned_to.as_str(),
            record.description.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_leads_csv<W: io::Write>(writer: W, records: &[AdmissionLead]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "lead_id",
        "student_name",
        "parent_name",
        "email",
        "phone",
        "source",
        "campus",
        "grade_applied",
        "status",
        "counselor",
        "created_at",
        "last_contact_date",
        "probability_score",
    ])?;
    for record in records {
        let created_at = record.created_at.to_string();
        let last_contact = record.last_contact_date.to_string();
        let probability = record.probability_score.to_string();
        csv.write_record([
            record.lead_id.as_str(),
            record.student_name.as_str(),
            record.parent_name.as_str(),
            record.email.as_str(),
            record.phone.as_str(),
            record.source.as_str(),
            record.campus.as_str(),
            record.grade_applied.as_str(),
            record.status.as_str(),
            record.counselor.as_str(),
            created_at.as_str(),
            last_contact.as_str(),
            probability.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_assets_csv<W: io::Write>(writer: W, records: &[ItAsset]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "asset_id",
        "asset_type",
        "campus",
        "room_no",
        "serial_no",
        "vendor_name",
        "condition",
        "purchase_date",
        "installation_date",
        "warranty_expiry_date",
        "last_serviced_date",
        "next_service_date",
        "amc_status",
        "last_updated",
    ])?;
    for record in records {
        let purchase = record.purchase_date.to_string();
        let installed = record.installation_date.to_string();
        let warranty = record.warranty_expiry_date.to_string();
        let last_serviced = record.last_serviced_date.to_string();
        let next_service = record.next_service_date.to_string();
        let last_updated = record.last_updated.to_string();
        csv.write_record([
            record.asset_id.as_str(),
            record.asset_type.as_str(),
            record.campus.as_str(),
            record.room_no.as_str(),
            record.serial_no.as_str(),
            record.vendor_name.as_str(),
            record.condition.as_str(),
            purchase.as_str(),
            installed.as_str(),
            warranty.as_str(),
            last_serviced.as_str(),
            next_service.as_str(),
            record.amc_status.as_str(),
            last_updated.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
