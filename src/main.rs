use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use achariya_portal::nav::{self, Role, Session};
use achariya_portal::store::{RecordStore, StoreConfig};
use achariya_portal::views::{AdmissionsView, AssetsView, DashboardView, RequestsView};
use achariya_portal::{export, models, report};

#[derive(Parser)]
#[command(name = "achariya-portal")]
#[command(about = "Internal portal core: digital requests, admissions, and IT assets", long_about = None)]
struct Cli {
    /// Seed sizes for the in-memory record store.
    #[arg(long, default_value_t = 60)]
    requests: i64,
    #[arg(long, default_value_t = 80)]
    leads: i64,
    #[arg(long, default_value_t = 50)]
    assets: i64,
    /// Fixed RNG seed for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the digital request table
    Requests {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        status: String,
        #[arg(long, default_value = "All")]
        department: String,
        #[arg(long, default_value = "All")]
        priority: String,
        /// Print the detail view for one request id
        #[arg(long)]
        show: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Browse admissions leads with funnel and source charts
    Admissions {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        status: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Browse IT assets with condition summaries
    Assets {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        campus: String,
        #[arg(long, default_value = "All")]
        condition: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Headline metrics across all collections
    Dashboard {
        #[arg(long)]
        json: bool,
    },
    /// Landing route and visible navigation for a role
    Routes {
        #[arg(long)]
        role: Role,
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown snapshot of the portal
    Report {
        #[arg(long, default_value = "snapshot.md")]
        out: PathBuf,
    },
    /// Export a collection as CSV
    Export {
        /// One of: requests, admissions, assets
        #[arg(long)]
        kind: String,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = StoreConfig {
        requests: cli.requests,
        leads: cli.leads,
        assets: cli.assets,
        seed: cli.seed,
    };
    let store = Arc::new(RecordStore::seed(&config).context("failed to seed the record store")?);

    match cli.command {
        Commands::Requests {
            search,
            status,
            department,
            priority,
            show,
            limit,
            json,
        } => {
            let mut view = RequestsView::new(Arc::clone(&store));
            view.set_search(&search);
            view.set_status_filter(&status);
            view.set_department_filter(&department);
            view.set_priority_filter(&priority);

            if let Some(id) = show {
                if !view.select(&id) {
                    bail!("no request with id {id}");
                }
                let request = view
                    .selected()
                    .context("selected request disappeared from the store")?;
                if json {
                    println!("{}", serde_json::to_string_pretty(request)?);
                } else {
                    print_request_detail(request);
                }
                return Ok(());
            }

            let rows = view.rows();
            if json {
                let page: Vec<_> = rows.iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            println!(
                "{} of {} requests match",
                rows.len(),
                store.digital_requests.len()
            );
            for request in rows.iter().take(limit) {
                println!(
                    "- {} | {} | {} | {} | {} | due {} | {}",
                    request.id,
                    request.request_type,
                    request.department,
                    request.priority,
                    request.status,
                    request.due_date,
                    request.assigned_to
                );
            }
            println!();
            println!("Status mix:");
            for entry in view.status_breakdown() {
                println!("- {}: {}", entry.name, entry.value);
            }
            println!("High-priority open: {}", view.high_priority_open());
        }
        Commands::Admissions {
            search,
            status,
            limit,
            json,
        } => {
            let mut view = AdmissionsView::new(Arc::clone(&store));
            view.set_search(&search);
            view.set_status_filter(&status);

            let rows = view.rows();
            if json {
                let page: Vec<_> = rows.iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            println!(
                "{} of {} leads match",
                rows.len(),
                store.admission_leads.len()
            );
            for lead in rows.iter().take(limit) {
                println!(
                    "- {} | {} ({}, {}) | {} | {} | score {}",
                    lead.lead_id,
                    lead.student_name,
                    lead.campus,
                    lead.grade_applied,
                    lead.status,
                    lead.counselor,
                    lead.probability_score
                );
            }
            println!();
            println!("Leads by source:");
            for entry in view.leads_by_source() {
                println!("- {}: {}", entry.name, entry.value);
            }
            println!("Funnel:");
            for entry in view.funnel() {
                println!("- {}: {}", entry.name, entry.value);
            }
            println!("Created (last 14 active days):");
            for point in view.created_trend(14) {
                println!("- {}: {}", point.date, point.count);
            }
        }
        Commands::Assets {
            search,
            campus,
            condition,
            limit,
            json,
        } => {
            let mut view = AssetsView::new(Arc::clone(&store));
            view.set_search(&search);
            view.set_campus_filter(&campus);
            view.set_condition_filter(&condition);

            let rows = view.rows();
            if json {
                let page: Vec<_> = rows.iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            let summary = view.summary();
            println!(
                "{} panels: {} working, {} need service, {} not working, {} under AMC",
                summary.total,
                summary.working,
                summary.needs_service,
                summary.not_working,
                summary.active_amc
            );
            println!("{} match the current filters", rows.len());
            for asset in rows.iter().take(limit) {
                println!(
                    "- {} | {} {} | {} | {} | serial {}",
                    asset.asset_id,
                    asset.campus,
                    asset.room_no,
                    asset.condition,
                    asset.amc_status,
                    asset.serial_no
                );
            }
            println!();
            println!("Condition by campus:");
            let breakdown = view.campus_condition_breakdown();
            for row in breakdown.rows.iter() {
                let cells: Vec<String> = breakdown
                    .columns
                    .iter()
                    .zip(&row.values)
                    .map(|(column, value)| format!("{value} {}", column.to_lowercase()))
                    .collect();
                println!("- {}: {}", row.name, cells.join(", "));
            }
        }
        Commands::Dashboard { json } => {
            let view = DashboardView::new(Arc::clone(&store));
            let headline = view.headline();
            if json {
                println!("{}", serde_json::to_string_pretty(&headline)?);
                return Ok(());
            }

            println!(
                "Digital requests: {} total, {} open, {} high-priority open",
                headline.total_requests, headline.open_requests, headline.high_priority_open
            );
            println!(
                "Admission leads: {} total, {} enrolled",
                headline.total_leads, headline.enrolled_leads
            );
            println!(
                "Senses panels: {} total, {} working, {} under AMC",
                headline.total_assets, headline.working_assets, headline.active_amc
            );
            println!();
            println!("Requests by department:");
            for entry in view.requests_by_department() {
                println!("- {}: {}", entry.name, entry.value);
            }
            println!("Leads by campus:");
            for entry in view.leads_by_campus() {
                println!("- {}: {}", entry.name, entry.value);
            }
        }
        Commands::Routes { role, json } => {
            let mut session = Session::new();
            let landing = session.login(role, "", "");
            let entries = nav::visible_nav_entries(role);

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            println!("Landing route for {role}: {landing}");
            println!("Navigation:");
            for entry in entries {
                println!("- {} -> {} [{}]", entry.label, entry.route, entry.icon);
            }
        }
        Commands::Report { out } => {
            let snapshot = report::build_snapshot(&store);
            std::fs::write(&out, snapshot)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Snapshot written to {}.", out.display());
        }
        Commands::Export { kind, out } => {
            let file = std::fs::File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let written = match kind.as_str() {
                "requests" => {
                    export::write_requests_csv(file, &store.digital_requests)?;
                    store.digital_requests.len()
                }
                "admissions" => {
                    export::write_leads_csv(file, &store.admission_leads)?;
                    store.admission_leads.len()
                }
                "assets" => {
                    export::write_assets_csv(file, &store.it_assets)?;
                    store.it_assets.len()
                }
                other => {
                    bail!("unknown export kind {other:?}, expected requests, admissions, or assets")
                }
            };
            println!("Exported {written} records to {}.", out.display());
        }
    }

    Ok(())
}

fn print_request_detail(request: &models::DigitalRequest) {
    println!("{}: {}", request.id, request.request_type);
    println!(
        "{} | {} | {} | created {} | due {}",
        request.department, request.priority, request.status, request.created_at, request.due_date
    );
    println!(
        "Requested by {} | assigned to {}",
        request.requested_by, request.assigned_to
    );
    println!();
    println!("{}", request.description);
    println!();
    println!("Timeline:");
    for event in request.timeline.iter() {
        println!("- {} on {}", event.status, event.date);
    }
    if request.comments.is_empty() {
        println!("No comments yet.");
    } else {
        println!("Comments:");
        for comment in request.comments.iter() {
            println!("- {} ({}): {}", comment.user, comment.date, comment.text);
        }
    }
}
