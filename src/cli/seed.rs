// Seed command implementation
// Loads the demo role catalog, user directory, and sample tasks

use chrono::{Duration, Utc};

use crate::app_data::AppData;
use crate::stores::task_store::NewTask;
use crate::stores::user_store::NewUser;
use crate::types::db::user;

struct SeedUser {
    username: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    manager_id: Option<i32>,
    department: &'static str,
    location: &'static str,
    role: &'static str,
}

struct SeedTask {
    title: &'static str,
    description: &'static str,
    task_type: &'static str,
    status: &'static str,
    priority: &'static str,
    assigned_to: i32,
    created_by: i32,
    due_in_days: i64,
}

const DEMO_PASSWORD: &str = "admin123";

const ROLES: &[(&str, &str)] = &[
    ("Administrator", "Full system access and user management"),
    ("Sales Manager", "Manage sales team and view team tasks"),
    ("Sales User", "Create and manage own sales tasks"),
    ("Reporting User", "Read-only access to reports and dashboards"),
];

// Manager ids reference row order: admin is 1, jsmith 2, sjohnson 3.
const USERS: &[SeedUser] = &[
    SeedUser {
        username: "admin",
        first_name: "Admin",
        last_name: "User",
        email: "admin@taskhubdemo.com",
        manager_id: None,
        department: "IT",
        location: "San Francisco",
        role: "Administrator",
    },
    SeedUser {
        username: "jsmith",
        first_name: "John",
        last_name: "Smith",
        email: "john.smith@taskhubdemo.com",
        manager_id: None,
        department: "Sales",
        location: "New York",
        role: "Sales Manager",
    },
    SeedUser {
        username: "sjohnson",
        first_name: "Sarah",
        last_name: "Johnson",
        email: "sarah.johnson@taskhubdemo.com",
        manager_id: None,
        department: "Sales",
        location: "Chicago",
        role: "Sales Manager",
    },
    SeedUser {
        username: "mwilliams",
        first_name: "Michael",
        last_name: "Williams",
        email: "michael.williams@taskhubdemo.com",
        manager_id: Some(2),
        department: "Sales",
        location: "New York",
        role: "Sales User",
    },
    SeedUser {
        username: "ebrown",
        first_name: "Emily",
        last_name: "Brown",
        email: "emily.brown@taskhubdemo.com",
        manager_id: Some(2),
        department: "Sales",
        location: "New York",
        role: "Sales User",
    },
    SeedUser {
        username: "djones",
        first_name: "David",
        last_name: "Jones",
        email: "david.jones@taskhubdemo.com",
        manager_id: Some(3),
        department: "Sales",
        location: "Chicago",
        role: "Sales User",
    },
    SeedUser {
        username: "lgarcia",
        first_name: "Lisa",
        last_name: "Garcia",
        email: "lisa.garcia@taskhubdemo.com",
        manager_id: Some(3),
        department: "Sales",
        location: "Chicago",
        role: "Sales User",
    },
    SeedUser {
        username: "rmartinez",
        first_name: "Robert",
        last_name: "Martinez",
        email: "robert.martinez@taskhubdemo.com",
        manager_id: Some(1),
        department: "Analytics",
        location: "San Francisco",
        role: "Reporting User",
    },
];

const TASKS: &[SeedTask] = &[
    SeedTask {
        title: "Follow up with Acme Corp",
        description: "Schedule a follow-up call to discuss the Q2 proposal",
        task_type: "Follow-up",
        status: "open",
        priority: "high",
        assigned_to: 4,
        created_by: 2,
        due_in_days: 3,
    },
    SeedTask {
        title: "Prepare Q1 sales report",
        description: "Compile all Q1 sales data and prepare presentation for management",
        task_type: "Reporting",
        status: "in_progress",
        priority: "high",
        assigned_to: 5,
        created_by: 2,
        due_in_days: 5,
    },
    SeedTask {
        title: "Cold call new prospects",
        description: "Reach out to 20 new prospects from the marketing qualified leads list",
        task_type: "Prospecting",
        status: "open",
        priority: "medium",
        assigned_to: 4,
        created_by: 4,
        due_in_days: 7,
    },
    SeedTask {
        title: "Update CRM records",
        description: "Update contact information for all accounts in the Chicago region",
        task_type: "Administrative",
        status: "in_progress",
        priority: "low",
        assigned_to: 6,
        created_by: 3,
        due_in_days: 10,
    },
    SeedTask {
        title: "Demo for TechStart Inc",
        description: "Conduct product demo for TechStart Inc stakeholders",
        task_type: "Demo",
        status: "completed",
        priority: "high",
        assigned_to: 7,
        created_by: 3,
        due_in_days: -2,
    },
    SeedTask {
        title: "Negotiate contract terms",
        description: "Work with legal to finalize contract terms for Global Systems deal",
        task_type: "Negotiation",
        status: "in_progress",
        priority: "high",
        assigned_to: 5,
        created_by: 2,
        due_in_days: 4,
    },
    SeedTask {
        title: "Attend sales training",
        description: "Complete the new product features training module",
        task_type: "Training",
        status: "open",
        priority: "medium",
        assigned_to: 6,
        created_by: 3,
        due_in_days: 14,
    },
    SeedTask {
        title: "Client visit preparation",
        description: "Prepare materials and agenda for on-site client visit next week",
        task_type: "Meeting Prep",
        status: "open",
        priority: "high",
        assigned_to: 7,
        created_by: 7,
        due_in_days: 6,
    },
    SeedTask {
        title: "Renewal discussion",
        description: "Contact Beta Solutions about their annual contract renewal",
        task_type: "Renewal",
        status: "open",
        priority: "medium",
        assigned_to: 4,
        created_by: 2,
        due_in_days: 15,
    },
    SeedTask {
        title: "Territory analysis",
        description: "Analyze sales performance across all territories for strategy meeting",
        task_type: "Analysis",
        status: "completed",
        priority: "medium",
        assigned_to: 3,
        created_by: 1,
        due_in_days: -5,
    },
    SeedTask {
        title: "Lead qualification",
        description: "Qualify and score the new leads from last weeks webinar",
        task_type: "Prospecting",
        status: "in_progress",
        priority: "medium",
        assigned_to: 6,
        created_by: 6,
        due_in_days: 2,
    },
    SeedTask {
        title: "Competitor research",
        description: "Research new competitor offerings and update competitive analysis",
        task_type: "Research",
        status: "open",
        priority: "low",
        assigned_to: 5,
        created_by: 2,
        due_in_days: 20,
    },
    SeedTask {
        title: "Customer feedback review",
        description: "Review customer feedback from Q4 and identify improvement areas",
        task_type: "Review",
        status: "completed",
        priority: "medium",
        assigned_to: 7,
        created_by: 3,
        due_in_days: -3,
    },
    SeedTask {
        title: "Pipeline review meeting",
        description: "Prepare for monthly pipeline review with sales leadership",
        task_type: "Meeting Prep",
        status: "open",
        priority: "high",
        assigned_to: 2,
        created_by: 1,
        due_in_days: 1,
    },
    SeedTask {
        title: "Sales enablement materials",
        description: "Create new sales enablement materials for product launch",
        task_type: "Content Creation",
        status: "in_progress",
        priority: "medium",
        assigned_to: 4,
        created_by: 2,
        due_in_days: 8,
    },
];

/// Seed the demo dataset: roles, users, and sample tasks
///
/// Idempotent at the dataset level: if any user already exists the seed is
/// skipped entirely rather than partially re-applied.
pub async fn seed_demo_data(app_data: &AppData) -> Result<(), Box<dyn std::error::Error>> {
    if !app_data.user_store.list_all().await?.is_empty() {
        println!("Users already exist, skipping seed");
        return Ok(());
    }

    println!("Seeding demo data...");

    let mut role_ids = std::collections::HashMap::new();
    for (name, description) in ROLES {
        let role = match app_data.role_store.find_by_name(name).await? {
            Some(existing) => existing,
            None => app_data.role_store.create_role(name, Some(description)).await?,
        };
        role_ids.insert(*name, role.id);
    }

    let password_hash = app_data.credential_store.hash_password(DEMO_PASSWORD)?;

    for seed in USERS {
        let created = app_data
            .user_store
            .insert_user(
                &app_data.db,
                NewUser {
                    username: seed.username.to_string(),
                    password_hash: password_hash.clone(),
                    first_name: seed.first_name.to_string(),
                    last_name: seed.last_name.to_string(),
                    email: seed.email.to_string(),
                    manager_id: seed.manager_id,
                    department: Some(seed.department.to_string()),
                    location: Some(seed.location.to_string()),
                    status: user::STATUS_ACTIVE.to_string(),
                },
            )
            .await?;

        let role_id = role_ids
            .get(seed.role)
            .copied()
            .ok_or_else(|| format!("Unknown seed role: {}", seed.role))?;
        app_data
            .role_store
            .assign_roles(&app_data.db, created.id, &[role_id])
            .await?;
    }

    for seed in TASKS {
        let due_date = (Utc::now() + Duration::days(seed.due_in_days))
            .format("%Y-%m-%d")
            .to_string();
        app_data
            .task_store
            .create(NewTask {
                title: seed.title.to_string(),
                description: Some(seed.description.to_string()),
                task_type: seed.task_type.to_string(),
                status: seed.status.to_string(),
                priority: seed.priority.to_string(),
                assigned_to: seed.assigned_to,
                created_by: seed.created_by,
                due_date: Some(due_date),
            })
            .await?;
    }

    println!("Demo data seeded successfully");
    println!("\nDemo login credentials:");
    println!("   Administrator: admin / admin123");
    println!("   Sales Manager: jsmith / admin123");
    println!("   Sales User: mwilliams / admin123");
    println!("   Reporting User: rmartinez / admin123\n");

    Ok(())
}
