//! Task management commands for CLI.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use matrixdesk_core::storage::{load_tasks, save_tasks};
use matrixdesk_core::{score_breakdown, AssignMode, Config, Quadrant, SqliteStore, Task, TaskInput};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the matrix
    Add {
        /// Task title
        title: String,
        /// Importance 1-5 (default from config)
        #[arg(long, short = 'i', value_parser = clap::value_parser!(u8).range(1..=5))]
        importance: Option<u8>,
        /// Urgency 1-5 (default from config)
        #[arg(long, short = 'u', value_parser = clap::value_parser!(u8).range(1..=5))]
        urgency: Option<u8>,
        /// Effort 1-5 (default from config)
        #[arg(long, short = 'e', value_parser = clap::value_parser!(u8).range(1..=5))]
        effort: Option<u8>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// "auto" or a quadrant (Q1-Do, Q2-Schedule, Q3-Delegate, Q4-Eliminate)
        #[arg(long, default_value = "auto")]
        quadrant: AssignMode,
    },
    /// List tasks grouped by quadrant
    List {
        /// Only show one quadrant
        #[arg(long)]
        quadrant: Option<Quadrant>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one task
    Get {
        /// Task ID
        id: String,
    },
    /// Complete a task (removes it from the matrix)
    Complete {
        /// Task ID
        id: String,
    },
    /// Preview the score for a set of ratings without saving
    Score {
        #[arg(long, short = 'i', value_parser = clap::value_parser!(u8).range(1..=5))]
        importance: Option<u8>,
        #[arg(long, short = 'u', value_parser = clap::value_parser!(u8).range(1..=5))]
        urgency: Option<u8>,
        #[arg(long, short = 'e', value_parser = clap::value_parser!(u8).range(1..=5))]
        effort: Option<u8>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
}

pub fn run(action: TaskAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = &config.tasks;

    match action {
        TaskAction::Add {
            title,
            importance,
            urgency,
            effort,
            due,
            quadrant,
        } => {
            let store = SqliteStore::open()?;
            let input = TaskInput::new(title)
                .with_ratings(
                    importance.unwrap_or(defaults.default_importance),
                    urgency.unwrap_or(defaults.default_urgency),
                    effort.unwrap_or(defaults.default_effort),
                )
                .with_due_date(due)
                .with_assign_mode(quadrant);
            let task = Task::from_input(&input, Utc::now())?;

            let mut matrix = load_tasks(&store)?;
            matrix.add(task.clone());
            save_tasks(&store, &matrix)?;
            tracing::info!(id = %task.id, quadrant = %task.quadrant, score = task.score, "task created");

            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { quadrant, json } => {
            let store = SqliteStore::open()?;
            let matrix = load_tasks(&store)?;
            let quadrants: Vec<Quadrant> = match quadrant {
                Some(q) => vec![q],
                None => Quadrant::ALL.to_vec(),
            };

            if json {
                let tasks: Vec<&Task> = matrix
                    .tasks()
                    .iter()
                    .filter(|t| quadrants.contains(&t.quadrant))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                let counts = matrix.counts();
                for q in quadrants {
                    println!("{} ({}) - {}", q.title(), counts.get(q), q.description());
                    for t in matrix.in_quadrant(q) {
                        println!("  {}  {}  [{}]", t.id, t.title, t.meta_line());
                    }
                }
            }
        }
        TaskAction::Get { id } => {
            let store = SqliteStore::open()?;
            let matrix = load_tasks(&store)?;
            let task = matrix.get(&id).ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::Complete { id } => {
            let store = SqliteStore::open()?;
            let mut matrix = load_tasks(&store)?;
            let task = matrix.complete(&id).ok_or(format!("Task not found: {id}"))?;
            save_tasks(&store, &matrix)?;
            tracing::info!(id = %task.id, "task completed");
            println!("Task completed: {}", task.id);
        }
        TaskAction::Score {
            importance,
            urgency,
            effort,
            due,
        } => {
            let breakdown = score_breakdown(
                importance.unwrap_or(defaults.default_importance),
                urgency.unwrap_or(defaults.default_urgency),
                effort.unwrap_or(defaults.default_effort),
                due,
                Utc::now(),
            );
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
    }
    Ok(())
}
