//! CareerPath CLI - career goal tracking and skill self-assessment.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use careerpath_assessment::{AssessmentResult, AssessmentScorer, QuestionBank};
use careerpath_core::{Date, Goal, GoalId, GoalStatus, MilestoneId, NewGoal, Priority};
use careerpath_progress::GoalTracker;
use careerpath_storage::{seed, JsonStorage, Storage};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "careerpath")]
#[command(about = "Career goal tracking and skill self-assessment", long_about = None)]
struct Cli {
    /// Data directory
    #[arg(long, global = true, env = "CAREERPATH_DATA_DIR", default_value = ".careerpath")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample goals and question bank
    Init {
        /// Overwrite existing goals
        #[arg(long)]
        force: bool,
    },
    /// Create a goal
    Add {
        /// Goal title
        title: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Category (default "Other")
        #[arg(long)]
        category: Option<String>,
        /// Priority: low, medium, high
        #[arg(long)]
        priority: Option<Priority>,
        /// Deadline (YYYY-MM-DD, default today)
        #[arg(long)]
        deadline: Option<Date>,
    },
    /// List goals
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<GoalStatus>,
    },
    /// Show goal details
    Show {
        /// Goal ID
        id: GoalId,
    },
    /// Add a milestone to a goal
    Milestone {
        /// Goal ID
        goal: GoalId,
        /// Milestone title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<Date>,
    },
    /// Toggle a milestone's completion
    Toggle {
        /// Goal ID
        goal: GoalId,
        /// Milestone ID
        milestone: MilestoneId,
    },
    /// Update a goal's progress (advances one step unless --set is given)
    Progress {
        /// Goal ID
        goal: GoalId,
        /// Set progress directly (clamped to 0-100)
        #[arg(long, allow_negative_numbers = true)]
        set: Option<i32>,
    },
    /// Change a goal's status
    Status {
        /// Goal ID
        goal: GoalId,
        /// New status: active, completed, paused
        status: GoalStatus,
    },
    /// Show dashboard summary
    Summary,
    /// Take the skill assessment
    Assess {
        /// Comma-separated option indices (0-3), one per question; prompts when omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Open storage
    let mut storage = JsonStorage::new(&cli.data_dir)
        .await
        .with_context(|| format!("failed to open data directory {}", cli.data_dir.display()))?;

    match cli.command {
        Commands::Init { force } => {
            if storage.is_initialized().await? && !force {
                bail!("{} already holds goals; pass --force to overwrite", cli.data_dir.display());
            }
            let goals = seed::builtin_goals();
            storage.save_goals(&goals).await?;
            storage.save_questions(&seed::builtin_questions()).await?;
            info!("Initialized {}", cli.data_dir.display());
            println!("Wrote {} sample goals and the question bank", goals.len());
        }
        Commands::Add { title, description, category, priority, deadline } => {
            if title.trim().is_empty() {
                bail!("Goal title must not be empty");
            }
            let mut tracker = load_tracker(&storage).await?;
            let goal = tracker.create_goal(NewGoal {
                title,
                description,
                category,
                priority,
                deadline,
            });
            println!("Added goal: {} - {}", goal.id, goal.title);
            storage.save_goals(tracker.goals()).await?;
        }
        Commands::List { status } => {
            let tracker = load_tracker(&storage).await?;
            let goals: Vec<&Goal> = tracker
                .goals()
                .iter()
                .filter(|g| status.map_or(true, |s| g.status == s))
                .collect();

            println!("Goals ({})", goals.len());
            for goal in goals {
                println!("  {} | {} | {} | {:>3}% - {}",
                    goal.id,
                    format_status(goal.status),
                    goal.priority,
                    goal.progress,
                    goal.title,
                );
            }
        }
        Commands::Show { id } => {
            let tracker = load_tracker(&storage).await?;
            print_goal(tracker.goal(id)?);
        }
        Commands::Milestone { goal, title, due } => {
            let mut tracker = load_tracker(&storage).await?;
            let milestone = tracker.add_milestone(goal, title, due)?;
            println!("Added milestone: {} - {}", milestone.id, milestone.title);
            println!("Progress: {}%", tracker.goal(goal)?.progress);
            storage.save_goals(tracker.goals()).await?;
        }
        Commands::Toggle { goal, milestone } => {
            let mut tracker = load_tracker(&storage).await?;
            let updated = tracker.toggle_milestone(goal, milestone)?;
            if let Some(m) = updated.milestone(milestone) {
                println!("{} {}", checkbox(m.completed), m.title);
            }
            println!("Progress: {}%", updated.progress);
            storage.save_goals(tracker.goals()).await?;
        }
        Commands::Progress { goal, set } => {
            let mut tracker = load_tracker(&storage).await?;
            let progress = match set {
                Some(value) => tracker.set_progress(goal, value)?,
                None => tracker.advance_progress(goal)?,
            };
            println!("Progress: {}%", progress);
            storage.save_goals(tracker.goals()).await?;
        }
        Commands::Status { goal, status } => {
            let mut tracker = load_tracker(&storage).await?;
            let updated = tracker.set_status(goal, status)?;
            println!("{} is now {}", updated.title, format_status(updated.status));
            storage.save_goals(tracker.goals()).await?;
        }
        Commands::Summary => {
            let tracker = load_tracker(&storage).await?;
            let summary = tracker.aggregate();

            println!("CareerPath Summary");
            println!("  Active goals: {}", summary.active);
            println!("  Completed: {}", summary.completed);
            println!("  Paused: {}", summary.paused);
            println!("  Average progress: {}%", summary.mean_progress_rounded);
        }
        Commands::Assess { answers } => {
            let questions = match storage.load_questions().await? {
                Some(questions) => questions,
                None => seed::builtin_questions(),
            };
            let mut scorer = AssessmentScorer::new(QuestionBank::new(questions)?);

            match answers {
                Some(answers) => {
                    for answer in answers {
                        scorer.submit_answer(answer)?;
                    }
                    if !scorer.is_complete() {
                        let (_, total) = scorer.position();
                        bail!("Expected {} answers, got {}", total, scorer.answers().len());
                    }
                }
                None => prompt_answers(&mut scorer)?,
            }

            print_result(&scorer.compute_result()?);
        }
    }

    Ok(())
}

async fn load_tracker(storage: &JsonStorage) -> Result<GoalTracker> {
    let goals = storage.load_goals().await?;
    Ok(GoalTracker::new(goals))
}

fn prompt_answers(scorer: &mut AssessmentScorer) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = scorer.current_question().cloned() {
        let (number, total) = scorer.position();
        println!();
        println!("Question {} of {} [{}]", number, total, question.category);
        println!("{}", question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i, option);
        }
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("Assessment aborted before the last question");
        };
        let Ok(option) = line?.trim().parse::<usize>() else {
            println!("Enter the number of an option");
            continue;
        };
        if let Err(e) = scorer.submit_answer(option) {
            println!("{}", e);
        }
    }

    Ok(())
}

fn print_goal(goal: &Goal) {
    println!("Goal: {}", goal.id);
    println!("  Title: {}", goal.title);
    if !goal.description.is_empty() {
        println!("  Description: {}", goal.description);
    }
    println!("  Category: {}", goal.category);
    println!("  Priority: {}", goal.priority);
    println!("  Status: {}", format_status(goal.status));
    println!("  Deadline: {}", goal.deadline);
    println!("  Progress: {}%", goal.progress);
    if !goal.milestones.is_empty() {
        println!("  Milestones ({}/{}):", goal.completed_milestones(), goal.milestones.len());
        for m in &goal.milestones {
            match m.due_date {
                Some(due) => println!("    {} {} {} (due {})", checkbox(m.completed), m.id, m.title, due),
                None => println!("    {} {} {}", checkbox(m.completed), m.id, m.title),
            }
        }
    }
}

fn print_result(result: &AssessmentResult) {
    println!();
    println!("Assessment Complete");
    println!("  Overall: {}% ({})", result.overall_score, result.overall_level);
    println!("  Points: {}/{}", result.total_points, result.max_points);
    println!("  By category:");
    for c in &result.categories {
        println!("    {:<20} {:>3}% {}", c.category, c.score, c.level);
    }

    let focus = result.focus_areas();
    if !focus.is_empty() {
        println!("  Focus areas:");
        for c in focus {
            println!("    {} ({})", c.category, c.level);
        }
    }
}

fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

fn format_status(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Active => "ACTIVE",
        GoalStatus::Completed => "COMPLETED",
        GoalStatus::Paused => "PAUSED",
    }
}
