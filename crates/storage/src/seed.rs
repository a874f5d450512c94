//! Built-in sample data.
//!
//! Used when the data directory has not been initialized yet.

use careerpath_core::{Date, Goal, GoalId, GoalStatus, Milestone, MilestoneId, Priority, Question};

/// The two sample goals shown on a fresh dashboard.
///
/// Both carry manually entered progress that does not match their
/// milestones; the first toggle re-derives it.
pub fn builtin_goals() -> Vec<Goal> {
    let now = chrono::Utc::now();
    vec![
        Goal {
            id: GoalId::new(),
            title: "Complete Data Science Certification".to_string(),
            description: "Obtain a professional data science certification to advance my career in analytics".to_string(),
            category: "Education".to_string(),
            priority: Priority::High,
            deadline: date(2024, 12, 31),
            progress: 75,
            status: GoalStatus::Active,
            milestones: vec![
                milestone("Complete Python fundamentals", true, None),
                milestone("Finish statistics course", true, None),
                milestone("Build portfolio project", false, Some(date(2024, 11, 15))),
                milestone("Take certification exam", false, Some(date(2024, 12, 15))),
            ],
            created_at: now,
            updated_at: now,
        },
        Goal {
            id: GoalId::new(),
            title: "Build Professional Network".to_string(),
            description: "Connect with 20 industry professionals and attend 5 networking events".to_string(),
            category: "Networking".to_string(),
            priority: Priority::Medium,
            deadline: date(2024, 11, 30),
            progress: 40,
            status: GoalStatus::Active,
            milestones: vec![
                milestone("Attend industry conference", true, None),
                milestone("Connect with 10 professionals on LinkedIn", false, None),
                milestone("Join professional association", false, None),
                milestone("Attend 3 more networking events", false, None),
            ],
            created_at: now,
            updated_at: now,
        },
    ]
}

/// The four-question self-assessment, one question per category.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "1",
            "Technical Skills",
            "Which of the following best describes your experience with version control systems?",
            options([
                "I'm not familiar with version control",
                "I know basic git commands",
                "I can manage branches and resolve conflicts",
                "I can design complex workflows and mentor others",
            ]),
        ),
        Question::new(
            "2",
            "Leadership",
            "How do you typically handle conflicting priorities in a team project?",
            options([
                "I usually avoid conflicts",
                "I discuss with my immediate supervisor",
                "I facilitate team discussions to find solutions",
                "I develop frameworks for priority management",
            ]),
        ),
        Question::new(
            "3",
            "Problem Solving",
            "When facing a complex technical problem, what's your first approach?",
            options([
                "Ask someone for help immediately",
                "Try different solutions until something works",
                "Break down the problem systematically",
                "Research similar problems and adapt solutions",
            ]),
        ),
        Question::new(
            "4",
            "Communication",
            "How comfortable are you presenting technical concepts to non-technical stakeholders?",
            options([
                "I prefer to avoid such presentations",
                "I can present with preparation",
                "I'm comfortable and can adapt my communication style",
                "I excel at translating complex concepts clearly",
            ]),
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn milestone(title: &str, completed: bool, due_date: Option<Date>) -> Milestone {
    Milestone {
        id: MilestoneId::new(),
        title: title.to_string(),
        completed,
        due_date,
    }
}

fn options(texts: [&str; 4]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}
