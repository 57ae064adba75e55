use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI parser for the `studyplan` binary.
#[derive(Debug, Parser)]
#[command(name = "studyplan", version, about = "Personal study planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database holding planner state
    #[arg(long, global = true, env = "STUDYPLAN_DB", default_value = "studyplan.sqlite3")]
    pub db: PathBuf,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "STUDYPLAN_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "STUDYPLAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Plan for this weekday instead of today (Mon..Sun)
    #[arg(long, global = true)]
    pub today: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the learner name and daily study hours
    Login { name: String, hours: f64 },
    /// Forget the user, subjects and theme
    Logout,
    /// Manage subjects
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },
    /// Manage topics
    Topic {
        #[command(subcommand)]
        action: TopicAction,
    },
    /// Show today's study plan
    Plan,
    /// Show pending topics for each weekday
    Week,
    /// Show progress, subjects and both plans
    Status,
    /// Show or toggle the display theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add { name: String },
}

#[derive(Debug, Subcommand)]
pub enum TopicAction {
    /// Add a topic to a subject (subject numbers start at 1)
    Add {
        subject: usize,
        name: String,
        hours: f64,
        day: String,
    },
    /// Mark a topic as done (numbers start at 1)
    Done { subject: usize, topic: usize },
}
