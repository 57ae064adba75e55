//! `studyplan` command-line front end.
//!
//! # Responsibility
//! - Parse commands and configuration, then delegate to `StudyService`.
//! - Render view models as plain text.
//!
//! # Invariants
//! - A command that saved a change reports success; rendering after a
//!   mutation only reads the returned snapshot.

use anyhow::bail;
use clap::Parser;
use log::info;
use studyplan_core::db::open_db;
use studyplan_core::{
    default_log_level, init_logging, SqliteStateStore, StateStore, StudyService, Weekday,
};

mod cli;
mod render;

use cli::{Cli, Command, SubjectAction, TopicAction};

fn main() {
    if let Err(error) = run() {
        eprintln!("studyplan error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)?;
    let service = StudyService::new(SqliteStateStore::new(&conn));
    info!("event=cli_command module=cli status=start");

    let output = execute(cli.command, cli.today.as_deref(), &service)?;
    print!("{output}");
    Ok(())
}

/// Runs one command against `service` and returns the text to print.
///
/// `today` is only parsed by commands that plan a day.
fn execute<S: StateStore>(
    command: Command,
    today: Option<&str>,
    service: &StudyService<S>,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Login { name, hours } => {
            let user = service.login(&name, hours)?;
            format!("Welcome, {} ({}h per day)\n", user.name, user.daily_hours)
        }
        Command::Logout => {
            service.logout()?;
            "Logged out.\n".to_string()
        }
        Command::Subject {
            action: SubjectAction::Add { name },
        } => render::collection(&service.add_subject(&name)?),
        Command::Topic {
            action:
                TopicAction::Add {
                    subject,
                    name,
                    hours,
                    day,
                },
        } => render::collection(&service.add_topic(
            to_index(subject, "subject")?,
            &name,
            hours,
            &day,
        )?),
        Command::Topic {
            action: TopicAction::Done { subject, topic },
        } => render::collection(
            &service.mark_complete(to_index(subject, "subject")?, to_index(topic, "topic")?)?,
        ),
        Command::Plan => render::daily_plan(&service.today_plan(plan_day(today)?)?),
        Command::Week => render::weekly_summary(&service.week()?),
        Command::Status => render::dashboard(&service.dashboard(plan_day(today)?)?),
        Command::Theme { toggle } => {
            let theme = if toggle {
                service.toggle_theme()?
            } else {
                service.theme()?
            };
            format!("{theme}\n")
        }
    };
    Ok(output)
}

/// `--today` override, or the local weekday.
fn plan_day(label: Option<&str>) -> anyhow::Result<Weekday> {
    match label {
        Some(label) => Ok(label.parse()?),
        None => Ok(Weekday::today()),
    }
}

/// Converts a 1-based number typed by the user to a 0-based index.
fn to_index(number: usize, what: &str) -> anyhow::Result<usize> {
    if number == 0 {
        bail!("{what} numbers start at 1");
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use studyplan_core::{MemoryStateStore, StudyService};

    use super::execute;
    use crate::cli::Cli;

    fn run_args(service: &StudyService<&MemoryStateStore>, args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("studyplan").chain(args.iter().copied()))
            .expect("cli should parse");
        execute(cli.command, cli.today.as_deref(), service)
    }

    #[test]
    fn topic_commands_succeed_without_login() {
        let store = MemoryStateStore::new();
        let service = StudyService::new(&store);

        run_args(&service, &["subject", "add", "Math"]).unwrap();
        let added = run_args(&service, &["topic", "add", "1", "Limits", "2", "Mon"]).unwrap();
        assert!(added.contains("1. Limits (2h) — Mon [pending]"));

        let done = run_args(&service, &["topic", "done", "1", "1"]).unwrap();
        assert!(done.contains("1. Math — 100% completed"));
        assert!(service.subjects().unwrap().subjects()[0].topics[0].completed);
    }

    #[test]
    fn rejected_topic_is_reported_and_not_saved() {
        let store = MemoryStateStore::new();
        let service = StudyService::new(&store);
        run_args(&service, &["subject", "add", "Math"]).unwrap();

        assert!(run_args(&service, &["topic", "add", "1", "Limits", "0", "Mon"]).is_err());
        assert!(run_args(&service, &["topic", "add", "0", "Limits", "1", "Mon"]).is_err());
        assert_eq!(service.subjects().unwrap().topic_count(), 0);
    }

    #[test]
    fn invalid_today_only_fails_planning_commands() {
        let store = MemoryStateStore::new();
        let service = StudyService::new(&store);

        run_args(&service, &["--today", "Funday", "login", "Ada", "3"]).unwrap();
        run_args(&service, &["--today", "Funday", "subject", "add", "Math"]).unwrap();
        assert_eq!(
            run_args(&service, &["--today", "Funday", "theme"]).unwrap(),
            "light\n"
        );

        assert!(run_args(&service, &["--today", "Funday", "plan"]).is_err());
        assert!(run_args(&service, &["--today", "Funday", "status"]).is_err());
        assert_eq!(
            run_args(&service, &["--today", "Mon", "plan"]).unwrap(),
            "No study scheduled today.\n"
        );
    }

    #[test]
    fn status_after_login_renders_dashboard() {
        let store = MemoryStateStore::new();
        let service = StudyService::new(&store);
        run_args(&service, &["login", "Ada", "3"]).unwrap();
        run_args(&service, &["subject", "add", "Math"]).unwrap();
        run_args(&service, &["topic", "add", "1", "Limits", "2", "Mon"]).unwrap();

        let status = run_args(&service, &["--today", "Mon", "status"]).unwrap();

        assert!(status.starts_with("Welcome, Ada\nOverall progress: 0%\n"));
        assert!(status.contains("Today (Mon):\n• Limits — 2h\n"));
        assert!(status.contains("Mon: Limits (2h)\n"));
    }
}
