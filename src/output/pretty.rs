use colored::Colorize;

use crate::clock::{Phase, Snapshot, Transition};
use crate::timer::{format_duration, render_progress_bar, TimerState};

/// Width of the progress bar in tick lines.
const BAR_WIDTH: usize = 20;

fn phase_label(phase: Phase) -> String {
    let label = format!("{:<7}", phase.label());
    match phase {
        Phase::Session => label.red().bold().to_string(),
        Phase::Break => label.green().bold().to_string(),
    }
}

/// Format one countdown line.
pub fn format_snapshot_pretty(snapshot: &Snapshot, progress: f64) -> String {
    let time_left = if snapshot.final_minute {
        snapshot.time_left.yellow().bold().to_string()
    } else {
        snapshot.time_left.bold().to_string()
    };

    let mut line = format!(
        "{} {}  {}",
        phase_label(snapshot.phase),
        time_left,
        render_progress_bar(progress, BAR_WIDTH).dimmed()
    );

    if snapshot.state == TimerState::Paused {
        line.push_str(&format!("  {}", "paused".dimmed()));
    }

    line
}

/// Format a phase change announcement.
pub fn format_transition_pretty(transition: &Transition) -> String {
    let length = chrono::Duration::seconds(i64::from(transition.duration_seconds));
    format!(
        "🔔 {} complete, starting {} ({})",
        transition.from.label().bold(),
        transition.to.label().bold(),
        format_duration(length)
    )
}

/// Format the end-of-run summary.
pub fn format_summary_pretty(phases: u32) -> String {
    format!(
        "✅ Completed {} phase{}",
        phases,
        if phases == 1 { "" } else { "s" }
    )
    .green()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            phase: Phase::Break,
            state: TimerState::Running,
            remaining_seconds: 65,
            time_left: "01:05".to_string(),
            session_length: 25,
            break_length: 5,
            final_minute: false,
        }
    }

    #[test]
    fn test_snapshot_line() {
        colored::control::set_override(false);

        let line = format_snapshot_pretty(&snapshot(), 0.5);
        assert!(line.starts_with("Break   01:05"));
        assert!(line.contains("[██████████░░░░░░░░░░]"));
        assert!(!line.contains("paused"));

        let mut paused = snapshot();
        paused.state = TimerState::Paused;
        assert!(format_snapshot_pretty(&paused, 0.5).ends_with("paused"));
    }

    #[test]
    fn test_transition_line() {
        colored::control::set_override(false);

        let transition = Transition {
            from: Phase::Session,
            to: Phase::Break,
            duration_seconds: 300,
        };
        assert_eq!(
            format_transition_pretty(&transition),
            "🔔 Session complete, starting Break (5 minutes)"
        );
    }

    #[test]
    fn test_summary() {
        colored::control::set_override(false);

        assert_eq!(format_summary_pretty(1), "✅ Completed 1 phase");
        assert_eq!(format_summary_pretty(3), "✅ Completed 3 phases");
    }
}
