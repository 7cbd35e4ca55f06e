//! Run Progress Display
//!
//! Single-line progress rendering for an assessment being polled from the
//! orchestrator. Redraws in place on a terminal, prints only changes otherwise.

use std::time::Instant;

use console::{Term, style};

use crate::types::{RunState, RunStatus};

pub struct RunProgress {
    term: Term,
    started: Instant,
    last: Option<(RunStatus, u8)>,
    enabled: bool,
}

impl RunProgress {
    pub fn new(enabled: bool) -> Self {
        Self {
            term: Term::stderr(),
            started: Instant::now(),
            last: None,
            enabled,
        }
    }

    /// Draw `state` if it differs from the last drawn one
    pub fn update(&mut self, state: &RunState) {
        if !self.enabled || self.last == Some((state.status, state.progress)) {
            return;
        }
        self.last = Some((state.status, state.progress));

        let line = render_line(state, self.started.elapsed().as_secs());
        if self.term.is_term() {
            // Progress output is best effort; a closed stderr is not an error
            let _ = self.term.clear_line();
            let _ = self.term.write_str(&line);
        } else {
            let _ = self.term.write_line(&line);
        }
    }

    pub fn finish(&mut self) {
        if self.enabled && self.term.is_term() {
            let _ = self.term.write_line("");
        }
    }
}

pub fn render_line(state: &RunState, elapsed_secs: u64) -> String {
    let status = match state.status {
        RunStatus::Completed => style(state.status.to_string()).green(),
        RunStatus::Failed => style(state.status.to_string()).red(),
        _ => style(state.status.to_string()).cyan(),
    };
    format!(
        "{} {} {:>3}% {}",
        status,
        render_progress_bar(state.progress as usize, 100, 30),
        state.progress,
        style(format_duration(elapsed_secs)).dim()
    )
}

fn render_progress_bar(completed: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return format!("[{}]", " ".repeat(width));
    }

    let progress = (completed as f32 / total as f32).min(1.0);
    let filled = (progress * width as f32) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
