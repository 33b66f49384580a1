use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Numbered step reporter drawing spinners on stderr.
///
/// When not interactive every method is a no-op, so callers never branch on
/// the terminal state themselves.
pub struct Progress {
    interactive: bool,
    spinner: Option<ProgressBar>,
    step: u8,
    total_steps: u8,
    started: Instant,
    step_started: Instant,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            interactive,
            spinner: None,
            step: 0,
            total_steps,
            started: now,
            step_started: now,
        }
    }

    pub fn step(&mut self, description: &str) {
        if !self.interactive {
            return;
        }
        self.clear_spinner();

        self.step += 1;
        self.step_started = Instant::now();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style.tick_chars("◐◓◑◒ "));
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!(
            "[{}/{}] {description}...",
            self.step, self.total_steps
        ));
        self.spinner = Some(spinner);
    }

    pub fn complete_step(&mut self, description: &str, details: &[String]) {
        if !self.interactive {
            return;
        }
        self.clear_spinner();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<40} {:>6.2}s",
            description,
            self.step_started.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {detail}");
        }
    }

    pub fn finish(mut self) {
        if !self.interactive {
            return;
        }
        self.clear_spinner();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m Done {:>40}",
            format!("Total: {:.2}s", self.started.elapsed().as_secs_f64())
        );
        let _ = writeln!(stderr);
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
