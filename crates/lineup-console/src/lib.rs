//! Colorful console output for lineup searches.
//!
//! Provides a custom `tracing` layer that formats picker events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: search start and end
//! - **WARN**: searches that accepted nothing
//! - **DEBUG**: each accepted candidate

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static PICK_START_NANOS: AtomicU64 = AtomicU64::new(0);

const DEFAULT_FILTER: &str = "lineup_solver=info";

/// Initializes console output.
///
/// Only the first call has effect. `RUST_LOG` overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(LineupConsoleLayer)
            .try_init();
    });
}

fn mark_pick_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    PICK_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = PICK_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats picker events with colors.
pub struct LineupConsoleLayer;

impl<S: Subscriber> Layer<S> for LineupConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("lineup_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    sample_size: Option<u64>,
    time_limit_ms: Option<u64>,
    constraint_count: Option<u64>,
    heuristic_count: Option<u64>,
    index: Option<u64>,
    generated: Option<u64>,
    accepted: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    acceptance_rate: Option<f64>,
    score: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" {
            self.event = Some(format!("{:?}", value).trim_matches('"').to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "sample_size" => self.sample_size = Some(value),
            "time_limit_ms" => self.time_limit_ms = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "heuristic_count" => self.heuristic_count = Some(value),
            "index" => self.index = Some(value),
            "generated" => self.generated = Some(value),
            "accepted" => self.accepted = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        // Counts are never negative; drop anything that would wrap.
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "acceptance_rate" => self.acceptance_rate = Some(value),
            "score" => self.score = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "pick_start" => format_pick_start(v),
        "candidate_accepted" => format_candidate_accepted(v),
        "pick_end" => format_pick_end(v),
        "no_solution" => format_no_solution(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_pick_start(v: &EventVisitor) -> String {
    mark_pick_start();
    let mut output = format!(
        "{} {} Picking │ up to {} rosters │ {} constraints │ {} heuristics",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.sample_size.unwrap_or(0)).bright_yellow(),
        count(v.constraint_count.unwrap_or(0)).bright_yellow(),
        count(v.heuristic_count.unwrap_or(0)).bright_yellow(),
    );

    if let Some(limit) = v.time_limit_ms {
        output.push_str(&format!(" │ {} limit", format_duration_ms(limit).bright_yellow()));
    }

    output
}

fn format_candidate_accepted(v: &EventVisitor) -> String {
    format!(
        "{} {} Accepted #{} after {} generated",
        format_elapsed(),
        "✓".bright_green(),
        count(v.index.unwrap_or(0)).white().bold(),
        count(v.generated.unwrap_or(0)).bright_black(),
    )
}

fn format_pick_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Picked │ {} │ {} accepted of {} │ {} rosters/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.accepted.unwrap_or(0)).white(),
        count(v.generated.unwrap_or(0)).white(),
        count(v.speed.unwrap_or(0)).bright_magenta().bold(),
    );

    if let Some(rate) = v.acceptance_rate {
        output.push_str(&format!(
            " │ {} acceptance",
            format_percent(rate).bright_yellow()
        ));
    }

    if let Some(score) = v.score {
        output.push_str(&format!(" │ score {}", format_score(score)));
    }

    output
}

fn format_no_solution(v: &EventVisitor) -> String {
    format!(
        "{} {} No roster satisfied every rule │ {} generated in {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        count(v.generated.unwrap_or(0)).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Tiny rates keep three significant digits instead of rounding to zero.
fn format_percent(rate: f64) -> String {
    let percent = rate * 100.0;
    if percent == 0.0 || percent >= 0.1 || !percent.is_finite() {
        return format!("{:.2}%", percent);
    }
    let decimals = (-percent.log10().floor()) as usize + 2;
    format!("{:.*}%", decimals, percent)
}

fn format_score(score: f64) -> String {
    let text = format!("{}", score);
    if score < 0.0 {
        text.bright_red().to_string()
    } else if score > 0.0 {
        text.bright_green().to_string()
    } else {
        text.white().to_string()
    }
}
