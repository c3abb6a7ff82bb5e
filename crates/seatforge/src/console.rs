//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that formats seating solver events with
//! colors. Enabled with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "seatforge_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SeatingConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SeatingConsoleLayer;

impl<S: Subscriber> Layer<S> for SeatingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("seatforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_solver_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    outcome: Option<String>,
    reason: Option<String>,
    student: Option<String>,
    students: Option<u64>,
    constraints: Option<u64>,
    rows: Option<u64>,
    cols: Option<u64>,
    seats: Option<u64>,
    available_seats: Option<u64>,
    nodes: Option<u64>,
    backtracks: Option<u64>,
    depth: Option<u64>,
    candidates: Option<u64>,
    duration_ms: Option<u64>,
    elapsed_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "students" => &mut self.students,
            "constraints" => &mut self.constraints,
            "rows" => &mut self.rows,
            "cols" => &mut self.cols,
            "seats" => &mut self.seats,
            "available_seats" => &mut self.available_seats,
            "nodes" => &mut self.nodes,
            "backtracks" => &mut self.backtracks,
            "depth" => &mut self.depth,
            "candidates" => &mut self.candidates,
            "duration_ms" => &mut self.duration_ms,
            "elapsed_ms" => &mut self.elapsed_ms,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "outcome" => self.outcome = Some(value),
            "reason" => self.reason = Some(value),
            "student" => self.student = Some(value),
            _ => {}
        }
    }
}

fn format_solver_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "capacity_rejected" => format_capacity_rejected(v),
        "limit_reached" => format_limit_reached(v),
        "variable_selected" => format_variable_selected(v),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} students ({}), constraints ({}), room {}x{} with {} available seats",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        count(v.students).bright_yellow(),
        count(v.constraints).bright_yellow(),
        count(v.rows).white(),
        count(v.cols).white(),
        count(v.available_seats).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solved = v.outcome.as_deref() == Some("solved");
    let status = if solved {
        "SEATING FOUND".bright_green().bold().to_string()
    } else {
        "NO SEATING".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} {} Solving ended: {} in {}, {} placements, {} backtracks",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        status,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes).bright_magenta(),
        count(v.backtracks).white(),
    );
    if let Some(reason) = v.reason.as_deref().filter(|_| !solved) {
        output.push_str(&format!("\n    {} {}", "->".bright_blue(), reason.bright_red()));
    }
    output
}

fn format_capacity_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} students for {} seats, search skipped",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Solver]".bright_cyan(),
        count(v.students).bright_red(),
        count(v.seats).white(),
    )
}

fn format_limit_reached(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Search limit reached after {} placements ({})",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Solver]".bright_cyan(),
        count(v.nodes).bright_magenta(),
        format_duration_ms(v.elapsed_ms.unwrap_or(0)).yellow(),
    )
}

fn format_variable_selected(v: &EventVisitor) -> String {
    format!(
        "    {} depth {:>4} | {} ({} seats)",
        "->".bright_blue(),
        count(v.depth).white(),
        v.student.as_deref().unwrap_or("?").bold(),
        count(v.candidates),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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
