// ============================================================================
// gridscan-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: Styled report printing
//
// Helpers for headings, sections, labeled values and pass/fail lines.
// Styling is applied only when color is enabled, which defaults to whether
// stdout supports it.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use gridscan_core::AnalysisReport;
use gridscan_core::analysis::{BinaryClassification, BorderReport, ConnectivityReport, ObjectCount};
use log::Level;
use owo_colors::{OwoColorize, Style};

// ============================================================================
// COLOR CONTROL
// ============================================================================

static USE_COLOR: AtomicBool = AtomicBool::new(true);

/// Set whether to use color in terminal output
pub fn set_color(enable: bool) {
    USE_COLOR.store(enable, Ordering::Relaxed);
}

/// Whether stdout is a terminal that supports color.
pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn should_use_color() -> bool {
    USE_COLOR.load(Ordering::Relaxed)
}

fn paint<T: Display>(value: T, style: Style) -> String {
    if should_use_color() {
        value.style(style).to_string()
    } else {
        value.to_string()
    }
}

/// Colors a log level tag for console log lines.
pub fn paint_level(level: Level) -> String {
    let style = match level {
        Level::Error => Style::new().bright_red().bold(),
        Level::Warn => Style::new().yellow().bold(),
        Level::Info => Style::new().bright_cyan(),
        Level::Debug => Style::new().blue(),
        Level::Trace => Style::new().dimmed(),
    };
    paint(format!("[{}]", level), style)
}

// ============================================================================
// BASIC ELEMENTS
// ============================================================================

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = paint("=".repeat(50), Style::new().bright_blue());
    println!("\n{}", line);
    println!("{}", paint(format!(" {} ", text), Style::new().bold().bright_white()));
    println!("{}\n", line);
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    let line = paint("-".repeat(40), Style::new().blue());
    println!("\n{}", line);
    println!("{}", paint(format!(" {} ", text), Style::new().bold().white()));
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", paint(label, Style::new().bright_cyan()), value);
}

pub fn print_success(message: &str) {
    println!("{} {}", paint("✓", Style::new().bright_green().bold()), message);
}

pub fn print_failure(message: &str) {
    println!("{} {}", paint("✗", Style::new().bright_red().bold()), message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", paint("Error:", Style::new().bright_red().bold()), message);
}

/// Print a step as PASSED/FAILED with its detail
pub fn print_step(name: &str, passed: bool, detail: &str) {
    let status = if passed {
        paint("PASSED", Style::new().bright_green().bold())
    } else {
        paint("FAILED", Style::new().bright_red().bold())
    };
    println!("  {:<16} {}  {}", format!("{}:", name), status, detail);
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn cell_or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

// ============================================================================
// ANALYZER RESULTS
// ============================================================================

pub fn print_binary(classification: &BinaryClassification) {
    print_section("Binary Classification");
    print_info("Binary", yes_no(classification.is_binary));
    print_info("Minimum", classification.min);
    print_info("Maximum", classification.max);
    if classification.is_degenerate() {
        print_info("Note", "single intensity level, no foreground");
    }
}

pub fn print_border(report: &BorderReport) {
    print_section("Border Inspection");
    print_info("Background", report.background);
    print_info("Top empty", yes_no(report.top_empty));
    print_info("Bottom empty", yes_no(report.bottom_empty));
    print_info("Left empty", yes_no(report.left_empty));
    print_info("Right empty", yes_no(report.right_empty));
    if report.is_empty() {
        print_success("Border is empty");
    } else {
        print_failure(&format!(
            "Border is not empty (sides: {}; first at {})",
            report.failing_sides().join(", "),
            cell_or_none(report.first_violation)
        ));
    }
}

pub fn print_connectivity(report: &ConnectivityReport) {
    print_section("4-Connectivity");
    print_info("Merge occurred", yes_no(report.merge_occurred));
    print_info("Label conflicts", report.label_conflicts);
    print_info("Components", report.component_count);
    print_info("Background pixels", report.background_count);
    print_info("Example background", cell_or_none(report.example_background));
    print_info("Diagonal contacts", report.diagonal_contacts);
    if report.has_ambiguous_contacts() {
        print_failure(&format!(
            "Foreground touches diagonally, first at {}",
            cell_or_none(report.first_diagonal_contact)
        ));
    } else {
        print_success("No diagonal-only contacts");
    }
}

pub fn print_objects(count: &ObjectCount) {
    print_section("Object Count");
    match count {
        ObjectCount::Counted(tally) => {
            print_info("External corners", tally.external_corners);
            print_info("Internal corners", tally.internal_corners);
            print_info("Components", tally.component_count);
            print_success(&format!("{} object(s)", tally.object_count));
            if !tally.agrees_with_components() {
                print_info("Note", "count differs from components, the grid has holes");
            }
        }
        ObjectCount::Unavailable(reason) => {
            print_failure(&format!("Count unavailable: {}", reason));
        }
    }
}

/// Print the full pipeline report for one grid
pub fn print_analysis_report(name: &str, report: &AnalysisReport) {
    print_heading(name);
    print_info("Size", format!("{} x {}", report.height, report.width));
    println!();
    for (step, passed, detail) in report.get_analysis_steps() {
        print_step(&step, passed, &detail);
    }

    let failures = report.get_failures();
    if failures.is_empty() {
        println!();
        print_success("All checks passed");
    } else {
        print_section("Failures");
        for failure in failures {
            print_failure(&failure);
        }
    }
}
