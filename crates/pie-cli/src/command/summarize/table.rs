//! Summary table display

use pie_analysis::summary::{ConditionSummary, RATE_EPSILON, SubjectSummary};

/// Print legend explaining table columns
pub(super) fn print_legend() {
    println!("Legend:");
    println!("  Accuracy    : correct / (correct + incorrect + {RATE_EPSILON})");
    println!("  Missing     : no-intervention rows / (all rows + {RATE_EPSILON})");
    println!("  Mean / SD   : over the subjects of a condition (population SD)");
}

pub(super) fn print_subject_table(subjects: &[SubjectSummary]) {
    println!(
        "  {:<10} {:<20} {:>8} {:>8} {:>8} {:>10} {:>8} {:>10} {:>10}",
        "Subject",
        "Task",
        "Length",
        "Rows",
        "Correct",
        "Incorrect",
        "Missing",
        "Accuracy",
        "Missing%",
    );
    // subject(10) + task(20) + length(8) + rows(8) + correct(8) + incorrect(10) + missing(8) + accuracy(10) + missing%(10) + spaces(8)
    println!("  {}", "-".repeat(100));

    for summary in subjects {
        let counts = &summary.counts;
        println!(
            "  {:<10} {:<20} {:>8} {:>8} {:>8} {:>10} {:>8} {:>10.3} {:>9.1}%",
            summary.subject,
            summary.task.label(),
            summary.int_length.to_string(),
            counts.total(),
            counts.correct,
            counts.incorrect,
            counts.missing,
            summary.accuracy,
            100.0 * summary.missing_rate,
        );
    }
}

pub(super) fn print_condition_table(conditions: &[ConditionSummary]) {
    println!(
        "  {:<20} {:>8} {:>9} {:>10} {:>10} {:>12} {:>12}",
        "Task", "Length", "Subjects", "Acc Mean", "Acc SD", "Missing Mean", "Missing SD",
    );
    // task(20) + length(8) + subjects(9) + acc(10) + sd(10) + missing(12) + sd(12) + spaces(6)
    println!("  {}", "-".repeat(87));

    for condition in conditions {
        println!(
            "  {:<20} {:>8} {:>9} {:>10.3} {:>10.3} {:>12.3} {:>12.3}",
            condition.task.label(),
            condition.int_length.to_string(),
            condition.accuracy.count,
            condition.accuracy.mean,
            condition.accuracy.std_dev,
            condition.missing_rate.mean,
            condition.missing_rate.std_dev,
        );
    }
}
