//! Display functions for command results

use super::formatters::{colored_record, create_progress_bar};
use crate::commands::{ReviewReport, SimulationStatistics, SolveResult};
use crate::review::ReviewItem;
use crate::suggest::Suggestions;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, colored_record(&step.record));

        if verbose {
            println!("  Candidates: {}", step.candidates_before);
            println!("  Score:      {}", step.score);
            if step.relaxed {
                println!("  {}", "(relaxed filter)".bright_black());
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print ranked suggestions
pub fn print_suggestions(suggestions: &Suggestions) {
    if suggestions.is_empty() {
        println!("{}", "No words match this history.".red());
        return;
    }

    println!(
        "\n{} {}",
        "Suggestions".bright_cyan().bold(),
        format!("({} matching)", suggestions.total_matches).bright_black()
    );
    if suggestions.relaxed {
        println!(
            "{}",
            "  few strict matches, letter-count limits relaxed".yellow()
        );
    }

    for (i, candidate) in suggestions.words.iter().enumerate() {
        println!(
            "  {:>2}. {}  {}",
            i + 1,
            candidate.word.text().to_uppercase().bright_white().bold(),
            format!("score {}", candidate.score).bright_black()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.total_words == 0 {
        println!("\nNo targets simulated.");
        return;
    }

    let total = stats.total_words as f64;
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "   Failed:           {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=stats.max_guesses.max(1) {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let pct = count as f64 / total * 100.0;
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !stats.hardest.is_empty() {
        println!("\n🔍 {}", "Hardest Targets".bright_cyan().bold());
        for (word, guesses, success) in &stats.hardest {
            let status = if *success {
                format!("{guesses} guesses").yellow()
            } else {
                "failed".red()
            };
            println!("   {:<12} {status}", word.to_uppercase());
        }
    }
}

/// Print the review queue
pub fn print_review_report(report: &ReviewReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Review queue at round {}",
        report.round.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{} ({})", "Due now".green().bold(), report.due.len());
    print_items(&report.due);

    println!("\n{} ({})", "Upcoming".bright_cyan().bold(), report.upcoming.len());
    print_items(&report.upcoming);

    if report.out_of_pool > 0 {
        println!(
            "\n{}",
            format!("{} queued words are outside the current pool", report.out_of_pool)
                .bright_black()
        );
    }

    println!("\n{}", "Recent days".bright_magenta().bold());
    if report.recent_days.is_empty() {
        println!("   {}", "no rounds played yet".bright_black());
    }
    for (day, progress) in &report.recent_days {
        println!(
            "   {day}  {:>3} won / {:>3} played",
            progress.wins, progress.total
        );
    }
}

fn print_items(items: &[ReviewItem]) {
    if items.is_empty() {
        println!("   {}", "none".bright_black());
    }
    for item in items {
        println!(
            "   {:<12} round {:>4}  {}",
            item.word.to_uppercase(),
            item.due_round,
            item.reason.bright_black()
        );
    }
}
