// Terminal output for review reports, failures, and batch runs.
//
// `format_*` functions return plain text (used by tests and when color is
// off); `display_*` functions print with color.

use colored::Colorize;

use crate::analysis::sentiment::Mood;
use crate::analysis::similarity::SimilarityLabel;
use crate::analysis::summary::MoodSummary;
use crate::dataset::ReviewDataset;
use crate::error::ReviewError;
use crate::pipeline::{BatchOutcome, ReviewReport, ReviewSentiment};

const SEPARATOR_WIDTH: usize = 45;

/// Printed before the error detail whenever a review can't be processed.
pub const PARAMETER_HINT: &str = "Please check the parameters you pass to the function";

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn sentiment_line(s: &ReviewSentiment, mood: &str) -> String {
    format!(
        "Sentiment for review {} is {}: {}",
        s.id, mood, s.result.sentiment
    )
}

fn render_report(report: &ReviewReport, styled: bool) -> String {
    let mood_text = |s: &ReviewSentiment| -> String {
        if styled {
            colorize_mood(s.result.mood).to_string()
        } else {
            s.result.mood.to_string()
        }
    };

    let mut lines = vec![separator()];
    match report {
        ReviewReport::Single(s) => {
            lines.push(sentiment_line(s, &mood_text(s)));
        }
        ReviewReport::Pair {
            similarity,
            first,
            second,
        } => {
            let label = if styled {
                colorize_similarity(similarity.label).to_string()
            } else {
                similarity.label.to_string()
            };
            lines.push(format!(
                "Similarity for reviews {} and {}: {:.2} - {}",
                first.id, second.id, similarity.score, label
            ));
            lines.push(String::new());
            lines.push(sentiment_line(first, &mood_text(first)));
            lines.push(sentiment_line(second, &mood_text(second)));
        }
    }
    lines.push(separator());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The report block as plain text.
pub fn format_report(report: &ReviewReport) -> String {
    render_report(report, false)
}

fn render_failure(err: &ReviewError, styled: bool) -> String {
    let (hint, detail) = if styled {
        (
            PARAMETER_HINT.yellow().to_string(),
            err.to_string().red().to_string(),
        )
    } else {
        (PARAMETER_HINT.to_string(), err.to_string())
    };
    format!("{hint}\nAn error occurred: {detail}\n")
}

/// The failure message as plain text.
pub fn format_failure(err: &ReviewError) -> String {
    render_failure(err, false)
}

pub fn display_report(report: &ReviewReport) {
    print!("{}", render_report(report, true));
}

pub fn display_failure(err: &ReviewError) {
    print!("{}", render_failure(err, true));
}

/// Display a per-review mood table. `limit` caps the number of rows shown;
/// the summary always covers every outcome.
pub fn display_batch(dataset: &ReviewDataset, outcomes: &[BatchOutcome], limit: Option<usize>) {
    if outcomes.is_empty() {
        println!("No reviews to analyze.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Review Sentiment ({} reviews) ===", outcomes.len()).bold()
    );
    println!();
    println!(
        "  {:>6}  {:<9} {:>8} {:>8}  {}",
        "Id".dimmed(),
        "Mood".dimmed(),
        "Polarity".dimmed(),
        "Subj".dimmed(),
        "Review".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    let shown = limit.unwrap_or(outcomes.len());
    for (id, outcome) in outcomes.iter().take(shown) {
        let preview = dataset
            .record(*id)
            .map(|r| super::truncate_chars(&super::single_line(r.text), 40))
            .unwrap_or_default();
        match outcome {
            Ok(result) => println!(
                "  {:>6}  {:<9} {:>8.2} {:>8.2}  {}",
                id,
                colorize_mood(result.mood),
                result.sentiment.polarity,
                result.sentiment.subjectivity,
                preview.dimmed(),
            ),
            Err(err) => println!(
                "  {:>6}  {:<9} {:>8} {:>8}  {}",
                id,
                "error".red(),
                "-",
                "-",
                err.to_string().dimmed(),
            ),
        }
    }
    if shown < outcomes.len() {
        println!(
            "  {}",
            format!("... {} more not shown", outcomes.len() - shown).dimmed()
        );
    }
    println!();

    let summary = MoodSummary::from_outcomes(outcomes.iter().map(|(_, o)| o));
    display_summary(&summary);
}

/// Display mood counts and mean polarity.
pub fn display_summary(summary: &MoodSummary) {
    println!("{}", "=== Summary ===".bold());
    for mood in [Mood::Positive, Mood::Neutral, Mood::Negative] {
        let count = match mood {
            Mood::Positive => summary.positive,
            Mood::Neutral => summary.neutral,
            Mood::Negative => summary.negative,
        };
        println!(
            "  {:<9} {:>6}  ({:>5.1}%)",
            colorize_mood(mood),
            count,
            summary.share(mood) * 100.0
        );
    }
    if summary.failed > 0 {
        println!("  {:<9} {:>6}", "Failed".red(), summary.failed);
    }
    println!("  Mean polarity: {:.3}", summary.mean_polarity());
}

fn colorize_mood(mood: Mood) -> colored::ColoredString {
    match mood {
        Mood::Positive => mood.as_str().green().bold(),
        Mood::Negative => mood.as_str().red().bold(),
        Mood::Neutral => mood.as_str().yellow(),
    }
}

fn colorize_similarity(label: SimilarityLabel) -> colored::ColoredString {
    match label {
        SimilarityLabel::Similar => label.as_str().bright_green(),
        SimilarityLabel::NotSimilar => label.as_str().dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::SentimentResult;
    use crate::analysis::similarity::SimilarityResult;
    use crate::nlp::traits::Sentiment;

    fn review(id: usize, polarity: f64) -> ReviewSentiment {
        ReviewSentiment {
            id,
            result: SentimentResult {
                sentiment: Sentiment {
                    polarity,
                    subjectivity: 0.5,
                },
                mood: Mood::from_polarity(polarity),
            },
        }
    }

    #[test]
    fn test_format_single() {
        let text = format_report(&ReviewReport::Single(review(0, 0.75)));
        let expected = format!(
            "{sep}\nSentiment for review 0 is Positive: polarity=0.75, subjectivity=0.50\n{sep}\n",
            sep = "-".repeat(45)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_pair() {
        let report = ReviewReport::Pair {
            similarity: SimilarityResult {
                score: 0.3,
                label: SimilarityLabel::NotSimilar,
            },
            first: review(125, 0.75),
            second: review(1025, -0.5),
        };
        let text = format_report(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "Similarity for reviews 125 and 1025: 0.30 - Not similar");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Sentiment for review 125 is Positive"));
        assert!(lines[4].starts_with("Sentiment for review 1025 is Negative"));
    }

    #[test]
    fn test_format_failure() {
        let text = format_failure(&ReviewError::NotFound(7));
        assert_eq!(
            text,
            "Please check the parameters you pass to the function\n\
             An error occurred: review 7 not found in dataset\n"
        );
    }

    #[test]
    fn test_colored_failure_has_same_text() {
        colored::control::set_override(false);
        let err = ReviewError::EmptyText(3);
        assert_eq!(render_failure(&err, true), format_failure(&err));
        colored::control::unset_override();
    }
}
