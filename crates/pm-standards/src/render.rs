/// Markdown rendering of the pure results. No lookups happen here.
use crate::bookmarks::BookmarkSet;
use crate::comparison::ComparisonTable;
use crate::model::{Insights, Standard, Tag, Topic};
use crate::recommend::Recommendation;
use crate::search::no_results_message;

pub fn topic_card(topic: &Topic) -> String {
    let mut out = format!("### {} (`{}`)\n\n", topic.title, topic.key.as_str());
    for standard in Standard::ALL {
        out.push_str(&format!(
            "- **{}:** {}\n",
            standard.short_label(),
            topic.text(*standard)
        ));
    }
    out
}

/// Empty query renders nothing; a query without matches renders the no-results line.
pub fn search_results(query: &str, results: &[&Topic]) -> String {
    if query.is_empty() {
        return String::new();
    }
    if results.is_empty() {
        return format!("{}\n", no_results_message(query));
    }
    results
        .iter()
        .map(|topic| topic_card(topic))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn comparison_table(table: &ComparisonTable) -> String {
    let columns = table.columns();
    let mut out = format!("| {} |\n", columns.join(" | "));
    out.push_str(&format!("|{}\n", "---|".repeat(columns.len())));
    for row in &table.rows {
        let mut cells = vec![cell(row.title)];
        cells.extend(Standard::ALL.iter().map(|s| cell(row.text(*s))));
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

/// Empty insights (unknown topic) render as nothing, clearing the lists.
pub fn insights(insights: &Insights) -> String {
    if insights.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for (heading, items) in [
        ("Similarities", insights.similarities),
        ("Differences", insights.differences),
        ("Unique Points", insights.unique_points),
    ] {
        out.push_str(&format!("### {heading}\n\n"));
        for item in items {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }
    out
}

pub fn recommendation(rec: &Recommendation) -> String {
    let mut out = format!("## {}\n\n", rec.heading());
    out.push_str(&format!("### Overall Approach\n\n{}\n\n", rec.profile.approach));

    out.push_str("### Key Processes\n\n");
    for process in rec.profile.processes {
        out.push_str(&format!("- {process}\n"));
    }

    out.push_str("\n### Standards Integration\n\n");
    for standard in Standard::ALL {
        out.push_str(&format!(
            "- **{}:** {}\n",
            standard.integration_label(),
            rec.profile.guidance.text(*standard)
        ));
    }

    if !rec.focus_recommendations.is_empty() {
        out.push_str("\n### Focus Area Recommendations\n\n");
        for line in &rec.focus_recommendations {
            out.push_str(&format!("- {line}\n"));
        }
    }
    out
}

pub fn bookmarks(set: &BookmarkSet) -> String {
    if set.is_empty() {
        return "No bookmarks yet.\n".to_string();
    }
    set.topics()
        .map(|topic| format!("- [{}](#row-{})\n", topic.title, topic.key.as_str()))
        .collect()
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
