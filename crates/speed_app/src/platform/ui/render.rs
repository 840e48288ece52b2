use speed_core::{ArticleRowView, ModeratorViewModel, Segment};

const MATCH_OPEN: &str = "\u{1b}[7m";
const MATCH_CLOSE: &str = "\u{1b}[0m";

/// Renders the moderator view as console lines.
pub fn render(view: &ModeratorViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Articles awaiting moderation: {}{}",
        view.article_count,
        if view.is_loading { " (updating...)" } else { "" }
    ));

    if view.duplicate_doi_warning {
        let repeated: Vec<&str> = view
            .duplicate_dois
            .iter()
            .map(|doi| doi.as_deref().unwrap_or("<missing>"))
            .collect();
        lines.push(format!(
            "Warning: There are duplicate articles based on DOI! ({})",
            repeated.join(", ")
        ));
    }

    if let Some(error) = &view.last_error {
        lines.push(format!("Error: {error}"));
    }

    if view.no_results {
        if view.search_term.is_empty() {
            lines.push("No articles to moderate.".to_string());
        } else {
            lines.push(format!("No articles found for \"{}\"", view.search_term));
        }
        return lines;
    }

    for row in &view.rows {
        lines.push(render_row(row));
    }
    lines
}

fn render_row(row: &ArticleRowView) -> String {
    format!(
        "{marker} {id} | {title} | {author} | {date} | DOI {doi} | {journal} vol. {volume} pp. {pages}",
        marker = if row.in_flight { "~" } else { "-" },
        id = row.id,
        title = join_segments(&row.title),
        author = join_segments(&row.author),
        date = join_segments(&row.date_published),
        doi = join_segments(&row.doi),
        journal = join_segments(&row.journal),
        volume = join_segments(&row.volume),
        pages = join_segments(&row.pages),
    )
}

fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.matched {
                format!("{MATCH_OPEN}{}{MATCH_CLOSE}", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}
