use discovery_core::{DiscoveryViewModel, JobCardView, Phase, RECOMMENDATION_HINT};

/// Renders the whole discovery surface as plain text lines.
pub fn render(view: &DiscoveryViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Filters: keyword={:?} location={:?} type={}",
        view.keyword, view.location, view.job_type
    ));

    lines.push(String::new());
    lines.push("Recommended for you".to_string());
    if view.recommended.is_empty() {
        lines.push(format!("  {RECOMMENDATION_HINT}"));
    } else {
        lines.extend(view.recommended.iter().map(|card| format!("  - {}", card_line(card))));
    }

    lines.push(String::new());
    let status = match view.phase {
        Phase::Idle => "",
        Phase::Loading => " (loading)",
        Phase::Ready => "",
        Phase::Failed => " (failed)",
    };
    lines.push(format!("Latest jobs{status}"));
    if let Some(error) = &view.error {
        lines.push(format!("  ! {error}"));
    }
    if view.jobs.is_empty() && view.phase == Phase::Ready {
        lines.push("  No jobs match these filters.".to_string());
    }
    for (index, card) in view.jobs.iter().enumerate() {
        lines.push(format!("  {:>2}. {}", index + 1, card_line(card)));
    }

    lines.push(pager_line(view));
    lines
}

fn card_line(card: &JobCardView) -> String {
    let mut line = format!("{} @ {}", card.title, card.company);
    let details: Vec<&str> = [&card.location, &card.job_type, &card.salary]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();
    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }
    line.push_str(&format!(" [{}]", card.source));
    if let Some(link) = &card.link {
        line.push_str(&format!(" {link}"));
    }
    line
}

fn pager_line(view: &DiscoveryViewModel) -> String {
    let prev = if view.can_go_prev { "< prev" } else { "      " };
    let next = if view.can_go_next { "next >" } else { "" };
    format!("{prev}  Page {}  {next}", view.page).trim_end().to_string()
}
