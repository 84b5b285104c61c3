use anyhow::bail;
use profinder_core::{
    difficulty_tone, format_score, format_would_take_again, rating_tone, ProfessorRecord,
    ReviewRecord, SearchState, SearchStatus,
};
use std::fmt::Write;

pub fn render_state(state: &SearchState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "!! {error}");
    }

    match state.status() {
        SearchStatus::Idle => {}
        SearchStatus::Loading => {
            let _ = writeln!(out, "Searching for professors...");
        }
        SearchStatus::NoResults => {
            let _ = writeln!(out, "No professors found. Try a different search term.");
        }
        SearchStatus::Failed | SearchStatus::Results => {
            for professor in &state.professors {
                out.push_str(&render_professor(professor));
            }
        }
    }

    out
}

/// Output of a one-shot search. A failure is returned as the error so the
/// caller reports it exactly once.
pub fn render_once(state: &SearchState, json: bool) -> anyhow::Result<String> {
    if let Some(error) = &state.error {
        bail!("search failed: {error}");
    }

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&state.professors)?))
    } else {
        Ok(render_state(state))
    }
}

pub fn render_professor(professor: &ProfessorRecord) -> String {
    let mut out = String::new();
    let department = professor.department.as_deref().unwrap_or("N/A");

    let _ = writeln!(out, "{}  [{department}]", professor.full_name());
    if let Some(school) = &professor.school_name {
        let _ = writeln!(out, "  {school}");
    }
    let _ = writeln!(
        out,
        "  Overall Rating: {} ({}) | Difficulty: {} ({}) | Would Take Again: {}",
        format_score(professor.avg_rating),
        rating_tone(professor.avg_rating).as_str(),
        format_score(professor.avg_difficulty),
        difficulty_tone(professor.avg_difficulty).as_str(),
        format_would_take_again(professor.would_take_again_percent),
    );
    let plural = if professor.num_ratings == 1 { "" } else { "s" };
    let _ = writeln!(out, "  {} rating{plural}", professor.num_ratings);

    if !professor.reviews.is_empty() {
        let _ = writeln!(out, "  Recent Reviews:");
        for review in &professor.reviews {
            out.push_str(&render_review(review));
        }
    }

    out.push('\n');
    out
}

fn render_review(review: &ReviewRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    -");

    if let Some(course) = review.course.as_deref().filter(|course| !course.is_empty()) {
        let _ = writeln!(out, "      {course}");
    }
    if let Some(comment) = review.comment.as_deref().filter(|comment| !comment.is_empty()) {
        let _ = writeln!(out, "      \"{comment}\"");
    }

    let mut meta = Vec::new();
    match review.would_take_again {
        Some(true) => meta.push("(+) Would take again".to_string()),
        Some(false) => meta.push("(-) Would not take again".to_string()),
        None => {}
    }
    if let Some(date) = review.date.as_deref().filter(|date| !date.is_empty()) {
        meta.push(date.to_string());
    }
    if !meta.is_empty() {
        let _ = writeln!(out, "      {}", meta.join(" | "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professor() -> ProfessorRecord {
        ProfessorRecord {
            id: "VGVhY2hlci0xMjM0NQ==".to_string(),
            legacy_id: Some(12345),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            department: None,
            school_name: None,
            avg_rating: Some(4.5),
            avg_difficulty: Some(4.1),
            would_take_again_percent: Some(-1.0),
            num_ratings: 1,
            reviews: vec![ReviewRecord {
                course: Some("MATH150A".to_string()),
                comment: Some("Tough but fair.".to_string()),
                would_take_again: Some(false),
                difficulty_rating: Some(5.0),
                helpful_rating: Some(4.0),
                clarity_rating: Some(4.0),
                date: Some("2024-02-11".to_string()),
            }],
        }
    }

    #[test]
    fn card_shows_bands_and_hides_sentinel_percent() {
        let card = render_professor(&professor());
        assert!(card.contains("Jane Doe  [N/A]"));
        assert!(card.contains("Overall Rating: 4.5 (good)"));
        assert!(card.contains("Difficulty: 4.1 (poor)"));
        assert!(card.contains("Would Take Again: N/A"));
        assert!(!card.contains("-1%"));
        assert!(card.contains("  1 rating\n"));
        assert!(card.contains("(-) Would not take again | 2024-02-11"));
    }

    #[test]
    fn searched_state_without_results_shows_notice() {
        let state = SearchState {
            searched: true,
            ..SearchState::default()
        };
        assert!(render_state(&state).contains("No professors found"));
    }

    #[test]
    fn failure_banner_keeps_previous_cards() {
        let state = SearchState {
            searched: true,
            error: Some("rate limited".to_string()),
            professors: vec![professor()],
            ..SearchState::default()
        };
        let rendered = render_state(&state);
        assert!(rendered.starts_with("!! rate limited"));
        assert!(rendered.contains("Jane Doe"));
    }

    #[test]
    fn one_shot_failure_is_reported_once_through_the_error() {
        let state = SearchState {
            searched: true,
            error: Some("rate limited".to_string()),
            ..SearchState::default()
        };

        for json in [false, true] {
            let error = render_once(&state, json).expect_err("failed search is an error");
            let message = error.to_string();
            assert_eq!(message, "search failed: rate limited");
            assert!(!message.contains("!!"));
        }
    }

    #[test]
    fn one_shot_json_lists_professors() -> anyhow::Result<()> {
        let state = SearchState {
            searched: true,
            professors: vec![professor()],
            ..SearchState::default()
        };
        let output = render_once(&state, true)?;
        let parsed: serde_json::Value = serde_json::from_str(&output)?;
        assert_eq!(parsed[0]["lastName"], "Doe");
        assert_eq!(render_once(&state, false)?, render_state(&state));
        Ok(())
    }

    #[test]
    fn idle_state_renders_nothing() {
        assert!(render_state(&SearchState::default()).is_empty());
    }
}
