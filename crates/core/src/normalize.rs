use crate::query::REVIEW_PAGE_SIZE;
use crate::{ProfessorRecord, QueryMode, ReviewRecord};
use serde_json::Value;

/// Maps either response shape onto a flat list of professors, keeping the
/// order the API returned them in.
pub fn normalize(mode: QueryMode, body: &Value) -> Vec<ProfessorRecord> {
    match mode {
        QueryMode::ByIdentifier => body
            .pointer("/data/node")
            .filter(|node| is_professor(node))
            .and_then(professor_from_node)
            .into_iter()
            .collect(),
        QueryMode::ByName => body
            .pointer("/data/newSearch/teachers/edges")
            .and_then(Value::as_array)
            .map(|edges| {
                edges
                    .iter()
                    .filter_map(|edge| edge.pointer("/node"))
                    .filter_map(professor_from_node)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// The id lookup returns other node types (or null) for unknown ids, so a
/// looked-up node only counts as a professor when it has a first name.
fn is_professor(node: &Value) -> bool {
    node.pointer("/firstName")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty())
}

fn professor_from_node(node: &Value) -> Option<ProfessorRecord> {
    if !node.is_object() {
        return None;
    }

    Some(ProfessorRecord {
        id: opaque_string(node.pointer("/id")),
        legacy_id: node.pointer("/legacyId").and_then(Value::as_i64),
        first_name: string_field(node, "/firstName").unwrap_or_default(),
        last_name: string_field(node, "/lastName").unwrap_or_default(),
        department: string_field(node, "/department"),
        school_name: string_field(node, "/school/name"),
        avg_rating: node.pointer("/avgRating").and_then(Value::as_f64),
        avg_difficulty: node.pointer("/avgDifficulty").and_then(Value::as_f64),
        would_take_again_percent: node.pointer("/wouldTakeAgainPercent").and_then(Value::as_f64),
        num_ratings: node
            .pointer("/numRatings")
            .and_then(Value::as_u64)
            .and_then(|count| u32::try_from(count).ok())
            .unwrap_or_default(),
        reviews: reviews_from_node(node),
    })
}

fn reviews_from_node(node: &Value) -> Vec<ReviewRecord> {
    node.pointer("/ratings/edges")
        .and_then(Value::as_array)
        .map(|edges| {
            edges
                .iter()
                .filter_map(|edge| edge.pointer("/node"))
                .filter(|review| review.is_object())
                .take(REVIEW_PAGE_SIZE)
                .map(review_from_node)
                .collect()
        })
        .unwrap_or_default()
}

fn review_from_node(review: &Value) -> ReviewRecord {
    ReviewRecord {
        course: string_field(review, "/class"),
        comment: string_field(review, "/comment"),
        would_take_again: review.pointer("/wouldTakeAgain").and_then(flag),
        difficulty_rating: review.pointer("/difficultyRating").and_then(Value::as_f64),
        helpful_rating: review.pointer("/helpfulRating").and_then(Value::as_f64),
        clarity_rating: review.pointer("/clarityRating").and_then(Value::as_f64),
        date: string_field(review, "/date"),
    }
}

fn string_field(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

// Ids are opaque; numbers are kept in their textual form.
fn opaque_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

// The API reports this flag as 0/1 on some schema versions.
fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|raw| raw != 0.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn teacher(first_name: &str, legacy_id: i64) -> Value {
        json!({
            "id": format!("VGVhY2hlci0{legacy_id}"),
            "legacyId": legacy_id,
            "firstName": first_name,
            "lastName": "Smith",
            "department": "Computer Science",
            "avgRating": 4.2,
            "avgDifficulty": 2.9,
            "wouldTakeAgainPercent": 87.5,
            "numRatings": 31,
            "ratings": {
                "edges": [
                    {
                        "node": {
                            "class": "CPSC121",
                            "comment": "Clear lectures.",
                            "wouldTakeAgain": 1,
                            "difficultyRating": 3,
                            "helpfulRating": 5,
                            "clarityRating": 5,
                            "date": "2024-05-01 12:00:00 +0000 UTC"
                        }
                    },
                    {
                        "node": {
                            "class": null,
                            "comment": null,
                            "wouldTakeAgain": null,
                            "difficultyRating": 4,
                            "helpfulRating": 2,
                            "clarityRating": 2,
                            "date": "2023-11-20 12:00:00 +0000 UTC"
                        }
                    }
                ]
            }
        })
    }

    #[test]
    fn identifier_response_yields_single_professor() {
        let mut node = teacher("Jane", 12345);
        node["school"] = json!({ "name": "California State University Fullerton" });
        let body = json!({ "data": { "node": node } });

        let professors = normalize(QueryMode::ByIdentifier, &body);
        assert_eq!(professors.len(), 1);

        let professor = &professors[0];
        assert_eq!(professor.legacy_id, Some(12345));
        assert_eq!(professor.full_name(), "Jane Smith");
        assert_eq!(professor.department.as_deref(), Some("Computer Science"));
        assert_eq!(
            professor.school_name.as_deref(),
            Some("California State University Fullerton")
        );
        assert_eq!(professor.avg_rating, Some(4.2));
        assert_eq!(professor.num_ratings, 31);
        assert_eq!(professor.reviews.len(), 2);
        assert_eq!(professor.reviews[0].course.as_deref(), Some("CPSC121"));
        assert_eq!(professor.reviews[0].would_take_again, Some(true));
        assert_eq!(professor.reviews[1].would_take_again, None);
        assert_eq!(professor.reviews[1].difficulty_rating, Some(4.0));
    }

    #[test]
    fn node_without_first_name_is_not_a_professor() {
        let body = json!({ "data": { "node": { "id": "U2Nob29sLTE=", "name": "Some School" } } });
        assert!(normalize(QueryMode::ByIdentifier, &body).is_empty());

        let missing = json!({ "data": { "node": null } });
        assert!(normalize(QueryMode::ByIdentifier, &missing).is_empty());

        assert!(normalize(QueryMode::ByIdentifier, &json!({})).is_empty());
    }

    #[test]
    fn blank_first_name_is_not_a_professor() {
        let body = json!({ "data": { "node": { "id": "x", "firstName": "", "lastName": "" } } });
        assert!(normalize(QueryMode::ByIdentifier, &body).is_empty());
    }

    #[test]
    fn name_search_keeps_nodes_without_first_name() {
        let mut unnamed = teacher("Ann", 4);
        unnamed["firstName"] = Value::Null;
        let body = json!({
            "data": { "newSearch": { "teachers": { "edges": [
                { "node": unnamed },
                { "node": teacher("Ann", 5) },
                { "node": null },
                { "cursor": "YXJyYXljb25uZWN0aW9uOjI=" }
            ] } } }
        });

        let professors = normalize(QueryMode::ByName, &body);
        assert_eq!(professors.len(), 2);
        assert_eq!(professors[0].first_name, "");
        assert_eq!(professors[0].last_name, "Smith");
        assert_eq!(professors[1].first_name, "Ann");
    }

    #[test]
    fn name_response_preserves_api_order() {
        let body = json!({
            "data": {
                "newSearch": {
                    "teachers": {
                        "edges": [
                            { "node": teacher("Zed", 3) },
                            { "node": teacher("Amy", 1) },
                            { "node": teacher("Amy", 1) }
                        ]
                    }
                }
            }
        });

        let names: Vec<_> = normalize(QueryMode::ByName, &body)
            .into_iter()
            .map(|professor| professor.first_name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Amy"]);
    }

    #[test]
    fn missing_search_path_yields_empty_list() {
        let bodies = [
            json!({ "data": null }),
            json!({ "data": { "newSearch": null } }),
            json!({ "data": { "newSearch": { "teachers": { "edges": [] } } } }),
            json!({ "data": { "newSearch": { "teachers": { "edges": "nope" } } } }),
        ];
        for body in bodies {
            assert!(normalize(QueryMode::ByName, &body).is_empty(), "{body}");
        }
    }

    #[test]
    fn sentinel_and_null_percent_survive_normalization() {
        let mut unavailable = teacher("Ann", 7);
        unavailable["wouldTakeAgainPercent"] = json!(-1);
        let mut null_percent = teacher("Bob", 8);
        null_percent["wouldTakeAgainPercent"] = Value::Null;
        let body = json!({
            "data": { "newSearch": { "teachers": { "edges": [
                { "node": unavailable },
                { "node": null_percent }
            ] } } }
        });

        let professors = normalize(QueryMode::ByName, &body);
        assert_eq!(professors[0].would_take_again_percent, Some(-1.0));
        assert_eq!(professors[0].would_take_again(), None);
        assert_eq!(professors[1].would_take_again_percent, None);
    }

    #[test]
    fn reviews_are_capped_at_page_size() {
        let mut node = teacher("Cy", 9);
        let review = node["ratings"]["edges"][0].clone();
        node["ratings"]["edges"] = Value::Array(vec![review; 8]);
        let body = json!({ "data": { "node": node } });

        let professors = normalize(QueryMode::ByIdentifier, &body);
        assert_eq!(professors[0].reviews.len(), REVIEW_PAGE_SIZE);
    }

    #[test]
    fn numeric_ids_are_kept_as_text() {
        let mut node = teacher("Di", 10);
        node["id"] = json!(998);
        let body = json!({ "data": { "node": node } });
        assert_eq!(normalize(QueryMode::ByIdentifier, &body)[0].id, "998");
    }
}
