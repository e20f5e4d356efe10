//! Reduces a raw search result to one readable answer.
//!
//! Search backends return heterogeneous, deeply nested JSON whose most
//! useful field depends on the kind of query. The fields are tried in a
//! fixed order, and the first one present wins.

use serde_json::Value;

use crate::DistillError;

/// How many organic results are quoted at most.
const MAX_ORGANIC_RESULTS: usize = 3;

/// Distills `result` into an answer for `query`.
///
/// In order of precedence:
///
/// 1. `answer_box_list`, joined line by line;
/// 2. `answer_box.answer`;
/// 3. `knowledge_graph.description`;
/// 4. the first three `organic_results`, as `[i] title\nsnippet`;
/// 5. a message saying nothing was found for `query`.
///
/// A recognized field with an unexpected shape is an error.
pub fn distill(result: &Value, query: &str) -> Result<String, DistillError> {
    if let Some(list) = result.get("answer_box_list") {
        return answer_box_list(list);
    }

    if let Some(answer) = result
        .get("answer_box")
        .and_then(Value::as_object)
        .and_then(|answer_box| answer_box.get("answer"))
    {
        return Ok(render(answer));
    }

    if let Some(description) = result
        .get("knowledge_graph")
        .and_then(Value::as_object)
        .and_then(|graph| graph.get("description"))
    {
        return Ok(render(description));
    }

    match result.get("organic_results") {
        None => {}
        Some(value) if is_falsy(value) => {}
        Some(Value::Array(items)) => return organic_results(items),
        Some(_) => {
            return Err(DistillError::new("organic_results", "a list"));
        }
    }

    Ok(format!("Sorry, no information found for '{query}'."))
}

fn answer_box_list(list: &Value) -> Result<String, DistillError> {
    let Some(items) = list.as_array() else {
        return Err(DistillError::new("answer_box_list", "a list"));
    };
    let mut lines = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if item.is_object() || item.is_array() {
            return Err(DistillError::new(
                format!("answer_box_list[{idx}]"),
                "a scalar",
            ));
        }
        lines.push(render(item));
    }
    Ok(lines.join("\n"))
}

fn organic_results(items: &[Value]) -> Result<String, DistillError> {
    let mut entries = Vec::with_capacity(MAX_ORGANIC_RESULTS);
    for (idx, item) in items.iter().take(MAX_ORGANIC_RESULTS).enumerate() {
        let Some(item) = item.as_object() else {
            return Err(DistillError::new(
                format!("organic_results[{idx}]"),
                "an object",
            ));
        };
        let title = item.get("title").map(render).unwrap_or_default();
        let snippet = item.get("snippet").map(render).unwrap_or_default();
        entries.push(format!("[{}] {title}\n{snippet}", idx + 1));
    }
    Ok(entries.join("\n\n"))
}

/// `null`, `false`, zero and empty containers carry no results.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Strings are taken verbatim, anything else as JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_answer_box_list_first() {
        let result = json!({
            "answer_box_list": ["RTX 5090", "RTX 5080"],
            "answer_box": { "answer": "ignored" },
            "organic_results": [{ "title": "ignored", "snippet": "ignored" }]
        });
        assert_eq!(distill(&result, "gpu").unwrap(), "RTX 5090\nRTX 5080");
    }

    #[test]
    fn test_answer_box() {
        let result = json!({
            "answer_box": { "type": "population", "answer": "8.1 billion" },
            "knowledge_graph": { "description": "ignored" }
        });
        assert_eq!(distill(&result, "people").unwrap(), "8.1 billion");

        let result = json!({ "answer_box": { "answer": 42 } });
        assert_eq!(distill(&result, "answer").unwrap(), "42");
    }

    #[test]
    fn test_answer_box_without_answer_falls_through() {
        let result = json!({
            "answer_box": { "title": "no answer here" },
            "knowledge_graph": { "description": "A programming language." }
        });
        assert_eq!(distill(&result, "rust").unwrap(), "A programming language.");

        let result = json!({
            "answer_box": "not a map",
            "knowledge_graph": { "description": "Still reached." }
        });
        assert_eq!(distill(&result, "rust").unwrap(), "Still reached.");
    }

    #[test]
    fn test_knowledge_graph_without_description_falls_through() {
        let result = json!({
            "knowledge_graph": { "title": "Rust" },
            "organic_results": [{ "title": "Rust", "snippet": "A language." }]
        });
        assert_eq!(distill(&result, "rust").unwrap(), "[1] Rust\nA language.");
    }

    #[test]
    fn test_organic_results() {
        let items: Vec<Value> = (1..=5)
            .map(|i| json!({ "title": format!("T{i}"), "snippet": format!("S{i}") }))
            .collect();
        let result = json!({ "organic_results": items });
        assert_eq!(
            distill(&result, "five").unwrap(),
            "[1] T1\nS1\n\n[2] T2\nS2\n\n[3] T3\nS3"
        );
    }

    #[test]
    fn test_organic_results_missing_fields() {
        let result = json!({
            "organic_results": [{ "title": "Only title" }, { "snippet": "Only snippet" }]
        });
        assert_eq!(
            distill(&result, "partial").unwrap(),
            "[1] Only title\n\n\n[2] \nOnly snippet"
        );
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(
            distill(&json!({}), "test").unwrap(),
            "Sorry, no information found for 'test'."
        );
        let result = json!({ "organic_results": [], "search_metadata": {} });
        assert_eq!(
            distill(&result, "empty").unwrap(),
            "Sorry, no information found for 'empty'."
        );
    }

    #[test]
    fn test_falsy_organic_results_mean_nothing_found() {
        for empty in [json!(null), json!(""), json!(false), json!(0), json!({})] {
            let result = json!({ "organic_results": empty });
            assert_eq!(
                distill(&result, "none").unwrap(),
                "Sorry, no information found for 'none'."
            );
        }

        let err = distill(&json!({ "organic_results": "some text" }), "q");
        assert_eq!(
            err.unwrap_err(),
            DistillError::new("organic_results", "a list")
        );
    }

    #[test]
    fn test_unexpected_shapes() {
        let err = distill(&json!({ "answer_box_list": "oops" }), "q");
        assert_eq!(
            err.unwrap_err(),
            DistillError::new("answer_box_list", "a list")
        );

        let err = distill(&json!({ "answer_box_list": ["ok", { "x": 1 }] }), "q");
        assert_eq!(err.unwrap_err().field, "answer_box_list[1]");

        let err = distill(&json!({ "organic_results": ["plain"] }), "q");
        assert_eq!(err.unwrap_err().field, "organic_results[0]");

        let err = distill(&json!({ "organic_results": { "title": "x" } }), "q");
        assert_eq!(err.unwrap_err().field, "organic_results");
    }
}
