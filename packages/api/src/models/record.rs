//! # Managed resource records
//!
//! Users, articles, projects and reviews share one client-side shape: an `_id`
//! plus whatever fields the API returned. The console does not normalise or
//! derive anything from them; a [`Record`] is shown, copied into a draft, and
//! thrown away on the next refetch.
//!
//! The accessors are lenient because the records are only ever rendered:
//!
//! - [`Record::text`] renders strings, numbers and booleans; `null` and missing
//!   fields read as an empty string.
//! - [`Record::lines`] accepts a JSON array (non-string items are rendered) or a
//!   newline-separated string.
//! - [`Record::image`] returns a non-empty string reference such as an upload URL.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::split_lines;

/// One item of a resource collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder method used mostly by tests and previews.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Lenient conversion for list responses: `_id` may be a string or a
    /// number. Anything without a usable `_id` gives `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        let id = match fields.remove("_id")? {
            Value::String(id) if !id.is_empty() => id,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Some(Self { id, fields })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(value) => render(value),
            None => String::new(),
        }
    }

    pub fn lines(&self, name: &str) -> Vec<String> {
        match self.fields.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .map(render)
                .filter(|line| !line.trim().is_empty())
                .collect(),
            Some(Value::String(text)) => split_lines(text),
            _ => Vec::new(),
        }
    }

    pub fn image(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let record: Record = serde_json::from_value(json!({
            "_id": "65f0",
            "title": "Site",
            "technologies": ["React", "Node"],
            "imgPath": "https://cdn.example.com/site.png",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(record.id, "65f0");
        assert_eq!(record.text("title"), "Site");
        assert_eq!(record.text("__v"), "0");
        assert_eq!(record.lines("technologies"), vec!["React", "Node"]);
        assert_eq!(record.image("imgPath"), Some("https://cdn.example.com/site.png"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["_id"], "65f0");
        assert_eq!(back["technologies"][1], "Node");
    }

    #[test]
    fn test_missing_and_null_fields() {
        let record = Record::new("1").with("description", Value::Null).with("logoPath", "");
        assert_eq!(record.text("description"), "");
        assert_eq!(record.text("nope"), "");
        assert!(record.lines("nope").is_empty());
        assert!(record.image("logoPath").is_none());
        assert!(record.image("imgPath").is_none());
    }

    #[test]
    fn test_lines_from_string() {
        let record = Record::new("1").with("responsibilities", "Lead team\n\n  Ship v2  \n");
        assert_eq!(record.lines("responsibilities"), vec!["Lead team", "Ship v2"]);
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        assert!(serde_json::from_value::<Record>(json!({ "title": "x" })).is_err());
    }

    #[test]
    fn test_from_value_accepts_numeric_ids_and_skips_unusable_ones() {
        let numeric = Record::from_value(json!({ "_id": 7, "title": "x" })).unwrap();
        assert_eq!(numeric.id, "7");
        assert_eq!(numeric.text("title"), "x");
        assert!(numeric.get("_id").is_none());

        assert!(Record::from_value(json!({ "title": "x" })).is_none());
        assert!(Record::from_value(json!({ "_id": null })).is_none());
        assert!(Record::from_value(json!({ "_id": "" })).is_none());
        assert!(Record::from_value(json!("65f0")).is_none());
    }
}
