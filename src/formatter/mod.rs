//! Output formatting for gateway results
//!
//! This module provides JSON formatting with BSON type simplification:
//! - Pretty-printed and compact JSON output
//! - BSON type conversion to display-friendly JSON (ObjectId, DateTime, Int64)
//! - Optional color highlighting for pretty-printed JSON
//! - Plain-text rendering of the enumeration tree

use colored_json::prelude::*;
use mongodb::bson::{Bson, Document};
use serde_json::Value;

use crate::error::Result;
use crate::model::{CollectionResult, ServerInfo};

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Enable colored output
    use_colors: bool,

    /// Indentation width for pretty printing
    indent: usize,
}

impl JsonFormatter {
    pub fn new(pretty: bool, use_colors: bool, indent: usize) -> Self {
        Self {
            pretty,
            use_colors,
            indent,
        }
    }

    /// Format a fetch result as a JSON array.
    pub fn format_result(&self, result: &CollectionResult) -> Result<String> {
        self.format_documents(&result.documents)
    }

    /// Format documents as a JSON array.
    pub fn format_documents(&self, docs: &[Document]) -> Result<String> {
        let values: Vec<Value> = docs
            .iter()
            .map(|doc| simplify(&Bson::Document(doc.clone())))
            .collect();
        Ok(self.render(&Value::Array(values)))
    }

    /// Format a single document as a JSON object.
    pub fn format_document(&self, doc: &Document) -> Result<String> {
        let value = simplify(&Bson::Document(doc.clone()));
        Ok(self.render(&value))
    }

    fn render(&self, value: &Value) -> String {
        let json_str = if self.pretty {
            self.to_pretty_string(value)
                .unwrap_or_else(|_| value.to_string())
        } else {
            value.to_string()
        };

        // Only apply colors for pretty-printed JSON; compact output should
        // remain as-is for piping and logging
        if self.use_colors && self.pretty {
            json_str.to_colored_json_auto().unwrap_or(json_str)
        } else {
            json_str
        }
    }

    /// Serialize with a custom indent width.
    fn to_pretty_string<T: serde::Serialize>(
        &self,
        value: &T,
    ) -> std::result::Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false, 2)
    }
}

/// Convert a BSON value to display-friendly JSON.
///
/// ObjectId becomes its hex string, DateTime an RFC 3339 string, Int64 a
/// plain number. Remaining types fall back to relaxed extended JSON.
fn simplify(value: &Bson) -> Value {
    match value {
        Bson::Document(doc) => Value::Object(
            doc.iter()
                .map(|(key, value)| (key.clone(), simplify(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.iter().map(simplify).collect()),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::String(s) => Value::String(s.clone()),
        Bson::Int32(v) => Value::from(*v),
        Bson::Int64(v) => Value::from(*v),
        Bson::Double(v) => Value::from(*v),
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Null => Value::Null,
        Bson::Decimal128(d) => Value::String(d.to_string()),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// Render the enumeration hierarchy as an indented listing.
pub fn render_tree(info: &ServerInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:{}\n", info.host, info.port));
    for database in &info.databases {
        out.push_str(&format!(
            "  {} ({} collections)\n",
            database.name,
            database.collections.len()
        ));
        for collection in &database.collections {
            out.push_str(&format!("    {}\n", collection.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CollectionInfo, DatabaseInfo};
    use mongodb::bson::doc;

    #[test]
    fn test_json_formatter() {
        let formatter = JsonFormatter::new(false, false, 2);
        let doc = doc! { "name": "test", "value": 42 };
        let result = formatter.format_document(&doc).unwrap();
        assert!(result.contains("name"));
        assert!(result.contains("test"));
    }

    #[test]
    fn test_simplified_objectid() {
        use mongodb::bson::oid::ObjectId;
        let formatter = JsonFormatter::new(true, false, 2);
        let oid = ObjectId::parse_str("65705d84dfc3f3b5094e1f72").unwrap();
        let doc = doc! { "_id": oid };
        let result = formatter.format_document(&doc).unwrap();
        // Should be simplified to string, not extended JSON
        assert!(result.contains("\"65705d84dfc3f3b5094e1f72\""));
        assert!(!result.contains("$oid"));
    }

    #[test]
    fn test_simplified_datetime() {
        use mongodb::bson::DateTime;
        let formatter = JsonFormatter::new(true, false, 2);
        let dt = DateTime::from_millis(1701862788373);
        let doc = doc! { "created_time": dt };
        let result = formatter.format_document(&doc).unwrap();
        // Should be an ISO 8601 string, not extended JSON
        assert!(result.contains("2023-12-06"));
        assert!(!result.contains("$date"));
    }

    #[test]
    fn test_simplified_long() {
        let formatter = JsonFormatter::new(true, false, 2);
        let doc = doc! { "user_id": 7i64 };
        let result = formatter.format_document(&doc).unwrap();
        assert!(result.contains("\"user_id\": 7"));
        assert!(!result.contains("$numberLong"));
    }

    #[test]
    fn test_nested_documents_are_simplified() {
        use mongodb::bson::oid::ObjectId;
        let formatter = JsonFormatter::new(false, false, 2);
        let oid = ObjectId::parse_str("65705d84dfc3f3b5094e1f72").unwrap();
        let doc = doc! { "outer": { "ids": [oid] } };
        let result = formatter.format_document(&doc).unwrap();
        assert!(result.contains("65705d84dfc3f3b5094e1f72"));
        assert!(!result.contains("$oid"));
    }

    #[test]
    fn test_compact_vs_pretty() {
        let compact = JsonFormatter::new(false, false, 2);
        let pretty = JsonFormatter::new(true, false, 2);
        let doc = doc! { "a": 1, "b": 2, "c": 3 };

        let compact_result = compact.format_document(&doc).unwrap();
        let pretty_result = pretty.format_document(&doc).unwrap();

        assert!(!compact_result.contains('\n'));
        assert!(pretty_result.contains('\n'));
        assert!(compact_result.len() < pretty_result.len());
    }

    #[test]
    fn test_format_result_is_array() {
        let formatter = JsonFormatter::new(false, false, 2);
        let mut result = CollectionResult::new("invoices");
        result.push(doc! { "seq": 1 });
        result.push(doc! { "seq": 2 });
        let rendered = formatter.format_result(&result).unwrap();
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with(']'));
    }

    #[test]
    fn test_render_tree() {
        let mut server = ServerInfo::new("localhost", 27017);
        let mut db = DatabaseInfo::new("orders");
        db.add_collection(CollectionInfo::new("invoices", "orders"));
        server.add_database(db);

        let tree = render_tree(&server);
        assert!(tree.starts_with("localhost:27017\n"));
        assert!(tree.contains("  orders (1 collections)\n"));
        assert!(tree.contains("    invoices\n"));
    }
}
