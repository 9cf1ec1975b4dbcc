//! Read-only view over the opaque website records returned by the API

use serde_json::Value;

/// Display fields of one website record.
///
/// The store keeps the record untouched; this is only used for rendering.
/// Missing or mistyped fields become empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Website {
    pub namespace: String,
    pub name: String,
    pub status: String,
    pub revision: String,
    pub repo_url: String,
    pub public_url: String,
    pub branch: String,
}

impl Website {
    pub fn from_record(record: &Value) -> Self {
        let Some(object) = record.as_object() else {
            return Self::default();
        };
        let field = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            namespace: field("namespace"),
            name: field("name"),
            status: field("status"),
            revision: field("revision"),
            repo_url: field("repo"),
            public_url: field("public"),
            branch: field("branch"),
        }
    }

    /// Revision abbreviated to 7 characters
    pub fn short_revision(&self) -> &str {
        match self.revision.char_indices().nth(7) {
            Some((idx, _)) => &self.revision[..idx],
            None => &self.revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record() {
        let record = json!({
            "namespace": "team-a",
            "name": "docs",
            "status": "Running",
            "revision": "0123456",
            "repo": "https://github.com/example/docs.git",
            "public": "https://docs.example.com",
            "branch": "main",
            "extra": 42
        });
        let site = Website::from_record(&record);
        assert_eq!(site.namespace, "team-a");
        assert_eq!(site.name, "docs");
        assert_eq!(site.status, "Running");
        assert_eq!(site.repo_url, "https://github.com/example/docs.git");
        assert_eq!(site.public_url, "https://docs.example.com");
        assert_eq!(site.branch, "main");
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let site = Website::from_record(&json!({"name": "blog", "status": 3}));
        assert_eq!(site.name, "blog");
        assert_eq!(site.status, "");
        assert_eq!(site.namespace, "");

        assert_eq!(Website::from_record(&json!("not an object")), Website::default());
    }

    #[test]
    fn test_short_revision() {
        let mut site = Website::default();
        site.revision = "0123456789abcdef".to_string();
        assert_eq!(site.short_revision(), "0123456");

        site.revision = "abc".to_string();
        assert_eq!(site.short_revision(), "abc");
    }
}
