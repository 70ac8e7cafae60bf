use serde::{Deserialize, Serialize};

/// A web-derived phrase entry: a key phrase and its renderings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebExplain {
    pub key: String,
    pub values: Vec<String>,
}

/// Structured result of one dictionary lookup.
///
/// `query` echoes the string the lookup was issued for; sessions use it to
/// correlate a response against their current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub query: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub explains: Vec<String>,
    #[serde(default)]
    pub web: Vec<WebExplain>,
}

impl LookupResult {
    /// Plain-text rendering used by the one-shot CLI path and clipboard copy
    pub fn plain_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.query);
        if let Some(phonetic) = &self.phonetic {
            out.push_str(&format!(" [{}]", phonetic));
        }
        out.push('\n');

        // Sense explanations take precedence over bare translations,
        // mirroring how the result pane renders
        let senses = if self.explains.is_empty() { &self.translations } else { &self.explains };
        for sense in senses {
            out.push_str(&format!("  {}\n", sense));
        }

        if !self.web.is_empty() {
            out.push_str("\nWeb:\n");
            for entry in &self.web {
                out.push_str(&format!("  {}: {}\n", entry.key, entry.values.join("; ")));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LookupResult {
        LookupResult {
            query: "hello".to_string(),
            phonetic: Some("həˈləʊ".to_string()),
            translations: vec!["你好".to_string()],
            explains: vec!["int. 你好；喂".to_string()],
            web: vec![WebExplain {
                key: "hello world".to_string(),
                values: vec!["世界你好".to_string()],
            }],
        }
    }

    #[test]
    fn test_plain_text_contains_all_sections() {
        let text = sample().plain_text();
        assert!(text.starts_with("hello [həˈləʊ]"));
        assert!(text.contains("int. 你好；喂"));
        assert!(text.contains("hello world: 世界你好"));
    }

    #[test]
    fn test_plain_text_falls_back_to_translations() {
        let mut result = sample();
        result.explains.clear();
        let text = result.plain_text();
        assert!(text.contains("你好"));
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{"query":"rust"}"#;
        let result: LookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.query, "rust");
        assert!(result.phonetic.is_none());
        assert!(result.web.is_empty());
    }
}
