//! File-based response store

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::traits::ResponseSource;
use crate::domain::entities::{ResponseEntry, ResponseTable};
use crate::application::errors::ConfigError;

/// On-disk shape of `responses.json`
#[derive(Debug, Deserialize)]
struct ResponsesFile {
    questions: Vec<QuestionEntry>,
    default_response: String,
    welcome_message: String,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    keywords: Vec<String>,
    answer: String,
}

/// JSON file-based response store
pub struct JsonResponseStore {
    path: PathBuf,
}

impl JsonResponseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a responses document
    pub fn parse(content: &str) -> Result<ResponseTable, ConfigError> {
        let file: ResponsesFile = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse responses: {}", e)))?;

        if file.default_response.trim().is_empty() {
            return Err(ConfigError::InvalidValue("default_response must not be empty".to_string()));
        }

        let mut entries = Vec::with_capacity(file.questions.len());
        for (index, question) in file.questions.into_iter().enumerate() {
            if question.keywords.is_empty() {
                return Err(ConfigError::InvalidValue(format!("questions[{}] has no keywords", index)));
            }
            if question.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::InvalidValue(format!("questions[{}] has an empty keyword", index)));
            }
            if question.answer.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!("questions[{}] has an empty answer", index)));
            }
            entries.push(ResponseEntry::new(question.keywords, question.answer));
        }

        Ok(ResponseTable {
            entries,
            default_answer: file.default_response,
            welcome_message: file.welcome_message,
        })
    }
}

impl ResponseSource for JsonResponseStore {
    fn load(&self) -> Result<ResponseTable, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::Parse(format!("Failed to read responses {}: {}", self.path.display(), e))
        })?;

        let table = Self::parse(&content)?;
        tracing::debug!("Loaded {} responses from {}", table.len(), self.path.display());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"{
        "questions": [
            {"keywords": ["park", "parking"], "answer": "Lot B"},
            {"keywords": ["food"], "answer": "Pizza"}
        ],
        "default_response": "Ask an organizer",
        "welcome_message": "Glad you're here!"
    }"#;

    #[test]
    fn test_parse_valid() {
        let table = JsonResponseStore::parse(VALID).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[0].keywords, vec!["park", "parking"]);
        assert_eq!(table.default_answer, "Ask an organizer");
        assert_eq!(table.welcome_message, "Glad you're here!");
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = JsonResponseStore::parse(r#"{"questions": [], "default_response": "x"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let doc = r#"{"questions": [{"keywords": [], "answer": "a"}], "default_response": "d", "welcome_message": "w"}"#;
        assert!(matches!(JsonResponseStore::parse(doc), Err(ConfigError::InvalidValue(_))));

        let doc = r#"{"questions": [{"keywords": ["ok", " "], "answer": "a"}], "default_response": "d", "welcome_message": "w"}"#;
        assert!(matches!(JsonResponseStore::parse(doc), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_empty_answer_rejected() {
        let doc = r#"{"questions": [{"keywords": ["k"], "answer": ""}], "default_response": "d", "welcome_message": "w"}"#;
        assert!(matches!(JsonResponseStore::parse(doc), Err(ConfigError::InvalidValue(_))));

        let doc = r#"{"questions": [], "default_response": "  ", "welcome_message": "w"}"#;
        assert!(matches!(JsonResponseStore::parse(doc), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_load_rereads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        let store = JsonResponseStore::new(file.path());
        assert_eq!(store.load().unwrap().len(), 2);

        let updated = r#"{"questions": [], "default_response": "d", "welcome_message": "w"}"#;
        std::fs::write(file.path(), updated).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let store = JsonResponseStore::new("/nonexistent/responses.json");
        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("/nonexistent/responses.json"));
    }
}
