//! Answer records as supplied by the answer store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AssessmentError;
use crate::domain::foundation::QuestionId;

/// One answered question joined with its question metadata.
///
/// `weight` and `options` stay as raw JSON so a malformed question only
/// excludes its own answer instead of failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub question_id: Option<QuestionId>,
    pub answer_text: String,
    pub category: String,
    pub weight: Value,
    pub options: Value,
    #[serde(default)]
    pub is_reverse: bool,
}

impl AnswerRecord {
    pub fn new<I, S>(
        answer_text: impl Into<String>,
        category: impl Into<String>,
        options: I,
        weight: Value,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            question_id: None,
            answer_text: answer_text.into(),
            category: category.into(),
            weight,
            options: Value::from(options),
            is_reverse: false,
        }
    }

    pub fn with_question_id(mut self, id: QuestionId) -> Self {
        self.question_id = Some(id);
        self
    }

    pub fn reversed(mut self) -> Self {
        self.is_reverse = true;
        self
    }

    /// Parses the option list.
    pub fn option_list(&self) -> Result<Vec<String>, AssessmentError> {
        let options = unwrap_embedded_json(&self.options);
        match options {
            Value::Array(items) if !items.is_empty() => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(AssessmentError::malformed(format!(
                        "option entry is not text: {}",
                        other
                    ))),
                })
                .collect(),
            Value::Array(_) => Err(AssessmentError::malformed("question has no options")),
            Value::Null => Err(AssessmentError::malformed("question options are missing")),
            other => Err(AssessmentError::malformed(format!(
                "options are not a list: {}",
                other
            ))),
        }
    }

    /// Locates the selected option.
    ///
    /// Exact matches win; surrounding whitespace is tolerated otherwise.
    pub fn option_index(&self, options: &[String]) -> Result<usize, AssessmentError> {
        options
            .iter()
            .position(|o| o == &self.answer_text)
            .or_else(|| {
                let wanted = self.answer_text.trim();
                options.iter().position(|o| o.trim() == wanted)
            })
            .ok_or_else(|| AssessmentError::option_mismatch(&self.answer_text))
    }

    /// The weight payload with any string-encoded JSON unwrapped.
    pub fn weight_value(&self) -> Value {
        unwrap_embedded_json(&self.weight)
    }
}

/// Question banks sometimes store JSON documents as JSON strings.
fn unwrap_embedded_json(value: &Value) -> Value {
    match value {
        Value::String(raw) => serde_json::from_str(raw).unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_index_finds_literal_member() {
        let record = AnswerRecord::new("No", "E", ["Yes", "No"], json!([1, 0]));
        let options = record.option_list().unwrap();
        assert_eq!(record.option_index(&options).unwrap(), 1);
    }

    #[test]
    fn option_index_tolerates_whitespace() {
        let record = AnswerRecord::new(" Yes", "E", ["Yes", "No"], json!([1, 0]));
        let options = record.option_list().unwrap();
        assert_eq!(record.option_index(&options).unwrap(), 0);
    }

    #[test]
    fn option_index_reports_mismatch() {
        let record = AnswerRecord::new("Maybe", "E", ["Yes", "No"], json!([1, 0]));
        let options = record.option_list().unwrap();
        assert_eq!(
            record.option_index(&options),
            Err(AssessmentError::option_mismatch("Maybe"))
        );
    }

    #[test]
    fn option_list_accepts_string_encoded_json() {
        let mut record = AnswerRecord::new("Yes", "E", ["Yes"], json!([1]));
        record.options = Value::String("[\"Yes\",\"No\"]".to_string());
        assert_eq!(record.option_list().unwrap(), vec!["Yes", "No"]);
    }

    #[test]
    fn option_list_rejects_missing_or_garbage() {
        let mut record = AnswerRecord::new("Yes", "E", ["Yes"], json!([1]));
        record.options = Value::Null;
        assert!(record.option_list().is_err());
        record.options = Value::String("not json".to_string());
        assert!(record.option_list().is_err());
        record.options = json!([]);
        assert!(record.option_list().is_err());
    }

    #[test]
    fn weight_value_unwraps_string_encoded_json() {
        let mut record = AnswerRecord::new("Yes", "E", ["Yes"], json!(null));
        record.weight = Value::String("{\"E\":1,\"I\":-1}".to_string());
        assert_eq!(record.weight_value(), json!({"E": 1, "I": -1}));
    }
}
