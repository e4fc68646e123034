use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    // Older problem files spell this "explanition".
    #[serde(default, alias = "explanition", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

/// Every field defaults when absent so that incomplete documents reach
/// `validate` and are reported as invalid rather than as parse failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemDocument {
    pub id: u32,
    pub title: String,
    pub platform: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub description: String,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub test_cases: Vec<TestCase>,
    pub code_stubs: BTreeMap<String, String>,
}

/// A document failed the validity check. `context` names the component that
/// ran the check, `field` is the first offending field.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{context}: problem document is missing {field}")]
pub struct ValidationError {
    pub context: &'static str,
    pub field: &'static str,
}

impl ProblemDocument {
    /// Checks the document invariant. Every clause must hold; the first one
    /// that does not is reported.
    pub fn validate(&self, context: &'static str) -> Result<(), ValidationError> {
        let missing = if self.id == 0 {
            Some("id")
        } else if self.title.is_empty() {
            Some("title")
        } else if self.description.is_empty() {
            Some("description")
        } else if self.examples.is_empty() {
            Some("examples")
        } else if self.constraints.is_empty() {
            Some("constraints")
        } else if self.test_cases.is_empty() {
            Some("testCases")
        } else {
            None
        };

        match missing {
            Some(field) => Err(ValidationError { context, field }),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate("check").is_ok()
    }

    pub fn code_stub(&self, language: &str) -> Option<&str> {
        self.code_stubs.get(language).map(String::as_str)
    }

    /// Languages with a stub, in sorted order.
    pub fn available_languages(&self) -> Vec<&str> {
        self.code_stubs.keys().map(String::as_str).collect()
    }
}

/// Line-comment token used for the placeholder stub.
fn comment_prefix(language: &str) -> &'static str {
    match language {
        "python" | "ruby" | "bash" | "shell" | "r" | "perl" | "elixir" => "#",
        "haskell" | "sql" | "lua" => "--",
        _ => "//",
    }
}

pub fn placeholder_stub(language: &str) -> String {
    format!("{} write your solution here\n", comment_prefix(language))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_problem() -> ProblemDocument {
        let mut code_stubs = BTreeMap::new();
        code_stubs.insert("python".to_string(), "def solve(): pass".to_string());
        code_stubs.insert("go".to_string(), "func solve() {}".to_string());
        ProblemDocument {
            id: 110,
            title: "Example".to_string(),
            platform: "LeetCode".to_string(),
            tags: vec!["array".to_string(), "hash-table".to_string()],
            difficulty: "Easy".to_string(),
            description: "Return the answer.".to_string(),
            examples: vec![Example {
                input: "nums = [1, 2]".to_string(),
                output: "3".to_string(),
                explanation: Some("1 + 2 = 3".to_string()),
            }],
            constraints: vec!["1 <= nums.length <= 10^4".to_string()],
            test_cases: vec![TestCase {
                input: "[1, 2]".to_string(),
                expected_output: "3".to_string(),
            }],
            code_stubs,
        }
    }

    #[test]
    fn test_sample_problem_is_valid() {
        assert_eq!(sample_problem().validate("test"), Ok(()));
    }

    #[test]
    fn test_each_clause_rejects_independently() {
        let breakers: [(&str, fn(&mut ProblemDocument)); 6] = [
            ("id", |p: &mut ProblemDocument| p.id = 0),
            ("title", |p: &mut ProblemDocument| p.title.clear()),
            ("description", |p: &mut ProblemDocument| p.description.clear()),
            ("examples", |p: &mut ProblemDocument| p.examples.clear()),
            ("constraints", |p: &mut ProblemDocument| p.constraints.clear()),
            ("testCases", |p: &mut ProblemDocument| p.test_cases.clear()),
        ];

        for (field, breaker) in &breakers {
            let mut problem = sample_problem();
            breaker(&mut problem);
            let err = problem.validate("test").unwrap_err();
            assert_eq!(err.field, *field);
        }
    }

    #[test]
    fn test_fixing_one_clause_is_not_enough() {
        let mut problem = sample_problem();
        problem.id = 0;
        problem.title.clear();
        problem.test_cases.clear();

        problem.id = 110;
        assert!(!problem.is_valid());
        problem.title = "Example".to_string();
        assert!(!problem.is_valid());
        problem.test_cases.push(TestCase::default());
        assert!(problem.is_valid());
    }

    #[test]
    fn test_validation_error_message_carries_context() {
        let mut problem = sample_problem();
        problem.description.clear();
        let err = problem.validate("loader").unwrap_err();
        assert_eq!(err.to_string(), "loader: problem document is missing description");
    }

    #[test]
    fn test_deserialize_camel_case_and_legacy_alias() {
        let json = r#"{
            "id": 7,
            "title": "Two Sum",
            "description": "d",
            "examples": [{"input": "a", "output": "b", "explanition": "c"}],
            "constraints": ["x"],
            "testCases": [{"input": "a", "expectedOutput": "b"}],
            "codeStubs": {"rust": "fn main() {}"}
        }"#;
        let problem: ProblemDocument = serde_json::from_str(json).unwrap();
        assert_eq!(problem.examples[0].explanation.as_deref(), Some("c"));
        assert_eq!(problem.test_cases[0].expected_output, "b");
        assert_eq!(problem.code_stub("rust"), Some("fn main() {}"));
        assert!(problem.tags.is_empty());
        assert!(problem.is_valid());
    }

    #[test]
    fn test_whitespace_title_and_description_are_present() {
        let mut problem = sample_problem();
        problem.title = "  ".to_string();
        problem.description = "\n".to_string();
        assert_eq!(problem.validate("test"), Ok(()));
    }

    #[test]
    fn test_missing_fields_deserialize_as_invalid() {
        let problem: ProblemDocument = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(problem.validate("test").unwrap_err().field, "title");
    }

    #[test]
    fn test_available_languages_sorted() {
        assert_eq!(sample_problem().available_languages(), vec!["go", "python"]);
    }

    #[test]
    fn test_placeholder_stub_uses_language_comment() {
        assert_eq!(placeholder_stub("python"), "# write your solution here\n");
        assert_eq!(placeholder_stub("rust"), "// write your solution here\n");
    }
}
