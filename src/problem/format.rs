use std::fmt::Write;

use crate::problem::model::{ProblemDocument, ValidationError};

pub trait TextRenderer {
    fn format(&self, problem: &ProblemDocument) -> Result<String, ValidationError>;
}

/// Plain multi-line layout of a problem: header, platform, description,
/// examples, constraints and tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextRenderer;

impl TextRenderer for PlainTextRenderer {
    fn format(&self, problem: &ProblemDocument) -> Result<String, ValidationError> {
        problem.validate("text renderer")?;

        // Writing into a String cannot fail.
        let mut out = String::new();
        let _ = writeln!(out, "{} {} [{}]", problem.id, problem.title, problem.difficulty);
        let _ = writeln!(out, "Platform: {}", problem.platform);
        out.push('\n');
        out.push_str(problem.description.trim_end());
        out.push_str("\n\n");

        for (i, example) in problem.examples.iter().enumerate() {
            let _ = writeln!(out, "Example {}:", i + 1);
            let _ = writeln!(out, "  Input: {}", example.input);
            let _ = writeln!(out, "  Output: {}", example.output);
            if let Some(explanation) = example.explanation.as_deref().filter(|e| !e.is_empty()) {
                let _ = writeln!(out, "  Explanation: {explanation}");
            }
            out.push('\n');
        }

        if !problem.constraints.is_empty() {
            out.push_str("Constraints:\n");
            for constraint in &problem.constraints {
                let _ = writeln!(out, "  - {constraint}");
            }
        }

        if !problem.tags.is_empty() {
            let _ = write!(out, "\nTags: {}", problem.tags.join(", "));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::model::tests::sample_problem;

    #[test]
    fn test_format_layout() {
        let text = PlainTextRenderer.format(&sample_problem()).unwrap();
        let expected = "\
110 Example [Easy]
Platform: LeetCode

Return the answer.

Example 1:
  Input: nums = [1, 2]
  Output: 3
  Explanation: 1 + 2 = 3

Constraints:
  - 1 <= nums.length <= 10^4

Tags: array, hash-table";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_is_deterministic() {
        let problem = sample_problem();
        let first = PlainTextRenderer.format(&problem).unwrap();
        let second = PlainTextRenderer.format(&problem).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_omits_explanation_and_tags_when_absent() {
        let mut problem = sample_problem();
        problem.examples[0].explanation = None;
        problem.tags.clear();
        let text = PlainTextRenderer.format(&problem).unwrap();
        assert!(!text.contains("Explanation"));
        assert!(!text.contains("Tags:"));
        assert!(text.ends_with("  - 1 <= nums.length <= 10^4\n"));
    }

    #[test]
    fn test_format_rejects_invalid_document() {
        let mut problem = sample_problem();
        problem.test_cases.clear();
        let err = PlainTextRenderer.format(&problem).unwrap_err();
        assert_eq!(err.context, "text renderer");
        assert_eq!(err.field, "testCases");
    }
}
