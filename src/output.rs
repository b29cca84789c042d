use crate::error::{Error, Result};
use crate::models::ExtractionReport;

pub const NO_SKILLS_NOTICE: &str =
    "No matching skills found in the resume. Try expanding the skill vocabulary.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Skill listing followed by compact JSON.
    Text,
    /// Pretty-printed JSON only.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// Renders a report. Reports without skills render as a notice only.
pub fn render(report: &ExtractionReport, format: OutputFormat) -> Result<String> {
    if report.is_empty() {
        return Ok(NO_SKILLS_NOTICE.to_string());
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("\nExtracted skills found in resume:\n\n");
            for skill in &report.skills {
                output.push_str(&format!("- {}\n", title_case(skill)));
            }
            output.push_str("\nJSON output:\n");
            output.push_str(&serde_json::to_string(report)?);
            Ok(output)
        }
    }
}

/// Upper-cases letters that follow a non-letter, lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategorizedResult, CategorizedSkill};

    fn report() -> ExtractionReport {
        let mut categorized = CategorizedResult::new();
        categorized.insert("Python", vec![CategorizedSkill::exact("python")]);
        categorized.insert("Other", vec![CategorizedSkill::exact("c++")]);
        ExtractionReport::new(vec!["c++".to_string(), "python".to_string()], categorized)
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("rest api"), "Rest Api");
    }

    #[test]
    fn test_render_text() {
        let output = render(&report(), OutputFormat::Text).unwrap();
        assert!(output.starts_with("\nExtracted skills found in resume:\n\n- C++\n- Python\n"));

        let json = output.split("JSON output:\n").nth(1).unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["skills"], serde_json::json!(["c++", "python"]));
        assert_eq!(value["total_skills"], 2);
        assert_eq!(value["total_categories"], 2);
        assert_eq!(value["categorized_skills"]["Other"][0]["confidence"], 100);
    }

    #[test]
    fn test_render_json() {
        let output = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["categorized_skills"]["Python"][0]["name"], "python");
    }

    #[test]
    fn test_render_empty_report() {
        let empty = ExtractionReport::new(Vec::new(), CategorizedResult::new());
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(render(&empty, format).unwrap(), NO_SKILLS_NOTICE);
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("markdown".parse::<OutputFormat>().is_err());
    }
}
