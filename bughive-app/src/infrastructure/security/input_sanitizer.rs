use crate::domain::BugSubmission;
use bughive_errors::AppError;
use regex_lite::Regex;
use std::sync::LazyLock;

const MAX_REPOSITORY_LENGTH: usize = 2048;
const MAX_TITLE_LENGTH: usize = 200;
const MAX_TEXT_LENGTH: usize = 10_000;
const REPOSITORY_SLUG: &str = r"^[A-Za-z0-9][A-Za-z0-9_.-]*/[A-Za-z0-9_.-]+$";

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

static REPOSITORY_SLUG_PATTERN: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(REPOSITORY_SLUG));

pub struct InputSanitizer;

impl InputSanitizer {
    /// Accepts `owner/name` or an `http(s)` URL with a host.
    pub fn validate_repository(repository: &str) -> Result<String, AppError> {
        let repository = repository.trim();

        if repository.is_empty() {
            return Err(AppError::InvalidSubmission(
                "Repository must not be empty".to_string(),
            ));
        }

        if repository.len() > MAX_REPOSITORY_LENGTH {
            return Err(AppError::InvalidSubmission(
                "Repository reference is too long".to_string(),
            ));
        }

        let slug = REPOSITORY_SLUG_PATTERN
            .as_ref()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        if slug.is_match(repository) {
            return Ok(repository.to_string());
        }

        let parsed = url::Url::parse(repository).map_err(|_| {
            tracing::warn!("Rejected repository reference: {}", repository);
            AppError::InvalidSubmission(
                "Repository must be owner/name or a repository URL".to_string(),
            )
        })?;

        let scheme = parsed.scheme().to_lowercase();
        if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
            return Err(AppError::InvalidSubmission(
                "Only HTTP and HTTPS repository URLs are allowed".to_string(),
            ));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(AppError::InvalidSubmission(
                "Repository URL must have a host".to_string(),
            ));
        }

        Ok(parsed.to_string())
    }

    /// Strips control characters (newlines and tabs survive) and caps length.
    pub fn sanitize_text(content: &str, max_chars: usize) -> String {
        content
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .take(max_chars)
            .collect()
    }

    /// Cleans every free-text field and normalises the repository reference.
    pub fn clean_submission(mut submission: BugSubmission) -> Result<BugSubmission, AppError> {
        submission.title = Self::sanitize_text(&submission.title, MAX_TITLE_LENGTH)
            .replace(['\n', '\t'], " ");
        for field in [
            &mut submission.description,
            &mut submission.steps_to_reproduce,
            &mut submission.expected_behavior,
            &mut submission.actual_behavior,
        ] {
            *field = Self::sanitize_text(field, MAX_TEXT_LENGTH);
        }
        for label in &mut submission.labels {
            *label = Self::sanitize_text(label.trim(), MAX_TEXT_LENGTH);
        }
        submission.labels.retain(|label| !label.is_empty());

        submission.repository = match submission.repository() {
            Some(repository) => Some(Self::validate_repository(repository)?),
            None => None,
        };

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_repository() {
        assert_eq!(
            InputSanitizer::validate_repository(" company/react-dashboard ").unwrap(),
            "company/react-dashboard"
        );
        assert!(InputSanitizer::validate_repository("https://github.com/acme/app").is_ok());
        assert!(InputSanitizer::validate_repository("http://git.example.com/acme/app.git").is_ok());
    }

    #[test]
    fn test_slug_pattern_is_shared_across_calls() {
        assert!(REPOSITORY_SLUG_PATTERN.as_ref().is_ok());
        for _ in 0..3 {
            assert!(InputSanitizer::validate_repository("acme/bughive").is_ok());
        }
    }

    #[test]
    fn test_invalid_repository() {
        assert!(InputSanitizer::validate_repository("").is_err());
        assert!(InputSanitizer::validate_repository("not a repo").is_err());
        assert!(InputSanitizer::validate_repository("owner/name/extra").is_err());
        assert!(InputSanitizer::validate_repository("ftp://example.com/acme").is_err());
        assert!(InputSanitizer::validate_repository("/name").is_err());
    }

    #[test]
    fn test_clean_submission_strips_control_characters() {
        let submission = BugSubmission {
            title: "Crash\u{0007} on\nexport".to_string(),
            description: "Line one\nLine two\u{001b}".to_string(),
            labels: vec![" ui ".to_string(), "\u{0000}".to_string()],
            repository: Some("   ".to_string()),
            ..BugSubmission::new()
        };

        let cleaned = InputSanitizer::clean_submission(submission).unwrap();
        assert_eq!(cleaned.title, "Crash on export");
        assert_eq!(cleaned.description, "Line one\nLine two");
        assert_eq!(cleaned.labels, vec!["ui".to_string()]);
        assert_eq!(cleaned.repository, None);
    }
}
