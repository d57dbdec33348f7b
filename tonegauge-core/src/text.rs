use crate::error::ValidationError;
use crate::types::AnalysisInput;

/// Accepts text with at least one non-whitespace character.
///
/// The returned input keeps the text exactly as typed; trimming only decides
/// emptiness.
pub fn validate_input(text: &str) -> Result<AnalysisInput, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(AnalysisInput::new_unchecked(text))
}

/// Shortens text for log lines and status previews.
pub fn preview_text(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut out: String = single_line.chars().take(max_chars).collect();
    out.push('…');
    out
}
