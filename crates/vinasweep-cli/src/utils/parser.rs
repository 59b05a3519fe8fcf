use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid float list for '{key}': '{value}'. Expected comma-separated numbers (e.g., '20,20,20').")]
    InvalidFloatList { key: String, value: String },
}

/// Splits a `KEY=VALUE` override at its first `=`.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(input.to_string()));
    }
    Ok((key, value.trim()))
}

/// Parses a comma-separated list of floats such as `20,20,22.5`.
pub fn parse_float_list(key: &str, value: &str) -> Result<Vec<f64>, ParseError> {
    value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParseError::InvalidFloatList {
            key: key.to_string(),
            value: value.to_string(),
        })
}
