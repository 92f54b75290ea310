use crate::{Error, Result};

/// Parses a comma-separated string of numbers into a vector of f32,
/// `line` is only used for error reporting
pub fn parse_vector_str(vector_str: &str, line: usize) -> Result<Vec<f32>> {
    vector_str
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f32>().map_err(|_| Error::ParseValue {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Joins the `Display` form of each value with commas
pub fn format_vector(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
