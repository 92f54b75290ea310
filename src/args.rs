use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;

/// Command line arguments for encoding a label file
#[derive(Parser, Debug)]
#[command(about = "Encodes class labels into one-hot rows")]
pub struct EncodeArgs {
    /// Path to the layer description (TOML or JSON)
    #[arg(long, value_parser = validate_config)]
    pub config: PathBuf,

    /// Name of the layer to use, defaults to the first one in the description
    #[arg(long)]
    pub layer: Option<String>,

    /// Path to labels CSV file
    #[arg(long, value_parser = validate_csv)]
    pub labels: PathBuf,

    /// Where to write the encoded CSV, printed to stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Validates that a path points to an existing file with one of `extensions`
fn validate_file(path: &str, extensions: &[&str]) -> Result<PathBuf, clap::Error> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(clap::Error::raw(
            ErrorKind::InvalidValue,
            format!("File not found: {}", path.display()),
        ));
    }
    if !path.is_file() {
        return Err(clap::Error::raw(
            ErrorKind::InvalidValue,
            format!("Not a file: {}", path.display()),
        ));
    }
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    if !extensions.contains(&extension) {
        return Err(clap::Error::raw(
            ErrorKind::InvalidValue,
            format!(
                "File must be one of [{}]: {}",
                extensions.join(", "),
                path.display()
            ),
        ));
    }
    Ok(path)
}

fn validate_csv(path: &str) -> Result<PathBuf, clap::Error> {
    validate_file(path, &["csv"])
}

fn validate_config(path: &str) -> Result<PathBuf, clap::Error> {
    validate_file(path, &["toml", "json"])
}

/// Parses and validates command line arguments
pub fn parse_arguments() -> Result<EncodeArgs, clap::Error> {
    EncodeArgs::try_parse()
}
