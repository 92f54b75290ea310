use crate::{format_vector, parse_vector_str, Error, Result, Tensor};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Loads the non-empty lines of a file into a vector of strings
pub fn load_data_file(file_path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Parses label lines into a tensor.
/// A single label per line gives shape [rows], several give [rows, cols].
pub fn parse_labels(lines: &[String]) -> Result<Tensor> {
    let mut data = Vec::new();
    let mut width = None;

    for (i, line) in lines.iter().enumerate() {
        let values = parse_vector_str(line, i + 1)?;
        match width {
            None => width = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(Error::RaggedRows {
                    line: i + 1,
                    expected,
                    got: values.len(),
                });
            }
            _ => {}
        }
        data.extend(values);
    }

    let shape = match width {
        Some(1) => vec![lines.len()],
        Some(cols) => vec![lines.len(), cols],
        None => vec![0],
    };
    Ok(Tensor::new_with_shape(data, shape))
}

/// Loads class labels from a CSV file
pub fn load_labels(file_path: impl AsRef<Path>) -> Result<Tensor> {
    let file_path = file_path.as_ref();
    let lines = load_data_file(file_path)?;
    if lines.is_empty() {
        return Err(Error::EmptyData(file_path.display().to_string()));
    }

    let labels = parse_labels(&lines)?;
    info!(path = %file_path.display(), shape = ?labels.shape, "loaded labels");
    Ok(labels)
}

/// Writes every innermost row of `tensor` as one CSV line
pub fn write_rows(writer: &mut impl Write, tensor: &Tensor) -> Result<()> {
    for row in tensor.rows() {
        writeln!(writer, "{}", format_vector(row))?;
    }
    Ok(())
}

/// Saves every innermost row of `tensor` to a CSV file
pub fn save_rows(file_path: impl AsRef<Path>, tensor: &Tensor) -> Result<()> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    write_rows(&mut writer, tensor)?;
    writer.flush()?;
    Ok(())
}
