/// Errors raised while configuring, creating or running layers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{layer_type} layer: {message}")]
    InvalidConfig {
        layer_type: &'static str,
        message: String,
    },

    #[error("{layer_type} layer '{name}' is missing its {param} block")]
    MissingParam {
        layer_type: &'static str,
        name: String,
        param: &'static str,
    },

    #[error("input {value} at position {position} is outside [0, {num_output})")]
    IndexOutOfRange {
        position: usize,
        value: f32,
        num_output: usize,
    },

    #[error("non-integer input {value} at position {position}")]
    NonIntegral { position: usize, value: f32 },

    #[error("can't backpropagate to {layer_type} layer input")]
    BackwardUnsupported { layer_type: &'static str },

    #[error("cannot use GPU in CPU-only build")]
    NoGpu,

    #[error("output buffer holds {got} elements, expected {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("shape {0:?} has more elements than usize can hold")]
    SizeOverflow(Vec<usize>),

    #[error("unknown layer type: {layer_type} (known types: {known})")]
    UnknownLayerType { layer_type: String, known: String },

    #[error("no layer named '{0}' in the description")]
    UnknownLayer(String),

    #[error("layer type {0} already registered")]
    DuplicateLayerType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML description: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: cannot parse '{token}' as a number")]
    ParseValue { line: usize, token: String },

    #[error("no data in {0}")]
    EmptyData(String),

    #[error("line {line} has {got} values, expected {expected}")]
    RaggedRows {
        line: usize,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
