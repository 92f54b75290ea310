pub mod args;
pub mod data;
pub mod error;
pub mod layers;
pub mod params;
pub mod parsing;
pub mod registry;
pub mod tensor;
pub mod test_utils;

pub use args::{parse_arguments, EncodeArgs};
pub use data::{load_data_file, load_labels, parse_labels, save_rows, write_rows};
pub use error::{Error, Result};
pub use layers::{Layer, Mode, Onehot};
pub use params::{LayerParameter, NetParameter, OnehotParameter};
pub use parsing::{format_vector, parse_vector_str};
pub use registry::{instantiate_layers, LayerCreator, LayerRegistry};
pub use tensor::Tensor;
