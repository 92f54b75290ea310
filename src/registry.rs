use crate::{Error, Layer, LayerParameter, NetParameter, Onehot, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Factory building a layer from its description
pub type LayerCreator = fn(&LayerParameter) -> Result<Box<dyn Layer>>;

/// Maps layer type names to their factories
#[derive(Clone)]
pub struct LayerRegistry {
    creators: HashMap<String, LayerCreator>,
}

impl fmt::Debug for LayerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerRegistry")
            .field("layer_types", &self.layer_types())
            .finish()
    }
}

fn create_onehot(param: &LayerParameter) -> Result<Box<dyn Layer>> {
    Ok(Box::new(Onehot::configure(param)?))
}

impl LayerRegistry {
    /// Creates a registry with no layer types
    pub fn empty() -> Self {
        LayerRegistry {
            creators: HashMap::new(),
        }
    }

    /// Adds a factory for `layer_type`, each type can be registered once
    pub fn register(&mut self, layer_type: &str, creator: LayerCreator) -> Result<()> {
        if self.creators.contains_key(layer_type) {
            return Err(Error::DuplicateLayerType(layer_type.to_string()));
        }
        debug!(layer_type, "registered layer type");
        self.creators.insert(layer_type.to_string(), creator);
        Ok(())
    }

    /// Builds the layer described by `param`
    pub fn create(&self, param: &LayerParameter) -> Result<Box<dyn Layer>> {
        let creator = self
            .creators
            .get(&param.layer_type)
            .ok_or_else(|| Error::UnknownLayerType {
                layer_type: param.layer_type.clone(),
                known: self.layer_types().join(", "),
            })?;

        debug!(name = %param.name, layer_type = %param.layer_type, "creating layer");
        creator(param)
    }

    /// Registered type names in sorted order
    pub fn layer_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.creators.keys().cloned().collect();
        types.sort();
        types
    }
}

impl Default for LayerRegistry {
    /// Registry with every layer type this crate provides
    fn default() -> Self {
        let mut registry = LayerRegistry::empty();
        registry
            .creators
            .insert(Onehot::TYPE.to_string(), create_onehot);
        registry
    }
}

/// Creates every layer of a description in order, paired with its name.
/// The layers are not connected to each other.
pub fn instantiate_layers(
    net: &NetParameter,
    registry: &LayerRegistry,
) -> Result<Vec<(String, Box<dyn Layer>)>> {
    net.layers
        .iter()
        .map(|param| -> Result<(String, Box<dyn Layer>)> {
            Ok((param.name.clone(), registry.create(param)?))
        })
        .collect()
}
