use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parameters of the one-hot layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OnehotParameter {
    /// Width of each output vector, must be positive
    pub num_output: i64,
}

/// Generic description of a single layer, as found in a network description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerParameter {
    #[serde(default)]
    pub name: String,
    /// Registered layer type, e.g. "Onehot"
    #[serde(rename = "type")]
    pub layer_type: String,
    #[serde(default)]
    pub bottom: Vec<String>,
    #[serde(default)]
    pub top: Vec<String>,
    #[serde(default)]
    pub onehot_param: Option<OnehotParameter>,
}

impl LayerParameter {
    pub fn new(name: &str, layer_type: &str) -> Self {
        LayerParameter {
            name: name.to_string(),
            layer_type: layer_type.to_string(),
            bottom: Vec::new(),
            top: Vec::new(),
            onehot_param: None,
        }
    }

    pub fn with_onehot_param(mut self, num_output: i64) -> Self {
        self.onehot_param = Some(OnehotParameter { num_output });
        self
    }
}

/// Declarative network description: an ordered list of layers
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "layer")]
    pub layers: Vec<LayerParameter>,
}

impl NetParameter {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a description from disk, JSON for `.json` files and TOML otherwise
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Finds a layer description by name
    pub fn layer(&self, name: &str) -> Option<&LayerParameter> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Picks the named layer, or the first one when no name is given
    pub fn select_layer(&self, name: Option<&str>) -> Result<&LayerParameter> {
        match name {
            Some(name) => self
                .layer(name)
                .ok_or_else(|| Error::UnknownLayer(name.to_string())),
            None => self
                .layers
                .first()
                .ok_or_else(|| Error::EmptyData(format!("layer list of net '{}'", self.name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_description() {
        let net = NetParameter::from_toml_str(
            r#"
            name = "labels"

            [[layer]]
            name = "encode"
            type = "Onehot"
            bottom = ["label"]
            top = ["label_onehot"]
            onehot_param = { num_output = 10 }
            "#,
        )
        .unwrap();

        assert_eq!(net.name, "labels");
        assert_eq!(net.layers.len(), 1);

        let layer = net.layer("encode").unwrap();
        assert_eq!(layer.layer_type, "Onehot");
        assert_eq!(layer.bottom, vec!["label".to_string()]);
        assert_eq!(layer.top, vec!["label_onehot".to_string()]);
        assert_eq!(layer.onehot_param, Some(OnehotParameter { num_output: 10 }));
    }

    #[test]
    fn test_parse_json_description() {
        let net = NetParameter::from_json_str(
            r#"{"layer": [{"type": "Onehot", "onehot_param": {"num_output": 3}}]}"#,
        )
        .unwrap();

        assert_eq!(net.name, "");
        let layer = &net.layers[0];
        assert_eq!(layer.name, "");
        assert!(layer.bottom.is_empty());
        assert_eq!(layer.onehot_param.as_ref().unwrap().num_output, 3);
    }

    #[test]
    fn test_negative_width_survives_parsing() {
        let net = NetParameter::from_toml_str(
            r#"
            [[layer]]
            type = "Onehot"
            onehot_param = { num_output = -2 }
            "#,
        )
        .unwrap();
        assert_eq!(net.layers[0].onehot_param.as_ref().unwrap().num_output, -2);
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let result = NetParameter::from_toml_str(
            r#"
            [[layer]]
            name = "encode"
            "#,
        );
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_select_layer() {
        let net = NetParameter::from_toml_str(
            r#"
            name = "labels"

            [[layer]]
            name = "digits"
            type = "Onehot"

            [[layer]]
            name = "bits"
            type = "Onehot"
            "#,
        )
        .unwrap();

        assert_eq!(net.select_layer(None).unwrap().name, "digits");
        assert_eq!(net.select_layer(Some("bits")).unwrap().name, "bits");

        let err = net.select_layer(Some("letters")).unwrap_err();
        assert!(matches!(&err, Error::UnknownLayer(name) if name == "letters"));
        assert_eq!(err.to_string(), "no layer named 'letters' in the description");

        let empty = NetParameter::from_toml_str("name = \"empty\"").unwrap();
        assert!(matches!(
            empty.select_layer(None),
            Err(Error::EmptyData(_))
        ));
    }

    #[test]
    fn test_builder() {
        let param = LayerParameter::new("encode", "Onehot").with_onehot_param(4);
        assert_eq!(param.name, "encode");
        assert_eq!(param.onehot_param, Some(OnehotParameter { num_output: 4 }));
    }
}
