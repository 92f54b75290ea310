use crate::{Error, Layer, LayerParameter, Result, Tensor};
use tracing::{debug, trace};

/// Expands each class index of the input into a one-hot vector.
/// Not differentiable, backward to the input always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Onehot {
    /// Width of each output vector
    num_output: usize,
}

impl Onehot {
    pub const TYPE: &'static str = "Onehot";

    pub fn new(num_output: i64) -> Result<Self> {
        if num_output <= 0 {
            return Err(Error::InvalidConfig {
                layer_type: Self::TYPE,
                message: format!("num_output must be positive, got {}", num_output),
            });
        }

        let num_output = usize::try_from(num_output).map_err(|_| Error::InvalidConfig {
            layer_type: Self::TYPE,
            message: format!("num_output {} does not fit in usize", num_output),
        })?;
        debug!(num_output, "configured onehot layer");
        Ok(Onehot { num_output })
    }

    pub fn num_output(&self) -> usize {
        self.num_output
    }

    /// Allocates and returns the one-hot encoding of `bottom`
    pub fn encode(&self, bottom: &Tensor) -> Result<Tensor> {
        let mut top = Tensor::default();
        self.reshape(bottom, &mut top)?;
        self.forward_cpu(bottom, &mut top)?;
        Ok(top)
    }

    /// Validates a single input and returns its class index
    fn class_index(&self, position: usize, value: f32) -> Result<usize> {
        // Truncation toward zero, NaN maps to 0 and fails the integral check
        let index = value as i64;
        if index < 0 || index >= self.num_output as i64 {
            return Err(Error::IndexOutOfRange {
                position,
                value,
                num_output: self.num_output,
            });
        }
        if index as f32 != value {
            return Err(Error::NonIntegral { position, value });
        }
        Ok(index as usize)
    }
}

impl Layer for Onehot {
    fn configure(param: &LayerParameter) -> Result<Self> {
        let onehot_param = param.onehot_param.as_ref().ok_or_else(|| Error::MissingParam {
            layer_type: Self::TYPE,
            name: param.name.clone(),
            param: "onehot_param",
        })?;
        Onehot::new(onehot_param.num_output)
    }

    fn layer_type(&self) -> &'static str {
        Self::TYPE
    }

    fn output_shape(&self, input_shape: &[usize]) -> Vec<usize> {
        let mut shape = input_shape.to_vec();
        shape.push(self.num_output);
        shape
    }

    fn forward_cpu(&self, bottom: &Tensor, top: &mut Tensor) -> Result<()> {
        let m = bottom.count();
        if bottom.data.len() != m {
            return Err(Error::ShapeMismatch {
                expected: m,
                got: bottom.data.len(),
            });
        }
        let expected = m
            .checked_mul(self.num_output)
            .ok_or_else(|| Error::SizeOverflow(self.output_shape(&bottom.shape)))?;
        if top.data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                got: top.data.len(),
            });
        }
        trace!(m, num_output = self.num_output, "onehot forward");

        // Validate everything before touching `top`
        let indices = bottom
            .data
            .iter()
            .enumerate()
            .map(|(position, &value)| self.class_index(position, value))
            .collect::<Result<Vec<usize>>>()?;

        for (index, row) in indices.into_iter().zip(top.data.chunks_mut(self.num_output)) {
            row.fill(0.0);
            row[index] = 1.0;
        }

        Ok(())
    }

    fn backward_cpu(
        &self,
        _top_grad: &Tensor,
        propagate_down: bool,
        _bottom_grad: &mut Tensor,
    ) -> Result<()> {
        if propagate_down {
            return Err(Error::BackwardUnsupported {
                layer_type: Self::TYPE,
            });
        }
        Ok(())
    }
}
