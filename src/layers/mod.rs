use crate::{Error, LayerParameter, Result, Tensor};
use std::fmt::Debug;

mod onehot;

pub use onehot::Onehot;

/// Device a pass runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Cpu,
    Gpu,
}

/// Interface every layer exposes to the host framework
pub trait Layer: Debug + Send + Sync {
    /// Builds the layer from its description, failing on invalid parameters
    fn configure(param: &LayerParameter) -> Result<Self>
    where
        Self: Sized;

    /// Registered type name of the layer
    fn layer_type(&self) -> &'static str;

    /// Shape of the output produced for an input of `input_shape`
    fn output_shape(&self, input_shape: &[usize]) -> Vec<usize>;

    /// Resizes `top` to fit the output for `bottom`
    fn reshape(&self, bottom: &Tensor, top: &mut Tensor) -> Result<()> {
        top.reshape(self.output_shape(&bottom.shape))
    }

    /// CPU forward pass, `top` must already be reshaped.
    /// On error `top` is left as it was.
    fn forward_cpu(&self, bottom: &Tensor, top: &mut Tensor) -> Result<()>;

    /// CPU backward pass, writes the input gradient into `bottom_grad`
    /// when `propagate_down` is set
    fn backward_cpu(
        &self,
        top_grad: &Tensor,
        propagate_down: bool,
        bottom_grad: &mut Tensor,
    ) -> Result<()>;

    // No GPU kernels in this build
    fn forward_gpu(&self, _bottom: &Tensor, _top: &mut Tensor) -> Result<()> {
        Err(Error::NoGpu)
    }

    fn backward_gpu(
        &self,
        _top_grad: &Tensor,
        _propagate_down: bool,
        _bottom_grad: &mut Tensor,
    ) -> Result<()> {
        Err(Error::NoGpu)
    }

    /// Performs forward pass through the layer,
    /// reshaping `top` before dispatching to the device kernel
    fn forward(&self, mode: Mode, bottom: &Tensor, top: &mut Tensor) -> Result<()> {
        self.reshape(bottom, top)?;
        match mode {
            Mode::Cpu => self.forward_cpu(bottom, top),
            Mode::Gpu => self.forward_gpu(bottom, top),
        }
    }

    /// Performs backward pass through the layer
    fn backward(
        &self,
        mode: Mode,
        top_grad: &Tensor,
        propagate_down: bool,
        bottom_grad: &mut Tensor,
    ) -> Result<()> {
        match mode {
            Mode::Cpu => self.backward_cpu(top_grad, propagate_down, bottom_grad),
            Mode::Gpu => self.backward_gpu(top_grad, propagate_down, bottom_grad),
        }
    }
}
