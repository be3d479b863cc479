use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

/// 计算设备。目前只支持CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Device {
    #[default]
    Cpu,
}

/// VAE 结构配置
///
/// `input_dim`为单通道正方形图像的像素数，图像边长取其平方根（MNIST：784 -> 28）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaeConfig {
    pub input_dim: usize,
    pub hidden_dim: usize,
    pub latent_dim: usize,
    #[serde(default)]
    pub device: Device,
}

impl VaeConfig {
    pub fn new(input_dim: usize, hidden_dim: usize, latent_dim: usize) -> Self {
        Self {
            input_dim,
            hidden_dim,
            latent_dim,
            device: Device::Cpu,
        }
    }

    /// MNIST 预设：784 -> 400 -> 200
    pub fn mnist() -> Self {
        Self::new(784, 400, 200)
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// 图像边长，即`floor(sqrt(input_dim))`
    pub fn image_side(&self) -> usize {
        self.input_dim.isqrt()
    }

    /// 单张图像的形状`[1, H, W]`
    pub fn image_shape(&self) -> [usize; 3] {
        let side = self.image_side();
        [1, side, side]
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.input_dim == 0 || self.hidden_dim == 0 || self.latent_dim == 0 {
            return Err(ModelError::InvalidConfig(format!(
                "各维度须大于0：input_dim={}, hidden_dim={}, latent_dim={}",
                self.input_dim, self.hidden_dim, self.latent_dim
            )));
        }
        let side = self.image_side();
        if side * side != self.input_dim {
            return Err(ModelError::InvalidConfig(format!(
                "input_dim={}不是完全平方数，无法还原为正方形图像",
                self.input_dim
            )));
        }
        Ok(())
    }
}

impl Default for VaeConfig {
    fn default() -> Self {
        Self::mnist()
    }
}
