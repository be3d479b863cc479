/*
 * @Date         : 2026-10-19
 * @Description  : VAE 解码器：潜向量 -> 图像
 * @LastEditTime : 2026-10-19
 */

use super::VaeConfig;
use crate::errors::ModelError;
use crate::nn::{Linear, Module};
use crate::tensor::Tensor;
use rand::Rng;

/// 解码器
///
/// ```text
/// z [batch, latent] --dec_fc1+ReLU--> [batch, hidden] --dec_fc2+ReLU--> [batch, hidden]
///   --dec_fc3+Sigmoid--> [batch, H·W] --reshape--> [batch, 1, H, W]
/// ```
#[derive(Debug, Clone)]
pub struct Decoder {
    fc1: Linear,
    fc2: Linear,
    fc3: Linear,
    image_shape: [usize; 3],
}

impl Decoder {
    pub(crate) fn new<R: Rng + ?Sized>(config: &VaeConfig, rng: &mut R) -> Self {
        Self {
            fc1: Linear::new(config.latent_dim, config.hidden_dim, "dec_fc1", rng),
            fc2: Linear::new(config.hidden_dim, config.hidden_dim, "dec_fc2", rng),
            fc3: Linear::new(config.hidden_dim, config.input_dim, "dec_fc3", rng),
            image_shape: config.image_shape(),
        }
    }

    /// 前向传播：`[batch, latent_dim]` -> `[batch, 1, H, W]`。
    /// 输出元素在[0, 1]内；f32 下 logit 饱和（|x|约17以上）时会恰好取到0或1，否则严格落在(0, 1)内。
    pub fn forward(&self, z: &Tensor) -> Result<Tensor, ModelError> {
        let latent_dim = self.fc1.in_features();
        let batch = match z.shape() {
            &[batch, width] if width == latent_dim => batch,
            other => {
                return Err(ModelError::shape_mismatch(
                    &[other.first().copied().unwrap_or(1), latent_dim],
                    other,
                    "解码器的输入须为 [batch, latent_dim]",
                ));
            }
        };

        let h = self.fc1.forward(z)?.relu();
        let h = self.fc2.forward(&h)?.relu();
        let pixels = self.fc3.forward(&h)?.sigmoid();
        let [c, height, width] = self.image_shape;
        Ok(pixels.reshape(&[batch, c, height, width]))
    }
}

impl Module for Decoder {
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor)) {
        self.fc1.visit_params(f);
        self.fc2.visit_params(f);
        self.fc3.visit_params(f);
    }

    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor)) {
        self.fc1.visit_params_mut(f);
        self.fc2.visit_params_mut(f);
        self.fc3.visit_params_mut(f);
    }
}
