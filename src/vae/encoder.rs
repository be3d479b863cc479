/*
 * @Date         : 2026-10-19
 * @Description  : VAE 编码器：图像 -> (均值, 对数方差)
 * @LastEditTime : 2026-10-19
 */

use super::VaeConfig;
use crate::errors::ModelError;
use crate::nn::{Linear, Module};
use crate::tensor::Tensor;
use rand::Rng;

/// 编码器
///
/// ```text
/// [batch, 1, H, W] --flatten--> [batch, H·W]
///   --enc_fc1+ReLU--> [batch, hidden] --enc_fc2+ReLU--> [batch, hidden]
///   ├─fc_mu-----> mean    [batch, latent]
///   └─fc_logvar-> log_var [batch, latent]
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    fc1: Linear,
    fc2: Linear,
    fc_mu: Linear,
    fc_logvar: Linear,
    image_shape: [usize; 3],
}

impl Encoder {
    pub(crate) fn new<R: Rng + ?Sized>(config: &VaeConfig, rng: &mut R) -> Self {
        Self {
            fc1: Linear::new(config.input_dim, config.hidden_dim, "enc_fc1", rng),
            fc2: Linear::new(config.hidden_dim, config.hidden_dim, "enc_fc2", rng),
            fc_mu: Linear::new(config.hidden_dim, config.latent_dim, "fc_mu", rng),
            fc_logvar: Linear::new(config.hidden_dim, config.latent_dim, "fc_logvar", rng),
            image_shape: config.image_shape(),
        }
    }

    /// 前向传播，返回`(mean, log_var)`，形状均为`[batch, latent_dim]`。
    /// 输入须为`[batch, 1, H, W]`，形状不符时在计算前返回`ShapeMismatch`。
    pub fn forward(&self, x: &Tensor) -> Result<(Tensor, Tensor), ModelError> {
        match x.shape() {
            [_, c, h, w] if [*c, *h, *w] == self.image_shape => {}
            other => {
                let batch = if other.len() == 4 { other[0] } else { 1 };
                let [c, h, w] = self.image_shape;
                return Err(ModelError::shape_mismatch(
                    &[batch, c, h, w],
                    other,
                    "编码器的输入须为 [batch, 1, H, W]",
                ));
            }
        }

        let h = x.flatten_from_first();
        let h = self.fc1.forward(&h)?.relu();
        let h = self.fc2.forward(&h)?.relu();
        let mean = self.fc_mu.forward(&h)?;
        let log_var = self.fc_logvar.forward(&h)?;
        Ok((mean, log_var))
    }

    pub fn latent_dim(&self) -> usize {
        self.fc_mu.out_features()
    }
}

impl Module for Encoder {
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor)) {
        self.fc1.visit_params(f);
        self.fc2.visit_params(f);
        self.fc_mu.visit_params(f);
        self.fc_logvar.visit_params(f);
    }

    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor)) {
        self.fc1.visit_params_mut(f);
        self.fc2.visit_params_mut(f);
        self.fc_mu.visit_params_mut(f);
        self.fc_logvar.visit_params_mut(f);
    }
}
