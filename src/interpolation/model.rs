/*
 * @Date         : 2026-10-19
 * @Description  : 插值模型：组合（而非继承）一个已训练好的 VAE
 * @LastEditTime : 2026-10-19
 */

use super::checkpoint::VAE_PREFIX;
use crate::errors::ModelError;
use crate::nn::{Module, NoiseMode, NoiseSource, StateDict};
use crate::tensor::Tensor;
use crate::vae::Vae;

/// 潜空间插值模型
///
/// ```text
/// img1 ─encode─reparameterize─> z1 ┐
///                                  ├─ z = (1 - t)·z1 + t·z2 ─decode─> [1, H, W]
/// img2 ─encode─reparameterize─> z2 ┘
/// ```
///
/// 参数键带`vae.`命名空间（如`vae.enc_fc1.weight`）。
#[derive(Debug)]
pub struct InterpolationModel {
    vae: Vae,
    noise: Box<dyn NoiseSource>,
}

impl InterpolationModel {
    /// 包裹一个VAE，默认随机采样噪声
    pub fn new(vae: Vae) -> Self {
        Self::with_noise_mode(vae, NoiseMode::Stochastic)
    }

    pub fn with_noise_mode(vae: Vae, mode: NoiseMode) -> Self {
        Self {
            vae,
            noise: mode.build(),
        }
    }

    pub fn with_noise(vae: Vae, noise: Box<dyn NoiseSource>) -> Self {
        Self { vae, noise }
    }

    /// 替换噪声源（如在测试中固定为零噪声）
    pub fn set_noise_mode(&mut self, mode: NoiseMode) {
        self.noise = mode.build();
    }

    pub fn vae(&self) -> &Vae {
        &self.vae
    }

    pub fn into_vae(self) -> Vae {
        self.vae
    }

    /// 加载独立VAE的参数字典（键不带`vae.`前缀）
    pub fn load_vae_state_dict(&mut self, state: &StateDict) -> Result<(), ModelError> {
        self.vae.load_state_dict(state)
    }

    /// 在`img1`与`img2`之间插值，使用模型自带的噪声源。
    ///
    /// 两张图像的形状都须为`[1, H, W]`；`t`不做范围检查，超出[0, 1]即为外推。
    pub fn forward(&mut self, img1: &Tensor, img2: &Tensor, t: f32) -> Result<Tensor, ModelError> {
        Self::interpolate(&self.vae, img1, img2, t, self.noise.as_mut())
    }

    /// 同`forward`，但使用调用方提供的噪声源
    pub fn forward_with_noise(
        &self,
        img1: &Tensor,
        img2: &Tensor,
        t: f32,
        noise: &mut dyn NoiseSource,
    ) -> Result<Tensor, ModelError> {
        Self::interpolate(&self.vae, img1, img2, t, noise)
    }

    /// 在[0, 1]上等间隔取`steps`个t（含两端），依次插值
    pub fn interpolate_steps(
        &mut self,
        img1: &Tensor,
        img2: &Tensor,
        steps: usize,
    ) -> Result<Vec<Tensor>, ModelError> {
        if steps < 2 {
            return Err(ModelError::InvalidArgument(format!(
                "插值步数至少为2，实际为{steps}"
            )));
        }
        (0..steps)
            .map(|i| {
                let t = i as f32 / (steps - 1) as f32;
                self.forward(img1, img2, t)
            })
            .collect()
    }

    fn interpolate(
        vae: &Vae,
        img1: &Tensor,
        img2: &Tensor,
        t: f32,
        noise: &mut dyn NoiseSource,
    ) -> Result<Tensor, ModelError> {
        let image_shape = vae.config().image_shape();
        for (label, img) in [("img1", img1), ("img2", img2)] {
            if img.shape() != image_shape {
                return Err(ModelError::shape_mismatch(
                    &image_shape,
                    img.shape(),
                    &format!("{label} 的形状须为 [1, H, W]"),
                ));
            }
        }

        let z1 = vae.sample_latent(&img1.unsqueeze(0), noise)?;
        let z2 = vae.sample_latent(&img2.unsqueeze(0), noise)?;
        let z = (1.0 - t) * &z1 + t * &z2;
        let blended = vae.decode(&z)?;
        Ok(blended.squeeze_dim(0))
    }
}

impl Module for InterpolationModel {
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor)) {
        self.vae
            .visit_params(&mut |name, tensor| f(&format!("{VAE_PREFIX}.{name}"), tensor));
    }

    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor)) {
        self.vae
            .visit_params_mut(&mut |name, tensor| f(&format!("{VAE_PREFIX}.{name}"), tensor));
    }
}

impl From<Vae> for InterpolationModel {
    fn from(vae: Vae) -> Self {
        Self::new(vae)
    }
}
