/*
 * @Date         : 2026-10-19
 * @Description  : VAE 本体：编码 -> 重参数化 -> 解码
 * @LastEditTime : 2026-10-19
 */

use super::{Decoder, Encoder, VaeConfig};
use crate::errors::ModelError;
use crate::nn::{Module, NoiseSource};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// 一次完整前向传播的结果
#[derive(Debug, Clone)]
pub struct VaeOutput {
    /// 重建图像 `[batch, 1, H, W]`
    pub reconstructed: Tensor,
    /// 潜空间均值 `[batch, latent_dim]`
    pub mean: Tensor,
    /// 潜空间对数方差 `[batch, latent_dim]`
    pub log_var: Tensor,
}

/// 变分自编码器
///
/// 推理流程：
/// ```text
/// x -> Encoder -> (mean, log_var)
///   std = exp(0.5 · log_var)
///   z   = mean + std ⊙ ε,  ε ~ N(0, I)
///   Decoder(z) -> 重建图像
/// ```
///
/// # 使用示例
/// ```ignore
/// let vae = Vae::new_seeded(&VaeConfig::mnist(), 42)?;
/// let out = vae.forward(&images, &mut GaussianNoise::seeded(0))?;
/// ```
#[derive(Debug, Clone)]
pub struct Vae {
    config: VaeConfig,
    encoder: Encoder,
    decoder: Decoder,
}

impl Vae {
    /// 按配置创建随机初始化的VAE（以系统熵为种子）
    pub fn new(config: &VaeConfig) -> Result<Self, ModelError> {
        Self::with_rng(config, &mut StdRng::from_entropy())
    }

    /// 按配置创建VAE，相同种子得到相同的初始参数
    pub fn new_seeded(config: &VaeConfig, seed: u64) -> Result<Self, ModelError> {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &VaeConfig, rng: &mut R) -> Result<Self, ModelError> {
        config.validate()?;
        let encoder = Encoder::new(config, rng);
        let decoder = Decoder::new(config, rng);
        let vae = Self {
            config: *config,
            encoder,
            decoder,
        };
        debug!(
            input_dim = config.input_dim,
            hidden_dim = config.hidden_dim,
            latent_dim = config.latent_dim,
            params = vae.num_elements(),
            "VAE 已创建"
        );
        Ok(vae)
    }

    pub fn config(&self) -> &VaeConfig {
        &self.config
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// 编码：`[batch, 1, H, W]` -> `(mean, log_var)`
    pub fn encode(&self, x: &Tensor) -> Result<(Tensor, Tensor), ModelError> {
        self.encoder.forward(x)
    }

    /// 解码：`[batch, latent_dim]` -> `[batch, 1, H, W]`
    pub fn decode(&self, z: &Tensor) -> Result<Tensor, ModelError> {
        self.decoder.forward(z)
    }

    /// 重参数化：返回`mean + std ⊙ ε`，ε 由`noise`按`std`的形状采样。
    ///
    /// 第二个参数是**标准差**，调用方应传入`exp(0.5 · log_var)`。
    pub fn reparameterize(
        mean: &Tensor,
        std: &Tensor,
        noise: &mut dyn NoiseSource,
    ) -> Result<Tensor, ModelError> {
        if !mean.is_same_shape(std) {
            return Err(ModelError::shape_mismatch(
                mean.shape(),
                std.shape(),
                "重参数化的均值与标准差形状须一致",
            ));
        }
        let eps = noise.sample(std.shape());
        Ok(mean + &(std * &eps))
    }

    /// 编码并采样潜向量：`z = reparameterize(mean, exp(0.5 · log_var))`
    pub fn sample_latent(
        &self,
        x: &Tensor,
        noise: &mut dyn NoiseSource,
    ) -> Result<Tensor, ModelError> {
        let (mean, log_var) = self.encode(x)?;
        let std = (&log_var * 0.5).exp();
        Self::reparameterize(&mean, &std, noise)
    }

    /// 完整前向传播：编码 -> 重参数化 -> 解码
    pub fn forward(
        &self,
        x: &Tensor,
        noise: &mut dyn NoiseSource,
    ) -> Result<VaeOutput, ModelError> {
        let (mean, log_var) = self.encode(x)?;
        let std = (&log_var * 0.5).exp();
        let z = Self::reparameterize(&mean, &std, noise)?;
        let reconstructed = self.decode(&z)?;
        Ok(VaeOutput {
            reconstructed,
            mean,
            log_var,
        })
    }
}

impl Module for Vae {
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor)) {
        self.encoder.visit_params(f);
        self.decoder.visit_params(f);
    }

    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor)) {
        self.encoder.visit_params_mut(f);
        self.decoder.visit_params_mut(f);
    }
}
