/*
 * @Date         : 2026-10-19
 * @Description  : 重参数化所需的标准正态噪声源
 *
 * 噪声以 trait 对象的形式显式传入，而非依赖进程级的全局随机状态：
 * - `GaussianNoise`：N(0, 1) 噪声，可由熵或固定种子初始化
 * - `ZeroNoise`：恒为零，令 reparameterize(mean, std) == mean
 * @LastEditTime : 2026-10-19
 */

use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// 噪声源：按给定形状产出噪声张量
pub trait NoiseSource: Debug {
    fn sample(&mut self, shape: &[usize]) -> Tensor;
}

/// 标准正态噪声
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    /// 以系统熵为种子，每次运行结果不同
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 以固定种子初始化，相同种子产出相同的噪声序列
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for GaussianNoise {
    fn sample(&mut self, shape: &[usize]) -> Tensor {
        Tensor::normal_with_rng(0.0, 1.0, shape, &mut self.rng)
    }
}

/// 恒零噪声（确定性推理/测试用）
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&mut self, shape: &[usize]) -> Tensor {
        Tensor::zeros(shape)
    }
}

/// 噪声模式配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoiseMode {
    /// 随机采样（正常推理）
    #[default]
    Stochastic,
    /// 固定种子的随机采样（可复现）
    Seeded(u64),
    /// 不加噪声，潜向量即均值
    Zero,
}

impl NoiseMode {
    pub fn build(self) -> Box<dyn NoiseSource> {
        match self {
            Self::Stochastic => Box::new(GaussianNoise::new()),
            Self::Seeded(seed) => Box::new(GaussianNoise::seeded(seed)),
            Self::Zero => Box::new(ZeroNoise),
        }
    }
}
