use crate::tensor::Tensor;
use crate::vae::{Vae, VaeConfig};


/// 4×4 的小图配置，便于快速测试
fn tiny_config() -> VaeConfig {
    VaeConfig::new(16, 8, 3)
}

fn tiny_vae(seed: u64) -> Vae {
    Vae::new_seeded(&tiny_config(), seed).unwrap()
}

/// 取值在[0,1)的随机图像批次
fn random_images(batch: usize, side: usize, seed: u64) -> Tensor {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Tensor::uniform_with_rng(0.0, 1.0, &[batch, 1, side, side], &mut rng)
}
