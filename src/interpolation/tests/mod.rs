use crate::tensor::Tensor;
use crate::vae::{Vae, VaeConfig};

mod checkpoint;

fn tiny_vae(seed: u64) -> Vae {
    Vae::new_seeded(&VaeConfig::new(16, 8, 3), seed).unwrap()
}

/// 取值在[0,1)的随机单张图像 `[1, side, side]`
fn random_image(side: usize, seed: u64) -> Tensor {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Tensor::uniform_with_rng(0.0, 1.0, &[1, side, side], &mut rng)
}
