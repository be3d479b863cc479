/*
 * @Date         : 2026-10-19
 * @Description  : 潜空间插值：把两张图像各自编码、在潜空间线性混合后再解码
 * @LastEditTime : 2026-10-19
 */

mod checkpoint;
mod model;

pub use checkpoint::{
    DEFAULT_INTERPOLATION_MODEL_PATH, DEFAULT_VAE_MODEL_PATH, VAE_PREFIX,
    load_interpolation_model, mnist_interpolation_model, save_interpolation_model,
};
pub use model::InterpolationModel;

#[cfg(test)]
mod tests;
