/*
 * @Date         : 2026-10-19
 * @Description  : 变分自编码器（VAE）
 *
 * 编码器把图像映射为潜空间分布（均值、对数方差），经重参数化采样得到潜向量，
 * 再由解码器还原为同尺寸的图像。各层参数键为扁平命名（`enc_fc1.weight`、`dec_fc3.bias`……）。
 * @LastEditTime : 2026-10-19
 */

mod config;
mod decoder;
mod encoder;
mod model;
mod model_io;

pub use config::{Device, VaeConfig};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use model::{Vae, VaeOutput};
pub use model_io::{ModelDescriptor, ParamDescriptor};

#[cfg(test)]
mod tests;
