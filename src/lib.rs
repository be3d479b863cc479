//! # MNIST VAE
//!
//! `mnist_vae`用纯rust实现了一个面向28×28灰度图（MNIST）的变分自编码器（VAE），
//! 以及在潜空间（latent space）中对两张图像做线性插值的推理模块。
//!
//! 模块分层（自底向上）：
//! - [`tensor`]：基于`ndarray`的轻量张量，负责矩阵乘、激活函数等数值运算；
//! - [`nn`]：全连接层、参数字典（state dict）、可注入的噪声源；
//! - [`vae`]：编码器/解码器/重参数化组成的VAE本体；
//! - [`interpolation`]：包裹已训练VAE的潜空间插值模型，及其检查点读写。
//!
//! ```ignore
//! use mnist_vae::interpolation::mnist_interpolation_model;
//! use mnist_vae::nn::NoiseMode;
//! use mnist_vae::vae::Device;
//!
//! let mut model = mnist_interpolation_model("vae_model.bin", Device::Cpu)?;
//! model.set_noise_mode(NoiseMode::Zero);
//! let blended = model.forward(&img1, &img2, 0.5)?; // 形状 [1, 28, 28]
//! ```

pub mod errors;
pub mod interpolation;
pub mod nn;
pub mod tensor;
pub mod utils;
pub mod vae;

pub use errors::{ModelError, TensorError};
pub use tensor::Tensor;
