/*
 * @Date         : 2026-10-19
 * @Description  : 负责神经网络（neural network）推理所需的积木：
 *                 全连接层、参数字典（state dict）与可注入的噪声源
 * @LastEditTime : 2026-10-19
 */

pub mod layer;
mod module;
mod noise;
mod state_dict;

pub use layer::Linear;
pub use module::Module;
pub use noise::{GaussianNoise, NoiseMode, NoiseSource, ZeroNoise};
pub use state_dict::StateDict;

#[cfg(test)]
mod tests;
