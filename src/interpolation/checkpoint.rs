/*
 * @Date         : 2026-10-19
 * @Description  : 插值模型的检查点入口
 *
 * 独立训练的VAE检查点键为`enc_fc1.weight`等，插值模型的检查点键为`vae.enc_fc1.weight`等。
 * 加载时先去掉开头的`vae.`再严格加载，因此两种检查点都能直接使用。
 * @LastEditTime : 2026-10-19
 */

use super::InterpolationModel;
use crate::errors::ModelError;
use crate::nn::{Module, StateDict};
use crate::vae::{Device, Vae, VaeConfig};
use std::path::Path;
use tracing::info;

/// 插值模型中VAE参数的命名空间
pub const VAE_PREFIX: &str = "vae";
/// 已训练VAE的默认检查点文件
pub const DEFAULT_VAE_MODEL_PATH: &str = "vae_model.bin";
/// 插值模型的默认检查点文件
pub const DEFAULT_INTERPOLATION_MODEL_PATH: &str = "interpolation_model.bin";

/// 用MNIST配置构建VAE，加载`vae_path`处的检查点并包裹为插值模型
pub fn mnist_interpolation_model<P: AsRef<Path>>(
    vae_path: P,
    device: Device,
) -> Result<InterpolationModel, ModelError> {
    let vae_path = vae_path.as_ref();
    let mut vae = Vae::new(&VaeConfig::mnist().with_device(device))?;
    let state = StateDict::load(vae_path)?.strip_prefix(VAE_PREFIX);
    vae.load_state_dict(&state)?;
    info!(path = %vae_path.display(), keys = state.len(), "VAE 检查点已载入插值模型");
    Ok(InterpolationModel::new(vae))
}

/// 由`vae_path`构建插值模型，并把其（带`vae.`前缀的）参数保存到`interp_path`
pub fn save_interpolation_model<P: AsRef<Path>, Q: AsRef<Path>>(
    vae_path: P,
    interp_path: Q,
) -> Result<(), ModelError> {
    let model = mnist_interpolation_model(vae_path, Device::Cpu)?;
    model.state_dict().save(interp_path)
}

/// 由`vae_path`构建插值模型，再加载`interp_path`处的插值模型检查点
pub fn load_interpolation_model<P: AsRef<Path>, Q: AsRef<Path>>(
    vae_path: P,
    interp_path: Q,
) -> Result<InterpolationModel, ModelError> {
    let interp_path = interp_path.as_ref();
    let mut model = mnist_interpolation_model(vae_path, Device::Cpu)?;
    let state = StateDict::load(interp_path)?;
    model.load_state_dict(&state)?;
    info!(path = %interp_path.display(), keys = state.len(), "插值模型已加载");
    Ok(model)
}
