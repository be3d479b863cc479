/*
 * @Date         : 2026-10-19
 * @Description  : 由已训练的VAE检查点生成插值模型检查点，再从中重新加载插值模型
 *
 * 读取当前目录下的`vae_model.bin`，写出`interpolation_model.bin`。
 * 日志级别可通过`RUST_LOG`调整，默认`mnist_vae=info`。
 * @LastEditTime : 2026-10-19
 */

use mnist_vae::interpolation::{
    DEFAULT_INTERPOLATION_MODEL_PATH, DEFAULT_VAE_MODEL_PATH, load_interpolation_model,
    save_interpolation_model,
};
use mnist_vae::nn::Module;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mnist_vae=info"));
    fmt().with_env_filter(filter).with_target(true).init();

    if let Err(e) = save_interpolation_model(DEFAULT_VAE_MODEL_PATH, DEFAULT_INTERPOLATION_MODEL_PATH)
    {
        error!(error = %e, "保存插值模型失败");
        return ExitCode::FAILURE;
    }

    match load_interpolation_model(DEFAULT_VAE_MODEL_PATH, DEFAULT_INTERPOLATION_MODEL_PATH) {
        Ok(model) => {
            info!(
                params = model.num_params(),
                elements = model.num_elements(),
                "插值模型就绪"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "加载插值模型失败");
            ExitCode::FAILURE
        }
    }
}
