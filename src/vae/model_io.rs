/*
 * @Date         : 2026-10-19
 * @Description  : VAE 高层模型 I/O（save_model/load_model）
 *
 * 职责：完整模型的保存/加载（结构描述 JSON + 参数 bin）
 *
 * 与 nn::StateDict 的区别：
 * - StateDict::save/load：底层二进制序列化（只处理参数的原始读写）
 * - 本文件：高层模型 I/O（生成/解析 ModelDescriptor + 调用底层序列化）
 * @LastEditTime : 2026-10-19
 */

use super::{Vae, VaeConfig};
use crate::errors::ModelError;
use crate::nn::{Module, StateDict};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// 单个参数的描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    pub shape: Vec<usize>,
}

/// 模型描述符：可读的 JSON，记录重建模型所需的配置与参数清单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub config: VaeConfig,
    /// 参数文件名（相对于描述文件所在目录）
    #[serde(default)]
    pub params_file: Option<String>,
    pub params: Vec<ParamDescriptor>,
}

impl ModelDescriptor {
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Vae {
    /// 生成当前模型的描述符（不含参数文件名）
    pub fn describe(&self) -> ModelDescriptor {
        let mut params = Vec::new();
        self.visit_params(&mut |name, tensor| {
            params.push(ParamDescriptor {
                name: name.to_string(),
                shape: tensor.shape().to_vec(),
            });
        });
        ModelDescriptor {
            config: *self.config(),
            params_file: None,
            params,
        }
    }

    /// 保存完整模型（结构 JSON + 参数 bin）
    ///
    /// 自动生成两个文件：
    /// - `{path}.json`: 配置与参数清单（可读）
    /// - `{path}.bin`: 参数数据（紧凑）
    ///
    /// # 示例
    /// ```ignore
    /// vae.save_model("models/mnist_vae")?;
    /// // 生成：models/mnist_vae.json + models/mnist_vae.bin
    /// ```
    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let path = path.as_ref();
        let json_path = path.with_extension("json");
        let bin_path = path.with_extension("bin");

        // 1. 保存参数到 bin 文件
        self.state_dict().save(&bin_path)?;

        // 2. 生成描述符并设置 params_file
        let mut descriptor = self.describe();
        descriptor.params_file = Some(bin_path.file_name().map_or_else(
            || "params.bin".to_string(),
            |s| s.to_string_lossy().to_string(),
        ));

        // 3. 保存 JSON
        fs::write(&json_path, descriptor.to_json()?)?;
        info!(path = %json_path.display(), "模型已保存");
        Ok(())
    }

    /// 加载完整模型：按 JSON 中的配置重建结构，再严格加载参数
    ///
    /// # 示例
    /// ```ignore
    /// let vae = Vae::load_model("models/mnist_vae")?;
    /// ```
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json_path = path.with_extension("json");

        // 1. 读取并解析 JSON
        let json = fs::read_to_string(&json_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ModelError::FileNotFound(json_path.clone()),
            _ => ModelError::Io(e),
        })?;
        let descriptor = ModelDescriptor::from_json(&json)?;

        // 2. 确定参数文件路径
        let bin_path = if let Some(ref params_file) = descriptor.params_file {
            path.parent().map_or_else(
                || Path::new(params_file).to_path_buf(),
                |p| p.join(params_file),
            )
        } else {
            path.with_extension("bin")
        };

        // 3. 重建结构并加载参数
        let mut vae = Vae::new_seeded(&descriptor.config, 0)?;
        if vae.describe().params != descriptor.params {
            return Err(ModelError::InvalidFormat(
                "描述文件中的参数清单与配置推导出的结构不一致".to_string(),
            ));
        }
        vae.load_state_dict(&StateDict::load(&bin_path)?)?;

        info!(path = %json_path.display(), "模型已加载");
        Ok(vae)
    }
}
