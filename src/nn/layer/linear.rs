/*
 * @Date         : 2026-10-19
 * @Description  : Linear (全连接) 层
 * @LastEditTime : 2026-10-19
 */

use crate::errors::ModelError;
use crate::nn::Module;
use crate::tensor::Tensor;
use rand::Rng;

/// Linear (全连接) 层
///
/// PyTorch 风格的全连接层：`output = x @ Wᵀ + b`
///
/// # 参数形状
/// - 权重：[out_features, in_features]
/// - 偏置：[out_features]
///
/// 参数键为`{name}.weight`与`{name}.bias`，与 PyTorch `state_dict` 的命名一致，
/// 因此由 PyTorch 导出的检查点可以逐键对应。
///
/// # 输入/输出形状
/// - 输入：[batch_size, in_features]
/// - 输出：[batch_size, out_features]
///
/// # 使用示例
/// ```ignore
/// let fc = Linear::new(784, 400, "enc_fc1", &mut rng);
/// let h = fc.forward(&x)?.relu();
/// ```
#[derive(Debug, Clone)]
pub struct Linear {
    weight: Tensor,
    bias: Tensor,
    in_features: usize,
    out_features: usize,
    /// 层名称（参数键前缀）
    name: String,
}

impl Linear {
    /// 创建新的 Linear 层，权重与偏置均按 U(-1/√in, 1/√in) 初始化
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        name: &str,
        rng: &mut R,
    ) -> Self {
        let bound = 1.0 / (in_features.max(1) as f32).sqrt();
        let weight = Tensor::uniform_with_rng(-bound, bound, &[out_features, in_features], rng);
        let bias = Tensor::uniform_with_rng(-bound, bound, &[out_features], rng);
        Self {
            weight,
            bias,
            in_features,
            out_features,
            name: name.to_string(),
        }
    }

    /// 用给定的权重与偏置创建 Linear 层，形状不符时返回错误
    pub fn from_parts(name: &str, weight: Tensor, bias: Tensor) -> Result<Self, ModelError> {
        let (out_features, in_features) = match weight.shape() {
            &[out, inp] => (out, inp),
            other => {
                return Err(ModelError::shape_mismatch(
                    &[0, 0],
                    other,
                    "Linear 权重必须是2阶张量 [out, in]",
                ));
            }
        };
        if bias.shape() != [out_features] {
            return Err(ModelError::shape_mismatch(
                &[out_features],
                bias.shape(),
                "Linear 偏置形状须为 [out_features]",
            ));
        }
        Ok(Self {
            weight,
            bias,
            in_features,
            out_features,
            name: name.to_string(),
        })
    }

    /// 前向传播，计算 `x @ Wᵀ + b`
    ///
    /// # 参数
    /// - `x`: 输入，形状 [batch_size, in_features]
    ///
    /// # 返回
    /// 输出，形状 [batch_size, out_features]；输入形状不符时返回`ShapeMismatch`
    pub fn forward(&self, x: &Tensor) -> Result<Tensor, ModelError> {
        let batch_size = match x.shape() {
            &[batch, features] if features == self.in_features => batch,
            other => {
                return Err(ModelError::shape_mismatch(
                    &[other.first().copied().unwrap_or(0), self.in_features],
                    other,
                    &format!("{} 的输入须为 [batch, {}]", self.name, self.in_features),
                ));
            }
        };
        let output = &x.mat_mul(&self.weight.transpose()) + &self.bias;
        debug_assert_eq!(output.shape(), &[batch_size, self.out_features]);
        Ok(output)
    }

    /// 获取输入特征维度
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// 获取输出特征维度
    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }
}

impl Module for Linear {
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor)) {
        f(&format!("{}.weight", self.name), &self.weight);
        f(&format!("{}.bias", self.name), &self.bias);
    }

    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor)) {
        f(&format!("{}.weight", self.name), &mut self.weight);
        f(&format!("{}.bias", self.name), &mut self.bias);
    }
}
