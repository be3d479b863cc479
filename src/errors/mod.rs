use std::path::PathBuf;
use thiserror::Error;

mod ops;
pub use self::ops::*;

/// 张量层面的误用。张量运算沿用“断言即失败”的约定：触发时以本错误的文本panic。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    #[error("数据长度{data_len}与形状{shape:?}所需的元素个数不一致")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("张量形状不兼容")]
    IncompatibleShape,
    #[error("维度{dim}超出范围（张量阶数为{rank}）")]
    DimOutOfRange { dim: usize, rank: usize },
    #[error("只能压缩长度为1的维度，维度{dim}的长度为{len}")]
    SqueezeNonUnitDim { dim: usize, len: usize },
}

/// 模型推理与检查点读写的错误
#[derive(Error, Debug)]
pub enum ModelError {
    /// 输入形状与模型配置不符（在任何计算开始前检出）
    #[error("形状不匹配（{message}）: 期望 {expected:?}, 实际 {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },

    /// 检查点的键或形状与目标结构不兼容（含剥离前缀之后）
    #[error(
        "检查点不兼容: 缺失的键 {missing:?}, 多余的键 {unexpected:?}, 形状不符的键 {shape_mismatched:?}"
    )]
    IncompatibleCheckpoint {
        missing: Vec<String>,
        unexpected: Vec<String>,
        shape_mismatched: Vec<String>,
    },

    /// 参数文件格式错误（如魔数不匹配、名称编码无效）
    #[error("参数文件格式错误: {0}")]
    InvalidFormat(String),

    #[error("不支持的参数文件版本: {0}")]
    UnsupportedVersion(u32),

    #[error("模型配置无效: {0}")]
    InvalidConfig(String),

    #[error("参数无效: {0}")]
    InvalidArgument(String),

    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("模型描述文件错误: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("图像导出错误: {0}")]
    Image(#[from] image::ImageError),
}

impl ModelError {
    pub(crate) fn shape_mismatch(expected: &[usize], got: &[usize], message: &str) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
            message: message.to_string(),
        }
    }
}
