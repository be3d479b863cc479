use crate::tensor::Tensor;

impl Tensor {
    /// 对每个元素施加`f`，返回同形状的新张量
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// 修正线性单元：max(0, x)
    pub fn relu(&self) -> Tensor {
        self.map(|x| x.max(0.0))
    }

    /// 逻辑斯蒂sigmoid：1 / (1 + e^(-x))。
    /// 按符号分两支计算，避免|x|很大时`exp`溢出。
    pub fn sigmoid(&self) -> Tensor {
        self.map(|x| {
            if x >= 0.0 {
                1.0 / (1.0 + (-x).exp())
            } else {
                let e = x.exp();
                e / (1.0 + e)
            }
        })
    }

    pub fn exp(&self) -> Tensor {
        self.map(f32::exp)
    }
}
