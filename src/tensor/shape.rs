use super::Tensor;
use crate::errors::TensorError;
use ndarray::{Array, IxDyn};

impl Tensor {
    /// 按行优先顺序重排为新形状，元素总数必须一致，否则panic
    pub fn reshape(&self, shape: &[usize]) -> Self {
        let total_elements: usize = self.data.len();
        let new_total_elements: usize = shape.iter().product();
        assert!(
            total_elements == new_total_elements,
            "{}",
            TensorError::IncompatibleShape
        );
        let data = Array::from_shape_vec(IxDyn(shape), self.to_vec())
            .expect("元素总数已校验，重排不会失败");
        Self { data }
    }

    /// 在指定维度上增加一个长度为1的维度（不影响原张量）。
    ///
    /// ```ignore
    /// let image = Tensor::zeros(&[1, 28, 28]);
    /// assert_eq!(image.unsqueeze(0).shape(), &[1, 1, 28, 28]);
    /// ```
    pub fn unsqueeze(&self, dim: usize) -> Self {
        assert!(
            dim <= self.dimension(),
            "{}",
            TensorError::DimOutOfRange {
                dim,
                rank: self.dimension(),
            }
        );
        let mut new_shape = self.shape().to_vec();
        new_shape.insert(dim, 1);
        self.reshape(&new_shape)
    }

    /// 去掉指定的、长度为1的维度（不影响原张量）。
    /// 与“去掉所有长度为1的维度”不同，这里只动`dim`这一维，因此`[1, 1, 28, 28]`去掉第0维后仍保留通道维。
    pub fn squeeze_dim(&self, dim: usize) -> Self {
        assert!(
            dim < self.dimension(),
            "{}",
            TensorError::DimOutOfRange {
                dim,
                rank: self.dimension(),
            }
        );
        let len = self.shape()[dim];
        assert!(len == 1, "{}", TensorError::SqueezeNonUnitDim { dim, len });
        let mut new_shape = self.shape().to_vec();
        new_shape.remove(dim);
        self.reshape(&new_shape)
    }

    /// 将首维之后的所有维度展平：`[b, c, h, w]` -> `[b, c*h*w]`
    pub fn flatten_from_first(&self) -> Self {
        match self.shape().split_first() {
            Some((&batch, rest)) => self.reshape(&[batch, rest.iter().product()]),
            None => self.reshape(&[1, 1]),
        }
    }

    /// 2阶张量的转置，返回标准（行优先）布局的新张量
    pub fn transpose(&self) -> Self {
        if self.dimension() <= 1 {
            return self.clone();
        }
        let mut axes: Vec<usize> = (0..self.dimension()).collect();
        axes.swap(0, 1);
        let permuted = self.data.view().permuted_axes(axes);
        Self {
            data: permuted.as_standard_layout().into_owned(),
        }
    }

    /// 判断两个张量能否按NumPy规则广播：从右向左对齐，每一维相等或其一为1
    pub fn can_broadcast_with(&self, other: &Self) -> bool {
        self.shape()
            .iter()
            .rev()
            .zip(other.shape().iter().rev())
            .all(|(&a, &b)| a == b || a == 1 || b == 1)
    }
}
