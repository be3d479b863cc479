/*
 * @Date         : 2026-10-19
 * @Description  : Module trait 定义
 * @LastEditTime : 2026-10-19
 */

use super::StateDict;
use crate::errors::ModelError;
use crate::tensor::Tensor;

/// 模块 trait
///
/// # 设计原则
/// - `forward()` **不是** trait 方法（签名各异）
/// - `new()` **不是** trait 方法（参数各异）
/// - 参数遍历与参数字典签名一致，放入 trait；严格加载由默认方法统一完成
///
/// 参数键采用“层名.参数名”的扁平命名，例如`enc_fc1.weight`；
/// 组合模块把子模块的键原样并入，或加上命名空间前缀（如`vae.enc_fc1.weight`）。
pub trait Module {
    /// 按键名依次访问每个参数（只读）
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor));

    /// 按键名依次访问每个参数（可写），供加载参数时覆盖
    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor));

    /// 导出全部参数的快照
    fn state_dict(&self) -> StateDict {
        let mut state = StateDict::new();
        self.visit_params(&mut |name, tensor| {
            state.insert(name, tensor.clone());
        });
        state
    }

    /// 严格加载参数：键集合与每个键的形状必须与本模块完全一致。
    /// 校验不通过时返回`IncompatibleCheckpoint`，且不修改任何参数。
    fn load_state_dict(&mut self, state: &StateDict) -> Result<(), ModelError> {
        state.check_compatible(&self.state_dict())?;
        self.visit_params_mut(&mut |name, param| {
            if let Some(tensor) = state.get(name) {
                *param = tensor.clone();
            }
        });
        Ok(())
    }

    /// 参数张量的个数
    fn num_params(&self) -> usize {
        let mut count = 0;
        self.visit_params(&mut |_, _| count += 1);
        count
    }

    /// 全部参数的标量元素总数
    fn num_elements(&self) -> usize {
        let mut count = 0;
        self.visit_params(&mut |_, tensor| count += tensor.size());
        count
    }
}
