/*
 * @Date         : 2026-10-19
 * @Description  : Module trait 单元测试
 *
 * 测试 Module trait 的核心功能：
 * - state_dict() 导出参数快照
 * - load_state_dict() 严格加载（缺失/多余/形状不符均报错且不修改参数）
 * - 组合模型的参数收集
 * @LastEditTime : 2026-10-19
 */

use crate::assert_err;
use crate::errors::ModelError;
use crate::nn::{Linear, Module, StateDict};
use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 模拟一个简单的 MLP：fc1 -> fc2
struct Mlp {
    fc1: Linear,
    fc2: Linear,
}

impl Mlp {
    fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            fc1: Linear::new(6, 4, "fc1", &mut rng),
            fc2: Linear::new(4, 2, "fc2", &mut rng),
        }
    }
}

impl Module for Mlp {
    fn visit_params(&self, f: &mut dyn FnMut(&str, &Tensor)) {
        self.fc1.visit_params(f);
        self.fc2.visit_params(f);
    }

    fn visit_params_mut(&mut self, f: &mut dyn FnMut(&str, &mut Tensor)) {
        self.fc1.visit_params_mut(f);
        self.fc2.visit_params_mut(f);
    }
}

#[test]
fn test_composite_model_parameters() {
    let mlp = Mlp::new(0);
    assert_eq!(mlp.num_params(), 4);
    assert_eq!(mlp.num_elements(), 6 * 4 + 4 + 4 * 2 + 2);

    let state = mlp.state_dict();
    assert_eq!(state.get("fc1.weight").unwrap().shape(), &[4, 6]);
    assert_eq!(state.get("fc1.bias").unwrap().shape(), &[4]);
    assert_eq!(state.get("fc2.weight").unwrap().shape(), &[2, 4]);
    assert_eq!(state.get("fc2.bias").unwrap().shape(), &[2]);
}

#[test]
fn test_load_state_dict_copies_all_params() {
    let source = Mlp::new(1);
    let mut target = Mlp::new(2);
    assert_ne!(source.state_dict(), target.state_dict());

    target.load_state_dict(&source.state_dict()).unwrap();
    assert_eq!(source.state_dict(), target.state_dict());
}

#[test]
fn test_load_state_dict_missing_key() {
    let mut target = Mlp::new(2);
    let before = target.state_dict();

    let mut partial = StateDict::new();
    for (key, tensor) in &Mlp::new(1).state_dict() {
        if key != "fc2.bias" {
            partial.insert(key.clone(), tensor.clone());
        }
    }

    assert_err!(
        target.load_state_dict(&partial),
        ModelError::IncompatibleCheckpoint { missing, unexpected, shape_mismatched }
            if missing == &["fc2.bias"] && unexpected.is_empty() && shape_mismatched.is_empty()
    );
    // 校验失败时不修改任何参数
    assert_eq!(target.state_dict(), before);
}

#[test]
fn test_load_state_dict_unexpected_key() {
    let mut target = Mlp::new(2);
    let mut state = Mlp::new(1).state_dict();
    state.insert("fc3.weight", Tensor::zeros(&[1, 2]));

    assert_err!(
        target.load_state_dict(&state),
        ModelError::IncompatibleCheckpoint { missing, unexpected, .. }
            if missing.is_empty() && unexpected == &["fc3.weight"]
    );
}

#[test]
fn test_load_state_dict_shape_mismatch() {
    let mut target = Mlp::new(2);
    let before = target.state_dict();
    let mut state = Mlp::new(1).state_dict();
    state.insert("fc1.weight", Tensor::zeros(&[6, 4]));

    assert_err!(
        target.load_state_dict(&state),
        ModelError::IncompatibleCheckpoint { shape_mismatched, .. }
            if shape_mismatched.len() == 1 && shape_mismatched[0].starts_with("fc1.weight")
    );
    assert_eq!(target.state_dict(), before);
}
