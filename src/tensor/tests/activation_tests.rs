use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

#[test]
fn test_relu() {
    let tensor = Tensor::new(&[-2.0, -0.0, 0.0, 0.5, 3.0], &[5]);
    assert_eq!(tensor.relu(), Tensor::new(&[0.0, 0.0, 0.0, 0.5, 3.0], &[5]));
}

#[test]
fn test_sigmoid_values() {
    let tensor = Tensor::new(&[-1.0, 0.0, 1.0, 2.0], &[1, 4]);
    let expected = Tensor::new(&[0.26894142, 0.5, 0.73105858, 0.88079708], &[1, 4]);
    assert_abs_diff_eq!(tensor.sigmoid(), expected, epsilon = 1e-6);
}

#[test]
fn test_sigmoid_is_stable_for_large_inputs() {
    let tensor = Tensor::new(&[-1000.0, -80.0, 80.0, 1000.0], &[4]);
    let result = tensor.sigmoid().to_vec();
    assert!(result.iter().all(|x| x.is_finite()));
    assert!(result[0] >= 0.0 && result[0] < 1e-30);
    assert_eq!(result[3], 1.0);
}

#[test]
fn test_exp_half_log_var_is_std() {
    // std = exp(0.5 · log(σ²)) = σ
    let sigma = [0.5_f32, 1.0, 2.0];
    let log_var = Tensor::new(&sigma.map(|s| (s * s).ln()), &[1, 3]);
    let std = (&log_var * 0.5).exp();
    assert_abs_diff_eq!(std, Tensor::new(&sigma, &[1, 3]), epsilon = 1e-6);
}
