use crate::tensor::Tensor;
use ndarray::{Array, IxDyn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_new_matrix() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(
        tensor.data,
        Array::from_shape_vec(IxDyn(&[2, 3]), vec![1., 2., 3., 4., 5., 6.]).unwrap()
    );
    assert_eq!(tensor.dimension(), 2);
    assert_eq!(tensor.size(), 6);
}

#[test]
fn test_new_image_batch() {
    let tensor = Tensor::zeros(&[2, 1, 28, 28]);
    assert_eq!(tensor.shape(), &[2, 1, 28, 28]);
    assert_eq!(tensor.size(), 2 * 784);
    assert!(tensor.to_vec().iter().all(|&x| x == 0.0));

    let tensor = Tensor::ones(&[1, 28, 28]);
    assert!(tensor.to_vec().iter().all(|&x| x == 1.0));
}

#[test]
#[should_panic(expected = "数据长度2与形状[1, 1, 1]所需的元素个数不一致")]
fn test_new_invalid_len() {
    let _ = Tensor::new(&[1., 2.], &[1, 1, 1]);
}

#[test]
fn test_normal_seeded_is_reproducible() {
    let a = Tensor::normal_seeded(0.0, 1.0, &[4, 16], 42);
    let b = Tensor::normal_seeded(0.0, 1.0, &[4, 16], 42);
    let c = Tensor::normal_seeded(0.0, 1.0, &[4, 16], 43);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.to_vec().iter().all(|x| x.is_finite()));
}

#[test]
fn test_normal_statistics() {
    let mut rng = StdRng::seed_from_u64(7);
    let tensor = Tensor::normal_with_rng(2.0, 0.5, &[100, 100], &mut rng);
    let data = tensor.to_vec();
    let n = data.len() as f32;
    let mean = data.iter().sum::<f32>() / n;
    let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n;
    assert!((mean - 2.0).abs() < 0.02, "均值偏差过大: {mean}");
    assert!((var.sqrt() - 0.5).abs() < 0.02, "标准差偏差过大: {}", var.sqrt());
}

#[test]
fn test_uniform_range() {
    let mut rng = StdRng::seed_from_u64(0);
    let tensor = Tensor::uniform_with_rng(-0.25, 0.25, &[50, 20], &mut rng);
    assert_eq!(tensor.shape(), &[50, 20]);
    assert!(tensor.to_vec().iter().all(|&x| (-0.25..0.25).contains(&x)));
}
