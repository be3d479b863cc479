use crate::errors::ModelError;
use crate::tensor::Tensor;

#[test]
fn test_to_gray_image_scales_to_u8() {
    let tensor = Tensor::new(&[0.0, 0.5, 1.0, 1.2, -0.3, 0.2], &[1, 2, 3]);
    let image = tensor.to_gray_image().unwrap();
    assert_eq!(image.dimensions(), (3, 2));
    let pixels: Vec<u8> = image.pixels().map(|p| p.0[0]).collect();
    // 越界值截断到 [0, 255]
    assert_eq!(pixels, vec![0, 128, 255, 255, 0, 51]);
}

#[test]
fn test_to_gray_image_rejects_multi_channel() {
    let tensor = Tensor::zeros(&[3, 28, 28]);
    let result = tensor.to_gray_image();
    assert!(matches!(result, Err(ModelError::ShapeMismatch { .. })));
}

#[test]
fn test_save_gray_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("digit.png");
    Tensor::ones(&[28, 28]).save_gray_image(&path).unwrap();

    let loaded = image::open(&path).unwrap().to_luma8();
    assert_eq!(loaded.dimensions(), (28, 28));
    assert!(loaded.pixels().all(|p| p.0[0] == 255));
}
