/*
 * @Date         : 2026-10-19
 * @Description  : MNIST 潜空间插值集成测试
 *                 验证：VAE 检查点 -> 插值模型 -> 插值帧导出为灰度图
 * @LastEditTime : 2026-10-19
 */

use mnist_vae::interpolation::{InterpolationModel, mnist_interpolation_model};
use mnist_vae::nn::{Module, NoiseMode};
use mnist_vae::tensor::Tensor;
use mnist_vae::vae::{Device, Vae, VaeConfig};
use mnist_vae::{ModelError, assert_err};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 用两个“笔画”粗糙地模拟数字图像：竖线（1）与横线（一）
fn stroke_images() -> (Tensor, Tensor) {
    let mut vertical = vec![0.0; 28 * 28];
    let mut horizontal = vec![0.0; 28 * 28];
    for i in 4..24 {
        vertical[i * 28 + 14] = 1.0;
        horizontal[14 * 28 + i] = 1.0;
    }
    (
        Tensor::new(&vertical, &[1, 28, 28]),
        Tensor::new(&horizontal, &[1, 28, 28]),
    )
}

/// 插值全流程：
/// 1. 保存一个（随机初始化的）MNIST VAE 检查点
/// 2. 由检查点构建插值模型
/// 3. 生成插值序列并导出为 PNG
#[test]
fn test_mnist_interpolation_pipeline() -> Result<(), ModelError> {
    let dir = tempfile::tempdir()?;
    let vae_path = dir.path().join("vae_model.bin");

    let vae = Vae::new_seeded(&VaeConfig::mnist(), 2024)?;
    vae.state_dict().save(&vae_path)?;

    let mut model = mnist_interpolation_model(&vae_path, Device::Cpu)?;
    model.set_noise_mode(NoiseMode::Zero);

    let (img1, img2) = stroke_images();
    let frames = model.interpolate_steps(&img1, &img2, 7)?;
    assert_eq!(frames.len(), 7);

    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.shape(), &[1, 28, 28]);
        assert!(frame.all_within_open(0.0, 1.0));

        let path = dir.path().join(format!("frame_{i}.png"));
        frame.save_gray_image(&path)?;
        let img = image::open(&path)?.to_luma8();
        assert_eq!(img.dimensions(), (28, 28));
    }

    assert_ne!(frames[0], frames[6]);
    Ok(())
}

/// 随机噪声下，同样的输入两次插值结果不同；固定种子则相同
#[test]
fn test_noise_modes() -> Result<(), ModelError> {
    let mut rng = StdRng::seed_from_u64(1);
    let vae = Vae::with_rng(&VaeConfig::mnist(), &mut rng)?;
    let (img1, img2) = stroke_images();

    let mut stochastic = InterpolationModel::new(vae.clone());
    let a = stochastic.forward(&img1, &img2, 0.5)?;
    let b = stochastic.forward(&img1, &img2, 0.5)?;
    assert_ne!(a, b);

    let mut seeded1 = InterpolationModel::with_noise_mode(vae.clone(), NoiseMode::Seeded(3));
    let mut seeded2 = InterpolationModel::with_noise_mode(vae, NoiseMode::Seeded(3));
    assert_eq!(
        seeded1.forward(&img1, &img2, 0.5)?,
        seeded2.forward(&img1, &img2, 0.5)?
    );
    Ok(())
}

#[test]
fn test_invalid_inputs_are_rejected() -> Result<(), ModelError> {
    let mut model = InterpolationModel::new(Vae::new_seeded(&VaeConfig::mnist(), 0)?);
    let (img1, _) = stroke_images();

    assert_err!(
        model.forward(&img1, &Tensor::zeros(&[3, 28, 28]), 0.5),
        ModelError::ShapeMismatch { message, .. } if message.starts_with("img2")
    );
    assert_err!(
        model.forward(&Tensor::zeros(&[1, 32, 32]), &img1, 0.5),
        ModelError::ShapeMismatch { message, .. } if message.starts_with("img1")
    );
    assert_err!(
        model.interpolate_steps(&img1, &img1, 0),
        ModelError::InvalidArgument(_)
    );
    Ok(())
}
