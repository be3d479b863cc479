use crate::assert_err;
use crate::errors::ModelError;
use crate::interpolation::{
    VAE_PREFIX, load_interpolation_model, mnist_interpolation_model, save_interpolation_model,
};
use crate::nn::{Module, StateDict};
use crate::tensor::Tensor;
use crate::vae::{Device, Vae, VaeConfig};
use std::path::Path;

fn write_mnist_vae(path: &Path, seed: u64) -> Vae {
    let vae = Vae::new_seeded(&VaeConfig::mnist(), seed).unwrap();
    vae.state_dict().save(path).unwrap();
    vae
}

#[test]
fn test_plain_vae_checkpoint_loads() {
    let dir = tempfile::tempdir().unwrap();
    let vae_path = dir.path().join("vae_model.bin");
    let vae = write_mnist_vae(&vae_path, 1);

    let model = mnist_interpolation_model(&vae_path, Device::Cpu).unwrap();
    assert_eq!(model.vae().state_dict(), vae.state_dict());
}

#[test]
fn test_namespaced_checkpoint_loads_after_stripping() {
    let dir = tempfile::tempdir().unwrap();
    let vae_path = dir.path().join("composed.bin");
    let vae = Vae::new_seeded(&VaeConfig::mnist(), 2).unwrap();
    vae.state_dict().with_prefix(VAE_PREFIX).save(&vae_path).unwrap();

    let model = mnist_interpolation_model(&vae_path, Device::Cpu).unwrap();
    assert_eq!(model.vae().state_dict(), vae.state_dict());
}

#[test]
fn test_incompatible_checkpoint_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let vae_path = dir.path().join("bad.bin");
    let mut state = Vae::new_seeded(&VaeConfig::mnist(), 3).unwrap().state_dict();
    state.insert("fc_mu.bias", Tensor::zeros(&[10]));
    state.insert("vae.extra.weight", Tensor::zeros(&[1]));
    state.save(&vae_path).unwrap();

    assert_err!(
        mnist_interpolation_model(&vae_path, Device::Cpu),
        ModelError::IncompatibleCheckpoint { missing, unexpected, shape_mismatched }
            if missing.is_empty()
                && unexpected == &["extra.weight"]
                && shape_mismatched.len() == 1
    );
}

#[test]
fn test_missing_vae_checkpoint() {
    let dir = tempfile::tempdir().unwrap();
    assert_err!(
        mnist_interpolation_model(dir.path().join("vae_model.bin"), Device::Cpu),
        ModelError::FileNotFound(_)
    );
}

#[test]
fn test_save_then_load_interpolation_model() {
    let dir = tempfile::tempdir().unwrap();
    let vae_path = dir.path().join("vae_model.bin");
    let interp_path = dir.path().join("interpolation_model.bin");
    let vae = write_mnist_vae(&vae_path, 4);

    save_interpolation_model(&vae_path, &interp_path).unwrap();
    let saved = StateDict::load(&interp_path).unwrap();
    assert!(saved.keys().all(|k| k.starts_with("vae.")));
    assert_eq!(saved.strip_prefix(VAE_PREFIX), vae.state_dict());

    let model = load_interpolation_model(&vae_path, &interp_path).unwrap();
    assert_eq!(model.vae().state_dict(), vae.state_dict());
}

#[test]
fn test_interpolation_checkpoint_overrides_vae_weights() {
    let dir = tempfile::tempdir().unwrap();
    let vae_path = dir.path().join("vae_model.bin");
    let interp_path = dir.path().join("interpolation_model.bin");
    write_mnist_vae(&vae_path, 5);
    let other = Vae::new_seeded(&VaeConfig::mnist(), 6).unwrap();
    other.state_dict().with_prefix(VAE_PREFIX).save(&interp_path).unwrap();

    let model = load_interpolation_model(&vae_path, &interp_path).unwrap();
    assert_eq!(model.vae().state_dict(), other.state_dict());
}
