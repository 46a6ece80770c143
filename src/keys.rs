//! Groth16 key lifecycle: load-or-setup with atomic persistence.
//!
//! Keys are produced by one trusted-setup invocation and are immutable
//! afterwards; a fresh setup yields keys incompatible with every proof made
//! under the old pair. Loading policy therefore belongs to the caller: the
//! prover may set up on demand, while a strict verifier refuses to mint a
//! verifying key that could never match an existing proof.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ark_bn254::Bn254;
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::SNARK;
use once_cell::sync::OnceCell;
use tracing::info;

use crate::circuit::SdvCircuit;
use crate::errors::{PtxError, PtxResult};

/// File name of the persisted proving key.
pub const PROVING_KEY_FILE: &str = "native.pk";
/// File name of the persisted verifying key.
pub const VERIFYING_KEY_FILE: &str = "native.vk";

/// Handle over a directory holding the Groth16 key pair.
///
/// The verifying key is read-mostly shared state: it is loaded at most once
/// per store and handed out behind an `Arc`. Callers needing isolation (tests,
/// multi-tenant verifiers) construct their own store instead of relying on a
/// process-global path.
pub struct KeyStore {
    dir: PathBuf,
    proving_key: OnceCell<Arc<ProvingKey<Bn254>>>,
    verifying_key: OnceCell<Arc<VerifyingKey<Bn254>>>,
}

impl KeyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            proving_key: OnceCell::new(),
            verifying_key: OnceCell::new(),
        }
    }

    /// Store rooted at the working directory, matching the CLI default.
    pub fn in_working_dir() -> Self {
        Self::new(".")
    }

    fn proving_key_path(&self) -> PathBuf {
        self.dir.join(PROVING_KEY_FILE)
    }

    fn verifying_key_path(&self) -> PathBuf {
        self.dir.join(VERIFYING_KEY_FILE)
    }

    /// Loads the proving key, running and persisting a fresh setup when no
    /// key material exists yet.
    pub fn proving_key(&self) -> PtxResult<Arc<ProvingKey<Bn254>>> {
        if let Some(pk) = self.proving_key.get() {
            return Ok(Arc::clone(pk));
        }
        self.ensure_setup()?;
        let pk = self
            .proving_key
            .get_or_try_init(|| read_proving_key(&self.proving_key_path()).map(Arc::new))?;
        Ok(Arc::clone(pk))
    }

    /// Loads the verifying key, running setup when no key material exists.
    pub fn verifying_key(&self) -> PtxResult<Arc<VerifyingKey<Bn254>>> {
        if let Some(vk) = self.verifying_key.get() {
            return Ok(Arc::clone(vk));
        }
        self.ensure_setup()?;
        let vk = self
            .verifying_key
            .get_or_try_init(|| read_verifying_key(&self.verifying_key_path()).map(Arc::new))?;
        Ok(Arc::clone(vk))
    }

    /// Loads the verifying key without ever running setup. A missing file is
    /// [`PtxError::KeyMaterialMissing`]; regenerating here would silently
    /// orphan every previously issued proof.
    pub fn verifying_key_strict(&self) -> PtxResult<Arc<VerifyingKey<Bn254>>> {
        let path = self.verifying_key_path();
        if !path.exists() {
            return Err(PtxError::KeyMaterialMissing(path));
        }
        let vk = self
            .verifying_key
            .get_or_try_init(|| read_verifying_key(&path).map(Arc::new))?;
        Ok(Arc::clone(vk))
    }

    /// Runs Groth16 setup over the compiled SDV circuit if neither artifact
    /// exists. Both files are written to temporaries and renamed into place so
    /// a crash never leaves a torn key pair.
    fn ensure_setup(&self) -> PtxResult<()> {
        let pk_path = self.proving_key_path();
        let vk_path = self.verifying_key_path();
        match (pk_path.exists(), vk_path.exists()) {
            (true, true) => return Ok(()),
            (false, false) => {}
            _ => {
                return Err(PtxError::SetupFailed(format!(
                    "partial key material in {}: refusing to overwrite",
                    self.dir.display()
                )))
            }
        }

        info!(dir = %self.dir.display(), "running Groth16 setup for the SDV circuit");
        let mut rng = rand::thread_rng();
        let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(SdvCircuit::default(), &mut rng)
            .map_err(|err| PtxError::SetupFailed(err.to_string()))?;

        persist(&pk, &pk_path)?;
        persist(&vk, &vk_path)?;
        Ok(())
    }
}

fn persist<T: CanonicalSerialize>(value: &T, path: &Path) -> PtxResult<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    {
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        value
            .serialize_uncompressed(&mut writer)
            .map_err(|err| PtxError::SetupFailed(format!("serialize {}: {err}", path.display())))?;
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn read_proving_key(path: &Path) -> PtxResult<ProvingKey<Bn254>> {
    let reader = BufReader::new(File::open(path)?);
    // Locally produced and trusted; skip subgroup validation for load speed.
    ProvingKey::deserialize_uncompressed_unchecked(reader)
        .map_err(|err| PtxError::SetupFailed(format!("decode {}: {err}", path.display())))
}

fn read_verifying_key(path: &Path) -> PtxResult<VerifyingKey<Bn254>> {
    let reader = BufReader::new(File::open(path)?);
    VerifyingKey::deserialize_uncompressed(reader)
        .map_err(|err| PtxError::SetupFailed(format!("decode {}: {err}", path.display())))
}
