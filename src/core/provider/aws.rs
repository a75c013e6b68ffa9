//! AWS KMS wrapped keyring.
//!
//! Enable with `--features aws`. The keyring layout is the same as the plain
//! keyring, but each `key` is the base64 ciphertext blob of the data key as
//! returned by KMS `Encrypt`. Every fetch unwraps it with KMS `Decrypt`.
//!
//! Credentials come from the environment (AWS_ACCESS_KEY_ID, etc.) or the
//! default credential provider chain.

use tracing::{debug, trace};
use zeroize::Zeroize;

use super::{KeyProvider, Keyring};
use crate::core::codec;
use crate::core::keys::{Deployment, KeyMaterial};
use crate::error::{ProviderError, Result};

/// Keyring whose data keys are wrapped by AWS KMS.
#[derive(Debug, Clone)]
pub struct KmsKeyring {
    keyring: Keyring,
}

impl KmsKeyring {
    pub fn new(keyring: Keyring) -> Self {
        Self { keyring }
    }

    fn unwrap_key(&self, wrapped: &str) -> Result<Vec<u8>> {
        let blob = codec::decode(wrapped)
            .map_err(|e| ProviderError::Malformed(format!("wrapped key: {}", e)))?;

        // Create a tokio runtime for the async AWS SDK
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProviderError::Kms(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_kms::Client::new(&config);

            // KMS stores the key ID in the ciphertext blob, so we don't need to specify it
            let result = client
                .decrypt()
                .ciphertext_blob(aws_sdk_kms::primitives::Blob::new(blob))
                .send()
                .await
                .map_err(|e| ProviderError::Kms(format!("decrypt failed: {}", e)))?;

            let plaintext = result
                .plaintext()
                .ok_or_else(|| ProviderError::Kms("no plaintext returned".into()))?;

            trace!(key_len = plaintext.as_ref().len(), "unwrapped data key");
            Ok(plaintext.as_ref().to_vec())
        })
    }
}

impl KeyProvider for KmsKeyring {
    fn fetch(&self, deployment: &Deployment) -> Result<KeyMaterial> {
        debug!(deployment = %deployment, "fetching KMS-wrapped key");
        let entry = self.keyring.entry(deployment)?;

        let mut key = self.unwrap_key(entry.key())?;
        let material = KeyMaterial::new(codec::encode(&key), entry.nonce());
        key.zeroize();
        Ok(material)
    }

    fn name(&self) -> &'static str {
        "aws-kms"
    }
}
