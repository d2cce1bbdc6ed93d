use async_trait::async_trait;
use ddex_rust::Signer;
use std::sync::{Arc, Mutex};

/// Deterministic signer which remembers every message it signed.
#[derive(Clone, Default)]
pub struct RecordingSigner {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSigner {
    pub fn signature_for(message: &str) -> String {
        format!("0xsigned({})", message)
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Signer for RecordingSigner {
    async fn sign(&self, message: &str) -> anyhow::Result<String> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(Self::signature_for(message))
    }
}

/// Signer which always fails, like a locked wallet.
pub struct FailingSigner;

#[async_trait]
impl Signer for FailingSigner {
    async fn sign(&self, _message: &str) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("wallet is locked"))
    }
}

/// Signer whose output ends with a newline, like an unstripped wallet command.
pub struct TrailingNewlineSigner;

#[async_trait]
impl Signer for TrailingNewlineSigner {
    async fn sign(&self, message: &str) -> anyhow::Result<String> {
        Ok(format!("{}\n", RecordingSigner::signature_for(message)))
    }
}
