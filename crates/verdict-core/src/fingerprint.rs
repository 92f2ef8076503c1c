use crate::config::ScoringConfig;
use crate::ending::AnalysisEngine;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFingerprint {
    pub hash: String,
}

impl ConfigFingerprint {
    /// Generates a deterministic hash over everything that shapes an
    /// analysis outcome: the engine identity, its ending rule set, and the
    /// fully-resolved scoring configuration.
    ///
    /// Two results with equal fingerprints were computed by the same scoring
    /// function, even when one of them ran under a dev-panel override.
    pub fn from_parts(engine: &AnalysisEngine, resolved: &ScoringConfig) -> Self {
        let mut hasher = Sha256::new();

        // 1. Engine identity
        hasher.update(engine.id.as_bytes());
        hasher.update(engine.version.as_bytes());

        // 2. Rule set (defines what can score)
        let endings_json = serde_json::to_string(&engine.endings).unwrap();
        hasher.update(endings_json.as_bytes());

        // 3. Resolved configuration (defines how it scores)
        let config_json = serde_json::to_string(resolved).unwrap();
        hasher.update(config_json.as_bytes());

        let result = hasher.finalize();
        Self {
            hash: hex::encode(result),
        }
    }
}
