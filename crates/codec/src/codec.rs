//! The live codec instance.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::CodecConfig;

/// A JSON codec whose configuration can be replaced while it is shared.
///
/// Reads are lock-free `Arc` loads; a commit swaps in a whole new
/// configuration, so readers never see a partial update.
#[derive(Debug, Default)]
pub struct JsonCodec {
    config: ArcSwap<CodecConfig>,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// The configuration in effect right now.
    pub fn config(&self) -> Arc<CodecConfig> {
        self.config.load_full()
    }

    /// Derive the next configuration from the current one and swap it in.
    ///
    /// `apply` may run more than once if another commit races this one.
    pub(crate) fn update(&self, apply: impl Fn(&CodecConfig) -> CodecConfig) {
        self.config.rcu(|current| Arc::new(apply(current)));
    }
}
