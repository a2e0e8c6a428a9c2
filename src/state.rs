// src/state.rs

use crate::classifier::PipelineKind;
use crate::config::TextguardConfig;
use crate::store::RecordStore;

/// Per-kind classifier command lines plus the shared invocation timeout.
#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    pub url_cmd: String,
    pub sms_cmd: String,
    pub timeout_secs: u64,
}

impl ClassifierSettings {
    pub fn command_for(&self, kind: PipelineKind) -> &str {
        match kind {
            PipelineKind::Url => &self.url_cmd,
            PipelineKind::Sms => &self.sms_cmd,
        }
    }
}

/// Shared application state, constructed once in `main` and injected into the
/// router. The store handle is the only shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub classifier: ClassifierSettings,
    pub history_limit: i64,
}

impl AppState {
    pub fn new(store: RecordStore, config: &TextguardConfig) -> Self {
        Self {
            store,
            classifier: ClassifierSettings {
                url_cmd: config.url_classifier_cmd.clone(),
                sms_cmd: config.sms_classifier_cmd.clone(),
                timeout_secs: config.classifier_timeout_secs,
            },
            history_limit: config.history_limit,
        }
    }
}
