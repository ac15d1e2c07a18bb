use metrics_exporter_prometheus::PrometheusHandle;
use plant_diag::diagnosis::{DiagnosisSessionRecord, SessionSink, SinkError};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local sink retaining recorded sessions. Stands in for a durable
/// store during demos; the service treats it as best-effort either way.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionSink {
    sessions: Arc<Mutex<Vec<DiagnosisSessionRecord>>>,
}

impl SessionSink for InMemorySessionSink {
    fn record(&self, session: DiagnosisSessionRecord) -> Result<(), SinkError> {
        let mut guard = self.sessions.lock().expect("session sink mutex poisoned");
        guard.push(session);
        Ok(())
    }
}

impl InMemorySessionSink {
    pub(crate) fn sessions(&self) -> Vec<DiagnosisSessionRecord> {
        self.sessions
            .lock()
            .expect("session sink mutex poisoned")
            .clone()
    }
}

pub(crate) fn parse_confidence(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("confidence must be within [0, 1], got {value}"))
    }
}
