use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Why the org data collaborator failed to deliver a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataLoadError {
    #[error("organization data endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("organization data malformed: {0}")]
    Malformed(String),
}

/// Org data collaborator, required at bootstrap. `load` resolves once the
/// data is ready; the bootstrap sequence awaits it exactly once.
pub trait DataStore {
    async fn load(&mut self) -> Result<(), DataLoadError>;
}

/// Tree renderer collaborator, required at bootstrap.
pub trait UiRenderer {
    fn init(&mut self);
}

/// Map renderer collaborator. Fully optional: the bootstrap sequence probes
/// `runtime_available` before calling `init`, and a switch without a renderer
/// substitutes a static notice for the map view.
pub trait MapRenderer {
    fn runtime_available(&self) -> bool;
    fn init(&mut self);
    fn show(&mut self);
    fn hide(&mut self);
}

const BUNDLED_ORG_JSON: &str = r#"{
    "organization": "Acme Holdings",
    "generated": "2026-08-01",
    "units": [
        {"name": "Operations", "head": "J. Moreno"},
        {"name": "Engineering", "head": "P. Okafor"},
        {"name": "Finance", "head": "L. Tanaka"}
    ]
}"#;

/// Data store backed by the JSON document bundled into the binary, used by
/// the demo and shell commands. The payload stays opaque to the viewer core;
/// only well-formedness is checked here.
#[derive(Debug, Default)]
pub struct BundledOrgDataStore {
    payload: Option<Value>,
}

impl BundledOrgDataStore {
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

impl DataStore for BundledOrgDataStore {
    async fn load(&mut self) -> Result<(), DataLoadError> {
        let value = serde_json::from_str::<Value>(BUNDLED_ORG_JSON)
            .map_err(|error| DataLoadError::Malformed(error.to_string()))?;
        if !value.is_object() {
            return Err(DataLoadError::Malformed(
                "expected a top-level JSON object".to_owned(),
            ));
        }

        debug!("bundled organization payload loaded");
        self.payload = Some(value);
        Ok(())
    }
}

/// Tree renderer that only records that rendering happened; the real markup
/// lives with the host surface.
#[derive(Debug, Default)]
pub struct StaticTreeRenderer {
    rendered: bool,
}

impl StaticTreeRenderer {
    pub fn rendered(&self) -> bool {
        self.rendered
    }
}

impl UiRenderer for StaticTreeRenderer {
    fn init(&mut self) {
        self.rendered = true;
    }
}

/// Map renderer stand-in with a configurable charting runtime, used by the
/// demo and shell commands.
#[derive(Debug)]
pub struct NoopMapRenderer {
    runtime_available: bool,
    visible: bool,
}

impl NoopMapRenderer {
    pub fn new(runtime_available: bool) -> Self {
        Self {
            runtime_available,
            visible: false,
        }
    }
}

impl MapRenderer for NoopMapRenderer {
    fn runtime_available(&self) -> bool {
        self.runtime_available
    }

    fn init(&mut self) {
        debug!("map renderer initialized");
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{BundledOrgDataStore, DataLoadError, DataStore, StaticTreeRenderer, UiRenderer};

    #[tokio::test]
    async fn bundled_store_loads_a_json_object_payload() {
        let mut store = BundledOrgDataStore::default();
        assert!(store.payload().is_none());

        store.load().await.expect("bundled payload should parse");
        let payload = store.payload().expect("payload should be retained");
        assert!(payload.is_object());
        assert_eq!(
            payload.get("organization").and_then(|value| value.as_str()),
            Some("Acme Holdings")
        );
    }

    #[test]
    fn data_load_errors_carry_their_diagnostic() {
        let unreachable = DataLoadError::Unreachable("dns failure".to_owned());
        assert_eq!(
            unreachable.to_string(),
            "organization data endpoint unreachable: dns failure"
        );

        let malformed = DataLoadError::Malformed("truncated document".to_owned());
        assert!(malformed.to_string().contains("truncated document"));
    }

    #[test]
    fn static_tree_renderer_marks_itself_rendered() {
        let mut renderer = StaticTreeRenderer::default();
        assert!(!renderer.rendered());
        renderer.init();
        assert!(renderer.rendered());
    }
}
