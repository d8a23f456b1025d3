use std::sync::{Arc, Mutex};

use crate::host::{DataLoadError, DataStore, MapRenderer, UiRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCall {
    Init,
    Show,
    Hide,
}

/// Shared record of every capability invocation on a scripted map renderer,
/// readable after the renderer has been boxed away into the view switch.
#[derive(Debug, Clone, Default)]
pub struct MapCallLog(Arc<Mutex<Vec<MapCall>>>);

impl MapCallLog {
    pub fn calls(&self) -> Vec<MapCall> {
        self.0.lock().expect("map call log poisoned").clone()
    }

    fn record(&self, call: MapCall) {
        self.0.lock().expect("map call log poisoned").push(call);
    }
}

#[derive(Debug)]
pub struct ScriptedMapRenderer {
    runtime_available: bool,
    log: MapCallLog,
}

impl ScriptedMapRenderer {
    pub fn new(runtime_available: bool) -> (Self, MapCallLog) {
        let log = MapCallLog::default();
        (
            Self {
                runtime_available,
                log: log.clone(),
            },
            log,
        )
    }
}

impl MapRenderer for ScriptedMapRenderer {
    fn runtime_available(&self) -> bool {
        self.runtime_available
    }

    fn init(&mut self) {
        self.log.record(MapCall::Init);
    }

    fn show(&mut self) {
        self.log.record(MapCall::Show);
    }

    fn hide(&mut self) {
        self.log.record(MapCall::Hide);
    }
}

/// Data store resolving with a pre-scripted outcome.
#[derive(Debug)]
pub struct ScriptedDataStore {
    outcome: Result<(), DataLoadError>,
    pub load_calls: u32,
}

impl ScriptedDataStore {
    pub fn ready() -> Self {
        Self {
            outcome: Ok(()),
            load_calls: 0,
        }
    }

    pub fn failing(error: DataLoadError) -> Self {
        Self {
            outcome: Err(error),
            load_calls: 0,
        }
    }
}

impl DataStore for ScriptedDataStore {
    async fn load(&mut self) -> Result<(), DataLoadError> {
        self.load_calls += 1;
        self.outcome.clone()
    }
}

#[derive(Debug, Default)]
pub struct CountingUiRenderer {
    pub init_calls: u32,
}

impl UiRenderer for CountingUiRenderer {
    fn init(&mut self) {
        self.init_calls += 1;
    }
}
