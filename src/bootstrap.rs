use tracing::{error, info, warn};

use crate::banner::{BannerController, BannerScaffold};
use crate::catalog::InteractionCatalog;
use crate::config::ViewerSettings;
use crate::host::{DataStore, MapRenderer, UiRenderer};
use crate::view::{ViewScaffold, ViewSwitch};

pub const LOADING_STATUS: &str = "Loading organization data...";
pub const LOAD_FAILURE_STATUS: &str =
    "Could not load organization data. Retry later or contact an administrator.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusSeverity {
    #[default]
    Info,
    Error,
}

/// The page-level status element written by the bootstrap sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    message: String,
    severity: StatusSeverity,
}

impl StatusLine {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> StatusSeverity {
        self.severity
    }

    pub fn is_clear(&self) -> bool {
        self.message.is_empty()
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.severity = StatusSeverity::Info;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.severity = StatusSeverity::Error;
    }

    pub fn clear(&mut self) {
        self.message.clear();
        self.severity = StatusSeverity::Info;
    }
}

/// Markup the hosting page offers to the components initialized at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScaffold {
    pub view: ViewScaffold,
    pub banner: BannerScaffold,
}

impl PageScaffold {
    pub fn standard() -> Self {
        Self {
            view: ViewScaffold::standard(),
            banner: BannerScaffold::complete(),
        }
    }
}

/// Everything the bootstrap sequence hands back to the host surface.
pub struct OrgViewer {
    pub status: StatusLine,
    pub view: ViewSwitch,
    pub banner: BannerController,
    pub catalog: InteractionCatalog,
}

/// The document-ready sequence: loading status, awaited data load, collaborator
/// initialization, component initialization, status clear. Never fails; the
/// worst case is a tree-only viewer with a visible error status.
pub async fn boot<D, U>(
    settings: &ViewerSettings,
    scaffold: PageScaffold,
    data_store: &mut D,
    ui: &mut U,
    map_renderer: Option<Box<dyn MapRenderer>>,
) -> OrgViewer
where
    D: DataStore,
    U: UiRenderer,
{
    let mut status = StatusLine::default();
    status.set_info(LOADING_STATUS);
    info!(default_view = %settings.default_view, "loading organization data");

    if let Err(load_error) = data_store.load().await {
        error!(error = %load_error, "organization data load failed");
        status.set_error(LOAD_FAILURE_STATUS);
        // Nothing past the load runs; the page stays uninitialized.
        return OrgViewer {
            status,
            view: ViewSwitch::inert(),
            banner: BannerController::inert(),
            catalog: InteractionCatalog::with_default_roles(),
        };
    }

    ui.init();

    let map_for_view = select_map_renderer(settings, map_renderer);
    let view = ViewSwitch::initialize(scaffold.view, map_for_view, settings.default_view);
    let banner = BannerController::initialize(scaffold.banner, settings.known_issues_url.clone());

    status.clear();
    info!("viewer bootstrap complete");

    OrgViewer {
        status,
        view,
        banner,
        catalog: InteractionCatalog::with_default_roles(),
    }
}

fn select_map_renderer(
    settings: &ViewerSettings,
    map_renderer: Option<Box<dyn MapRenderer>>,
) -> Option<Box<dyn MapRenderer>> {
    let Some(mut renderer) = map_renderer else {
        info!("no map renderer supplied; tree view only");
        return None;
    };

    if !settings.map_enabled {
        info!("map view disabled by configuration");
        return None;
    }

    if !renderer.runtime_available() {
        warn!("map charting runtime unavailable; continuing with tree view only");
        return None;
    }

    renderer.init();
    Some(renderer)
}
