use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, anyhow};
use tracing::warn;

use crate::host::MapRenderer;

/// Rendered into the map panel whenever map mode is requested without a
/// working map renderer.
pub const MAP_UNAVAILABLE_NOTICE: &str =
    "Map view is unavailable in this session. The tree view shows the full organization.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Tree,
    Map,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Map => "map",
        }
    }

    /// Collapses any tag other than the literal `map` to the tree view.
    /// Unknown modes are a defensive default, not an error.
    pub fn normalize(tag: &str) -> Self {
        if tag == "map" { Self::Map } else { Self::Tree }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(Self::Tree),
            "map" => Ok(Self::Map),
            other => Err(anyhow!("invalid view mode `{other}`; expected `tree` or `map`")),
        }
    }
}

/// One of the two top-level view containers. The notice render counter is the
/// headless stand-in for writes into the container's markup, so repeated
/// renders stay observable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Panel {
    visible: bool,
    notice: Option<String>,
    notice_renders: u32,
}

impl Panel {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn notice_renders(&self) -> u32 {
        self.notice_renders
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render_notice(&mut self, text: &str) {
        self.notice = Some(text.to_owned());
        self.notice_renders += 1;
    }

    fn clear_notice(&mut self) {
        self.notice = None;
    }
}

/// A toggle control bound to one view mode. `active` mirrors the visual
/// state, `pressed` the accessibility flag; both must equal
/// `(target == current mode)` after every mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButton {
    target: ViewMode,
    active: bool,
    pressed: bool,
}

impl ToggleButton {
    pub fn new(target: ViewMode) -> Self {
        Self {
            target,
            active: false,
            pressed: false,
        }
    }

    pub fn target(&self) -> ViewMode {
        self.target
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    fn sync(&mut self, mode: ViewMode) {
        let matches = self.target == mode;
        self.active = matches;
        self.pressed = matches;
    }
}

/// What the hosting page offers the view switch: which required containers
/// exist and the target modes of the toggle controls found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewScaffold {
    pub tree_panel: bool,
    pub map_panel: bool,
    pub button_targets: Vec<ViewMode>,
}

impl ViewScaffold {
    pub fn standard() -> Self {
        Self {
            tree_panel: true,
            map_panel: true,
            button_targets: vec![ViewMode::Tree, ViewMode::Map],
        }
    }

    fn is_complete(&self) -> bool {
        self.tree_panel && self.map_panel && !self.button_targets.is_empty()
    }
}

/// The tree/map finite-state toggle. An instance built from an incomplete
/// scaffold is inert: every operation is a no-op and no partial binding
/// survives.
pub struct ViewSwitch {
    inner: Option<ViewState>,
}

struct ViewState {
    mode: ViewMode,
    tree_panel: Panel,
    map_panel: Panel,
    buttons: Vec<ToggleButton>,
    map_renderer: Option<Box<dyn MapRenderer>>,
}

impl ViewSwitch {
    pub fn inert() -> Self {
        Self { inner: None }
    }

    pub fn initialize(
        scaffold: ViewScaffold,
        map_renderer: Option<Box<dyn MapRenderer>>,
        default_mode: ViewMode,
    ) -> Self {
        if !scaffold.is_complete() {
            warn!(
                tree_panel = scaffold.tree_panel,
                map_panel = scaffold.map_panel,
                button_count = scaffold.button_targets.len(),
                "view scaffold is incomplete; view switch disabled"
            );
            return Self::inert();
        }

        let mut switch = Self {
            inner: Some(ViewState {
                mode: default_mode,
                tree_panel: Panel::default(),
                map_panel: Panel::default(),
                buttons: scaffold
                    .button_targets
                    .into_iter()
                    .map(ToggleButton::new)
                    .collect(),
                map_renderer,
            }),
        };
        // Establish a consistent initial visual state.
        switch.set_view(default_mode.as_str());
        switch
    }

    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    pub fn mode(&self) -> Option<ViewMode> {
        self.inner.as_ref().map(|state| state.mode)
    }

    pub fn tree_panel(&self) -> Option<&Panel> {
        self.inner.as_ref().map(|state| &state.tree_panel)
    }

    pub fn map_panel(&self) -> Option<&Panel> {
        self.inner.as_ref().map(|state| &state.map_panel)
    }

    pub fn buttons(&self) -> &[ToggleButton] {
        self.inner
            .as_ref()
            .map(|state| state.buttons.as_slice())
            .unwrap_or_default()
    }

    /// Applies the full visual sync for the normalized target mode. Invoking
    /// this with the already-active mode re-applies every side effect,
    /// including the fallback notice render; the skip for repeated clicks
    /// lives in `handle_toggle_click`, not here.
    pub fn set_view(&mut self, tag: &str) {
        let Some(state) = self.inner.as_mut() else {
            return;
        };

        let mode = ViewMode::normalize(tag);
        state.mode = mode;

        for button in &mut state.buttons {
            button.sync(mode);
        }

        match mode {
            ViewMode::Map => {
                state.tree_panel.set_visible(false);
                state.map_panel.set_visible(true);
                match state.map_renderer.as_mut() {
                    Some(renderer) => {
                        state.map_panel.clear_notice();
                        renderer.show();
                    }
                    None => state.map_panel.render_notice(MAP_UNAVAILABLE_NOTICE),
                }
            }
            ViewMode::Tree => {
                state.tree_panel.set_visible(true);
                state.map_panel.set_visible(false);
                if let Some(renderer) = state.map_renderer.as_mut() {
                    renderer.hide();
                }
            }
        }
    }

    /// Click handler for the toggle control at `button_index`. Clicks on the
    /// already-active mode are short-circuited before `set_view` runs.
    pub fn handle_toggle_click(&mut self, button_index: usize) {
        let Some(state) = self.inner.as_ref() else {
            return;
        };
        let Some(target) = state.buttons.get(button_index).map(ToggleButton::target) else {
            return;
        };
        if target == state.mode {
            return;
        }

        self.set_view(target.as_str());
    }
}
