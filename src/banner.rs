use tracing::{debug, warn};

const KNOWN_ISSUES_LINK_TEXT: &str = "See known issues";
const BANNER_TOP_PADDING_PX: u32 = 56;

/// Messages an operator may surface manually after incidents. Current
/// operational policy shows none of them automatically at startup.
const STARTUP_NOTICE_CANDIDATES: [&str; 2] = [
    "Scheduled maintenance this weekend may delay organization data refreshes.",
    "Some departments are still migrating to the new reporting structure.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Which of the banner's required markup pieces the hosting page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BannerScaffold {
    pub container: bool,
    pub message_slot: bool,
    pub close_control: bool,
}

impl BannerScaffold {
    pub fn complete() -> Self {
        Self {
            container: true,
            message_slot: true,
            close_control: true,
        }
    }

    fn is_complete(&self) -> bool {
        self.container && self.message_slot && self.close_control
    }
}

/// Dismissible notice strip. Owns the visibility flag, the message payload,
/// and the top-padding layout side-effect reserved on the host page body
/// while visible. Built from an incomplete scaffold, it is inert and every
/// operation is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerController {
    inner: Option<BannerState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BannerState {
    visibility: BannerVisibility,
    message_html: String,
    reserved_top_padding_px: Option<u32>,
    known_issues_url: String,
}

impl BannerController {
    pub fn inert() -> Self {
        Self { inner: None }
    }

    pub fn initialize(scaffold: BannerScaffold, known_issues_url: impl Into<String>) -> Self {
        if !scaffold.is_complete() {
            warn!(
                container = scaffold.container,
                message_slot = scaffold.message_slot,
                close_control = scaffold.close_control,
                "banner scaffold is incomplete; banner disabled"
            );
            return Self::inert();
        }

        // The candidate list stays available for manual operator use only.
        for candidate in STARTUP_NOTICE_CANDIDATES {
            debug!(candidate, "startup notice candidate not auto-shown");
        }

        Self {
            inner: Some(BannerState {
                visibility: BannerVisibility::Hidden,
                message_html: String::new(),
                reserved_top_padding_px: None,
                known_issues_url: known_issues_url.into(),
            }),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    pub fn visibility(&self) -> BannerVisibility {
        self.inner
            .as_ref()
            .map(|state| state.visibility)
            .unwrap_or_default()
    }

    pub fn message_html(&self) -> &str {
        self.inner
            .as_ref()
            .map(|state| state.message_html.as_str())
            .unwrap_or_default()
    }

    /// Top padding the host page must reserve while the banner is visible.
    pub fn reserved_top_padding_px(&self) -> Option<u32> {
        self.inner
            .as_ref()
            .and_then(|state| state.reserved_top_padding_px)
    }

    pub fn show(&mut self, message: &str, include_link: bool) {
        let Some(state) = self.inner.as_mut() else {
            return;
        };

        state.message_html = if include_link {
            format!(
                "{message} <a href=\"{}\" target=\"_blank\">{KNOWN_ISSUES_LINK_TEXT}</a>",
                state.known_issues_url
            )
        } else {
            message.to_owned()
        };
        state.visibility = BannerVisibility::Visible;
        state.reserved_top_padding_px = Some(BANNER_TOP_PADDING_PX);
    }

    pub fn hide(&mut self) {
        let Some(state) = self.inner.as_mut() else {
            return;
        };

        state.visibility = BannerVisibility::Hidden;
        state.reserved_top_padding_px = None;
    }

    /// Replaces the message payload without touching visibility or layout.
    pub fn update_message(&mut self, message: &str) {
        let Some(state) = self.inner.as_mut() else {
            return;
        };

        state.message_html = message.to_owned();
    }

    /// Close control handler; equivalent to `hide`.
    pub fn handle_close_click(&mut self) {
        self.hide();
    }

    /// Retired notice for the map-tile outage. The underlying issue was
    /// resolved, so the variant is a deliberate no-op.
    pub fn show_map_outage_notice(&mut self) {
        debug!("map outage notice is retired; nothing shown");
    }

    /// Retired notice for stale directory data after bulk imports; resolved,
    /// deliberate no-op.
    pub fn show_stale_data_notice(&mut self) {
        debug!("stale data notice is retired; nothing shown");
    }
}

#[cfg(test)]
mod tests {
    use super::{BannerController, BannerScaffold, BannerVisibility};

    const TEST_URL: &str = "https://status.example.org/known-issues";

    fn active_banner() -> BannerController {
        BannerController::initialize(BannerScaffold::complete(), TEST_URL)
    }

    #[test]
    fn initialize_starts_hidden_with_no_reserved_padding() {
        let banner = active_banner();
        assert!(!banner.is_inert());
        assert_eq!(banner.visibility(), BannerVisibility::Hidden);
        assert_eq!(banner.message_html(), "");
        assert_eq!(banner.reserved_top_padding_px(), None);
    }

    #[test]
    fn missing_markup_pieces_disable_the_banner() {
        let scaffolds = [
            BannerScaffold {
                container: false,
                ..BannerScaffold::complete()
            },
            BannerScaffold {
                message_slot: false,
                ..BannerScaffold::complete()
            },
            BannerScaffold {
                close_control: false,
                ..BannerScaffold::complete()
            },
        ];

        for scaffold in scaffolds {
            let mut banner = BannerController::initialize(scaffold, TEST_URL);
            assert!(banner.is_inert());

            banner.show("ignored", true);
            banner.update_message("also ignored");
            assert_eq!(banner.visibility(), BannerVisibility::Hidden);
            assert_eq!(banner.message_html(), "");
            assert_eq!(banner.reserved_top_padding_px(), None);
        }
    }

    #[test]
    fn show_with_link_appends_known_issues_reference() {
        let mut banner = active_banner();
        banner.show("Directory sync is delayed.", true);

        assert_eq!(banner.visibility(), BannerVisibility::Visible);
        assert!(banner.reserved_top_padding_px().is_some());
        let html = banner.message_html();
        assert!(html.starts_with("Directory sync is delayed."));
        assert!(html.contains(TEST_URL));
        assert!(html.contains("See known issues"));
    }

    #[test]
    fn show_without_link_keeps_plain_message() {
        let mut banner = active_banner();
        banner.show("Directory sync is delayed.", false);

        assert_eq!(banner.message_html(), "Directory sync is delayed.");
        assert_eq!(banner.visibility(), BannerVisibility::Visible);
    }

    #[test]
    fn hide_after_show_releases_layout_padding() {
        let mut banner = active_banner();
        banner.show("notice", true);
        assert!(banner.reserved_top_padding_px().is_some());

        banner.hide();
        assert_eq!(banner.visibility(), BannerVisibility::Hidden);
        assert_eq!(banner.reserved_top_padding_px(), None);
    }

    #[test]
    fn close_click_is_equivalent_to_hide() {
        let mut banner = active_banner();
        banner.show("notice", false);
        banner.handle_close_click();

        assert_eq!(banner.visibility(), BannerVisibility::Hidden);
        assert_eq!(banner.reserved_top_padding_px(), None);
    }

    #[test]
    fn update_message_preserves_visibility_in_both_states() {
        let mut banner = active_banner();

        banner.update_message("while hidden");
        assert_eq!(banner.visibility(), BannerVisibility::Hidden);
        assert_eq!(banner.message_html(), "while hidden");

        banner.show("visible notice", false);
        banner.update_message("replacement");
        assert_eq!(banner.visibility(), BannerVisibility::Visible);
        assert_eq!(banner.message_html(), "replacement");
    }

    #[test]
    fn show_can_repeat_from_any_state() {
        let mut banner = active_banner();
        banner.show("first", false);
        banner.show("second", false);

        assert_eq!(banner.visibility(), BannerVisibility::Visible);
        assert_eq!(banner.message_html(), "second");
    }

    #[test]
    fn retired_notice_variants_have_no_observable_effect() {
        let mut banner = active_banner();
        banner.show_map_outage_notice();
        banner.show_stale_data_notice();

        assert_eq!(banner.visibility(), BannerVisibility::Hidden);
        assert_eq!(banner.message_html(), "");
        assert_eq!(banner.reserved_top_padding_px(), None);
    }
}
