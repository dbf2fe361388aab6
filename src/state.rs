use crate::accessibility::AccessibilitySettings;
use crate::api::{ApiError, AssistantClient, BilingualKeyPoints, BilingualSummary};
use crate::config::AppConfig;
use crate::constants::{
    ERR_PREFIX_KEY_POINTS, ERR_PREFIX_SUMMARY, MSG_CONNECTION_ERROR, MSG_EMPTY_INPUT_KEY_POINTS,
    MSG_EMPTY_INPUT_SUMMARY, MSG_KEY_POINTS_MALFORMED, MSG_KEY_POINTS_SUCCESS,
    MSG_SUMMARY_MALFORMED, MSG_SUMMARY_SUCCESS,
};

/// Which of the two supported operations the current (or pending) result
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultKind {
    /// Nothing requested yet.
    #[default]
    None,
    Summary,
    KeyPoints,
}

/// Transient interaction state of the assistant view.
///
/// All fields reset to their defaults at startup and are only mutated by user
/// actions and by the resolution of the request those actions trigger. The
/// transition methods are free of any widget code so the whole contract can be
/// exercised in unit tests.
#[derive(Debug, Default)]
pub struct ViewState {
    pub kind: ResultKind,
    pub summary: Option<BilingualSummary>,
    pub key_points: Option<BilingualKeyPoints>,
    pub status: String,
    pub pending: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request of `kind`: clears both results and the status line so
    /// stale output never outlives a new attempt, then validates the input.
    ///
    /// Returns `false` when the trimmed input is empty; the validation
    /// complaint is already set and no request may be sent. Returns `true`
    /// when the caller should dispatch the request.
    pub fn begin_request(&mut self, kind: ResultKind, input: &str) -> bool {
        self.summary = None;
        self.key_points = None;
        self.status.clear();
        self.kind = kind;
        self.pending = true;

        if input.trim().is_empty() {
            self.status = match kind {
                ResultKind::KeyPoints => MSG_EMPTY_INPUT_KEY_POINTS,
                _ => MSG_EMPTY_INPUT_SUMMARY,
            }
            .to_string();
            self.pending = false;
            return false;
        }
        true
    }

    /// Applies the outcome of a summary request.
    pub fn apply_summary_outcome(&mut self, outcome: Result<BilingualSummary, ApiError>) {
        match outcome {
            Ok(summary) => {
                self.summary = Some(summary);
                self.status = MSG_SUMMARY_SUCCESS.to_string();
            }
            Err(err) => {
                self.status = error_status(ERR_PREFIX_SUMMARY, MSG_SUMMARY_MALFORMED, &err);
            }
        }
        self.pending = false;
    }

    /// Applies the outcome of a key-points request.
    pub fn apply_key_points_outcome(&mut self, outcome: Result<BilingualKeyPoints, ApiError>) {
        match outcome {
            Ok(points) => {
                self.key_points = Some(points);
                self.status = MSG_KEY_POINTS_SUCCESS.to_string();
            }
            Err(err) => {
                self.status = error_status(ERR_PREFIX_KEY_POINTS, MSG_KEY_POINTS_MALFORMED, &err);
            }
        }
        self.pending = false;
    }

    /// True when nothing has been attempted yet and the placeholder prompt
    /// should show.
    pub fn is_untouched(&self) -> bool {
        self.kind == ResultKind::None && self.status.is_empty() && !self.pending
    }
}

/// Maps the error taxonomy onto a display-facing status line. Service errors
/// carry whatever detail the backend provided; malformed bodies get a fixed
/// per-operation message; transport failures collapse into the generic
/// connectivity notice.
fn error_status(prefix: &str, malformed_msg: &str, err: &ApiError) -> String {
    match err {
        ApiError::Service(detail) => {
            tracing::error!("Backend rejected request: {}", detail);
            format!("{}: {}", prefix, detail)
        }
        ApiError::MalformedResponse(detail) => {
            tracing::error!("Unexpected backend response shape: {}", detail);
            malformed_msg.to_string()
        }
        ApiError::HttpClient(e) => {
            tracing::error!("Backend connection failed: {}", e);
            MSG_CONNECTION_ERROR.to_string()
        }
    }
}

/// Central application state shared across UI callbacks.
pub struct AppState {
    /// Persisted backend configuration.
    pub config: AppConfig,
    /// Client for the text-processing backend.
    pub client: AssistantClient,
    /// Interaction state driving the result area.
    pub view: ViewState,
    /// Window-wide presentation settings.
    pub accessibility: AccessibilitySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> BilingualSummary {
        BilingualSummary {
            spanish: "Las plantas necesitan luz solar.".to_string(),
            english: "Plants need sunlight.".to_string(),
        }
    }

    fn key_points() -> BilingualKeyPoints {
        BilingualKeyPoints {
            spanish: vec!["Las plantas necesitan luz.".to_string()],
            english: vec!["Plants need light.".to_string()],
        }
    }

    #[test]
    fn fresh_view_shows_placeholder() {
        let view = ViewState::new();
        assert!(view.is_untouched());
        assert!(view.status.is_empty());
        assert_eq!(view.kind, ResultKind::None);
    }

    #[test]
    fn empty_input_is_rejected_before_any_request() {
        let mut view = ViewState::new();
        assert!(!view.begin_request(ResultKind::Summary, ""));
        assert_eq!(view.status, MSG_EMPTY_INPUT_SUMMARY);
        assert!(!view.pending);
        assert!(view.summary.is_none());
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let mut view = ViewState::new();
        assert!(!view.begin_request(ResultKind::KeyPoints, "  \n\t  "));
        assert_eq!(view.status, MSG_EMPTY_INPUT_KEY_POINTS);
        assert!(!view.pending);
        assert!(view.key_points.is_none());
    }

    #[test]
    fn begin_request_enters_pending_state() {
        let mut view = ViewState::new();
        assert!(view.begin_request(ResultKind::Summary, "Plants need sunlight."));
        assert!(view.pending);
        assert_eq!(view.kind, ResultKind::Summary);
        assert!(view.status.is_empty());
        assert!(!view.is_untouched());
    }

    #[test]
    fn successful_summary_populates_result() {
        let mut view = ViewState::new();
        view.begin_request(ResultKind::Summary, "Plants need sunlight.");
        view.apply_summary_outcome(Ok(summary()));

        assert!(!view.pending);
        assert_eq!(view.status, MSG_SUMMARY_SUCCESS);
        let result = view.summary.expect("summary should be stored");
        assert_eq!(result.spanish, "Las plantas necesitan luz solar.");
        assert_eq!(result.english, "Plants need sunlight.");
    }

    #[test]
    fn successful_key_points_populate_result() {
        let mut view = ViewState::new();
        view.begin_request(ResultKind::KeyPoints, "Plants need sunlight.");
        view.apply_key_points_outcome(Ok(key_points()));

        assert!(!view.pending);
        assert_eq!(view.status, MSG_KEY_POINTS_SUCCESS);
        assert!(view.key_points.is_some());
        assert!(view.summary.is_none());
    }

    #[test]
    fn switching_operations_clears_previous_result() {
        let mut view = ViewState::new();
        view.begin_request(ResultKind::KeyPoints, "text");
        view.apply_key_points_outcome(Ok(key_points()));
        assert!(view.key_points.is_some());

        // The moment a summary request begins, key points are gone.
        view.begin_request(ResultKind::Summary, "text");
        assert!(view.key_points.is_none());
        assert!(view.summary.is_none());
        assert!(view.status.is_empty());

        view.apply_summary_outcome(Ok(summary()));
        assert!(view.summary.is_some());
        assert!(view.key_points.is_none());

        view.begin_request(ResultKind::KeyPoints, "text");
        assert!(view.summary.is_none());
    }

    #[test]
    fn service_error_surfaces_detail_and_keeps_results_empty() {
        let mut view = ViewState::new();
        view.begin_request(ResultKind::Summary, "text");
        view.apply_summary_outcome(Err(ApiError::Service("model unavailable".to_string())));

        assert!(!view.pending);
        assert!(view.status.contains("model unavailable"));
        assert!(view.status.starts_with(ERR_PREFIX_SUMMARY));
        assert!(view.summary.is_none());
    }

    #[test]
    fn malformed_response_uses_fixed_message() {
        let mut view = ViewState::new();
        view.begin_request(ResultKind::KeyPoints, "text");
        view.apply_key_points_outcome(Err(ApiError::MalformedResponse(
            "missing key_points_es/key_points_en".to_string(),
        )));

        assert_eq!(view.status, MSG_KEY_POINTS_MALFORMED);
        assert!(view.key_points.is_none());
        assert!(!view.pending);
    }

    #[test]
    fn validation_failure_leaves_view_interactive() {
        let mut view = ViewState::new();
        view.begin_request(ResultKind::Summary, "text");
        view.apply_summary_outcome(Ok(summary()));

        // An empty retry clears the old result but stays interactive.
        assert!(!view.begin_request(ResultKind::Summary, "   "));
        assert!(view.summary.is_none());
        assert!(!view.pending);
    }
}
