use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;

pub type RollcallResult<T> = Result<T, RollcallError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollcallError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to build HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Unable to reach the student API"))]
    ApiTransport { source: reqwest::Error },
    #[snafu(display("Student API rejected the request: {} [{}] [{}]", message, status, error))]
    ApiRejected {
        status: u16,
        error: String,
        message: String,
    },
    #[snafu(display("Unable to decode student API response"))]
    DecodeResponse { source: reqwest::Error },
    #[snafu(display("Unable to parse gender {:?}", original))]
    ParseGender { original: String },
}

impl RollcallError {
    /// User-facing notification body. The remote payload is surfaced
    /// verbatim in the `message [status] [error]` shape; transport-level
    /// failures (no response at all) get their own wording so they are
    /// distinguishable from an application-level rejection.
    pub fn notification_body(&self) -> String {
        match self {
            Self::ApiRejected {
                status,
                error,
                message,
            } => format!("{message} [{status}] [{error}]"),
            Self::ApiTransport { .. } => {
                "The student service could not be reached. Please try again.".to_string()
            }
            Self::DecodeResponse { .. } => {
                "The student service sent a response we could not understand.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //upstream api broke
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Rollcall Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } => ISE,
            Self::BuildHttpClient { .. } => ISE,
            Self::ApiTransport { .. } => BG,
            Self::ApiRejected { status, .. } => StatusCode::from_u16(*status).unwrap_or(BG),
            Self::DecodeResponse { .. } => BG,
            Self::ParseGender { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.notification_body()))).into_response()
    }
}
