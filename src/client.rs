use crate::{
    config::ApiConfig,
    data::{NewStudent, Student},
    error::{ApiTransportSnafu, BuildHttpClientSnafu, DecodeResponseSnafu, RollcallError, RollcallResult},
};
use async_trait::async_trait;
use serde::Deserialize;
use snafu::ResultExt;
use std::sync::Arc;

/// The three operations the remote student API supports. Behind a trait so
/// the view routes can be driven by an in-memory fake in tests.
///
/// None of these retry, cache, or batch; every call is one HTTP round-trip
/// and every failure is terminal for the user action that issued it.
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// Full current collection, in whatever order the server returns it.
    async fn list_students(&self) -> RollcallResult<Vec<Student>>;

    /// Returns the created record, including the server-assigned id.
    async fn create_student(&self, new_student: NewStudent) -> RollcallResult<Student>;

    async fn delete_student(&self, id: i64) -> RollcallResult<()>;
}

#[derive(Clone, Debug)]
pub struct HttpStudentApi {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl HttpStudentApi {
    /// No explicit timeouts: the reqwest defaults apply.
    pub fn new(config: Arc<ApiConfig>) -> RollcallResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context(BuildHttpClientSnafu)?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list_students(&self) -> RollcallResult<Vec<Student>> {
        let response = self
            .http
            .get(self.config.students_url())
            .send()
            .await
            .context(ApiTransportSnafu)?;

        into_api_result(response)
            .await?
            .json()
            .await
            .context(DecodeResponseSnafu)
    }

    async fn create_student(&self, new_student: NewStudent) -> RollcallResult<Student> {
        let response = self
            .http
            .post(self.config.students_url())
            .json(&new_student)
            .send()
            .await
            .context(ApiTransportSnafu)?;

        into_api_result(response)
            .await?
            .json()
            .await
            .context(DecodeResponseSnafu)
    }

    async fn delete_student(&self, id: i64) -> RollcallResult<()> {
        let response = self
            .http
            .delete(self.config.student_url(id))
            .send()
            .await
            .context(ApiTransportSnafu)?;

        into_api_result(response).await.map(|_| ())
    }
}

/// The `{status, error, message}` payload the API attaches to non-2xx
/// responses. Every field is optional here: the payload shape is only a
/// convention, and a proxy or a crashed server can hand back anything.
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorPayload {
    fn into_error(self, http_status: u16) -> RollcallError {
        RollcallError::ApiRejected {
            status: self.status.unwrap_or(http_status),
            error: self.error.unwrap_or_else(|| "Unknown Error".to_string()),
            message: self
                .message
                .unwrap_or_else(|| "The student service reported a failure with no details".to_string()),
        }
    }
}

/// Pass 2xx responses through; turn anything else into `ApiRejected`,
/// falling back to a generic payload when the body is not the expected
/// JSON shape (or not JSON at all).
async fn into_api_result(response: reqwest::Response) -> RollcallResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let payload = response
        .json::<ErrorPayload>()
        .await
        .unwrap_or_default();
    Err(payload.into_error(status.as_u16()))
}
