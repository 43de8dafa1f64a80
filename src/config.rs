use crate::error::{BadEnvVarSnafu, RollcallResult};
use dotenvy::var;
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RollcallResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::new()?),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new() -> RollcallResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        Ok(Self::from_base_url(get_env_var("ROLLCALL_API_URL")?))
    }

    pub fn from_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn students_url(&self) -> String {
        format!("{}/api/v1/students", self.base_url)
    }

    pub fn student_url(&self, id: i64) -> String {
        format!("{}/api/v1/students/{id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::from_base_url("http://localhost:8081/");
        assert_eq!(
            config.students_url(),
            "http://localhost:8081/api/v1/students"
        );
        assert_eq!(
            config.student_url(7),
            "http://localhost:8081/api/v1/students/7"
        );
    }
}
