const DEFAULT_I18N_PREFIX: &str = "errors";

/// Settings for the translation keys attached to collected errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReportOptions {
    pub i18n_prefix: String,
}

impl ErrorReportOptions {
    pub fn new(i18n_prefix: impl Into<String>) -> Self {
        Self {
            i18n_prefix: i18n_prefix.into(),
        }
    }

    pub fn from_env() -> Self {
        let i18n_prefix = std::env::var("FORM_ERRORS_I18N_PREFIX")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_I18N_PREFIX.to_string());

        ErrorReportOptions { i18n_prefix }
    }

    /// `errors.<code>`
    pub fn i18n_key(&self, error: &str) -> String {
        format!("{}.{}", self.i18n_prefix, error)
    }

    /// `errors.<code>.<name>`
    pub fn i18n_full_path(&self, error: &str, name: &str) -> String {
        format!("{}.{}.{}", self.i18n_prefix, error, name)
    }
}

impl Default for ErrorReportOptions {
    fn default() -> Self {
        ErrorReportOptions::new(DEFAULT_I18N_PREFIX)
    }
}
