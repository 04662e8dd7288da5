pub mod context;
pub mod errors;
pub mod mutation;
pub mod options;

pub use context::ResolveError;
pub use errors::{AbstractControlError, AbstractControlErrorI18n, AbstractControlErrors};
pub use options::ErrorReportOptions;

/// Helpers over a form-control tree: error reports, context lookup and
/// patch/reset that leave lists alone.
///
/// The service holds no state besides its options; every call is a fresh
/// walk over the tree it is given.
#[derive(Clone, Debug, Default)]
pub struct AbstractControlsService {
    options: ErrorReportOptions,
}

impl AbstractControlsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ErrorReportOptions) -> Self {
        Self { options }
    }

    pub fn from_env() -> Self {
        Self::with_options(ErrorReportOptions::from_env())
    }

    pub fn options(&self) -> &ErrorReportOptions {
        &self.options
    }
}
