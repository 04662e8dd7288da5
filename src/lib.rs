//! Helpers for reactive form-control trees: flatten validation errors into a
//! per-field report, find the group a component is mounted in, and
//! patch or reset values while leaving variable-length lists alone.

pub mod setup;

pub use models::*;
pub use services::{
    AbstractControlError, AbstractControlErrorI18n, AbstractControlErrors, AbstractControlsService,
    ErrorReportOptions, ResolveError,
};
