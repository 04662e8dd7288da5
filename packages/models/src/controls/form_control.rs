use super::ControlValue;
use crate::validation_errors::ValidationErrors;

/// A leaf control holding a single value and the errors its validators produced.
#[derive(Clone, Debug, PartialEq)]
pub struct FormControl {
    value: ControlValue,
    default_value: ControlValue,
    errors: Option<ValidationErrors>,
    pristine: bool,
    touched: bool,
}

impl FormControl {
    /// Create a control whose reset state is its initial value.
    pub fn new(value: ControlValue) -> Self {
        Self {
            default_value: value.clone(),
            value,
            errors: None,
            pristine: true,
            touched: false,
        }
    }

    /// Create a control with a reset state different from its initial value.
    pub fn with_default(value: ControlValue, default_value: ControlValue) -> Self {
        Self {
            value,
            default_value,
            errors: None,
            pristine: true,
            touched: false,
        }
    }

    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.set_errors(Some(errors));
        self
    }

    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    pub fn default_value(&self) -> &ControlValue {
        &self.default_value
    }

    /// Overwrite the value verbatim, `Null` included.
    pub fn set_value(&mut self, value: ControlValue) {
        self.value = value;
    }

    /// Restore the default value and mark the control pristine and untouched.
    ///
    /// Errors are left alone; revalidation belongs to the host.
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.pristine = true;
        self.touched = false;
    }

    /// Current errors. An empty mapping counts as no errors.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref().filter(|errors| !errors.is_empty())
    }

    pub fn set_errors(&mut self, errors: Option<ValidationErrors>) {
        self.errors = errors;
    }

    pub fn has_error(&self, code: &str) -> bool {
        self.get_error(code).is_some()
    }

    pub fn get_error(&self, code: &str) -> Option<&ControlValue> {
        self.errors().and_then(|errors| errors.get(code))
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_none()
    }

    pub fn mark_as_dirty(&mut self) {
        self.pristine = false;
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }
}

impl Default for FormControl {
    fn default() -> Self {
        FormControl::new(ControlValue::Null)
    }
}
