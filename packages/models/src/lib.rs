pub mod context;
pub mod control_path;
pub mod controls;
pub mod validation_errors;

pub use context::{ContainerAssociation, ControlContainer, FormGroupDirective, RootForm};
pub use control_path::ControlPath;
pub use controls::{AbstractControl, ControlValue, FormArray, FormControl, FormGroup};
pub use validation_errors::ValidationErrors;

#[cfg(feature = "mocks")]
pub use context::{MockControlContainer, MockFormGroupDirective};
