pub mod form_array;
pub mod form_control;
pub mod form_group;

pub use form_array::FormArray;
pub use form_control::FormControl;
pub use form_group::FormGroup;

/// Value held by a leaf control or passed in a patch.
pub type ControlValue = serde_json::Value;

/// A node of the form-control tree.
#[derive(Clone, Debug, PartialEq)]
pub enum AbstractControl {
    Control(FormControl),
    Group(FormGroup),
    Array(FormArray),
}

impl AbstractControl {
    pub fn as_control(&self) -> Option<&FormControl> {
        match self {
            AbstractControl::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn as_control_mut(&mut self) -> Option<&mut FormControl> {
        match self {
            AbstractControl::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&FormGroup> {
        match self {
            AbstractControl::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut FormGroup> {
        match self {
            AbstractControl::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&FormArray> {
        match self {
            AbstractControl::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut FormArray> {
        match self {
            AbstractControl::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Aggregate value of the subtree: objects for groups, arrays for lists.
    pub fn value(&self) -> ControlValue {
        match self {
            AbstractControl::Control(control) => control.value().clone(),
            AbstractControl::Group(group) => group.value(),
            AbstractControl::Array(array) => array.value(),
        }
    }
}

impl From<FormControl> for AbstractControl {
    fn from(control: FormControl) -> Self {
        AbstractControl::Control(control)
    }
}

impl From<FormGroup> for AbstractControl {
    fn from(group: FormGroup) -> Self {
        AbstractControl::Group(group)
    }
}

impl From<FormArray> for AbstractControl {
    fn from(array: FormArray) -> Self {
        AbstractControl::Array(array)
    }
}
