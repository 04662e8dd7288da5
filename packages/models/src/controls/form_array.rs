use super::{AbstractControl, ControlValue};

/// Variable-length list of unnamed controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormArray {
    controls: Vec<AbstractControl>,
}

impl FormArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, control: impl Into<AbstractControl>) -> Self {
        self.push(control);
        self
    }

    pub fn push(&mut self, control: impl Into<AbstractControl>) {
        self.controls.push(control.into());
    }

    pub fn at(&self, index: usize) -> Option<&AbstractControl> {
        self.controls.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut AbstractControl> {
        self.controls.get_mut(index)
    }

    pub fn controls(&self) -> &[AbstractControl] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn value(&self) -> ControlValue {
        ControlValue::Array(self.controls.iter().map(AbstractControl::value).collect())
    }
}

impl FromIterator<AbstractControl> for FormArray {
    fn from_iter<I: IntoIterator<Item = AbstractControl>>(iter: I) -> Self {
        FormArray {
            controls: iter.into_iter().collect(),
        }
    }
}
