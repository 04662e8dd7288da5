use std::collections::BTreeMap;

use super::{AbstractControl, ControlValue};
use crate::control_path::ControlPath;

/// Container of named child controls, traversed in key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormGroup {
    controls: BTreeMap<String, AbstractControl>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, name: impl Into<String>, control: impl Into<AbstractControl>) -> Self {
        self.add_control(name, control);
        self
    }

    /// Insert a child, replacing any previous control under the same name.
    pub fn add_control(&mut self, name: impl Into<String>, control: impl Into<AbstractControl>) {
        self.controls.insert(name.into(), control.into());
    }

    pub fn remove_control(&mut self, name: &str) -> Option<AbstractControl> {
        self.controls.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    pub fn control(&self, name: &str) -> Option<&AbstractControl> {
        self.controls.get(name)
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut AbstractControl> {
        self.controls.get_mut(name)
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &AbstractControl)> {
        self.controls.iter().map(|(name, control)| (name.as_str(), control))
    }

    pub fn controls_mut(&mut self) -> impl Iterator<Item = (&str, &mut AbstractControl)> {
        self.controls
            .iter_mut()
            .map(|(name, control)| (name.as_str(), control))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Look up a descendant. Group segments match child names, list segments
    /// must be decimal indexes. The empty path resolves to nothing.
    pub fn get(&self, path: &ControlPath) -> Option<&AbstractControl> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.controls.get(first)?;
        for segment in rest {
            current = match current {
                AbstractControl::Group(group) => group.controls.get(segment)?,
                AbstractControl::Array(array) => array.at(segment.parse().ok()?)?,
                AbstractControl::Control(_) => return None,
            };
        }
        Some(current)
    }

    pub fn get_mut(&mut self, path: &ControlPath) -> Option<&mut AbstractControl> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.controls.get_mut(first)?;
        for segment in rest {
            current = match current {
                AbstractControl::Group(group) => group.controls.get_mut(segment)?,
                AbstractControl::Array(array) => array.at_mut(segment.parse().ok()?)?,
                AbstractControl::Control(_) => return None,
            };
        }
        Some(current)
    }

    pub fn value(&self) -> ControlValue {
        ControlValue::Object(
            self.controls
                .iter()
                .map(|(name, control)| (name.clone(), control.value()))
                .collect(),
        )
    }
}
