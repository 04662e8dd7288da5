use models::{AbstractControl, ControlValue, FormGroup};

use super::AbstractControlsService;

impl AbstractControlsService {
    /// Patch the tree with `data` without touching any list.
    ///
    /// Leaves take their value verbatim, `Null` included. Group children are
    /// only visited when `data` has an own field with the child's name.
    pub fn patch_ignore_array<'a>(
        &self,
        control: impl Into<Option<&'a mut AbstractControl>>,
        data: &ControlValue,
    ) {
        if let Some(control) = control.into() {
            tracing::debug!("patching controls, lists ignored");
            patch_ignore_array(control, data);
        }
    }

    /// Same as [`patch_ignore_array`](Self::patch_ignore_array) for a group
    /// that is not wrapped in an [`AbstractControl`], such as a resolved
    /// context group.
    pub fn patch_group_ignore_array(&self, group: &mut FormGroup, data: &ControlValue) {
        tracing::debug!("patching group, lists ignored");
        patch_group(group, data);
    }

    /// Reset every leaf to its default, without touching any list.
    pub fn reset_ignore_array<'a>(&self, control: impl Into<Option<&'a mut AbstractControl>>) {
        if let Some(control) = control.into() {
            tracing::debug!("resetting controls, lists ignored");
            reset_ignore_array(control);
        }
    }

    pub fn reset_group_ignore_array(&self, group: &mut FormGroup) {
        tracing::debug!("resetting group, lists ignored");
        reset_group(group);
    }
}

fn patch_ignore_array(control: &mut AbstractControl, data: &ControlValue) {
    match control {
        AbstractControl::Control(control) => control.set_value(data.clone()),
        AbstractControl::Group(group) => patch_group(group, data),
        AbstractControl::Array(_) => {}
    }
}

fn patch_group(group: &mut FormGroup, data: &ControlValue) {
    for (key, control) in group.controls_mut() {
        if let Some(model) = own_field(data, key) {
            patch_ignore_array(control, model);
        }
    }
}

// Objects expose their keys, arrays their in-bounds indexes. Anything else
// has no fields to patch from.
fn own_field<'v>(data: &'v ControlValue, key: &str) -> Option<&'v ControlValue> {
    match data {
        ControlValue::Object(fields) => fields.get(key),
        ControlValue::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn reset_ignore_array(control: &mut AbstractControl) {
    match control {
        AbstractControl::Control(control) => control.reset(),
        AbstractControl::Group(group) => reset_group(group),
        AbstractControl::Array(_) => {}
    }
}

fn reset_group(group: &mut FormGroup) {
    for (_, control) in group.controls_mut() {
        reset_ignore_array(control);
    }
}
