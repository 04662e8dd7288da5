use models::{ControlValue, FormArray, FormControl, FormGroup, ValidationErrors};

pub fn control(value: ControlValue) -> FormControl {
    FormControl::new(value)
}

pub fn invalid_control(value: ControlValue, errors: &[(&str, ControlValue)]) -> FormControl {
    let errors: ValidationErrors = errors
        .iter()
        .map(|(code, detail)| (code.to_string(), detail.clone()))
        .collect();
    FormControl::new(value).with_errors(errors)
}

/// A valid profile form with nested groups and lists.
pub fn profile_form() -> FormGroup {
    FormGroup::new()
        .with_control("name", control(ControlValue::from("Ada")))
        .with_control("email", control(ControlValue::from("ada@example.com")))
        .with_control(
            "tags",
            FormArray::new()
                .with_control(control(ControlValue::from("rust")))
                .with_control(control(ControlValue::from("forms"))),
        )
        .with_control(
            "address",
            FormGroup::new()
                .with_control("street", control(ControlValue::from("Main St")))
                .with_control(
                    "lines",
                    FormArray::new().with_control(control(ControlValue::from("Flat 1"))),
                ),
        )
}
