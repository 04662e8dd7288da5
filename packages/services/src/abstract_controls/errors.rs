use std::collections::BTreeMap;

use models::{AbstractControl, FormControl};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::AbstractControlsService;

/// First error of a single leaf control.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AbstractControlError<'a> {
    /// Dotted path of the leaf. `None` for a leaf reached without any group key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub control: &'a FormControl,
    pub error: String,
    pub value: Value,
}

/// An error together with its translation keys.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractControlErrorI18n<'a> {
    #[serde(flatten)]
    pub entry: AbstractControlError<'a>,
    pub i18n: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_full_path: Option<String>,
}

impl<'a> AbstractControlErrorI18n<'a> {
    pub fn name(&self) -> Option<&str> {
        self.entry.name.as_deref()
    }

    pub fn error(&self) -> &str {
        &self.entry.error
    }

    pub fn value(&self) -> &Value {
        &self.entry.value
    }

    pub fn control(&self) -> &'a FormControl {
        self.entry.control
    }
}

/// Field name to first error, for every leaf of a tree that has errors.
///
/// Entries are kept in the order they were inserted. When serialized, they
/// are replayed in that order: a named entry sets its key, an entry without a
/// name (a bare leaf, or a leaf only reachable through lists) writes its own
/// fields into the top level. Whichever write comes later wins. Merging
/// unnamed entries into the top level is probably unintended, since named
/// fields called `name`, `error`, `value`, `i18n` or `i18nFullPath` can be
/// clobbered, but consumers of these reports rely on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbstractControlErrors<'a> {
    entries: Vec<AbstractControlErrorI18n<'a>>,
    named: BTreeMap<String, usize>,
    root: Option<usize>,
}

impl<'a> AbstractControlErrors<'a> {
    /// Add an entry. A later entry for the same name (or a later unnamed
    /// entry) replaces the earlier one.
    pub fn insert(&mut self, model: AbstractControlErrorI18n<'a>) {
        let index = self.entries.len();
        match model.entry.name.clone() {
            Some(name) => {
                self.named.insert(name, index);
            }
            None => self.root = Some(index),
        }
        self.entries.push(model);
    }

    pub fn get(&self, name: &str) -> Option<&AbstractControlErrorI18n<'a>> {
        self.named.get(name).map(|&i| &self.entries[i])
    }

    /// The latest unnamed entry, if any leaf without a name had errors.
    pub fn root(&self) -> Option<&AbstractControlErrorI18n<'a>> {
        self.root.map(|i| &self.entries[i])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AbstractControlErrorI18n<'a>)> {
        self.named
            .iter()
            .map(|(name, &i)| (name.as_str(), &self.entries[i]))
    }

    pub fn len(&self) -> usize {
        self.named.len() + usize::from(self.root.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Top-level keys of the serialized report, after replaying every write.
    fn slots(&self) -> Vec<(&str, Slot<'_, 'a>)> {
        let mut slots: Vec<(&str, Slot<'_, 'a>)> = Vec::new();
        for model in &self.entries {
            match model.name() {
                Some(name) => put(&mut slots, name, Slot::Entry(model)),
                None => {
                    put(&mut slots, "name", Slot::Absent);
                    put(&mut slots, "error", Slot::Text(&model.entry.error));
                    put(&mut slots, "value", Slot::Value(&model.entry.value));
                    put(&mut slots, "i18n", Slot::Text(&model.i18n));
                    put(&mut slots, "i18nFullPath", Slot::Absent);
                }
            }
        }
        slots
    }
}

// A top-level key of the serialized report. `Absent` keeps the key's
// position but is not written.
enum Slot<'r, 'a> {
    Entry(&'r AbstractControlErrorI18n<'a>),
    Text(&'r str),
    Value(&'r Value),
    Absent,
}

// Existing keys keep their position, new keys go last.
fn put<'r, 'a>(slots: &mut Vec<(&'r str, Slot<'r, 'a>)>, key: &'r str, slot: Slot<'r, 'a>) {
    match slots.iter_mut().find(|(k, _)| *k == key) {
        Some(existing) => existing.1 = slot,
        None => slots.push((key, slot)),
    }
}

impl Serialize for AbstractControlErrors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, slot) in self.slots() {
            match slot {
                Slot::Entry(model) => map.serialize_entry(key, model)?,
                Slot::Text(text) => map.serialize_entry(key, text)?,
                Slot::Value(value) => map.serialize_entry(key, value)?,
                Slot::Absent => {}
            }
        }
        map.end()
    }
}

impl AbstractControlsService {
    /// Build the error report of a control tree.
    ///
    /// Only the first error of every leaf is reported. Leaves below a list
    /// share the list's name, so the last of them with an error wins.
    /// A missing control yields an empty report.
    pub fn abstract_control_errors<'a>(
        &self,
        control: impl Into<Option<&'a AbstractControl>>,
    ) -> AbstractControlErrors<'a> {
        let report = self
            .control_errors(control)
            .into_iter()
            .fold(AbstractControlErrors::default(), |mut acc, item| {
                let i18n = self.options.i18n_key(&item.error);
                let i18n_full_path = item
                    .name
                    .as_deref()
                    .map(|name| self.options.i18n_full_path(&item.error, name));
                acc.insert(AbstractControlErrorI18n {
                    entry: item,
                    i18n,
                    i18n_full_path,
                });
                acc
            });

        tracing::debug!(fields = report.len(), "collected control errors");
        report
    }

    /// Errors of every leaf in traversal order, before they are keyed by name.
    pub fn control_errors<'a>(
        &self,
        control: impl Into<Option<&'a AbstractControl>>,
    ) -> Vec<AbstractControlError<'a>> {
        let mut errors = Vec::new();
        if let Some(control) = control.into() {
            abstract_controls_errors(control, "", &mut errors);
        }
        errors
    }
}

fn abstract_controls_errors<'a>(
    control: &'a AbstractControl,
    name: &str,
    errors: &mut Vec<AbstractControlError<'a>>,
) {
    match control {
        AbstractControl::Control(control) => {
            if let Some(error) = form_control_error(control, name) {
                errors.push(error);
            }
        }
        AbstractControl::Group(group) => {
            for (key, control) in group.controls() {
                abstract_controls_errors(control, &join_name(name, key), errors);
            }
        }
        // List entries report under the list's own name
        AbstractControl::Array(array) => {
            for control in array.controls() {
                abstract_controls_errors(control, name, errors);
            }
        }
    }
}

fn form_control_error<'a>(control: &'a FormControl, name: &str) -> Option<AbstractControlError<'a>> {
    let (error, value) = control.errors()?.first()?;
    tracing::trace!(name, error, "control error");
    Some(AbstractControlError {
        name: (!name.is_empty()).then(|| name.to_string()),
        control,
        error: error.to_string(),
        value: value.clone(),
    })
}

fn join_name(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}.{}", prefix, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_controls::ErrorReportOptions;
    use crate::test_helpers::*;
    use models::{FormArray, FormGroup};
    use serde_json::json;

    #[test]
    fn test_no_errors_yields_empty_report() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = profile_form().into();

        let report = service.abstract_control_errors(&form);

        assert!(report.is_empty());
        assert_eq!(report.to_value().unwrap(), json!({}));
    }

    #[test]
    fn test_missing_control_yields_empty_report() {
        let service = AbstractControlsService::new();
        let report = service.abstract_control_errors(None::<&AbstractControl>);
        assert!(report.is_empty());
    }

    #[test]
    fn test_bare_leaf_merges_into_top_level() {
        let service = AbstractControlsService::new();
        let leaf: AbstractControl =
            invalid_control(json!(null), &[("required", json!(true)), ("minlength", json!(3))]).into();

        let report = service.abstract_control_errors(&leaf);

        let root = report.root().unwrap();
        assert_eq!(root.error(), "required");
        assert_eq!(root.i18n, "errors.required");
        assert!(root.i18n_full_path.is_none());
        assert_eq!(
            report.to_value().unwrap(),
            json!({ "error": "required", "value": true, "i18n": "errors.required" })
        );
    }

    #[test]
    fn test_group_reports_only_invalid_children() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormGroup::new()
            .with_control("a", invalid_control(json!(""), &[("required", json!(true))]))
            .with_control("b", control(json!("ok")))
            .into();

        let report = service.abstract_control_errors(&form);

        assert_eq!(report.len(), 1);
        let a = report.get("a").unwrap();
        assert_eq!(a.error(), "required");
        assert_eq!(a.i18n, "errors.required");
        assert_eq!(a.i18n_full_path.as_deref(), Some("errors.required.a"));
        assert_eq!(
            report.to_value().unwrap(),
            json!({
                "a": {
                    "name": "a",
                    "error": "required",
                    "value": true,
                    "i18n": "errors.required",
                    "i18nFullPath": "errors.required.a"
                }
            })
        );
    }

    #[test]
    fn test_nested_groups_use_dotted_names() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormGroup::new()
            .with_control(
                "address",
                FormGroup::new().with_control(
                    "street",
                    invalid_control(json!("x"), &[("minlength", json!({ "requiredLength": 3 }))]),
                ),
            )
            .into();

        let report = service.abstract_control_errors(&form);

        let street = report.get("address.street").unwrap();
        assert_eq!(street.value(), &json!({ "requiredLength": 3 }));
        assert_eq!(
            street.i18n_full_path.as_deref(),
            Some("errors.minlength.address.street")
        );
    }

    #[test]
    fn test_list_entries_collapse_onto_list_name() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormGroup::new()
            .with_control(
                "tags",
                FormArray::new()
                    .with_control(invalid_control(json!(""), &[("required", json!(true))]))
                    .with_control(invalid_control(json!("x"), &[("minlength", json!(2))])),
            )
            .into();

        let errors = service.control_errors(&form);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.name.as_deref() == Some("tags")));

        let report = service.abstract_control_errors(&form);
        assert_eq!(report.len(), 1);
        let tags = report.get("tags").unwrap();
        assert_eq!(tags.error(), "minlength");
        assert_eq!(tags.control().value(), &json!("x"));
    }

    #[test]
    fn test_list_of_groups_keeps_group_keys() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormGroup::new()
            .with_control(
                "phones",
                FormArray::new().with_control(
                    FormGroup::new()
                        .with_control("number", invalid_control(json!(""), &[("required", json!(true))])),
                ),
            )
            .into();

        let report = service.abstract_control_errors(&form);
        assert_eq!(report.names().collect::<Vec<_>>(), vec!["phones.number"]);
    }

    #[test]
    fn test_traversal_follows_key_order() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormGroup::new()
            .with_control("zip", invalid_control(json!(""), &[("pattern", json!("^\\d+$"))]))
            .with_control("city", invalid_control(json!(""), &[("required", json!(true))]))
            .into();

        let names: Vec<Option<String>> = service
            .control_errors(&form)
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec![Some("city".to_string()), Some("zip".to_string())]);
    }

    #[test]
    fn test_custom_i18n_prefix() {
        let service = AbstractControlsService::with_options(ErrorReportOptions::new("validation"));
        let form: AbstractControl = FormGroup::new()
            .with_control("email", invalid_control(json!("a"), &[("email", json!(true))]))
            .into();

        let report = service.abstract_control_errors(&form);
        let email = report.get("email").unwrap();
        assert_eq!(email.i18n, "validation.email");
        assert_eq!(email.i18n_full_path.as_deref(), Some("validation.email.email"));
    }

    #[test]
    fn test_later_named_entry_overwrites_root_field() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormArray::new()
            .with_control(invalid_control(json!(null), &[("required", json!(true))]))
            .with_control(
                FormGroup::new().with_control("error", invalid_control(json!(1), &[("max", json!(0))])),
            )
            .into();

        let report = service.abstract_control_errors(&form);

        assert_eq!(report.len(), 2);
        assert_eq!(report.get("error").unwrap().error(), "max");
        assert_eq!(
            report.to_value().unwrap(),
            json!({
                "error": {
                    "name": "error",
                    "error": "max",
                    "value": 0,
                    "i18n": "errors.max",
                    "i18nFullPath": "errors.max.error"
                },
                "value": true,
                "i18n": "errors.required"
            })
        );
    }

    #[test]
    fn test_later_root_entry_overwrites_named_entry() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormArray::new()
            .with_control(
                FormGroup::new().with_control("error", invalid_control(json!(1), &[("max", json!(0))])),
            )
            .with_control(invalid_control(json!(null), &[("required", json!(true))]))
            .into();

        let report = service.abstract_control_errors(&form);

        assert_eq!(report.get("error").unwrap().error(), "max");
        assert_eq!(report.root().unwrap().error(), "required");
        assert_eq!(
            report.to_value().unwrap(),
            json!({ "error": "required", "value": true, "i18n": "errors.required" })
        );
    }

    #[test]
    fn test_root_entry_clears_named_name_field() {
        let service = AbstractControlsService::new();
        let form: AbstractControl = FormArray::new()
            .with_control(
                FormGroup::new()
                    .with_control("name", invalid_control(json!(""), &[("required", json!(true))]))
                    .with_control("other", invalid_control(json!(""), &[("required", json!(true))])),
            )
            .with_control(invalid_control(json!(5), &[("max", json!(3))]))
            .into();

        let report = service.abstract_control_errors(&form);

        let value = report.to_value().unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(value["other"]["error"], json!("required"));
        assert_eq!(value["error"], json!("max"));
        assert_eq!(value["value"], json!(3));
        assert_eq!(value["i18n"], json!("errors.max"));
    }

    #[test]
    fn test_join_name() {
        assert_eq!(join_name("", "a"), "a");
        assert_eq!(join_name("a", "b"), "a.b");
        assert_eq!(join_name("a", ""), "a");
        assert_eq!(join_name("", ""), "");
    }
}
