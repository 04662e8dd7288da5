use crate::control_path::ControlPath;
use crate::controls::FormGroup;

#[cfg(feature = "mocks")]
use mockall::automock;

/// The top-level form a component is rendered inside.
#[cfg_attr(feature = "mocks", automock)]
pub trait FormGroupDirective {
    fn form(&self) -> &FormGroup;
}

/// The container a component is associated with inside its form.
#[cfg_attr(feature = "mocks", automock)]
pub trait ControlContainer {
    /// Path of the container from the root form, if the host knows it.
    fn path(&self) -> Option<ControlPath>;

    /// Name the container was registered under. List entries carry their
    /// index in decimal form.
    fn name(&self) -> Option<String>;
}

/// Plain owned root form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootForm {
    pub form: FormGroup,
}

impl RootForm {
    pub fn new(form: FormGroup) -> Self {
        Self { form }
    }
}

impl FormGroupDirective for RootForm {
    fn form(&self) -> &FormGroup {
        &self.form
    }
}

/// Plain association carrying whatever the host resolved for a component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerAssociation {
    pub path: Option<ControlPath>,
    pub name: Option<String>,
}

impl ContainerAssociation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<ControlPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl ControlContainer for ContainerAssociation {
    fn path(&self) -> Option<ControlPath> {
        self.path.clone()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}
