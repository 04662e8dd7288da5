use std::fmt;

use models::{AbstractControl, ControlContainer, ControlPath, FormGroup, FormGroupDirective};

use super::AbstractControlsService;

/// Reasons the enclosing group of a container could not be resolved
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// Nothing is registered at the path
    NotFound(ControlPath),
    /// The path leads to a leaf or a list
    NotAGroup(ControlPath),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound(path) => write!(f, "no control found at '{}'", path),
            ResolveError::NotAGroup(path) => write!(f, "control at '{}' is not a group", path),
        }
    }
}

impl std::error::Error for ResolveError {}

impl AbstractControlsService {
    /// Resolve the group a child component is mounted in, so it does not
    /// need the group passed down explicitly.
    ///
    /// A container with a non-empty path resolves to the group at that path
    /// below the root form; otherwise the root form itself is returned.
    pub fn form<'f, P, C>(&self, parent_form: &'f P, container: &C) -> Result<&'f FormGroup, ResolveError>
    where
        P: FormGroupDirective + ?Sized,
        C: ControlContainer + ?Sized,
    {
        match container.path() {
            Some(path) if !path.is_empty() => lookup_group(parent_form.form(), path),
            _ => Ok(parent_form.form()),
        }
    }

    /// Resolve the enclosing group by the container's name.
    ///
    /// A name that starts with an integer is taken for a list index and
    /// resolved through [`form`](Self::form). Note that this misreads groups
    /// whose name begins with digits, e.g. `"2"` or `"3rd"`.
    #[deprecated(note = "use `form`, which resolves by path")]
    pub fn form_group<'f, P, C>(&self, parent_form: &'f P, container: &C) -> Result<&'f FormGroup, ResolveError>
    where
        P: FormGroupDirective + ?Sized,
        C: ControlContainer + ?Sized,
    {
        let name = container.name().unwrap_or_default();
        if starts_with_integer(&name) {
            return self.form(parent_form, container);
        }
        if name.is_empty() {
            Ok(parent_form.form())
        } else {
            lookup_group(parent_form.form(), ControlPath::parse(&name))
        }
    }
}

fn lookup_group(form: &FormGroup, path: ControlPath) -> Result<&FormGroup, ResolveError> {
    let result = match form.get(&path) {
        Some(AbstractControl::Group(group)) => Ok(group),
        Some(_) => Err(ResolveError::NotAGroup(path)),
        None => Err(ResolveError::NotFound(path)),
    };
    if let Err(e) = &result {
        tracing::warn!(error = %e, "failed to resolve form group");
    }
    result
}

// Leading whitespace, an optional sign, then at least one digit.
fn starts_with_integer(name: &str) -> bool {
    let trimmed = name.trim_start();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}
