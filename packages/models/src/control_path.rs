use std::fmt;

/// Path to a control below a group, one segment per level.
///
/// Segments name a child of a group or, for lists, hold the decimal index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlPath(pub Vec<String>);

impl ControlPath {
    pub fn new(segments: impl Into<Vec<String>>) -> Self {
        ControlPath(segments.into())
    }

    pub fn from_slice(segments: &[&str]) -> Self {
        ControlPath(segments.iter().map(|s| s.to_string()).collect())
    }

    /// Split a dotted path such as `address.street`. An empty string is the empty path.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return ControlPath::default();
        }
        ControlPath(dotted.split('.').map(str::to_string).collect())
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ControlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<Vec<String>> for ControlPath {
    fn from(segments: Vec<String>) -> Self {
        ControlPath(segments)
    }
}

impl From<&[&str]> for ControlPath {
    fn from(segments: &[&str]) -> Self {
        ControlPath::from_slice(segments)
    }
}
