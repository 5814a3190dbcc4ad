use serde::Serialize;

/// Ordered advisory messages returned alongside a remote call.
///
/// Append-only and never deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Warnings(Vec<String>);

impl Warnings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends every warning of `other`, keeping its order after ours.
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Warnings {
    fn from(warnings: Vec<String>) -> Self {
        Self(warnings)
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A result together with the warnings gathered while producing it.
///
/// Warnings are advisory, so they travel with both the success and the
/// failure outcome.
#[derive(Debug)]
pub struct WithWarnings<T, E> {
    pub result: Result<T, E>,
    pub warnings: Warnings,
}

impl<T, E> WithWarnings<T, E> {
    pub fn ok(value: T, warnings: Warnings) -> Self {
        Self { result: Ok(value), warnings }
    }

    pub fn err(error: E, warnings: Warnings) -> Self {
        Self { result: Err(error), warnings }
    }

    pub fn into_parts(self) -> (Result<T, E>, Warnings) {
        (self.result, self.warnings)
    }
}
