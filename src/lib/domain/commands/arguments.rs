//! Types and procedures that represents a command line argument,
//! or collections of command line arguments

use std::borrow::Cow;
use std::ops::Deref;
use std::path::Path;
use std::{borrow::Borrow, ffi::OsStr, path::PathBuf};

use serde::Serialize;

/// Type for represent a command line argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Argument<'a>(Cow<'a, str>);

impl<'a> Argument<'a> {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for Argument<'a> {
    fn from(value: String) -> Argument<'a> {
        Self(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Argument<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self(value)
    }
}

impl<'a> From<&Path> for Argument<'a> {
    fn from(value: &Path) -> Self {
        Self::from(format!("{}", value.display()))
    }
}

impl<'a> From<PathBuf> for Argument<'a> {
    fn from(value: PathBuf) -> Self {
        Self::from(format!("{}", value.display()))
    }
}

impl<'a> From<&PathBuf> for Argument<'a> {
    fn from(value: &PathBuf) -> Self {
        Self::from(format!("{}", value.display()))
    }
}

impl<'a> From<&Argument<'a>> for Argument<'a> {
    fn from(value: &Argument<'a>) -> Self {
        value.clone()
    }
}

impl<'a> Deref for Argument<'a> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> Borrow<str> for Argument<'a> {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'a> AsRef<OsStr> for Argument<'a> {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(self.0.as_ref())
    }
}

impl<'a> core::fmt::Display for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strong type for represent a linear collection of [`Argument`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arguments<'a>(Vec<Argument<'a>>);

impl<'a> Arguments<'a> {
    /// Returns a new collection of [`Argument`] with the specified capacity
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    /// Creates and stores a new [`Argument`] to the end of this collection
    /// from any type T that can be coerced to an [`Argument`] type
    pub fn push<T>(&mut self, val: T)
    where
        T: Into<Argument<'a>>,
    {
        self.0.push(val.into())
    }

    /// Given an optional, adds the inner value if there's Some(<[Argument]>)
    pub fn push_opt<T: Into<Argument<'a>>>(&mut self, arg: Option<T>) {
        if let Some(val) = arg {
            self.0.push(val.into())
        }
    }

    /// Extends the underlying collection from an Iterator of [`Argument`]
    pub fn extend<T>(&mut self, iter: impl IntoIterator<Item = T>)
    where
        T: Into<Argument<'a>>,
    {
        self.0.extend(iter.into_iter().map(Into::into));
    }

    /// Extends the underlying collection given a slice of [`Argument`]
    pub fn extend_from_slice(&mut self, slice: &[Argument<'a>]) {
        self.0.extend_from_slice(slice);
    }
}

impl<'a> Deref for Arguments<'a> {
    type Target = [Argument<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = Argument<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Arguments<'a> {
    type Item = &'b Argument<'a>;
    type IntoIter = std::slice::Iter<'b, Argument<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<Argument<'a>> for Arguments<'a> {
    fn from_iter<I: IntoIterator<Item = Argument<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, 'b> FromIterator<&'b Argument<'a>> for Arguments<'a>
where
    'a: 'b,
{
    fn from_iter<I: IntoIterator<Item = &'b Argument<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().cloned().collect())
    }
}

impl<'a> core::fmt::Display for Arguments<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for arg in iter {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_display_joins_with_spaces() {
        let mut args = Arguments::default();
        args.push("-c");
        args.push(String::from("ex1.cpp"));
        args.push_opt(None::<&str>);
        args.push_opt(Some("-Wall"));

        assert_eq!(args.len(), 3);
        assert_eq!(args.to_string(), "-c ex1.cpp -Wall");
        assert_eq!(Arguments::default().to_string(), "");
    }

    #[test]
    fn test_argument_from_path() {
        let path = Path::new("out").join("gcc");
        let arg = Argument::from(&path);
        assert_eq!(arg.value(), format!("{}", path.display()));
        assert_eq!(&*arg, arg.value());
    }
}
