// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::sync::Arc;

pub trait IdentifierMarkerName: Copy {
    const NAME: &'static str;
}

/// A phantom-tagged identifier. The tag keeps person and course names
/// from being interchanged even though both are backed by strings.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier<I, U>(I, core::marker::PhantomData<U>);

impl<I, U> Identifier<I, U> {
    #[inline]
    pub fn new(id: I) -> Self {
        Self(id, core::marker::PhantomData)
    }

    #[inline]
    pub fn value(&self) -> &I {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<U> Identifier<Arc<str>, U> {
    /// Convenience constructor from any string-like name. Names are
    /// reference counted so cloning an identifier is cheap.
    #[inline]
    pub fn named<S: AsRef<str>>(name: S) -> Self {
        Self::new(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<I, U> std::fmt::Display for Identifier<I, U>
where
    I: std::fmt::Display,
    U: IdentifierMarkerName,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonMarker;

impl IdentifierMarkerName for PersonMarker {
    const NAME: &'static str = "Person";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseMarker;

impl IdentifierMarkerName for CourseMarker {
    const NAME: &'static str = "Course";
}

pub type PersonIdentifier = Identifier<Arc<str>, PersonMarker>;
pub type CourseIdentifier = Identifier<Arc<str>, CourseMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        let p = PersonIdentifier::named("Ada");
        assert_eq!(p.as_str(), "Ada");
        assert_eq!(p.value().as_ref(), "Ada");
    }

    #[test]
    fn test_identifier_display_uses_marker_name() {
        assert_eq!(PersonIdentifier::named("Ada").to_string(), "Person(Ada)");
        assert_eq!(
            CourseIdentifier::named("Algebra").to_string(),
            "Course(Algebra)"
        );
    }

    #[test]
    fn test_identifier_ordering_follows_name() {
        let a = CourseIdentifier::named("A");
        let b = CourseIdentifier::named("B");
        assert!(a < b);
        assert_eq!(a, CourseIdentifier::named("A"));
    }
}
