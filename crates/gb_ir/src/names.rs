//! Structured namespace paths and qualified names.
//!
//! Names are written `outer::inner::leaf` in source. A leading `self`
//! segment stands for the namespace that is executing when the name is
//! resolved.

use std::fmt;

use smallvec::SmallVec;

pub const SEPARATOR: &str = "::";
pub const SELF_SEGMENT: &str = "self";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NamespacePath(SmallVec<[String; 4]>);

impl NamespacePath {
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Parses `a::b::c` into three segments. Empty segments are skipped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, segment: &str) -> Self {
        let mut out = self.clone();
        out.0.push(segment.to_string());
        out
    }

    pub fn join(&self, other: &NamespacePath) -> Self {
        let mut out = self.clone();
        out.0.extend(other.0.iter().cloned());
        out
    }

    pub fn starts_with(&self, prefix: &NamespacePath) -> bool {
        self.0.len() >= prefix.0.len() && self.0.iter().zip(prefix.0.iter()).all(|(a, b)| a == b)
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}

/// A leaf identifier inside a namespace path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub path: NamespacePath,
    pub name: String,
}

impl QualifiedName {
    pub fn new(path: NamespacePath, name: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
        }
    }

    pub fn local(name: impl Into<String>) -> Self {
        Self::new(NamespacePath::root(), name)
    }

    /// Splits `raw` on `::` and replaces a leading `self` with `current`.
    pub fn resolve(raw: &str, current: &NamespacePath) -> Self {
        let mut segments = NamespacePath::parse(raw).0;
        let name = segments.pop().unwrap_or_default();
        let path = if segments.first().is_some_and(|s| s == SELF_SEGMENT) {
            let mut out = current.clone();
            out.0.extend(segments.into_iter().skip(1));
            out
        } else {
            NamespacePath(segments)
        };
        Self { path, name }
    }

    /// Prefixes the name with `ns`.
    pub fn within(&self, ns: &NamespacePath) -> Self {
        Self {
            path: ns.join(&self.path),
            name: self.name.clone(),
        }
    }

    /// The name read as a namespace: `a::b` becomes the path `[a, b]`.
    pub fn as_namespace(&self) -> NamespacePath {
        self.path.child(&self.name)
    }

    pub fn is_under(&self, prefix: &NamespacePath) -> bool {
        !prefix.is_root() && self.path.starts_with(prefix)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_root() {
            write!(f, "{}{}", self.path, SEPARATOR)?;
        }
        f.write_str(&self.name)
    }
}
