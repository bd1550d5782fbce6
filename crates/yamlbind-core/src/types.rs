//! Type references as written in source.
//!
//! `Display` renders the canonical spelling: `::`-joined segments with
//! normalized template argument lists (`std::map<int, int>`). Scope repair
//! on top of this rendering lives in the codegen resolver.

use std::fmt;

/// A (possibly qualified) type reference, e.g. `std::vector<int>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Written with a leading `::` (rooted at the global namespace).
    pub absolute: bool,
    pub segments: Vec<TypeSeg>,
}

/// One path segment with its template arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSeg {
    pub name: String,
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// Unqualified single-segment reference without template arguments.
    pub fn plain(name: impl Into<String>) -> Self {
        TypeRef {
            absolute: false,
            segments: vec![TypeSeg {
                name: name.into(),
                args: Vec::new(),
            }],
        }
    }

    /// Whether the reference was written with explicit scope syntax.
    pub fn is_qualified(&self) -> bool {
        self.absolute || self.segments.len() > 1
    }

    /// The qualifier text as written, including the trailing `::`.
    /// Empty for unqualified references.
    pub fn qualifier(&self) -> String {
        let mut out = String::new();
        if self.absolute {
            out.push_str("::");
        }
        for seg in &self.segments[..self.segments.len().saturating_sub(1)] {
            out.push_str(&seg.name);
            out.push_str("::");
        }
        out
    }

    /// The terminal segment (the named type itself).
    pub fn terminal(&self) -> &TypeSeg {
        self.segments.last().expect("TypeRef has no segments")
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            write!(f, "::")?;
        }
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "::")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeSeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
