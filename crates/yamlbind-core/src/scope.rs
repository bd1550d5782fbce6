//! Enclosing-scope chains.
//!
//! The generated `namespace YAML` block lives at global scope, so every
//! type name pasted into it must be qualified relative to the global
//! namespace. Anonymous namespaces contribute no qualifier text: their
//! members are referable unqualified within the same translation unit.

/// One step of an enclosing-scope chain, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSeg {
    /// `None` for an anonymous namespace.
    Namespace(Option<String>),
    Record(String),
}

/// The chain of scopes enclosing a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopePath {
    segs: Vec<ScopeSeg>,
}

impl ScopePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, seg: ScopeSeg) {
        self.segs.push(seg);
    }

    pub fn pop(&mut self) {
        self.segs.pop();
    }

    pub fn segs(&self) -> &[ScopeSeg] {
        &self.segs
    }

    /// Named segments as path components, outermost first. Anonymous
    /// namespaces are skipped.
    pub fn names(&self) -> Vec<String> {
        self.segs
            .iter()
            .filter_map(|seg| match seg {
                ScopeSeg::Namespace(Some(name)) | ScopeSeg::Record(name) => Some(name.clone()),
                ScopeSeg::Namespace(None) => None,
            })
            .collect()
    }

    /// `name` qualified so it resolves from the global namespace,
    /// e.g. `cfg::Server::Endpoint`.
    pub fn qualified(&self, name: &str) -> String {
        let mut out = String::new();
        for seg_name in self.names() {
            out.push_str(&seg_name);
            out.push_str("::");
        }
        out.push_str(name);
        out
    }

    /// The namespace path a record-scope definition should be wrapped in.
    ///
    /// Walks inward-out to the nearest namespace: a named one yields the
    /// contiguous named-namespace path ending there (`a::b`); an anonymous
    /// one, or no namespace at all, yields `None` (no wrapping).
    pub fn enclosing_namespace(&self) -> Option<String> {
        let innermost = self
            .segs
            .iter()
            .rposition(|seg| matches!(seg, ScopeSeg::Namespace(_)))?;

        let ScopeSeg::Namespace(Some(_)) = &self.segs[innermost] else {
            return None;
        };

        let mut names = Vec::new();
        for seg in self.segs[..=innermost].iter().rev() {
            match seg {
                ScopeSeg::Namespace(Some(name)) => names.push(name.clone()),
                _ => break,
            }
        }
        names.reverse();
        Some(names.join("::"))
    }
}
