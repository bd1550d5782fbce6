//! Marked-declaration discovery, dedup, and emission driving.
//!
//! Discovery is a whole-tree query; on top of it the walker re-visits every
//! record's direct child declarations explicitly, so nested marked types are
//! emitted before or independently of their enclosing record. The same node
//! is therefore reachable through two traversal paths; the identity-keyed
//! dedup set guarantees a single emission per declaration.

use std::collections::HashSet;

use yamlbind_core::{Decl, DeclId, Item, ScopePath, ScopeSeg, Unit};

use crate::index::DeclIndex;
use crate::sink::Sink;
use crate::{GenConfig, GenError, Result, classify, emit};

/// The recognized annotation payload.
pub const MARKER: &str = "yamlbind";

/// Whole-tree query: every declaration carrying an `annotate` attribute
/// anywhere in its attribute list, in document (pre-order) order, paired
/// with its enclosing scope chain.
pub fn discover(unit: &Unit) -> Vec<(&Decl, ScopePath)> {
    let mut found = Vec::new();
    let mut scope = ScopePath::new();
    for item in &unit.items {
        discover_item(item, &mut scope, &mut found);
    }
    found
}

fn discover_item<'u>(
    item: &'u Item,
    scope: &mut ScopePath,
    found: &mut Vec<(&'u Decl, ScopePath)>,
) {
    match item {
        Item::Namespace(ns) => {
            scope.push(ScopeSeg::Namespace(ns.name.clone()));
            for inner in &ns.items {
                discover_item(inner, scope, found);
            }
            scope.pop();
        }
        Item::Decl(decl) => discover_decl(decl, scope, found),
    }
}

fn discover_decl<'u>(
    decl: &'u Decl,
    scope: &mut ScopePath,
    found: &mut Vec<(&'u Decl, ScopePath)>,
) {
    if decl.has_annotate_attr() {
        found.push((decl, scope.clone()));
    }
    if let Decl::Record(record) = decl {
        scope.push(ScopeSeg::Record(record.name.clone()));
        for nested in record.nested() {
            discover_decl(nested, scope, found);
        }
        scope.pop();
    }
}

/// Per-unit generation state: config, declaration index, dedup set, and
/// the output sink. Nothing is shared between units.
pub struct Generator<'cfg> {
    config: &'cfg GenConfig,
    index: DeclIndex,
    seen: HashSet<DeclId>,
    sink: Sink,
}

impl Generator<'_> {
    /// Generate the conversion header for one unit.
    pub fn run(unit: &Unit, config: &GenConfig) -> Result<String> {
        let mut generator = Generator {
            config,
            index: DeclIndex::build(unit),
            seen: HashSet::new(),
            sink: Sink::new(),
        };

        emit::unit_preamble(&mut generator.sink);

        for (decl, scope) in discover(unit) {
            generator.visit(decl, &scope)?;
        }

        Ok(generator.sink.finish())
    }

    fn visit(&mut self, decl: &Decl, scope: &ScopePath) -> Result<()> {
        // Re-entrant visitation is an idempotent no-op.
        if !self.seen.insert(decl.id()) {
            return Ok(());
        }

        // Nested marked declarations first, independent of whether the
        // enclosing record itself passes the marker check below.
        if let Decl::Record(record) = decl {
            let mut inner = scope.clone();
            inner.push(ScopeSeg::Record(record.name.clone()));
            for child in record.nested() {
                if child.has_annotate_attr() {
                    self.visit(child, &inner)?;
                }
            }
        }

        if !marker_matches(decl)? {
            return Ok(());
        }

        match decl {
            Decl::Record(record) => {
                let fields = classify::public_fields(record, &self.index, scope);
                let type_name = scope.qualified(&record.name);
                emit::record_convert(&mut self.sink, &type_name, &fields);
                if self.config.compare_ops {
                    emit::record_compare(
                        &mut self.sink,
                        &type_name,
                        scope.enclosing_namespace().as_deref(),
                        &fields,
                    );
                }
            }
            Decl::Enum(decl) => {
                let constants = classify::enum_constants(decl, scope);
                let type_name = scope.qualified(&decl.name);
                emit::enum_convert(&mut self.sink, &type_name, &constants);
            }
        }

        Ok(())
    }

}

/// First-attribute marker check. Only an `annotate` attribute in the first
/// position with the exact recognized payload qualifies; an `annotate` with
/// a different payload skips the declaration. A visited declaration without
/// any attribute is an integration error.
pub fn marker_matches(decl: &Decl) -> Result<bool> {
    let Some(first) = decl.attrs().first() else {
        return Err(GenError::MissingMarker {
            name: decl.name().to_string(),
        });
    };
    Ok(first.is_annotate() && first.payload.as_deref() == Some(MARKER))
}
