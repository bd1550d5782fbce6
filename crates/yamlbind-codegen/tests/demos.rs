//! The committed demo output must stay in sync with the generator.

use std::fs;
use std::path::PathBuf;

use yamlbind_codegen::{GenConfig, generate};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn committed_demo_output_matches_generator() {
    let source = fs::read_to_string(repo_root().join("demos/example.hpp")).unwrap();
    let expected = fs::read_to_string(repo_root().join("demos/example.yamlbind.h")).unwrap();

    let generated = generate(&source, &GenConfig::new()).unwrap();
    assert_eq!(generated.trim_end(), expected.trim_end());
}
