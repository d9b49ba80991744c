use aget_lint::core::resolve::resolve_extends;
use aget_lint::core::workspace::{find_agent_root, find_framework_root};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, "metadata:\n  name: stub\nconcepts: []\n").expect("write");
}

fn canon(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize")
}

/// Search-path layout: agent with its own ontology dir, framework with a
/// shared ontology dir and two sibling templates.
struct Layout {
    agent: PathBuf,
    framework: PathBuf,
    source: PathBuf,
}

fn seed_layout(root: &Path) -> Layout {
    let agent = root.join("agents").join("triage");
    let framework = root.join("framework");
    fs::create_dir_all(agent.join("ontology")).expect("mkdir");
    fs::create_dir_all(framework.join("ontology")).expect("mkdir");
    fs::create_dir_all(framework.join("templates")).expect("mkdir");
    let source = agent.join("ONTOLOGY_src.yaml");
    touch(&source);
    Layout {
        agent,
        framework,
        source,
    }
}

#[test]
fn local_directory_beats_every_other_location() {
    let tmp = tempdir().expect("tempdir");
    let layout = seed_layout(tmp.path());
    for dir in [
        layout.agent.clone(),
        layout.agent.join("ontology"),
        layout.framework.join("ontology"),
        layout.framework.join("templates/alpha/ontology"),
    ] {
        touch(&dir.join("T.yaml"));
    }

    let r = resolve_extends(&layout.source, "T.yaml", &layout.agent, Some(&layout.framework));
    assert_eq!(r.resolved, Some(canon(&layout.agent.join("T.yaml"))));
}

#[test]
fn agent_ontology_dir_beats_framework_locations() {
    let tmp = tempdir().expect("tempdir");
    let layout = seed_layout(tmp.path());
    for dir in [
        layout.agent.join("ontology"),
        layout.framework.join("ontology"),
        layout.framework.join("templates/alpha/ontology"),
    ] {
        touch(&dir.join("T.yaml"));
    }

    let r = resolve_extends(&layout.source, "T.yaml", &layout.agent, Some(&layout.framework));
    assert_eq!(
        r.resolved,
        Some(canon(&layout.agent.join("ontology/T.yaml")))
    );
}

#[test]
fn framework_ontology_beats_sibling_templates() {
    let tmp = tempdir().expect("tempdir");
    let layout = seed_layout(tmp.path());
    touch(&layout.framework.join("ontology/T.yaml"));
    touch(&layout.framework.join("templates/alpha/ontology/T.yaml"));

    let r = resolve_extends(&layout.source, "T.yaml", &layout.agent, Some(&layout.framework));
    assert_eq!(
        r.resolved,
        Some(canon(&layout.framework.join("ontology/T.yaml")))
    );
}

#[test]
fn sibling_templates_are_the_last_resort_in_sorted_order() {
    let tmp = tempdir().expect("tempdir");
    let layout = seed_layout(tmp.path());
    touch(&layout.framework.join("templates/beta/ontology/T.yaml"));
    touch(&layout.framework.join("templates/alpha/ontology/T.yaml"));

    let r = resolve_extends(&layout.source, "T.yaml", &layout.agent, Some(&layout.framework));
    assert_eq!(
        r.resolved,
        Some(canon(
            &layout.framework.join("templates/alpha/ontology/T.yaml")
        ))
    );
}

#[test]
fn unresolvable_target_is_a_normal_outcome() {
    let tmp = tempdir().expect("tempdir");
    let layout = seed_layout(tmp.path());

    let r = resolve_extends(
        &layout.source,
        "T_missing.yaml",
        &layout.agent,
        Some(&layout.framework),
    );
    assert!(!r.is_resolved());
    assert_eq!(r.target, "T_missing.yaml");
    assert_eq!(r.source, layout.source);
}

#[test]
fn framework_locations_are_ignored_without_a_framework_root() {
    let tmp = tempdir().expect("tempdir");
    let layout = seed_layout(tmp.path());
    touch(&layout.framework.join("ontology/T.yaml"));

    let r = resolve_extends(&layout.source, "T.yaml", &layout.agent, None);
    assert!(!r.is_resolved());
}

#[test]
fn agent_root_is_the_nearest_aget_marker_ancestor() {
    let tmp = tempdir().expect("tempdir");
    let agent = tmp.path().join("repo");
    let nested = agent.join("governance").join("decisions");
    fs::create_dir_all(agent.join(".aget")).expect("mkdir");
    fs::create_dir_all(&nested).expect("mkdir");

    assert_eq!(find_agent_root(&nested), Some(agent.clone()));
    assert_eq!(find_agent_root(&agent), Some(agent));
    assert_eq!(find_agent_root(tmp.path()), None);
}

#[test]
fn framework_root_is_an_ancestor_with_ontology_and_templates() {
    let tmp = tempdir().expect("tempdir");
    let framework = tmp.path().join("framework");
    let agent = framework.join("agents").join("triage");
    fs::create_dir_all(framework.join("ontology")).expect("mkdir");
    fs::create_dir_all(framework.join("templates")).expect("mkdir");
    fs::create_dir_all(agent.join(".aget")).expect("mkdir");

    assert_eq!(find_framework_root(&agent), Some(framework));

    let orphan = tmp.path().join("standalone");
    fs::create_dir_all(&orphan).expect("mkdir");
    assert_eq!(find_framework_root(&orphan), None);
}
