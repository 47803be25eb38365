// tests/real_package_tools.rs
//
// Drives the packager against shell stand-ins for git, meson, ninja and dot.
#![cfg(unix)]

mod common;
use crate::common::builders::ConfigFileBuilder;
use crate::common::{init_tracing, TestResult};

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use ku_release::exec::RealCommandRunner;
use ku_release::fs::RealFileSystem;
use ku_release::package::Packager;

const GIT: &str = r#"#!/bin/sh
case "$1" in
  rev-parse) echo abcdef ;;
  rev-list) echo 42 ;;
  *) exit 1 ;;
esac
"#;

const MESON: &str = "#!/bin/sh\necho '{\"version\": \"2.1\", \"descriptive_name\": \"ku\"}'\n";

const NINJA: &str = "#!/bin/sh\necho 'digraph ninja { \"ku\" -> \"main.o\" }'\n";

const DOT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then
    shift
    echo '<svg/>' > "$1"
  fi
  shift
done
"#;

fn script(path: &Path, body: &str, mode: u32) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, body)?;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[tokio::test]
async fn packages_with_real_processes() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let tools = tmp.path().join("tools");
    script(&tools.join("git"), GIT, 0o755)?;
    script(&tools.join("meson"), MESON, 0o755)?;
    script(&tools.join("ninja"), NINJA, 0o755)?;
    script(&tools.join("dot"), DOT, 0o755)?;

    let bin_dir = tmp.path().join("bin/Release");
    script(&bin_dir.join("test/SolverTest"), "binary", 0o755)?;
    script(&bin_dir.join("test/notes.txt"), "notes", 0o644)?;

    let out_dir = tmp.path().join("out");
    let tool = |name: &str| tools.join(name).to_string_lossy().into_owned();
    let cfg = ConfigFileBuilder::new()
        .bin_dir(&bin_dir)
        .out_dir(&out_dir)
        .tool("git", &tool("git"))
        .tool("meson", &tool("meson"))
        .tool("ninja", &tool("ninja"))
        .tool("dot", &tool("dot"))
        .build();

    let runner = RealCommandRunner::new();
    let report = Packager::new(&RealFileSystem, &runner, &cfg).run().await?;

    let dest = out_dir.join("tests/ku-2.1.42.abcdef");
    assert_eq!(report.destination, dest);
    assert_eq!(fs::read_to_string(dest.join("SolverTest"))?, "binary");
    assert!(!dest.join("notes.txt").exists());

    let dot = fs::read_to_string(out_dir.join("dependency-graph/ku.dot"))?;
    assert!(dot.starts_with("digraph ninja"));
    assert!(out_dir.join("dependency-graph/ku.svg").is_file());

    Ok(())
}
