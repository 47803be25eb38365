// src/package/graph.rs

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ToolsSection;
use crate::errors::Result;
use crate::exec::{CommandRunner, CommandSpec};

/// Output files of a dependency graph render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphArtifacts {
    pub dot_file: PathBuf,
    pub svg_file: PathBuf,
}

impl GraphArtifacts {
    /// `<dir>/<project>.dot` and `<dir>/<project>.svg`.
    pub fn in_dir(dir: &Path, project: &str) -> Self {
        Self {
            dot_file: dir.join(format!("{project}.dot")),
            svg_file: dir.join(format!("{project}.svg")),
        }
    }
}

/// `ninja -C <bin_dir> -t graph > <dot_file>`
pub fn export_command(tools: &ToolsSection, bin_dir: &Path, dot_file: &Path) -> CommandSpec {
    CommandSpec::new(&tools.ninja)
        .arg("-C")
        .arg(bin_dir)
        .args(["-t", "graph"])
        .stdout_to(dot_file)
}

/// `dot -Gsplines=ortho -Tsvg <dot_file> -o <svg_file>`
pub fn render_command(tools: &ToolsSection, dot_file: &Path, svg_file: &Path) -> CommandSpec {
    CommandSpec::new(&tools.dot)
        .args(["-Gsplines=ortho", "-Tsvg"])
        .arg(dot_file)
        .arg("-o")
        .arg(svg_file)
}

/// Export the build graph from ninja and render it to SVG with orthogonal
/// edges. The destination directory must already exist.
pub async fn build_dependency_graph(
    runner: &dyn CommandRunner,
    tools: &ToolsSection,
    bin_dir: &Path,
    artifacts: &GraphArtifacts,
) -> Result<()> {
    println!(
        "Creating dependency graph's dot file {}",
        artifacts.dot_file.display()
    );
    runner
        .run(export_command(tools, bin_dir, &artifacts.dot_file))
        .await?;

    println!(
        "Creating dependency graph's svg file {}",
        artifacts.svg_file.display()
    );
    runner
        .run(render_command(tools, &artifacts.dot_file, &artifacts.svg_file))
        .await?;

    info!(
        dot = %artifacts.dot_file.display(),
        svg = %artifacts.svg_file.display(),
        "dependency graph rendered"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::StdoutTarget;

    #[test]
    fn artifacts_are_named_after_project() {
        let a = GraphArtifacts::in_dir(Path::new("out/dependency-graph"), "ku");
        assert_eq!(a.dot_file, PathBuf::from("out/dependency-graph/ku.dot"));
        assert_eq!(a.svg_file, PathBuf::from("out/dependency-graph/ku.svg"));
    }

    #[test]
    fn export_redirects_ninja_stdout_into_dot_file() {
        let spec = export_command(
            &ToolsSection::default(),
            Path::new("bin/Release"),
            Path::new("out/dependency-graph/ku.dot"),
        );
        assert_eq!(spec.program, "ninja");
        assert_eq!(spec.args, vec!["-C", "bin/Release", "-t", "graph"]);
        assert_eq!(
            spec.stdout,
            StdoutTarget::File(PathBuf::from("out/dependency-graph/ku.dot"))
        );
    }

    #[test]
    fn render_uses_orthogonal_splines() {
        let spec = render_command(
            &ToolsSection::default(),
            Path::new("g/ku.dot"),
            Path::new("g/ku.svg"),
        );
        assert_eq!(spec.program, "dot");
        assert_eq!(
            spec.args,
            vec!["-Gsplines=ortho", "-Tsvg", "g/ku.dot", "-o", "g/ku.svg"]
        );
    }
}
