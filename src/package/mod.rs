// src/package/mod.rs

//! The packager: turns a build tree into a versioned bundle of test
//! executables plus a rendered dependency graph.
//!
//! - [`metadata`] asks git and meson for the values in the bundle name.
//! - [`copy`] copies the discovered executables.
//! - [`graph`] exports and renders the ninja build graph.

pub mod copy;
pub mod graph;
pub mod metadata;

use std::path::PathBuf;

use tracing::info;

use crate::config::ConfigFile;
use crate::discovery::find_executables;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::fs::FileSystem;
use crate::types::BuildMetadata;

pub use copy::copy_executables;
pub use graph::{build_dependency_graph, GraphArtifacts};
pub use metadata::{parse_project_version, retrieve_metadata};

/// What a packager run produced (or, in dry-run mode, would produce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub metadata: BuildMetadata,
    /// `<out>/tests/<project>-<version>.<count>.<sha>`
    pub destination: PathBuf,
    /// Executables found under the test root, in copy order.
    pub executables: Vec<PathBuf>,
    pub graph: GraphArtifacts,
}

/// Wires config, filesystem and command runner together for one run.
pub struct Packager<'a> {
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    config: &'a ConfigFile,
}

impl<'a> Packager<'a> {
    pub fn new(fs: &'a dyn FileSystem, runner: &'a dyn CommandRunner, config: &'a ConfigFile) -> Self {
        Self { fs, runner, config }
    }

    /// Full run: metadata, copy, dependency graph. Stops at the first error,
    /// leaving whatever was already written in place.
    pub async fn run(&self) -> Result<PackageReport> {
        let report = self.plan().await?;

        println!("Package Destination directory: {}", report.destination.display());
        self.fs.create_dir_all(&report.destination)?;
        copy_executables(self.fs, &report.executables, &report.destination)?;

        let graph_dir = self.config.graph_out_dir();
        self.fs.create_dir_all(&graph_dir)?;
        build_dependency_graph(
            self.runner,
            &self.config.tools,
            &self.config.package.bin_dir,
            &report.graph,
        )
        .await?;

        info!(
            destination = %report.destination.display(),
            copied = report.executables.len(),
            "package complete"
        );
        Ok(report)
    }

    /// Resolve metadata and discover executables without writing anything.
    pub async fn plan(&self) -> Result<PackageReport> {
        let metadata =
            retrieve_metadata(self.runner, &self.config.tools, &self.config.package.bin_dir)
                .await?;

        let destination = self
            .config
            .tests_out_dir()
            .join(metadata.package_name(&self.config.project.name));

        let test_root = self.config.test_root();
        let executables = find_executables(self.fs, &test_root)?;
        info!(
            root = %test_root.display(),
            count = executables.len(),
            "discovered test executables"
        );

        let graph = GraphArtifacts::in_dir(&self.config.graph_out_dir(), &self.config.project.name);

        Ok(PackageReport {
            metadata,
            destination,
            executables,
            graph,
        })
    }
}

/// Dry-run output: print what a real run would do.
pub fn print_plan(report: &PackageReport, config: &ConfigFile) {
    println!("ku-package dry-run");
    println!("  metadata: {}", report.metadata);
    println!("  destination: {}", report.destination.display());
    println!();

    println!("executables ({}):", report.executables.len());
    for exe in &report.executables {
        println!("  - {}", exe.display());
    }
    println!();

    println!("dependency graph:");
    println!(
        "  {}",
        graph::export_command(&config.tools, &config.package.bin_dir, &report.graph.dot_file)
    );
    println!(
        "  {}",
        graph::render_command(&config.tools, &report.graph.dot_file, &report.graph.svg_file)
    );
}
