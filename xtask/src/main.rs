//! Build automation tasks for the keystone workspace.
//!
//! Run with: `cargo xt <command>`
//!
//! # Available Commands
//!
//! - `check`: Run all checks (fmt, clippy, test)
//! - `fmt`: Format code with rustfmt
//! - `lint`: Run clippy with all targets
//! - `test`: Run all tests
//! - `bench`: Run criterion benchmarks
//! - `build`: Build release binary
//! - `clean`: Clean build artifacts
//! - `doc`: Generate documentation

// xtask is a build tool - printing to stderr is expected
#![allow(clippy::print_stderr)]

use std::process::Command;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};

/// Build automation for keystone
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for keystone")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks (fmt --check, clippy, test)
    Check,
    /// Format code with rustfmt
    Fmt {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy lints
    Lint {
        /// Automatically fix lint warnings
        #[arg(long)]
        fix: bool,
    },
    /// Run all tests
    Test {
        /// Run tests with release optimizations
        #[arg(long)]
        release: bool,
    },
    /// Run criterion benchmarks
    Bench,
    /// Build release binary
    Build {
        /// Build in debug mode
        #[arg(long)]
        debug: bool,
    },
    /// Clean build artifacts
    Clean,
    /// Generate documentation
    Doc {
        /// Open in browser after building
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = workspace_root()?;

    match cli.command {
        Commands::Check => {
            cargo(&root, &fmt_args(true))?;
            cargo(&root, &lint_args(false))?;
            cargo(&root, &test_args(false))?;
        }
        Commands::Fmt { check } => cargo(&root, &fmt_args(check))?,
        Commands::Lint { fix } => cargo(&root, &lint_args(fix))?,
        Commands::Test { release } => cargo(&root, &test_args(release))?,
        Commands::Bench => cargo(&root, &["bench", "--workspace"])?,
        Commands::Build { debug } => cargo(&root, &build_args(debug))?,
        Commands::Clean => cargo(&root, &["clean"])?,
        Commands::Doc { open } => cargo(&root, &doc_args(open))?,
    }

    Ok(())
}

/// Returns the workspace root (the parent of this crate's manifest dir).
fn workspace_root() -> Result<Utf8PathBuf> {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Utf8Path::to_path_buf)
        .context("xtask manifest directory has no parent")
}

/// Runs `cargo` with `args` in `root`, failing on a non-zero exit.
fn cargo(root: &Utf8Path, args: &[&str]) -> Result<()> {
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());
    eprintln!("$ cargo {}", args.join(" "));

    let status = Command::new(&cargo)
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("failed to run {cargo}"))?;

    if !status.success() {
        bail!("cargo {} failed with {status}", args.join(" "));
    }
    Ok(())
}

fn fmt_args(check: bool) -> Vec<&'static str> {
    let mut args = vec!["fmt", "--all"];
    if check {
        args.extend(["--", "--check"]);
    }
    args
}

fn lint_args(fix: bool) -> Vec<&'static str> {
    let mut args = vec!["clippy", "--workspace", "--all-targets"];
    if fix {
        args.extend(["--fix", "--allow-dirty"]);
    }
    args.extend(["--", "-D", "warnings"]);
    args
}

fn test_args(release: bool) -> Vec<&'static str> {
    let mut args = vec!["test", "--workspace"];
    if release {
        args.push("--release");
    }
    args
}

fn build_args(debug: bool) -> Vec<&'static str> {
    let mut args = vec!["build", "--package", "ks-cli"];
    if !debug {
        args.push("--release");
    }
    args
}

fn doc_args(open: bool) -> Vec<&'static str> {
    let mut args = vec!["doc", "--workspace", "--no-deps"];
    if open {
        args.push("--open");
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_args() {
        assert_eq!(fmt_args(false), ["fmt", "--all"]);
        assert_eq!(fmt_args(true), ["fmt", "--all", "--", "--check"]);
    }

    #[test]
    fn test_lint_args_fix_precedes_separator() {
        let args = lint_args(true);
        let fix = args.iter().position(|a| *a == "--fix").unwrap();
        let sep = args.iter().position(|a| *a == "--").unwrap();
        assert!(fix < sep);
        assert_eq!(args.last(), Some(&"warnings"));
    }

    #[test]
    fn test_build_args() {
        assert!(build_args(false).contains(&"--release"));
        assert!(!build_args(true).contains(&"--release"));
    }

    #[test]
    fn test_workspace_root_contains_manifest() {
        let root = workspace_root().unwrap();
        assert!(root.join("Cargo.toml").exists());
    }
}
