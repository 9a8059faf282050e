use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Debug, Parser)]
#[command(about = "repo automation tasks")]
struct Opts {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Check formatting, lints, tests, and docs.
    Ci,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let sh = Shell::new()?;
    match opts.task {
        Task::Ci => ci(&sh),
    }
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all --check").run()?;
    cmd!(sh, "cargo clippy --all-features --all-targets -- -D warnings").run()?;
    cmd!(sh, "cargo test --all-features").run()?;
    cmd!(sh, "cargo doc --no-deps --all-features").run()?;
    Ok(())
}
