use clap::Parser;

use bloom::trace::init_tracing;
use bloom::ui::runtime;

/// Garden-planner demo: three screens over a back-stack navigator.
#[derive(Debug, Parser)]
#[command(name = "bloom", version, about)]
struct Cli {
    /// Start with a fresh session, ignoring any saved navigation state.
    #[arg(long)]
    fresh: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    runtime::run(cli.fresh)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn cli_defaults_to_saved_session() {
        let cli = Cli::parse_from(["bloom"]);
        assert!(!cli.fresh);
    }

    #[test]
    fn cli_accepts_fresh_flag() {
        let cli = Cli::parse_from(["bloom", "--fresh"]);
        assert!(cli.fresh);
    }
}
