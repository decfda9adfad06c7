use clap::Parser;

use crate::{pages::game::Variant, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Simulation steps per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub tick_rate: f64,

    /// Frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub frame_rate: f64,

    /// Skip the menu and play this variant
    #[arg(short, long, value_enum)]
    pub variant: Option<Variant>,

    /// Seed for pipe placement and jump cues
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_version_lists_directories() {
        let version = Cli::command().render_version();
        assert!(version.contains(env!("CARGO_PKG_VERSION")));
        assert!(version.contains("Data directory"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["moonflap"]);
        assert_eq!((cli.tick_rate, cli.frame_rate), (60.0, 60.0));
        assert_eq!(cli.variant, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_variant_and_seed() {
        let cli = Cli::parse_from(["moonflap", "--variant", "scaled", "-s", "42", "-t", "30"]);
        assert_eq!(cli.variant, Some(Variant::Scaled));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.tick_rate, 30.0);
    }
}
