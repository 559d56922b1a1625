pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

/// The only knob is log verbosity; areas are always entered at the prompt.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "lot-sizer"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Size lots for a batch of target areas and chart the results")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, short, help = "Enable verbose output"))]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_quiet() {
        let config = CliConfig::try_parse_from(["lot-sizer"]).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let config = CliConfig::try_parse_from(["lot-sizer", "--verbose"]).unwrap();
        assert!(config.verbose);
        let config = CliConfig::try_parse_from(["lot-sizer", "-v"]).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(CliConfig::try_parse_from(["lot-sizer", "--areas", "2000"]).is_err());
    }
}
