use clap::Parser;

/// Render a directory tree and bundle source files into a context document.
///
/// Every scan setting is asked interactively; the flags below only affect
/// diagnostics.
#[derive(Parser)]
#[command(name = "dir-context", version)]
#[command(about = "Render a directory tree and bundle source files into a context document")]
pub(crate) struct Cli {
    /// Show debug logging (skipped folders, bytes written)
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["dir-context"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["dir-context", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["dir-context", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["dir-context", "some/dir"]).is_err());
    }
}
