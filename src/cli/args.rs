use crate::types::TransferMode;
use clap::Parser;
use std::path::PathBuf;

/// In-memory account ledger with a line-command interface
#[derive(Parser, Debug)]
#[command(name = "atm-ledger")]
#[command(about = "In-memory account ledger with a line-command interface", long_about = None)]
pub struct CliArgs {
    /// Optional command script; stdin is read when omitted
    #[arg(value_name = "SCRIPT", help = "Path to a command script file")]
    pub script: Option<PathBuf>,

    /// Transfer policy applied to every transfer command
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "partial",
        help = "Transfer mode: 'partial' moves what it can and records debt, 'full-only' rejects shortfalls"
    )]
    pub mode: TransferMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Mode parsing tests
    #[rstest]
    #[case::default_mode(&["program"], TransferMode::PartialAllowed)]
    #[case::explicit_partial(&["program", "--mode", "partial"], TransferMode::PartialAllowed)]
    #[case::explicit_full_only(&["program", "--mode", "full-only"], TransferMode::FullOnly)]
    fn test_mode_parsing(#[case] args: &[&str], #[case] expected: TransferMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.mode, expected);
    }

    // Script argument tests
    #[rstest]
    #[case::no_script(&["program"], None)]
    #[case::script_only(&["program", "session.txt"], Some("session.txt"))]
    #[case::script_with_mode(&["program", "--mode", "full-only", "session.txt"], Some("session.txt"))]
    fn test_script_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.script, expected.map(PathBuf::from));
    }

    // Error handling tests
    #[rstest]
    #[case::invalid_mode(&["program", "--mode", "eager"])]
    #[case::missing_mode_value(&["program", "--mode"])]
    #[case::extra_positional(&["program", "one.txt", "two.txt"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
