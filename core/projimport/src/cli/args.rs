use crate::domain::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -o/--output（None のときは PROJIMPORT_STORE → projects.json）
    pub output: Option<String>,
    /// コマンド名（None の場合は Help）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn repo_arg() -> clap::Arg {
    clap::Arg::new("repo")
        .value_name("owner/name")
        .help("Repository to import (default: $PROJIMPORT_REPO or the built-in default)")
        .num_args(1)
}

/// clap 既定のヘルプ表示を止め、-h/--help をフラグとして受け取る（表示は main の print_help）
fn with_help_flag(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true).arg(
        clap::Arg::new("help")
            .short('h')
            .long("help")
            .help("Print help")
            .action(ArgAction::SetTrue),
    )
}

fn build_clap_command() -> clap::Command {
    with_help_flag(clap::Command::new("projimport"))
        .about("Import repository metadata into a projects.json store")
        .disable_help_subcommand(true)
        .subcommand_required(false)
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Store file (default: $PROJIMPORT_STORE or projects.json)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(with_help_flag(
            clap::Command::new("replace")
                .about("Fetch repository metadata and overwrite the store with it")
                .arg(repo_arg()),
        ))
        .subcommand(with_help_flag(
            clap::Command::new("append")
                .about("Fetch repository metadata and README, and append to the store")
                .arg(repo_arg()),
        ))
        .subcommand(with_help_flag(
            clap::Command::new("list").about("List stored projects"),
        ))
        .subcommand(with_help_flag(
            clap::Command::new("show")
                .about("Print one stored project by id")
                .arg(clap::Arg::new("id").value_name("id").num_args(1)),
        ))
        .subcommand(clap::Command::new("help").about("Display this help message"))
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let (command_name, command_args) = match matches.subcommand() {
        None => (None, Vec::new()),
        Some((name @ ("replace" | "append"), m)) => (
            Some(name.to_string()),
            m.get_one::<String>("repo").cloned().into_iter().collect(),
        ),
        Some(("show", m)) => (
            Some("show".to_string()),
            m.get_one::<String>("id").cloned().into_iter().collect(),
        ),
        Some((name, _)) => (Some(name.to_string()), Vec::new()),
    };

    let sub_help = matches
        .subcommand()
        .and_then(|(_, m)| m.try_get_one::<bool>("help").ok().flatten().copied())
        .unwrap_or(false);

    Config {
        help: matches.get_flag("help") || sub_help,
        output: matches.get_one::<String>("output").cloned(),
        command_name,
        command_args,
    }
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "projimport", &mut std::io::stdout());
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    match &config.command_name {
        Some(name) => Command::parse_with_args(name, &config.command_args),
        None => Command::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        match parse_args_from(args.iter().copied()).unwrap() {
            ParseOutcome::Config(c) => c,
            ParseOutcome::GenerateCompletion(_) => panic!("expected Config"),
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert_eq!(config.output, None);
        assert_eq!(config.command_name, None);
        assert!(config.command_args.is_empty());
    }

    #[test]
    fn test_no_command_is_help() {
        let config = parse(&["projimport"]);
        assert_eq!(config_to_command(&config), Command::Help);
    }

    #[test]
    fn test_append_with_repo_and_output() {
        let config = parse(&["projimport", "-o", "out/p.json", "append", "livekit/agents"]);
        assert_eq!(config.output.as_deref(), Some("out/p.json"));
        assert_eq!(
            config_to_command(&config),
            Command::Append {
                repo: Some("livekit/agents".to_string())
            }
        );
    }

    #[test]
    fn test_output_after_subcommand() {
        let config = parse(&["projimport", "replace", "--output", "x.json"]);
        assert_eq!(config.output.as_deref(), Some("x.json"));
        assert_eq!(config_to_command(&config), Command::Replace { repo: None });
    }

    #[test]
    fn test_help_flag_wins() {
        let config = parse(&["projimport", "list", "-h"]);
        assert_eq!(config_to_command(&config), Command::Help);
    }

    #[test]
    fn test_show_id() {
        let config = parse(&["projimport", "show"]);
        assert_eq!(config_to_command(&config), Command::Show { id: None });
        let config = parse(&["projimport", "show", "agents"]);
        assert_eq!(
            config_to_command(&config),
            Command::Show {
                id: Some("agents".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = parse_args_from(["projimport", "frobnicate"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_generate_completion() {
        let outcome = parse_args_from(["projimport", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }
}
