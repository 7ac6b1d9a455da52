mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::path::Path;
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::LogRecord;
use domain::{Command, ProjectSummary};
use ports::inbound::UseCaseRunner;
use wiring::{wire_projimport, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let store_path = self.app.resolve_store_path(config.output.as_deref());
        let cmd = config_to_command(&config);
        let command_name = cmd.name();
        self.log(LogRecord::info("command started").kind("lifecycle").field("command", command_name));

        let result = self.dispatch(cmd, &store_path);

        let code = result.as_ref().copied().unwrap_or_else(|e| e.exit_code());
        self.log(
            LogRecord::info("command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::error(e.to_string()).kind("error"));
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: Command, store_path: &Path) -> Result<i32, Error> {
        match cmd {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Replace { repo } => {
                let slug = self.app.resolve_slug(repo.as_deref())?;
                let outcome = self.app.import_use_case.replace(&slug, store_path)?;
                self.log(
                    LogRecord::info("project saved")
                        .kind("store")
                        .field("id", outcome.record.id.as_str())
                        .field("total", outcome.total),
                );
                println!("Project information saved to {}.", store_path.display());
                Ok(0)
            }
            Command::Append { repo } => {
                let slug = self.app.resolve_slug(repo.as_deref())?;
                let outcome = self.app.import_use_case.append(&slug, store_path)?;
                self.log(
                    LogRecord::info("project saved")
                        .kind("store")
                        .field("id", outcome.record.id.as_str())
                        .field("total", outcome.total),
                );
                println!("Project information saved to {}.", store_path.display());
                Ok(0)
            }
            Command::List => {
                let entries = self.app.store_view_use_case.list(store_path)?;
                print_project_list(&entries);
                Ok(0)
            }
            Command::Show { id } => {
                let id = id.ok_or_else(|| Error::invalid_argument("show requires a project id"))?;
                let project = self.app.store_view_use_case.show(store_path, &id)?;
                let text = serde_json::to_string_pretty(&project)?;
                println!("{}", text);
                Ok(0)
            }
            Command::Unknown(name) => Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            ))),
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("projimport: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_projimport()?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: projimport [-h] [-o|--output path] <command> [args...]");
}

fn print_help() {
    println!("Usage: projimport [-h] [-o|--output path] <command> [args...]");
    println!("  -h, --help            Display this help message.");
    println!("  -o, --output <path>   Store file to write (default: $PROJIMPORT_STORE or projects.json).");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Commands:");
    println!("  replace [owner/name]  Fetch repository metadata and overwrite the store with it.");
    println!("  append [owner/name]   Fetch repository metadata and README, and append to the store.");
    println!("  list                  List stored projects (id, author, title).");
    println!("  show <id>             Print one stored project as JSON.");
    println!();
    println!("Environment:");
    println!("  PROJIMPORT_REPO       Repository used when owner/name is omitted.");
    println!("  PROJIMPORT_API_BASE   API base URL (default: https://api.github.com).");
    println!("  PROJIMPORT_STORE      Store file used when -o is omitted.");
    println!("  PROJIMPORT_LOG        Write JSONL logs to this file.");
    println!();
    println!("Examples:");
    println!("  projimport append livekit/agents");
    println!("  projimport -o public/projects.json replace andreas-bauer/credit-maker");
}

fn print_project_list(entries: &[ProjectSummary]) {
    if entries.is_empty() {
        println!("(no projects)");
        return;
    }
    println!("{:<24} {:<18} {}", "ID", "AUTHOR", "TITLE");
    for e in entries {
        println!("{:<24} {:<18} {}", e.id, e.author, e.title);
    }
}
