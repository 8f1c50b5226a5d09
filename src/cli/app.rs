//! Main CLI application

use crate::config::{parse_config_auto, parse_config_file, validate_config, Config};
use crate::error::{PreseedError, Result};
use crate::graph::TaskGraph;
use crate::runner::{execute_command, resolve_interpreter};
use crate::seeder::{compile_rules, ensure_placeholder, install_rules, CompiledRule, SeedOutcome};
use crate::ui::{Ui, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::env;
use std::path::{Path, PathBuf};

/// CLI application holding the loaded configuration
pub struct App {
    /// Parsed configuration
    config: Config,
    /// Config file path
    config_path: PathBuf,
}

impl App {
    /// Load the configuration selected by the global flags
    pub fn load(matches: &ArgMatches) -> Result<Self> {
        let (config, config_path) = match matches.get_one::<String>("file") {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = parse_config_file(&path)?;
                (config, path)
            }
            None => parse_config_auto()?,
        };
        validate_config(&config)?;

        Ok(App {
            config,
            config_path,
        })
    }

    /// Compile all rules against the resolved build root
    fn rules(&self, matches: &ArgMatches) -> Result<Vec<CompiledRule>> {
        let root = self.resolve_root(matches)?;
        Ok(compile_rules(&self.config, &root)?)
    }

    /// Resolve the build root: `--root` beats the config value, relative
    /// config roots anchor at the config file's directory
    fn resolve_root(&self, matches: &ArgMatches) -> Result<PathBuf> {
        if let Some(root) = matches.get_one::<String>("root") {
            let root = PathBuf::from(root);
            return Ok(if root.is_absolute() {
                root
            } else {
                env::current_dir()?.join(root)
            });
        }

        let root = PathBuf::from(self.config.root());
        if root.is_absolute() {
            return Ok(root);
        }

        let base = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(env::current_dir()?);
        Ok(base.join(root))
    }

    /// `seed` subcommand: ensure placeholders for the given task names
    pub fn seed(&self, matches: &ArgMatches, sub: &ArgMatches, ui: &Ui) -> Result<()> {
        let rules = self.rules(matches)?;

        for task in sub.get_many::<String>("tasks").into_iter().flatten() {
            let mut matched = false;
            for rule in &rules {
                if let Some(target) = rule.target_path(task)? {
                    matched = true;
                    let outcome = ensure_placeholder(&target, &rule.payload)?;
                    ui.seed_outcome(&target, outcome);
                }
            }
            if !matched {
                ui.debug(&format!("no rule matches task '{}'", task));
            }
        }

        Ok(())
    }

    /// `check` subcommand: print computed targets without writing anything
    pub fn check(&self, matches: &ArgMatches, sub: &ArgMatches, ui: &Ui) -> Result<()> {
        let rules = self.rules(matches)?;

        for task in sub.get_many::<String>("tasks").into_iter().flatten() {
            for rule in &rules {
                if let Some(target) = rule.target_path(task)? {
                    ui.check_target(task, &target, target.exists());
                }
            }
        }

        Ok(())
    }

    /// `rules` subcommand: list configured rules on stdout
    pub fn list_rules(&self, matches: &ArgMatches) -> Result<()> {
        let rules = self.rules(matches)?;

        for rule in &rules {
            println!("{}\tmarker={}\tfile={}", rule.name, rule.marker, rule.file);
        }

        Ok(())
    }

    /// `run` subcommand: run a task body with all seeders installed
    pub fn run_task(&self, matches: &ArgMatches, sub: &ArgMatches, ui: &Ui) -> Result<()> {
        let rules = self.rules(matches)?;

        let task = sub
            .get_one::<String>("task")
            .expect("task is required")
            .clone();
        let cmd: Vec<String> = sub
            .get_many::<String>("cmd")
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        let mut graph = TaskGraph::new();
        install_rules(&mut graph, &rules);

        if cmd.is_empty() {
            graph.register(&task);
        } else {
            let interpreter = resolve_interpreter(self.config.interpreter.as_ref());
            let command_line = cmd.join(" ");
            graph.register_with_action(&task, move |_| {
                execute_command(&command_line, &interpreter)
            });
        }

        ui.task_start(&task);
        graph.run(&task)
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("preseed")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Seeds placeholder input artifacts before matching build tasks run")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to preseed.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Build root the rule dirs are resolved under")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("seed")
                .about("Create missing placeholders for the given task names")
                .arg(
                    Arg::new("tasks")
                        .value_name("TASK")
                        .num_args(1..)
                        .required(true)
                        .help("Task names to seed for"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Show what seeding would do, without writing anything")
                .arg(
                    Arg::new("tasks")
                        .value_name("TASK")
                        .num_args(1..)
                        .required(true)
                        .help("Task names to check"),
                ),
        )
        .subcommand(Command::new("rules").about("List configured seed rules"))
        .subcommand(
            Command::new("run")
                .about("Run a command as a task body, seeding first")
                .arg(
                    Arg::new("task")
                        .value_name("TASK")
                        .required(true)
                        .help("Task name to register and run"),
                )
                .arg(
                    Arg::new("cmd")
                        .value_name("CMD")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .help("Command to run as the task body"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    // Pick up a .env file if one is present
    dotenvy::dotenv().ok();

    let mut command = build_command();
    let matches = command.clone().get_matches();

    let ui = Ui::new(get_verbosity(&matches));

    match matches.subcommand() {
        Some(("completions", sub)) => {
            let shell = *sub.get_one::<Shell>("shell").expect("shell is required");
            clap_complete::generate(shell, &mut command, "preseed", &mut std::io::stdout());
            Ok(())
        }
        Some(("seed", sub)) => App::load(&matches)?.seed(&matches, sub, &ui),
        Some(("check", sub)) => App::load(&matches)?.check(&matches, sub, &ui),
        Some(("rules", _)) => App::load(&matches)?.list_rules(&matches),
        Some(("run", sub)) => App::load(&matches)?.run_task(&matches, sub, &ui),
        _ => {
            command.print_help().map_err(PreseedError::Io)?;
            println!();
            Ok(())
        }
    }
}
