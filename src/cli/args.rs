use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focusdesk")]
#[command(about = "A terminal productivity dashboard: planner, focus timer, age and BMI")]
#[command(long_about = "focusdesk - a terminal productivity dashboard

Run without a subcommand to open the dashboard. The same widgets are
available as subcommands for scripting.

QUICK START:
  focusdesk                        Open the dashboard
  focusdesk timer run              Run focus/break periods in the terminal
  focusdesk task add \"Write report\"  Add a task to the daily planner
  focusdesk age 1990-05-15         How old is someone born on that day
  focusdesk bmi -w 70 -H 175       Body-mass index

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Data lives in ~/.focusdesk (set FOCUSDESK_HOME to move it).")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log debug output to stderr (or the log file in the dashboard)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard
    ///
    /// Same as running focusdesk with no subcommand.
    ///
    /// # Keys
    ///
    ///   Tab / Shift-Tab, 1-4    Switch widget
    ///   ?                       Toggle help
    ///   q / Esc / Ctrl-C        Quit
    Tui,

    /// Focus/break interval timer
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Manage the daily planner
    #[command(alias = "tasks")]
    Task(TaskArgs),

    /// Calculate age from a birth date
    ///
    /// # Examples
    ///
    ///   focusdesk age 1990-05-15
    ///   focusdesk age "1990-05-15 08:30" --on 2024-03-10
    Age {
        /// Birth date: YYYY-MM-DD or "YYYY-MM-DD HH:MM[:SS]"
        birth: String,

        /// Compare against this moment instead of now
        #[arg(long)]
        on: Option<String>,
    },

    /// Calculate body-mass index
    ///
    /// # Examples
    ///
    ///   focusdesk bmi --weight 70 --height 175
    Bmi {
        /// Weight in kilograms
        #[arg(short, long)]
        weight: f64,

        /// Height in centimetres
        #[arg(short = 'H', long)]
        height: f64,
    },

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   focusdesk completions zsh > ~/.zsh/completions/_focusdesk
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    pub command: TimerCommands,
}

#[derive(Subcommand)]
pub enum TimerCommands {
    /// Run the timer in this terminal until interrupted
    ///
    /// Alternates focus and break periods, chiming at each switch.
    ///
    /// # Examples
    ///
    ///   focusdesk timer run
    ///   focusdesk timer run --focus 50 --break 10 --phases 4
    Run {
        /// Focus period in minutes (defaults to config)
        #[arg(short, long)]
        focus: Option<u32>,

        /// Break period in minutes (defaults to config)
        #[arg(short, long = "break")]
        r#break: Option<u32>,

        /// Stop after this many completed periods (at least 1)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        phases: Option<u32>,

        /// Do not play a tone when a period ends
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    #[command(alias = "a")]
    Add {
        /// Task text
        text: String,
    },

    /// List tasks
    #[command(alias = "ls")]
    List,

    /// Toggle a task's completed state
    Done {
        /// Task ID
        id: i64,
    },

    /// Toggle a task's priority flag
    Star {
        /// Task ID
        id: i64,
    },

    /// Replace a task's text
    Edit {
        /// Task ID
        id: i64,

        /// New text
        text: String,
    },

    /// Delete a task
    #[command(alias = "delete")]
    Rm {
        /// Task ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the data directory and file locations
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["focusdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_tui_command() {
        let cli = Cli::try_parse_from(["focusdesk", "tui"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["focusdesk", "--output", "json", "task", "list"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_after_subcommand() {
        let cli = Cli::try_parse_from(["focusdesk", "task", "list", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_timer_run_defaults() {
        let cli = Cli::try_parse_from(["focusdesk", "timer", "run"]).unwrap();
        match cli.command {
            Some(Commands::Timer(args)) => match args.command {
                TimerCommands::Run {
                    focus,
                    r#break,
                    phases,
                    quiet,
                } => {
                    assert_eq!(focus, None);
                    assert_eq!(r#break, None);
                    assert_eq!(phases, None);
                    assert!(!quiet);
                }
            },
            _ => panic!("Expected Timer command"),
        }
    }

    #[test]
    fn test_cli_timer_run_with_options() {
        let cli = Cli::try_parse_from([
            "focusdesk", "timer", "run", "--focus", "50", "--break", "10", "--phases", "4", "-q",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Timer(args)) => match args.command {
                TimerCommands::Run {
                    focus,
                    r#break,
                    phases,
                    quiet,
                } => {
                    assert_eq!(focus, Some(50));
                    assert_eq!(r#break, Some(10));
                    assert_eq!(phases, Some(4));
                    assert!(quiet);
                }
            },
            _ => panic!("Expected Timer command"),
        }
    }

    #[test]
    fn test_cli_timer_run_rejects_zero_phases() {
        assert!(Cli::try_parse_from(["focusdesk", "timer", "run", "--phases", "0"]).is_err());
        assert!(Cli::try_parse_from(["focusdesk", "timer", "run", "--phases", "1"]).is_ok());
    }

    #[test]
    fn test_cli_task_add() {
        let cli = Cli::try_parse_from(["focusdesk", "task", "add", "Write report"]).unwrap();
        match cli.command {
            Some(Commands::Task(args)) => match args.command {
                TaskCommands::Add { text } => assert_eq!(text, "Write report"),
                _ => panic!("Expected Add"),
            },
            _ => panic!("Expected Task command"),
        }
    }

    #[test]
    fn test_cli_task_rm_yes() {
        let cli = Cli::try_parse_from(["focusdesk", "task", "rm", "42", "--yes"]).unwrap();
        match cli.command {
            Some(Commands::Task(args)) => match args.command {
                TaskCommands::Rm { id, yes } => {
                    assert_eq!(id, 42);
                    assert!(yes);
                }
                _ => panic!("Expected Rm"),
            },
            _ => panic!("Expected Task command"),
        }
    }

    #[test]
    fn test_cli_task_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["focusdesk", "task", "done", "abc"]).is_err());
    }

    #[test]
    fn test_cli_age() {
        let cli = Cli::try_parse_from(["focusdesk", "age", "1990-05-15", "--on", "2024-03-10"])
            .unwrap();
        match cli.command {
            Some(Commands::Age { birth, on }) => {
                assert_eq!(birth, "1990-05-15");
                assert_eq!(on.as_deref(), Some("2024-03-10"));
            }
            _ => panic!("Expected Age command"),
        }
    }

    #[test]
    fn test_cli_bmi_short_flags() {
        let cli = Cli::try_parse_from(["focusdesk", "bmi", "-w", "70", "-H", "175"]).unwrap();
        match cli.command {
            Some(Commands::Bmi { weight, height }) => {
                assert!((weight - 70.0).abs() < f64::EPSILON);
                assert!((height - 175.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected Bmi command"),
        }
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["focusdesk", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => {
                assert!(matches!(args.command, ConfigCommands::Init { force: true }));
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["focusdesk", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: Shell::Zsh,
                install: false
            })
        ));
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::try_parse_from(["focusdesk", "-v", "task", "list"]).unwrap();
        assert!(cli.verbose);
    }
}
