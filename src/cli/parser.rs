use crate::config::Config;
use crate::core::filter::Selection;
use crate::core::view::ViewMode;
use crate::export::ExportFormat;
use crate::models::{ProgressRecord, Status};
use crate::ui::messages::warning;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for progressdash
#[derive(Parser)]
#[command(
    name = "progressdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Learning-progress dashboard: overview charts, topic progress bars and a detailed table",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colours in terminal output (NO_COLOR is honoured too)
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the topics of the dataset with their subtopic counts
    Topics,

    /// Render a dashboard view in the terminal
    View {
        /// Which view to show (default: `default_view` from the configuration)
        #[arg(long = "view", value_enum)]
        view: Option<ViewMode>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export a dashboard view to a file
    Export {
        #[arg(long = "format", value_enum, default_value = "html")]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long = "file")]
        file: String,

        #[arg(long = "view", value_enum)]
        view: Option<ViewMode>,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}

/// Topic and status filters shared by `view` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Topic to include (repeatable). Default: every topic.
    #[arg(long = "topic", value_name = "TOPIC", conflicts_with = "no_topics")]
    pub topic: Vec<String>,

    /// Status to include (repeatable). Default: both.
    #[arg(long = "status", value_enum, conflicts_with = "no_statuses")]
    pub status: Vec<Status>,

    /// Deselect every topic
    #[arg(long = "no-topics")]
    pub no_topics: bool,

    /// Deselect every status
    #[arg(long = "no-statuses")]
    pub no_statuses: bool,
}

impl FilterArgs {
    /// Build the selection for one render. Unset filters select everything;
    /// topics that do not exist in the dataset are kept but reported.
    pub fn selection(&self, records: &[ProgressRecord], view: Option<ViewMode>, cfg: &Config) -> Selection {
        let mut sel = Selection::all(records, view.unwrap_or(cfg.default_view));

        if self.no_topics {
            sel = sel.with_topics(Vec::<String>::new());
        } else if !self.topic.is_empty() {
            sel = sel.with_topics(self.topic.iter().cloned());
        }

        if self.no_statuses {
            sel = sel.with_statuses(Vec::<Status>::new());
        } else if !self.status.is_empty() {
            sel = sel.with_statuses(self.status.iter().copied());
        }

        for t in sel.unknown_topics(records) {
            warning(format!("Unknown topic '{t}' ignored."));
        }

        sel
    }
}
