use clap::{Parser, Subcommand};

use kubesw::{
    commands::{self, APP_INFO},
    paths::Paths,
    ui::{ColorMode, InquireSelector, Ui},
};

#[derive(Parser)]
#[command(name = "kubesw")]
#[command(about = "Kubernetes Context Switcher - list and switch the kubeconfig current-context")]
#[command(version)]
#[command(subcommand_precedence_over_arg = true)]
struct Cli {
    /// Context to switch to; prompts interactively when omitted
    #[arg(value_name = "CONTEXT")]
    target: Option<String>,

    /// Context to switch to (loses to the positional argument)
    #[arg(short = 'c', long = "context", value_name = "NAME")]
    context_flag: Option<String>,

    /// Path to the kubeconfig file (overrides KUBECONFIG and ~/.kube/config)
    #[arg(short = 'k', long, global = true, value_name = "PATH")]
    kubeconfig: Option<String>,

    /// Suppress status output; rely on exit codes
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contexts, current one marked
    List,

    /// Print the version
    Version,
}

fn main() {
    let cli = Cli::parse();
    let ui = Ui::new(cli.color, cli.no_color, cli.quiet);

    let result = match &cli.command {
        Some(Commands::List) => {
            Paths::discover(cli.kubeconfig.as_deref()).and_then(|paths| commands::list(&paths, &ui))
        }
        Some(Commands::Version) => {
            commands::version(&APP_INFO, &ui);
            Ok(())
        }
        None => Paths::discover(cli.kubeconfig.as_deref()).and_then(|paths| {
            commands::switch(
                &paths,
                cli.target.as_deref(),
                cli.context_flag.as_deref(),
                &InquireSelector,
                &ui,
            )
        }),
    };

    if let Err(err) = result {
        ui.err(err.to_string());
        std::process::exit(err.exit_code());
    }
}
