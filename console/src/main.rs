mod bootstrap;
mod cv;
mod lco;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Split Domain CSV samples using n-fold cross-validation.
    Cv {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  cv::CvArgs,
    },

    /// Create Leave-Class-Out splits from positive and negative samples.
    Lco {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  lco::LcoArgs,
    },

    /// Create genome-aware bootstrap splits from labelled genomes.
    Bootstrap {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  bootstrap::BootstrapArgs,
    },
}

pub(crate) trait PipelineCommand {
    fn run(&self) -> anyhow::Result<()>;
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Cv { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
        MainMenu::Lco { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
        MainMenu::Bootstrap { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
    }
    Ok(())
}
