use clap::{Parser, Subcommand, ValueEnum};
use peer_gen::cmds;
use peer_gen::codegen::Strategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "peer-gen")]
#[command(about = "Native peer binding generator for annotated Java classes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate peer binding files from class model files */
    Codegen {
        /* Input JSON files containing resolved class models */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Emission strategy */
        #[arg(short = 's', long = "strategy", value_enum, default_value = "full-peer")]
        strategy: StrategyArg,

        /* Output directory for generated files */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,

        /* Precompiled header to include in definition units */
        #[arg(long = "pch", value_name = "HEADER")]
        pch: Option<String>,

        /* Write files even when their content is unchanged */
        #[arg(long = "force")]
        force: bool,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Inspect exported symbols and signatures without writing files */
    Analyze {
        /* Input JSON files containing resolved class models */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum StrategyArg {
    /* Managed-peer declaration/definition pair with call forwarding */
    #[value(name = "full-peer")]
    FullPeer,
    /* Classic JNIEXPORT header, no definitions */
    #[value(name = "header")]
    Header,
    /* Old-style export header plus empty stubs */
    #[value(name = "legacy")]
    Legacy,
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::FullPeer => Strategy::FullPeer,
            StrategyArg::Header => Strategy::HeaderExport,
            StrategyArg::Legacy => Strategy::LegacyExport,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen {
            files,
            strategy,
            output_dir,
            pch,
            force,
            verbose,
        } => {
            cmds::codegen::run(files, output_dir, strategy.into(), pch, force, verbose)?;
        }

        Commands::Analyze { files } => {
            cmds::analyze::run(files)?;
        }
    }

    Ok(())
}
