use std::path::PathBuf;

use clap::Subcommand;
use theseus_core::topology::TopologyConfig;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write the built-in reference network as a topology JSON file
    ReferenceTopology {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::ReferenceTopology { out } => {
            let config = TopologyConfig::reference_network();
            let json = serde_json::to_string_pretty(&config)?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, json)?;
        }
    }

    Ok(())
}
