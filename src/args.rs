use std::path::PathBuf;

#[derive(Clone, Debug, clap::Parser)]
pub struct Args {
    /// Palette file to open at start-up
    pub file: Option<PathBuf>,

    #[clap(long)]
    pub ignore_config: bool,
}
