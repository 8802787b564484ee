use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pngpacker")]
#[command(version)]
#[command(about = "Extract and repack the png resources embedded in a jar archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  pngpacker unpack game.jar            extract pngs from the 'i' entry into i_output/\n  \
  pngpacker pack i_output game.jar     merge the folder back into game.jar\n  \
  pngpacker unpack -e j game.jar       work on a different archive entry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Name of the packed entry inside the archive
    #[arg(short = 'e', long = "entry", default_value = "i", global = true)]
    pub entry: String,

    /// Quiet mode, suppress status output
    #[arg(short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the packed entry into a folder of png files
    Unpack {
        /// Archive to read
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Output directory (default: <entry>_output next to the archive)
        #[arg(short = 'd', value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Merge a folder of png files back into the archive
    Pack {
        /// Directory containing charset.bin and the png files
        #[arg(value_name = "DIR")]
        input_dir: PathBuf,

        /// Archive to patch
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,
    },
}
