use clap::{Parser, Subcommand, ValueEnum};
use dike::{ProfileInput, Variant};
use std::path::PathBuf;

/// Compute and plot dike cross-section profiles.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ten comma separated values for the dike input, in order:
    /// outer_ground_level, outer_slope, outer_berm_height,
    /// outer_berm_width, crest_height, crest_width, inner_slope,
    /// inner_berm_height, inner_berm_width, inner_ground_level.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = ProfileInput::<f64>::DEFAULT_DESIGN
    )]
    pub dike_input: Vec<f64>,

    /// Label of the computed profile.
    #[arg(long, value_enum, default_value_t = VariantArg::Standard)]
    pub variant: VariantArg,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Standard,
    Reinforced,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => Variant::Standard,
            VariantArg::Reinforced => Variant::Reinforced,
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Plot the profile to a PNG or SVG file, or to the terminal when
    /// no file is given.
    Plot {
        /// Image file path, SVG when the extension is `.svg`.
        #[arg(short, long)]
        outfile: Option<PathBuf>,

        /// Image width in pixels.
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Image height in pixels.
        #[arg(long, default_value_t = 600)]
        height: u32,
    },

    /// Print the input and profile to stdout as JSON.
    Json,

    /// Print the profile points to stdout as CSV.
    Csv,

    /// Print the profile's variant, height, width and points.
    Summary,
}
