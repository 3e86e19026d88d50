use argh::FromArgs;
use lib_face::constants::{
    DEFAULT_EYES_DIR, DEFAULT_FACES_DIR, DEFAULT_NOSES_DIR, DEFAULT_PALETTE_DIR,
    DEFAULT_SAMPLE_FILE,
};

#[derive(FromArgs)]
/// Generate 48x48 indexed-colour face sprites
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Sample(SampleArgs),
    Palette(PaletteArgs),
    Faces(FacesArgs),
    Hexify(HexifyArgs),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "sample")]
/// Render the built-in sample ring
pub struct SampleArgs {
    /// output file path
    #[argh(option, short = 'o', default = "DEFAULT_SAMPLE_FILE.into()")]
    pub output: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "palette")]
/// Render one face in every palette variant
pub struct PaletteArgs {
    /// directory of eye sprites
    #[argh(option, default = "DEFAULT_EYES_DIR.into()")]
    pub eyes: String,

    /// directory of nose sprites
    #[argh(option, default = "DEFAULT_NOSES_DIR.into()")]
    pub noses: String,

    /// output directory; images from a previous run are removed first
    #[argh(option, short = 'o', default = "DEFAULT_PALETTE_DIR.into()")]
    pub out: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "faces")]
/// Render every eye/nose/eye combination
pub struct FacesArgs {
    /// directory of eye sprites
    #[argh(option, default = "DEFAULT_EYES_DIR.into()")]
    pub eyes: String,

    /// directory of nose sprites
    #[argh(option, default = "DEFAULT_NOSES_DIR.into()")]
    pub noses: String,

    /// output directory; images from a previous run are removed first
    #[argh(option, short = 'o', default = "DEFAULT_FACES_DIR.into()")]
    pub out: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "hexify")]
/// Print an image's packed rows as hex literals
pub struct HexifyArgs {
    /// input image path
    #[argh(option, short = 'i')]
    pub input: String,
}
