mod args;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use args::{Args, Command, FacesArgs, HexifyArgs, PaletteArgs, SampleArgs};
use lib_face::constants::{sample_scanlines, BACKGROUNDS, FOREGROUNDS, SAMPLE_PALETTE};
use lib_face::generate::DirectorySink;
use lib_face::hexify::hex_literals;
use lib_face::sprite::discover;
use lib_face::{composite, generate_faces, generate_palettes, render, GenerateError};
use lib_face::{ImageSpec, Sprite};
use log::{error, info};

fn main() -> ExitCode {
    lib_face::init_logging();

    let args: Args = argh::from_env();
    let spec = ImageSpec::default();

    let result = match args.command {
        Command::Sample(args) => sample(&spec, args),
        Command::Palette(args) => palette(&spec, args),
        Command::Faces(args) => faces(&spec, args),
        Command::Hexify(args) => hexify(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn sample(spec: &ImageSpec, args: SampleArgs) -> Result<(), GenerateError> {
    let output = render(spec, &SAMPLE_PALETTE, &sample_scanlines())?;
    fs::write(&args.output, output)?;
    info!("Sample written to {}", args.output);
    Ok(())
}

fn palette(spec: &ImageSpec, args: PaletteArgs) -> Result<(), GenerateError> {
    let eyes = discover(Path::new(&args.eyes))?;
    let noses = discover(Path::new(&args.noses))?;

    // discover never returns an empty list
    let left = &eyes[0];
    let right = eyes.get(1).unwrap_or(left);
    let face = composite(&[&left.pixels, &noses[0].pixels, &right.pixels])?;

    let inputs = [Path::new(&args.eyes), Path::new(&args.noses)];
    let mut sink = DirectorySink::prepare(&args.out, &inputs)?;
    generate_palettes(spec, &face.rows, &BACKGROUNDS, &FOREGROUNDS, &mut sink)?;
    Ok(())
}

fn faces(spec: &ImageSpec, args: FacesArgs) -> Result<(), GenerateError> {
    let eyes = discover(Path::new(&args.eyes))?;
    let noses = discover(Path::new(&args.noses))?;

    let inputs = [Path::new(&args.eyes), Path::new(&args.noses)];
    let mut sink = DirectorySink::prepare(&args.out, &inputs)?;
    generate_faces(spec, &SAMPLE_PALETTE, &eyes, &eyes, &noses, &mut sink)?;
    Ok(())
}

fn hexify(args: HexifyArgs) -> Result<(), GenerateError> {
    let sprite = Sprite::open(Path::new(&args.input))?;
    for line in hex_literals(&sprite.pixels) {
        println!("{line}");
    }
    Ok(())
}
