mod options;
mod render;

use anyhow::Error as AnyError;
use clap::Parser;
use dike::{Param, Profile, ProfileBuilder, ProfileInput, Variant};
use options::{Cli, Command as CliCmd};
use serde::Serialize;
use std::io::Write;

fn main() -> Result<(), AnyError> {
    let Cli {
        dike_input,
        variant,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let input = ProfileInput::from_values(&dike_input)?;
    let profile = ProfileBuilder::from_input(input)
        .variant(variant.into())
        .build()?;

    match cmd {
        CliCmd::Plot {
            outfile: Some(outfile),
            width,
            height,
        } => render::to_file(&profile, &outfile, (width, height))?,
        CliCmd::Plot { outfile: None, .. } => render::to_terminal(&profile)?,
        CliCmd::Json => print_json(&input, &profile)?,
        CliCmd::Csv => print_csv(&profile)?,
        CliCmd::Summary => print_summary(&input, &profile)?,
    };
    Ok(())
}

fn print_json(input: &ProfileInput, profile: &Profile) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonProfile<'a> {
        variant: Variant,
        input: &'a ProfileInput,
        height: f64,
        width: f64,
        points: Vec<[f64; 2]>,
    }

    let json = JsonProfile {
        variant: profile.variant(),
        input,
        height: profile.height(),
        width: profile.width(),
        points: profile
            .points()
            .iter()
            .map(|point| [point.x(), point.y()])
            .collect(),
    };
    let json = serde_json::to_string(&json)?;
    println!("{json}");
    Ok(())
}

fn print_csv(profile: &Profile) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Index,X,Y")?;
    for (i, point) in profile.points().iter().enumerate() {
        writeln!(stdout, "{i},{},{}", point.x(), point.y())?;
    }
    Ok(())
}

fn print_summary(input: &ProfileInput, profile: &Profile) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", profile.variant())?;
    for param in Param::ALL {
        writeln!(stdout, "{param:>20}: {}", input.get(param))?;
    }
    writeln!(stdout, "height: {}", profile.height())?;
    writeln!(stdout, "width: {}", profile.width())?;
    for (i, point) in profile.points().iter().enumerate() {
        writeln!(stdout, "p{}: ({}, {})", i + 1, point.x(), point.y())?;
    }
    Ok(())
}
