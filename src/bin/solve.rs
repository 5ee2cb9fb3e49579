use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use maze_runner::{logging, render::TerminalRenderer, CLIArgs, MazeSession, Position, StepEvent};

fn main() -> Result<()> {
    logging::init();
    let args = CLIArgs::parse();
    let raw = maze_runner::read_raw_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = args.start_position();
    println!("Use maze from: {}", args.input_path.display());
    println!("Start position X:{} Y:{}", start.x(), start.y());
    let mut session = MazeSession::new(&raw, start)
        .context("The maze with the given settings is not valid.")?;

    let report = if args.animate {
        println!("Speed is set to {}ms", args.speed);
        let mut renderer = TerminalRenderer::new(session.grid(), Duration::from_millis(args.speed))
            .context("Failed to prepare the terminal for drawing.")?;
        let report = session.solve(&mut renderer);
        renderer
            .finish()
            .context("Failed to draw the maze in the terminal.")?;
        report?
    } else {
        let report = session.solve(&mut |_: &Position, _: StepEvent| {})?;
        print!("{}", session.grid());
        report
    };

    println!(
        "Found one way to the destination in {} steps.",
        report.forward.length
    );
    println!(
        "Shortest way back to the start takes {} steps.",
        report.backward.length
    );

    Ok(())
}
