//! Plot a pitch's synthesized waveform to an SVG file
//!
//! Usage: plot-wave <pitch> <samples> <output.svg>
//!
//! Renders the first N samples of the precomputed waveform, for eyeballing
//! the synthesis output (frequency, amplitude, zero crossings).

use carillon::synth::{Pitch, PitchTable, SynthConfig};
use plotters::prelude::*;

struct Args {
    pitch: Pitch,
    samples: usize,
    output_path: String,
}

fn print_usage() {
    eprintln!("Usage: plot-wave <pitch> <samples> <output.svg>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  plot-wave A4 512 a4.svg    # ~4.6 cycles of the 440Hz reference");
    eprintln!("  plot-wave C6 256 c6.svg");
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        print_usage();
        return Err("Invalid number of arguments".into());
    }

    let pitch = Pitch::from_name(&args[1])
        .ok_or_else(|| format!("Unknown pitch name: {}", args[1]))?;
    let samples: usize = args[2].parse()?;
    let output_path = args[3].clone();

    if samples == 0 {
        return Err("Sample count must be positive".into());
    }

    Ok(Args {
        pitch,
        samples,
        output_path,
    })
}

fn create_plot(args: &Args, waveform: &[i8]) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(&args.output_path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!("{}: first {} samples", args.pitch.name(), waveform.len());

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0i32..waveform.len() as i32, -128i32..128i32)?;

    chart
        .configure_mesh()
        .x_desc("Sample")
        .y_desc("Amplitude")
        .x_labels(10)
        .y_labels(9)
        .draw()?;

    chart.draw_series(LineSeries::new(
        waveform.iter().enumerate().map(|(i, &s)| (i as i32, s as i32)),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    let config = SynthConfig::default();
    let table = PitchTable::new(&config);

    let waveform = table.waveform(args.pitch);
    let count = args.samples.min(waveform.len());

    println!("Waveform Plot");
    println!("=============");
    println!("  Pitch: {}", args.pitch.name());
    match args.pitch.frequency(config.reference_hz) {
        Some(freq) => println!("  Frequency: {:.2} Hz", freq),
        None => println!("  Frequency: rest (silence)"),
    }
    println!("  Samples: {} of {}", count, waveform.len());

    create_plot(&args, &waveform[..count])?;

    println!();
    println!("Output: {}", args.output_path);

    Ok(())
}
