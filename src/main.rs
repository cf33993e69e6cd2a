use args::Args;
use camera_preproc::{
    frame::{FrameDescriptor, PlaneBuffer},
    pipeline::Pipeline,
};
use clap::Parser;
use std::{error::Error, fs, time::Instant};
use tracing::{debug, info};

mod args;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let y = fs::read(&args.y_plane)?;
    let u = fs::read(&args.u_plane)?;
    let v = fs::read(&args.v_plane)?;

    let frame = FrameDescriptor::new(
        [
            PlaneBuffer::new(y, 1)?,
            PlaneBuffer::new(u, args.chroma_stride)?,
            PlaneBuffer::new(v, args.chroma_stride)?,
        ],
        args.frame_size[0],
        args.frame_size[1],
        args.rotation,
    )?;
    debug!("frame {}", frame);

    let pipeline = Pipeline::new();
    let now = Instant::now();
    let out = pipeline.run(&frame, args.input_size[0], args.input_size[1])?;
    let convert_time = now.elapsed();

    fs::write(&args.output, out.pixels())?;
    info!(
        "converted {} -> {} in {:.2?}, wrote {}",
        frame,
        out,
        convert_time,
        args.output.display()
    );

    Ok(())
}
