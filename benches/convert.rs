use camera_preproc::{
    frame::{FrameDescriptor, PlaneBuffer},
    pipeline::Pipeline,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn synthetic_frame(width: u32, height: u32) -> FrameDescriptor {
    let luma = vec![128u8; (width * height) as usize];
    // stride-2 chroma views over an interleaved region
    let chroma = vec![128u8; (width * height / 2) as usize];
    FrameDescriptor::new(
        [
            PlaneBuffer::new(luma, 1).unwrap(),
            PlaneBuffer::new(chroma.clone(), 2).unwrap(),
            PlaneBuffer::new(chroma, 2).unwrap(),
        ],
        width,
        height,
        90,
    )
    .unwrap()
}

pub fn benchmark_pipeline(c: &mut Criterion) {
    let src_dims = [(320, 240), (640, 480), (1920, 1080)];
    let dst_dims = [(320, 320), (640, 640)];
    let pipeline = Pipeline::new();

    let mut group = c.benchmark_group("pipeline");
    for src_dim in src_dims.iter() {
        for dst_dim in dst_dims.iter() {
            let frame = synthetic_frame(src_dim.0, src_dim.1);
            group.bench_with_input(
                format!("{}x{}-{}x{}", src_dim.0, src_dim.1, dst_dim.0, dst_dim.1),
                &frame,
                |b, f| b.iter(|| pipeline.run(f, dst_dim.0, dst_dim.1)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
