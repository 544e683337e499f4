use scansort::BufferKernels;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut inputs: Vec<i32> = Vec::new();
    inputs.extend_from_slice(&[55, 22, 73, 4, 89, 0, 100, 3]);

    match inputs.radix_sort() {
        Ok(out) => println!("sorted in {:.3}ms: {:?}", out.elapsed_ms, out.result),
        Err(e) => eprintln!("radix_sort failed: {}", e),
    }

    match inputs.radix_sort_indices() {
        Ok(out) => println!("ordered in {:.3}ms: {:?}", out.elapsed_ms, out.result),
        Err(e) => eprintln!("radix_sort_indices failed: {}", e),
    }

    match inputs.prefix_sum() {
        Ok(out) => println!("summed in {:.3}ms: {:?}", out.elapsed_ms, out.result),
        Err(e) => eprintln!("prefix_sum failed: {}", e),
    }
}
