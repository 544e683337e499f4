use scansort::{radix_sort, radix_sort_builder, KeyOrder, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = vec![-7i32, 3, i32::MIN, 0, -1, i32::MAX, 12];

    // Raw bit-pattern order puts every negative value last
    let raw = radix_sort(&inputs)?;
    println!("{:?}: {:?}", KeyOrder::BitPattern, raw.result);

    let signed = radix_sort_builder(&inputs).with_signed_order().sort()?;
    println!("{:?}: {:?}", KeyOrder::Signed, signed.result);

    Ok(())
}
