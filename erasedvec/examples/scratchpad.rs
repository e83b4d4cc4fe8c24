///
/// Run this example with:
/// cargo run --example scratchpad
///
use erasedvec::TypedVec;
use log::info;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut primes = TypedVec::new();
    for p in [2i32, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31] {
        primes.push(p);
    }
    info!(
        "collected {} primes, capacity {}",
        primes.len(),
        primes.capacity()
    );

    let evicted = primes.swap_remove(1);
    info!("swap-removed {evicted}: {:?}", primes);

    let first = primes.remove(0);
    info!("removed {first}: {:?}", primes);

    println!("{:?}", primes);
}
