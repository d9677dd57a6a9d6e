pub use falsify::*;

pub const SEEDS: [u64; 8] = [0, 1, 7, 42, 99, 1_000, 65_535, u64::MAX];

pub fn falsifier<T: FullGenerate + FullShrink<Item = <T as FullGenerate>::Item>>(
    seed: u64,
) -> Full<T> {
    let mut falsifier = ::falsify::falsifier::<T>();
    falsifier.seed = seed;
    falsifier
}

pub fn absolute(value: i64) -> i64 {
    if value < 0 {
        -value
    } else {
        value
    }
}

pub fn sign(value: i64) -> i64 {
    if value < 0 {
        -1
    } else if value > 0 {
        1
    } else {
        0
    }
}

pub fn palindrome(items: &Vec<i64>) -> bool {
    items.iter().eq(items.iter().rev())
}
