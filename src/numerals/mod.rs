pub mod chinese;
pub mod english;

/// Splits `n` into base-10,000 groups, lowest group first.
/// Each group is in [0, 9999]; `0` yields a single zero group.
pub fn groups_base_10000(mut n: u64) -> Vec<u16> {
    if n == 0 {
        return vec![0];
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 10_000) as u16);
        n /= 10_000;
    }
    groups
}

/// Splits `n` into base-1,000 groups, lowest group first.
pub fn groups_base_1000(mut n: u64) -> Vec<u16> {
    if n == 0 {
        return vec![0];
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1_000) as u16);
        n /= 1_000;
    }
    groups
}
