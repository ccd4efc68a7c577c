// driver defaults: 10 values drawn from [0, 200]
pub const LOW: u64 = 0;
pub const HIGH: u64 = 200;
pub const COUNT: usize = 10;

const _: () = {
    assert!(LOW <= HIGH, "LOW must not exceed HIGH");
    assert!(COUNT > 0, "COUNT must be positive");
};
