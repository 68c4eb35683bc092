//! Example arithmetic and string routines exercised by the demo suites.

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

/// NaN-propagating division.
pub fn divide(a: f32, b: f32) -> f32 {
    if b == 0.0 { f32::NAN } else { a / b }
}

pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

pub fn is_prime(n: u32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

pub fn static_string() -> &'static str {
    "Hello baretest world"
}

/// Copies `input` into `buf`, returning the copied text, or `None` when the
/// buffer is too small.
pub fn copy_str<'a>(buf: &'a mut [u8], input: &str) -> Option<&'a str> {
    let bytes = input.as_bytes();
    if buf.len() < bytes.len() {
        return None;
    }
    buf[..bytes.len()].copy_from_slice(bytes);
    core::str::from_utf8(&buf[..bytes.len()]).ok()
}

/// Doubles `input` into `out`. Deliberately leaves `out` untouched for zero
/// and forgets to double large inputs; the EdgeCases suites pin down this
/// behavior.
pub fn scale_into(input: i32, out: Option<&mut i32>) {
    let Some(out) = out else {
        return;
    };
    match input {
        0 => {}
        i if i > 100 => *out = i,
        i => *out = i * 2,
    }
}
