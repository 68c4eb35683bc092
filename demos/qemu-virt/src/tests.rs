//! Demo test suites.
//!
//! The FrameworkDemo suites fail on purpose to exercise the failure
//! reporting paths; the firmware is expected to finish with a nonzero
//! failure count.

use baretest::{
    add_failure, assert_eq, assert_false, assert_float_near, assert_near, assert_ne,
    assert_not_null, assert_null, assert_strcaseeq, assert_streq, assert_strneq, assert_true,
    bare_test, expect_eq, expect_lt, expect_ne, expect_near, expect_streq, expect_true, succeed,
};

use crate::mathops::{
    add, copy_str, divide, is_even, is_prime, multiply, scale_into, static_string, subtract,
};

#[bare_test(suite = "BasicMath")]
fn addition() {
    assert_eq!(add(2, 2), 4);
    assert_eq!(add(-1, 1), 0);
    assert_eq!(add(0, 0), 0);
    assert_ne!(add(2, 3), 4);
}

#[bare_test(suite = "BasicMath")]
fn subtraction() {
    assert_eq!(subtract(5, 3), 2);
    assert_eq!(subtract(3, 5), -2);
    assert_eq!(subtract(0, 0), 0);
    expect_eq!(subtract(10, 5), 5);
}

#[bare_test(suite = "BasicMath")]
fn multiplication() {
    assert_eq!(multiply(3, 4), 12);
    assert_eq!(multiply(-2, 5), -10);
    assert_eq!(multiply(7, 0), 0);
    assert_eq!(multiply(-3, -3), 9);
}

#[bare_test(suite = "BasicMath")]
fn parity() {
    assert_true!(is_even(2));
    assert_true!(is_even(0));
    assert_true!(is_even(-4));
    assert_false!(is_even(3));
    assert_false!(is_even(-1));
}

#[bare_test(suite = "FloatingPointMath")]
fn division() {
    let epsilon = 0.00001f32;
    assert_near!(divide(10.0, 2.0), 5.0, epsilon);
    assert_float_near!(divide(1.0, 3.0), 0.33333, epsilon);
    assert_near!(divide(-5.0, 2.0), -2.5, epsilon);
    assert_true!(divide(1.0, 0.0).is_nan());
}

#[bare_test(suite = "FloatingPointMath")]
fn more_comparisons() {
    let f1 = 0.1f32 + 0.2f32;
    let f2 = 0.3f32;
    let small_epsilon = 1e-6f32;

    assert_float_near!(f1, f2, small_epsilon);
    expect_near!(1.0f32 / 7.0, 0.142857, small_epsilon);
}

#[bare_test(suite = "StringOperations")]
fn static_text() {
    let s = static_string();
    assert_true!(!s.is_empty());
    assert_streq!(s, "Hello baretest world");
    assert_strcaseeq!(s, "HELLO BARETEST WORLD");
    assert_strneq!(s, "Hello barefoot world", 10);
}

#[bare_test(suite = "StringOperations")]
fn copy_into_buffer() {
    let mut buf = [0u8; 32];
    let copied = copy_str(&mut buf, "Test String");
    assert_streq!(copied, "Test String");

    let mut small = [0u8; 4];
    expect_true!(copy_str(&mut small, "Test String").is_none());
}

#[bare_test(suite = "PointerChecks")]
fn raw_pointers() {
    let value = 42u32;
    assert_not_null!(&value as *const u32);
    assert_null!(core::ptr::null::<u32>());
}

#[bare_test(suite = "ComplexLogic")]
fn primes_basic() {
    assert_false!(is_prime(0));
    assert_false!(is_prime(1));
    assert_true!(is_prime(2));
    assert_true!(is_prime(3));
    assert_false!(is_prime(4));
    assert_true!(is_prime(5));
    assert_false!(is_prime(6));
    assert_true!(is_prime(7));
}

#[bare_test(suite = "ComplexLogic")]
fn primes_advanced() {
    expect_true!(is_prime(13));
    expect_true!(is_prime(29));
    expect_true!(is_prime(97));
    expect_true!(!is_prime(100));
    expect_true!(!is_prime(81));
}

#[bare_test(suite = "EdgeCases")]
fn scaling_valid_input() {
    let mut output = 0;
    scale_into(10, Some(&mut output));
    assert_eq!(output, 20);

    scale_into(1, Some(&mut output));
    assert_eq!(output, 2);
}

#[bare_test(suite = "EdgeCases")]
fn scaling_without_output() {
    scale_into(50, None);
    succeed!();
}

#[bare_test(suite = "EdgeCases")]
fn scaling_ignores_zero() {
    let mut output = 123;
    scale_into(0, Some(&mut output));
    assert_eq!(output, 123);
}

#[bare_test(suite = "EdgeCases")]
fn scaling_large_input() {
    let mut output = 0;
    scale_into(200, Some(&mut output));
    assert_eq!(output, 200);
}

#[bare_test(suite = "FrameworkDemo")]
fn intentionally_failing_assert() {
    assert_eq!(1, 0);
    // Never reached; the marker below must not appear in the log.
    succeed!();
}

#[bare_test(suite = "FrameworkDemo")]
fn intentionally_failing_expect() {
    expect_eq!(1, 0);
    expect_true!(0 > 1);
    assert_eq!(5, 5);
    succeed!();
}

#[bare_test(suite = "FrameworkDemo")]
fn multiple_expectations() {
    expect_lt!(10, 100);
    expect_ne!(5, 6);
    expect_streq!("hello", "hello");
    add_failure!();
}
