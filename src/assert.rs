//! Fatal (`assert_*`) and non-fatal (`expect_*`) assertion macros.
//!
//! Fatal macros report a failure and abort the current test body by
//! resolving its dispatch wrapper to [`TestResult::Failed`](crate::TestResult);
//! nothing after a failed fatal assertion executes. Non-fatal macros report,
//! mark the test as failed and let execution continue. Because the abort is
//! an early `return`, fatal assertions are only valid directly inside a test
//! body (or a helper that itself returns [`TestResult`](crate::TestResult)
//! and is propagated by its caller).

/// Shared failure path for the fatal family: report, then abort the body.
#[doc(hidden)]
#[macro_export]
macro_rules! __baretest_fatal {
    ($kind:expr, $expr_str:expr, $msg:expr) => {{
        $crate::report::report_failure(file!(), line!(), $kind, $expr_str, $msg);
        return $crate::TestResult::Failed;
    }};
}

/// Shared failure path for the non-fatal family: report and continue.
#[doc(hidden)]
#[macro_export]
macro_rules! __baretest_soft {
    ($kind:expr, $expr_str:expr, $msg:expr) => {{
        $crate::report::report_failure(file!(), line!(), $kind, $expr_str, $msg);
        $crate::report::flag_soft_failure();
    }};
}

// Boolean checks.

/// Fatal check that `cond` is true.
#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {
        if !($cond) {
            $crate::__baretest_fatal!("ASSERT_TRUE", stringify!($cond), None);
        }
    };
}

/// Fatal check that `cond` is false.
#[macro_export]
macro_rules! assert_false {
    ($cond:expr $(,)?) => {
        if $cond {
            $crate::__baretest_fatal!("ASSERT_FALSE", stringify!($cond), None);
        }
    };
}

/// Non-fatal check that `cond` is true.
#[macro_export]
macro_rules! expect_true {
    ($cond:expr $(,)?) => {
        if !($cond) {
            $crate::__baretest_soft!("EXPECT_TRUE", stringify!($cond), None);
        }
    };
}

/// Non-fatal check that `cond` is false.
#[macro_export]
macro_rules! expect_false {
    ($cond:expr $(,)?) => {
        if $cond {
            $crate::__baretest_soft!("EXPECT_FALSE", stringify!($cond), None);
        }
    };
}

// Equality and ordering over wide-integer operands (integers of any width
// and raw pointers, via [`WideInt`](crate::WideInt)).

/// Fatal check that two wide-integer operands are equal.
#[macro_export]
macro_rules! assert_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if lhs != rhs {
            $crate::__baretest_fatal!(
                "ASSERT_EQ",
                concat!(stringify!($left), " == ", stringify!($right)),
                Some((
                    "Expected: %d, Actual: %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Fatal check that two wide-integer operands differ.
#[macro_export]
macro_rules! assert_ne {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if lhs == rhs {
            $crate::__baretest_fatal!(
                "ASSERT_NE",
                concat!(stringify!($left), " != ", stringify!($right)),
                Some((
                    "Expected: %d != %d, but they are equal",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Fatal check that `left < right` over the wide representation.
#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs < rhs) {
            $crate::__baretest_fatal!(
                "ASSERT_LT",
                concat!(stringify!($left), " < ", stringify!($right)),
                Some((
                    "Expected: %d < %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Fatal check that `left <= right` over the wide representation.
#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs <= rhs) {
            $crate::__baretest_fatal!(
                "ASSERT_LE",
                concat!(stringify!($left), " <= ", stringify!($right)),
                Some((
                    "Expected: %d <= %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Fatal check that `left > right` over the wide representation.
#[macro_export]
macro_rules! assert_gt {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs > rhs) {
            $crate::__baretest_fatal!(
                "ASSERT_GT",
                concat!(stringify!($left), " > ", stringify!($right)),
                Some((
                    "Expected: %d > %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Fatal check that `left >= right` over the wide representation.
#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs >= rhs) {
            $crate::__baretest_fatal!(
                "ASSERT_GE",
                concat!(stringify!($left), " >= ", stringify!($right)),
                Some((
                    "Expected: %d >= %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_eq!`](crate::assert_eq).
#[macro_export]
macro_rules! expect_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if lhs != rhs {
            $crate::__baretest_soft!(
                "EXPECT_EQ",
                concat!(stringify!($left), " == ", stringify!($right)),
                Some((
                    "Expected: %d, Actual: %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_ne!`](crate::assert_ne).
#[macro_export]
macro_rules! expect_ne {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if lhs == rhs {
            $crate::__baretest_soft!(
                "EXPECT_NE",
                concat!(stringify!($left), " != ", stringify!($right)),
                Some((
                    "Expected: %d != %d, but they are equal",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_lt!`](crate::assert_lt).
#[macro_export]
macro_rules! expect_lt {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs < rhs) {
            $crate::__baretest_soft!(
                "EXPECT_LT",
                concat!(stringify!($left), " < ", stringify!($right)),
                Some((
                    "Expected: %d < %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_le!`](crate::assert_le).
#[macro_export]
macro_rules! expect_le {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs <= rhs) {
            $crate::__baretest_soft!(
                "EXPECT_LE",
                concat!(stringify!($left), " <= ", stringify!($right)),
                Some((
                    "Expected: %d <= %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_gt!`](crate::assert_gt).
#[macro_export]
macro_rules! expect_gt {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs > rhs) {
            $crate::__baretest_soft!(
                "EXPECT_GT",
                concat!(stringify!($left), " > ", stringify!($right)),
                Some((
                    "Expected: %d > %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_ge!`](crate::assert_ge).
#[macro_export]
macro_rules! expect_ge {
    ($left:expr, $right:expr $(,)?) => {{
        let lhs = $crate::WideInt::as_wide($left);
        let rhs = $crate::WideInt::as_wide($right);
        if !(lhs >= rhs) {
            $crate::__baretest_soft!(
                "EXPECT_GE",
                concat!(stringify!($left), " >= ", stringify!($right)),
                Some((
                    "Expected: %d >= %d",
                    &[$crate::Arg::Int(lhs), $crate::Arg::Int(rhs)]
                ))
            );
        }
    }};
}

// Null-pointer checks.

/// Fatal check that a raw pointer is null.
#[macro_export]
macro_rules! assert_null {
    ($ptr:expr $(,)?) => {{
        let ptr = $ptr;
        if !ptr.is_null() {
            $crate::__baretest_fatal!(
                "ASSERT_NULL",
                concat!(stringify!($ptr), " is null"),
                Some(("Actual: %d", &[$crate::Arg::Int($crate::WideInt::as_wide(ptr))]))
            );
        }
    }};
}

/// Fatal check that a raw pointer is non-null.
#[macro_export]
macro_rules! assert_not_null {
    ($ptr:expr $(,)?) => {{
        let ptr = $ptr;
        if ptr.is_null() {
            $crate::__baretest_fatal!(
                "ASSERT_NOT_NULL",
                concat!(stringify!($ptr), " is not null"),
                None
            );
        }
    }};
}

/// Non-fatal check that a raw pointer is null.
#[macro_export]
macro_rules! expect_null {
    ($ptr:expr $(,)?) => {{
        let ptr = $ptr;
        if !ptr.is_null() {
            $crate::__baretest_soft!(
                "EXPECT_NULL",
                concat!(stringify!($ptr), " is null"),
                Some(("Actual: %d", &[$crate::Arg::Int($crate::WideInt::as_wide(ptr))]))
            );
        }
    }};
}

/// Non-fatal check that a raw pointer is non-null.
#[macro_export]
macro_rules! expect_not_null {
    ($ptr:expr $(,)?) => {{
        let ptr = $ptr;
        if ptr.is_null() {
            $crate::__baretest_soft!(
                "EXPECT_NOT_NULL",
                concat!(stringify!($ptr), " is not null"),
                None
            );
        }
    }};
}

// String checks. Operands are anything convertible to
// [`StrOperand`](crate::StrOperand): `&str` or `Option<&str>`. An absent
// operand fails every "equal" form and renders as `(null)`.

/// Fatal byte-exact string equality.
#[macro_export]
macro_rules! assert_streq {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if !$crate::value::str_eq(a, b) {
            $crate::__baretest_fatal!(
                "ASSERT_STREQ",
                concat!(stringify!($s1), " STREQ ", stringify!($s2)),
                Some((
                    "Expected: \"%s\", Actual: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Fatal byte-exact string inequality.
#[macro_export]
macro_rules! assert_strne {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if $crate::value::str_eq(a, b) {
            $crate::__baretest_fatal!(
                "ASSERT_STRNE",
                concat!(stringify!($s1), " STRNE ", stringify!($s2)),
                Some((
                    "Expected strings to be different. s1: \"%s\", s2: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Fatal ASCII-case-insensitive string equality.
#[macro_export]
macro_rules! assert_strcaseeq {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if !$crate::value::str_case_eq(a, b) {
            $crate::__baretest_fatal!(
                "ASSERT_STRCASEEQ",
                concat!(stringify!($s1), " STRCASEEQ ", stringify!($s2)),
                Some((
                    "Expected (ignore case): \"%s\", Actual: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Fatal ASCII-case-insensitive string inequality.
#[macro_export]
macro_rules! assert_strcasene {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if $crate::value::str_case_eq(a, b) {
            $crate::__baretest_fatal!(
                "ASSERT_STRCASENE",
                concat!(stringify!($s1), " STRCASENE ", stringify!($s2)),
                Some((
                    "Expected strings to be different (ignore case). s1: \"%s\", s2: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Fatal equality over the first `n` bytes.
#[macro_export]
macro_rules! assert_strneq {
    ($s1:expr, $s2:expr, $n:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        let n = $n;
        if !$crate::value::str_prefix_eq(a, b, n) {
            $crate::__baretest_fatal!(
                "ASSERT_STRNEQ",
                concat!(stringify!($s1), " STRNEQ(", stringify!($n), ") ", stringify!($s2)),
                Some((
                    "Expected first %d chars: \"%s\", Actual: \"%s\"",
                    &[
                        $crate::Arg::Int(n as i64),
                        $crate::Arg::Str(a.display()),
                        $crate::Arg::Str(b.display())
                    ]
                ))
            );
        }
    }};
}

/// Fatal inequality over the first `n` bytes.
#[macro_export]
macro_rules! assert_strnne {
    ($s1:expr, $s2:expr, $n:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        let n = $n;
        if $crate::value::str_prefix_eq(a, b, n) {
            $crate::__baretest_fatal!(
                "ASSERT_STRNNE",
                concat!(stringify!($s1), " STRNNE(", stringify!($n), ") ", stringify!($s2)),
                Some((
                    "Expected first %d chars of strings to be different. s1: \"%s\", s2: \"%s\"",
                    &[
                        $crate::Arg::Int(n as i64),
                        $crate::Arg::Str(a.display()),
                        $crate::Arg::Str(b.display())
                    ]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_streq!`](crate::assert_streq).
#[macro_export]
macro_rules! expect_streq {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if !$crate::value::str_eq(a, b) {
            $crate::__baretest_soft!(
                "EXPECT_STREQ",
                concat!(stringify!($s1), " STREQ ", stringify!($s2)),
                Some((
                    "Expected: \"%s\", Actual: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_strne!`](crate::assert_strne).
#[macro_export]
macro_rules! expect_strne {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if $crate::value::str_eq(a, b) {
            $crate::__baretest_soft!(
                "EXPECT_STRNE",
                concat!(stringify!($s1), " STRNE ", stringify!($s2)),
                Some((
                    "Expected strings to be different. s1: \"%s\", s2: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_strcaseeq!`](crate::assert_strcaseeq).
#[macro_export]
macro_rules! expect_strcaseeq {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if !$crate::value::str_case_eq(a, b) {
            $crate::__baretest_soft!(
                "EXPECT_STRCASEEQ",
                concat!(stringify!($s1), " STRCASEEQ ", stringify!($s2)),
                Some((
                    "Expected (ignore case): \"%s\", Actual: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_strcasene!`](crate::assert_strcasene).
#[macro_export]
macro_rules! expect_strcasene {
    ($s1:expr, $s2:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        if $crate::value::str_case_eq(a, b) {
            $crate::__baretest_soft!(
                "EXPECT_STRCASENE",
                concat!(stringify!($s1), " STRCASENE ", stringify!($s2)),
                Some((
                    "Expected strings to be different (ignore case). s1: \"%s\", s2: \"%s\"",
                    &[$crate::Arg::Str(a.display()), $crate::Arg::Str(b.display())]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_strneq!`](crate::assert_strneq).
#[macro_export]
macro_rules! expect_strneq {
    ($s1:expr, $s2:expr, $n:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        let n = $n;
        if !$crate::value::str_prefix_eq(a, b, n) {
            $crate::__baretest_soft!(
                "EXPECT_STRNEQ",
                concat!(stringify!($s1), " STRNEQ(", stringify!($n), ") ", stringify!($s2)),
                Some((
                    "Expected first %d chars: \"%s\", Actual: \"%s\"",
                    &[
                        $crate::Arg::Int(n as i64),
                        $crate::Arg::Str(a.display()),
                        $crate::Arg::Str(b.display())
                    ]
                ))
            );
        }
    }};
}

/// Non-fatal counterpart of [`assert_strnne!`](crate::assert_strnne).
#[macro_export]
macro_rules! expect_strnne {
    ($s1:expr, $s2:expr, $n:expr $(,)?) => {{
        let a = $crate::StrOperand::from($s1);
        let b = $crate::StrOperand::from($s2);
        let n = $n;
        if $crate::value::str_prefix_eq(a, b, n) {
            $crate::__baretest_soft!(
                "EXPECT_STRNNE",
                concat!(stringify!($s1), " STRNNE(", stringify!($n), ") ", stringify!($s2)),
                Some((
                    "Expected first %d chars of strings to be different. s1: \"%s\", s2: \"%s\"",
                    &[
                        $crate::Arg::Int(n as i64),
                        $crate::Arg::Str(a.display()),
                        $crate::Arg::Str(b.display())
                    ]
                ))
            );
        }
    }};
}

// Floating-point checks. Exact equality is the deliberate value comparison;
// prefer the `*_near` forms for computed results.

/// Fatal exact `f32` equality.
#[macro_export]
macro_rules! assert_float_eq {
    ($v1:expr, $v2:expr $(,)?) => {{
        let v1 = ($v1) as f32;
        let v2 = ($v2) as f32;
        if !$crate::value::float_eq_f32(v1, v2) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "ASSERT_FLOAT_EQ",
                concat!(stringify!($v1), " == ", stringify!($v2)),
                v1 as f64,
                v2 as f64,
                None,
                true,
            );
            return $crate::TestResult::Failed;
        }
    }};
}

/// Fatal exact `f64` equality.
#[macro_export]
macro_rules! assert_double_eq {
    ($v1:expr, $v2:expr $(,)?) => {{
        let v1 = ($v1) as f64;
        let v2 = ($v2) as f64;
        if !$crate::value::float_eq_f64(v1, v2) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "ASSERT_DOUBLE_EQ",
                concat!(stringify!($v1), " == ", stringify!($v2)),
                v1,
                v2,
                None,
                false,
            );
            return $crate::TestResult::Failed;
        }
    }};
}

/// Fatal `f64` nearness: passes when `|v1 - v2| <= |tol|`.
#[macro_export]
macro_rules! assert_near {
    ($v1:expr, $v2:expr, $tol:expr $(,)?) => {{
        let v1 = ($v1) as f64;
        let v2 = ($v2) as f64;
        let tol = ($tol) as f64;
        if !$crate::value::near_f64(v1, v2, tol) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "ASSERT_NEAR",
                concat!(stringify!($v1), " NEAR ", stringify!($v2), ", error ", stringify!($tol)),
                v1,
                v2,
                Some(tol),
                false,
            );
            return $crate::TestResult::Failed;
        }
    }};
}

/// Fatal `f32` nearness; the difference is computed in double precision and
/// reported in single precision.
#[macro_export]
macro_rules! assert_float_near {
    ($v1:expr, $v2:expr, $tol:expr $(,)?) => {{
        let v1 = ($v1) as f32;
        let v2 = ($v2) as f32;
        let tol = ($tol) as f32;
        if !$crate::value::near_f32(v1, v2, tol) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "ASSERT_FLOAT_NEAR",
                concat!(stringify!($v1), " NEAR ", stringify!($v2), ", error ", stringify!($tol)),
                v1 as f64,
                v2 as f64,
                Some(tol as f64),
                true,
            );
            return $crate::TestResult::Failed;
        }
    }};
}

/// Non-fatal counterpart of [`assert_float_eq!`](crate::assert_float_eq).
#[macro_export]
macro_rules! expect_float_eq {
    ($v1:expr, $v2:expr $(,)?) => {{
        let v1 = ($v1) as f32;
        let v2 = ($v2) as f32;
        if !$crate::value::float_eq_f32(v1, v2) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "EXPECT_FLOAT_EQ",
                concat!(stringify!($v1), " == ", stringify!($v2)),
                v1 as f64,
                v2 as f64,
                None,
                true,
            );
            $crate::report::flag_soft_failure();
        }
    }};
}

/// Non-fatal counterpart of [`assert_double_eq!`](crate::assert_double_eq).
#[macro_export]
macro_rules! expect_double_eq {
    ($v1:expr, $v2:expr $(,)?) => {{
        let v1 = ($v1) as f64;
        let v2 = ($v2) as f64;
        if !$crate::value::float_eq_f64(v1, v2) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "EXPECT_DOUBLE_EQ",
                concat!(stringify!($v1), " == ", stringify!($v2)),
                v1,
                v2,
                None,
                false,
            );
            $crate::report::flag_soft_failure();
        }
    }};
}

/// Non-fatal counterpart of [`assert_near!`](crate::assert_near).
#[macro_export]
macro_rules! expect_near {
    ($v1:expr, $v2:expr, $tol:expr $(,)?) => {{
        let v1 = ($v1) as f64;
        let v2 = ($v2) as f64;
        let tol = ($tol) as f64;
        if !$crate::value::near_f64(v1, v2, tol) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "EXPECT_NEAR",
                concat!(stringify!($v1), " NEAR ", stringify!($v2), ", error ", stringify!($tol)),
                v1,
                v2,
                Some(tol),
                false,
            );
            $crate::report::flag_soft_failure();
        }
    }};
}

/// Non-fatal counterpart of [`assert_float_near!`](crate::assert_float_near).
#[macro_export]
macro_rules! expect_float_near {
    ($v1:expr, $v2:expr, $tol:expr $(,)?) => {{
        let v1 = ($v1) as f32;
        let v2 = ($v2) as f32;
        let tol = ($tol) as f32;
        if !$crate::value::near_f32(v1, v2, tol) {
            $crate::report::report_float_failure(
                file!(),
                line!(),
                "EXPECT_FLOAT_NEAR",
                concat!(stringify!($v1), " NEAR ", stringify!($v2), ", error ", stringify!($tol)),
                v1 as f64,
                v2 as f64,
                Some(tol as f64),
                true,
            );
            $crate::report::flag_soft_failure();
        }
    }};
}

// Explicit outcome primitives.

/// Unconditionally fails and aborts the current test body.
#[macro_export]
macro_rules! fail {
    () => {
        $crate::__baretest_fatal!("FAIL", "explicit failure", None)
    };
}

/// Unconditionally marks the current test as failed; execution continues.
#[macro_export]
macro_rules! add_failure {
    () => {
        $crate::__baretest_soft!("ADD_FAILURE", "explicit failure", None)
    };
}

/// Emits a success marker line. Diagnostic only; never affects the outcome.
#[macro_export]
macro_rules! succeed {
    () => {
        $crate::report::note_success(file!(), line!())
    };
}
