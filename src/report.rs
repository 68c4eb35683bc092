//! Failure diagnostics and the restricted message template engine.

use core::fmt::{self, Write};

use crate::context;
use crate::io::TestIo;

/// Message argument accepted by the template engine.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
}

/// Fixed-size line formatter used to render numbers without an allocator.
/// Output beyond the buffer capacity is dropped.
struct LineBuf {
    buf: [u8; 64],
    pos: usize,
}

impl LineBuf {
    const fn new() -> Self {
        Self {
            buf: [0; 64],
            pos: 0,
        }
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.pos]).unwrap_or("")
    }
}

impl Write for LineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let remaining = self.buf.len() - self.pos;
        let to_copy = core::cmp::min(bytes.len(), remaining);
        if to_copy > 0 {
            self.buf[self.pos..self.pos + to_copy].copy_from_slice(&bytes[..to_copy]);
            self.pos += to_copy;
        }
        Ok(())
    }
}

/// Writes an unsigned decimal number to the channel.
pub fn put_dec(io: &dyn TestIo, value: u32) {
    let mut buf = LineBuf::new();
    write!(buf, "{}", value).ok();
    io.put_str(buf.as_str());
}

fn put_int(io: &dyn TestIo, value: i64) {
    let mut buf = LineBuf::new();
    write!(buf, "{}", value).ok();
    io.put_str(buf.as_str());
}

/// Renders `template` to the channel.
///
/// Exactly two directives are understood: `%s` embeds the next argument's
/// string form, `%d` its wide-integer form. Any other directive, a trailing
/// `%`, or a directive with no remaining argument is emitted literally.
pub(crate) fn put_template(io: &dyn TestIo, template: &str, args: &[Arg<'_>]) {
    let bytes = template.as_bytes();
    let mut args = args.iter();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            io.put_char(b);
            i += 1;
            continue;
        }
        let Some(&directive) = bytes.get(i + 1) else {
            io.put_char(b'%');
            break;
        };
        match directive {
            b's' | b'd' => match args.next() {
                Some(Arg::Str(s)) => io.put_str(s),
                Some(Arg::Int(v)) => put_int(io, *v),
                None => {
                    io.put_char(b'%');
                    io.put_char(directive);
                }
            },
            other => {
                io.put_char(b'%');
                io.put_char(other);
            }
        }
        i += 2;
    }
}

/// Emits the standard failure block for an assertion at `file:line`:
///
/// ```text
/// <file>:<line>: Failure
///   <KIND>(<expression text>)
///     Message: <rendered template>
/// ```
///
/// Called by the assertion macros; outside an active dispatch the block
/// cannot reach the channel and degrades to a log entry.
pub fn report_failure(
    file: &str,
    line: u32,
    kind: &str,
    expr: &str,
    message: Option<(&str, &[Arg<'_>])>,
) {
    let reported = context::with_current(|ctx| {
        let io = ctx.io;
        io.put_str(file);
        io.put_char(b':');
        put_dec(io, line);
        io.put_str(": Failure\r\n");
        io.put_str("  ");
        io.put_str(kind);
        io.put_char(b'(');
        io.put_str(expr);
        io.put_str(")\r\n");
        if let Some((template, args)) = message {
            io.put_str("    Message: ");
            put_template(io, template, args);
            io.put_str("\r\n");
        }
    });
    if reported.is_none() {
        error!("{}:{}: {}({}) failed outside of an active test run", file, line, kind, expr);
    }
}

/// Reports a floating-point comparison failure. Operand values are rendered
/// at the precision of the assertion variant (`single`) and embedded as
/// strings, the only value form besides wide integers the template engine
/// carries.
pub fn report_float_failure(
    file: &str,
    line: u32,
    kind: &str,
    expr: &str,
    v1: f64,
    v2: f64,
    tolerance: Option<f64>,
    single: bool,
) {
    fn render(value: f64, single: bool) -> LineBuf {
        let mut buf = LineBuf::new();
        if single {
            write!(buf, "{}", value as f32).ok();
        } else {
            write!(buf, "{}", value).ok();
        }
        buf
    }

    let b1 = render(v1, single);
    let b2 = render(v2, single);
    match tolerance {
        Some(tol) => {
            let diff = render(crate::value::abs_f64(v1 - v2), single);
            let bound = render(crate::value::abs_f64(tol), single);
            report_failure(
                file,
                line,
                kind,
                expr,
                Some((
                    "Value1: %s, Value2: %s, Diff: %s, Max Abs Error: %s",
                    &[
                        Arg::Str(b1.as_str()),
                        Arg::Str(b2.as_str()),
                        Arg::Str(diff.as_str()),
                        Arg::Str(bound.as_str()),
                    ],
                )),
            );
        }
        None => {
            report_failure(
                file,
                line,
                kind,
                expr,
                Some((
                    "Expected: %s, Actual: %s",
                    &[Arg::Str(b1.as_str()), Arg::Str(b2.as_str())],
                )),
            );
        }
    }
}

/// Marks the running test as failed without aborting it.
pub fn flag_soft_failure() {
    if context::with_current(|ctx| ctx.flag_soft_failure()).is_none() {
        error!("soft failure flagged outside of an active test run");
    }
}

/// Emits the `SUCCEED()` marker line. Never affects the test outcome.
pub fn note_success(file: &str, line: u32) {
    context::with_current(|ctx| {
        let io = ctx.io;
        io.put_str(file);
        io.put_char(b':');
        put_dec(io, line);
        io.put_str(": SUCCEED()\r\n");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockIo;

    #[test]
    fn template_embeds_strings_and_integers() {
        let io = MockIo::new();
        put_template(&io, "Expected: %d, Actual: %s", &[Arg::Int(-7), Arg::Str("x")]);
        assert_eq!(io.output(), "Expected: -7, Actual: x");
    }

    #[test]
    fn template_passes_unknown_directives_through() {
        let io = MockIo::new();
        put_template(&io, "addr %p, got %d", &[Arg::Int(3)]);
        assert_eq!(io.output(), "addr %p, got 3");
    }

    #[test]
    fn template_keeps_trailing_percent() {
        let io = MockIo::new();
        put_template(&io, "100%", &[]);
        assert_eq!(io.output(), "100%");
    }

    #[test]
    fn template_with_exhausted_arguments_prints_directive() {
        let io = MockIo::new();
        put_template(&io, "%d and %d", &[Arg::Int(1)]);
        assert_eq!(io.output(), "1 and %d");
    }

    #[test]
    fn put_dec_renders_decimal() {
        let io = MockIo::new();
        put_dec(&io, 4_294_967_295);
        assert_eq!(io.output(), "4294967295");
    }
}
