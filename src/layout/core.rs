use std::num::NonZeroU16;

// Intermediate products are carried in i64: a u16 count times an i32 extent
// cannot overflow it, and results are narrowed back with saturation.
fn span_wide(count: NonZeroU16, pad: i32, width: i32) -> i64 {
    let count = i64::from(count.get());
    i64::from(width) * count + i64::from(pad) * (count - 1)
}

fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Total horizontal span of `count` widgets of `width` separated by `pad`.
///
/// Spans beyond the `i32` range saturate.
pub fn row_span(count: NonZeroU16, pad: i32, width: i32) -> i32 {
    narrow(span_wide(count, pad, width))
}

/// Left offset that centres a row of `count` widgets inside `total` pixels.
///
/// The result truncates toward zero and is not clamped: a row wider than
/// `total` produces a negative offset.
pub fn row_offset(total: i32, count: NonZeroU16, pad: i32, width: i32) -> i32 {
    narrow((i64::from(total) - span_wide(count, pad, width)) / 2)
}

/// Width available to each of `count` equal widgets spread across `total` pixels,
/// reserving `pad + 1` pixels per widget for gaps and borders.
pub fn uniform_width(total: i32, count: NonZeroU16, pad: i32) -> i32 {
    let count = i64::from(count.get());
    narrow((i64::from(total) - count * (i64::from(pad) + 1)) / count)
}
