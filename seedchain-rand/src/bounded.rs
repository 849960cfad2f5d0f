//! Helpers for drawing integers no larger than a bound.
//!
//! A draw for the bound `max` reads [`byte_width(max)`][byte_width] bytes from the stream as a little-endian
//! candidate, then [`narrow`]s it: while the candidate exceeds `max` it is shifted right by one bit, at most
//! eight times per byte drawn. Shifting keeps the high bits of the candidate, so values in the lower part of
//! the range are more likely than values near `max`. Redrawing would be uniform but would change every
//! stream that depends on the current behaviour.

/// Returns the number of bytes needed to hold any value up to `max`.
///
/// | `max` below | width |
/// |---|---|
/// | 2<sup>8</sup> | 1 |
/// | 2<sup>16</sup> | 2 |
/// | 2<sup>24</sup> | 3 |
/// | 2<sup>32</sup> | 4 |
/// | 2<sup>40</sup> | 5 |
/// | 2<sup>48</sup> | 6 |
/// | 2<sup>56</sup> | 7 |
/// | otherwise | 8 |
pub const fn byte_width(max: u64) -> usize {
    let mut width = 1;
    while width < 8 && (max >> (width * 8)) != 0 {
        width += 1;
    }
    width
}

/// Shifts `candidate` right until it is at most `max`, allowing at most `8 * width` shifts.
///
/// Returns [`None`] if the candidate is still out of range after every allowed shift, which cannot happen
/// when `width` is at least [`byte_width(max)`][byte_width] and `candidate` fits in `width` bytes.
pub const fn narrow(mut candidate: u64, max: u64, width: usize) -> Option<u64> {
    let mut bits = width * 8;
    while candidate > max && bits > 0 {
        candidate >>= 1;
        bits -= 1;
    }

    if candidate <= max {
        Some(candidate)
    } else {
        None
    }
}
