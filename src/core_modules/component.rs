// THEORY:
// The `component` module is the numeric foundation of the histogram engine. A pixel
// is made of one or more scalar components (a `u8` per band for 8-bit RGB, an `f32`
// for HDR data, a `u16` for medical scans), and every higher module needs to treat
// those components uniformly without forgetting what their native type is.
//
// Key architectural principles:
// 1.  **Native Equality**: The binner must compare a sample to the top of the declared
//     range in its *native* type. For `u8` data, `255 == 255` is exact; converting to a
//     float first and comparing with a tolerance would be fragile at domain edges.
// 2.  **Float Arithmetic**: Everything else (bin width, offsets, bin index) happens in
//     `f64`. This avoids truncation bias for integral data and makes `value - min`
//     safe for unsigned types, where native subtraction would wrap.
// 3.  **Native Bounds**: Each type publishes the range a full-scale histogram should
//     cover, so callers can ask for "the whole domain" without hardcoding 255.

pub mod component {
    use std::fmt::Debug;

    /// A scalar pixel component that can be counted into a histogram.
    pub trait HistogramComponent: Copy + PartialEq + Debug + Send + Sync + 'static {
        /// The lowest value of the component's nominal range.
        const MIN: Self;
        /// The highest value of the component's nominal range.
        const MAX: Self;

        /// Lossless (for every supported type) widening to `f64`.
        fn to_f64(self) -> f64;
    }

    macro_rules! impl_integral_component {
        ($($t:ty),*) => {
            $(
                impl HistogramComponent for $t {
                    const MIN: Self = <$t>::MIN;
                    const MAX: Self = <$t>::MAX;

                    #[inline]
                    fn to_f64(self) -> f64 {
                        self as f64
                    }
                }
            )*
        };
    }

    impl_integral_component!(u8, u16, u32, i8, i16, i32);

    // Floating point pixels are conventionally normalized to [0, 1].
    impl HistogramComponent for f32 {
        const MIN: Self = 0.0;
        const MAX: Self = 1.0;

        #[inline]
        fn to_f64(self) -> f64 {
            self as f64
        }
    }

    impl HistogramComponent for f64 {
        const MIN: Self = 0.0;
        const MAX: Self = 1.0;

        #[inline]
        fn to_f64(self) -> f64 {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::component::HistogramComponent;

    #[test]
    fn integral_bounds_cover_the_native_domain() {
        assert_eq!(<u8 as HistogramComponent>::MIN, 0);
        assert_eq!(<u8 as HistogramComponent>::MAX, 255);
        assert_eq!(<i16 as HistogramComponent>::MIN, i16::MIN);
        assert_eq!(<u16 as HistogramComponent>::MAX.to_f64(), 65535.0);
    }

    #[test]
    fn float_bounds_are_unit_interval() {
        assert_eq!(<f32 as HistogramComponent>::MIN, 0.0);
        assert_eq!(<f32 as HistogramComponent>::MAX, 1.0);
        assert_eq!(0.25f32.to_f64(), 0.25);
    }

    #[test]
    fn widening_is_exact_for_u32() {
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
    }
}
