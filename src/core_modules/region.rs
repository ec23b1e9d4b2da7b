// THEORY:
// The `region` module is the boundary between the histogram engine and whatever
// owns the pixels. The engine never walks an image itself; it asks a collaborator
// three questions:
//   1. how many channels does this image have,
//   2. give me channel `c` as a single-channel scalar image,
//   3. give me every value of that scalar image inside this rectangle.
//
// Those three questions are the `ChannelSource` trait. Keeping them behind a trait
// means the engine can be driven by the `image` crate in production and by a tiny
// in-memory fake in tests, with no change to the binning code.
//
// A `Region` is a plain axis-aligned rectangle, the same idea as the teacher's chunk
// grid cell: a top-left corner plus a size, all in pixel coordinates. It is opaque to
// the binner; only the collaborator interprets it.

pub mod region {
    use crate::core_modules::component::component::HistogramComponent;
    use crate::core_modules::error::error::HistogramError;
    use image::{ImageBuffer, Luma, Pixel};

    /// An axis-aligned rectangle of pixel coordinates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Region {
        /// Column of the top-left pixel.
        pub x: u32,
        /// Row of the top-left pixel.
        pub y: u32,
        pub width: u32,
        pub height: u32,
    }

    impl Region {
        pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
            Self {
                x,
                y,
                width,
                height,
            }
        }

        /// The region covering an entire `width` x `height` image.
        pub fn whole(width: u32, height: u32) -> Self {
            Self::new(0, 0, width, height)
        }

        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.height == 0
        }

        /// Number of pixels inside the region.
        pub fn area(&self) -> usize {
            self.width as usize * self.height as usize
        }

        /// True when every pixel of the region lies inside a `width` x `height` image.
        pub fn fits_within(&self, width: u32, height: u32) -> bool {
            let right = self.x.checked_add(self.width);
            let bottom = self.y.checked_add(self.height);
            matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
        }
    }

    /// The image-side collaborator the channel aggregator depends on.
    ///
    /// Implementations must be deterministic: extracting the same channel twice yields
    /// the same scalar image, and `values_in_region` returns every pixel of the region
    /// exactly once (in any order).
    pub trait ChannelSource {
        /// The scalar type of one pixel component.
        type Component: HistogramComponent;
        /// A single-channel view or copy of one band of the image.
        type Scalar;

        fn channel_count(&self) -> usize;

        fn extract_channel(&self, channel: usize) -> Result<Self::Scalar, HistogramError>;

        fn values_in_region(
            &self,
            scalar: &Self::Scalar,
            region: &Region,
        ) -> Result<Vec<Self::Component>, HistogramError>;
    }

    impl<P> ChannelSource for ImageBuffer<P, Vec<P::Subpixel>>
    where
        P: Pixel,
        P::Subpixel: HistogramComponent,
    {
        type Component = P::Subpixel;
        type Scalar = ImageBuffer<Luma<P::Subpixel>, Vec<P::Subpixel>>;

        fn channel_count(&self) -> usize {
            P::CHANNEL_COUNT as usize
        }

        fn extract_channel(&self, channel: usize) -> Result<Self::Scalar, HistogramError> {
            let channel_count = self.channel_count();
            if channel >= channel_count {
                return Err(HistogramError::ChannelOutOfBounds {
                    channel,
                    channel_count,
                });
            }
            Ok(ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
                Luma([self.get_pixel(x, y).channels()[channel]])
            }))
        }

        /// Values are produced in row-major order.
        fn values_in_region(
            &self,
            scalar: &Self::Scalar,
            region: &Region,
        ) -> Result<Vec<Self::Component>, HistogramError> {
            if !region.fits_within(scalar.width(), scalar.height()) {
                return Err(HistogramError::RegionOutOfBounds {
                    region: *region,
                    width: scalar.width(),
                    height: scalar.height(),
                });
            }

            let mut values = Vec::with_capacity(region.area());
            for y in region.y..region.y + region.height {
                for x in region.x..region.x + region.width {
                    values.push(scalar.get_pixel(x, y).0[0]);
                }
            }
            Ok(values)
        }
    }
}
