use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use image::{Rgb, RgbImage};

/// An RGB raster image usable as an `embedded-graphics` draw target.
///
/// Pixels outside the image are dropped.
pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    pub fn new(size: Size, background: Rgb888) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, to_rgb(background)),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

fn to_rgb(color: Rgb888) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

impl OriginDimensions for ImageCanvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for ImageCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < width && y < height {
                self.image.put_pixel(x, y, to_rgb(color));
            }
        }
        Ok(())
    }
}
