//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem directly on [`Display`], using [`Rgb565`] which is also the
//! controller's native 16-bit interface format.
//!
//! There is no frame buffer. Every pixel from `draw_iter` becomes a 1x1
//! window write, and `fill_solid` becomes one window plus a streamed fill, so
//! solid shapes are much cheaper than scattered pixels.
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//!
//! display.clear(Rgb565::BLACK)?;
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display)?;
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{
        Rgb565,
        raw::{RawData, RawU16},
    },
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

fn raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                let (x, y) = (point.x as u32, point.y as u32);
                if x < sz.width && y < sz.height {
                    let (x, y) = (x as u16, y as u16);
                    self.blit(x, y, x, y, &raw(color).to_be_bytes())?;
                }
            }
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
            raw(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}
