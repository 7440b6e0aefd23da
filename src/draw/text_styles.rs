use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::{renderer::TextRenderer, Baseline},
};
use log::debug;
use paste::paste;

pub type StyleType = MonoTextStyle<'static, Rgb888>;

macro_rules! make_profont_table {
    ([$($size:literal),+]) => {
        paste! {
            /// Point sizes compiled into the binary
            pub const PROFONT_SIZES: &[u32] = &[$($size),+];

            fn profont(size: u32) -> Option<&'static MonoFont<'static>> {
                match size {
                    $(
                        $size => Some(&profont::[<PROFONT_ $size _POINT>]),
                    )+
                    _ => None,
                }
            }
        }
    };
}

make_profont_table!([7, 9, 10, 12, 14, 18, 24]);

/// The profont face of `size`, or the built-in 6x10 font when there is none
pub fn font(size: u32) -> &'static MonoFont<'static> {
    profont(size).unwrap_or_else(|| {
        debug!("no {size}pt font, using built-in default");
        &FONT_6X10
    })
}

pub fn style(size: u32, color: Rgb888) -> StyleType {
    StyleType::new(font(size), color)
}

/// Rendered width of `text` in pixels
pub fn text_width(style: &StyleType, text: &str) -> u32 {
    style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width
}
