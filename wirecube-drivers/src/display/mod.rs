//! Display backends

pub mod framebuffer;
pub mod ili9341;

pub use framebuffer::Framebuffer;
pub use ili9341::Ili9341;
