pub mod cancellation;
pub mod evaluate;
pub mod generate_pixel_buffer;
