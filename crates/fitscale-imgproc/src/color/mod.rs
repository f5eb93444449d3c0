mod gray;
pub use gray::{gray_from_channels_u8, replicate_channels};
