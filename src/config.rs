//! Application configuration and constants

// === Storage ===
pub const SIDECAR_EXT: &str = "msgpack";

// === Rendering ===
pub const DEFAULT_BLOCK_SIZE: u32 = 4;
