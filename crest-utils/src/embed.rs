/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0xF1_C4_0F;
