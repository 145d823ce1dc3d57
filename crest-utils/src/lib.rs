/// Embed styling shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '-';
/// Permission helper utilities.
pub mod permissions;
