// Application commands

pub mod checkin_commands;
pub mod token_commands;
