pub mod checkin_commands;
pub mod reward_config_commands;
