pub mod commands;

mod email;
