mod health;
mod helper;
