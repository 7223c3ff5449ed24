mod audit_log;
mod guild;
mod member;
mod permission;
mod role;
mod user;
