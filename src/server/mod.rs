//! HTTP backend.
//!
//! Links Discord accounts to local users, registers Discord servers as guilds and
//! keeps each guild's tier roles and permission grants in line with Discord.
//!
//! Requests go router, `middleware` guards, `controller`, `service`, `data`. A
//! service that writes opens one transaction and passes it down to the repositories
//! it calls. `model` holds the domain types between the layers; DTOs live in the
//! crate-level `model` module.
//!
//! `startup` builds the database, session layer and clients that make up
//! `state::AppState` from `config::Config`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
