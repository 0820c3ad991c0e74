pub mod config;
pub mod ingress;
pub mod proxy;
pub mod rules;
