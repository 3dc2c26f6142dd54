pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod thing_mgmt;
