mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use thingd::constants::{defaults, envvars};
use thingd::helpers::load_dotenv;

const CMD_CHECK: &str = "check";
const CMD_STORE_CREDENTIALS: &str = "store-credentials";
const CMD_CLEAR_CREDENTIALS: &str = "clear-credentials";
const CMD_KVS_GET: &str = "kvs-get";
const CMD_KVS_SET: &str = "kvs-set";

fn main() -> Result<()> {
    let dotenv_files = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in dotenv_files {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_CHECK) => command::check(),
        Some(CMD_STORE_CREDENTIALS) => command::store_credentials(argsets::StoreCredentialsArgs {
            id: args.free_from_str()?,
            token: args.free_from_str()?,
        }),
        Some(CMD_CLEAR_CREDENTIALS) => command::clear_credentials(),
        Some(CMD_KVS_GET) => command::kvs_get(argsets::KvsGetArgs {
            store: args.free_from_str()?,
            group: args.free_from_str()?,
            key: args.free_from_str()?,
        }),
        Some(CMD_KVS_SET) => command::kvs_set(argsets::KvsSetArgs {
            store: args.free_from_str()?,
            group: args.free_from_str()?,
            key: args.free_from_str()?,
            value: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'check', 'store-credentials', 'clear-credentials', 'kvs-get', 'kvs-set'"
        )),
    }
}
