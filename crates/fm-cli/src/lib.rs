use std::ffi::OsString;

use clap::Parser;

mod cli_args;
mod commands;
mod error_map;

pub(crate) use cli_args::{CheckArgs, Cli, Mode, RunArgs, TestArgs};
pub(crate) use error_map::{
    emit_error, json_string, map_cli_responses_invalid, map_cli_responses_read,
    map_cli_var_invalid, CliError,
};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Mode::Check(args) => commands::run_check(args),
        Mode::Run(args) => commands::run_script(args),
        Mode::Test(args) => commands::run_test(args),
    }
}
