mod clash;
mod fraglib;
mod report;
mod split;
mod tables;

use clash::run_clash;
use fraglib::run_fraglib;
use report::run_report;
use split::run_split;
use tables::run_tables;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Clash(args) => run_clash(args, ctx),
        Command::Split(args) => run_split(args, ctx),
        Command::Tables(args) => run_tables(args, ctx),
        Command::Fraglib(args) => run_fraglib(args, ctx),
        Command::Report(args) => run_report(args, ctx),
    }
}
