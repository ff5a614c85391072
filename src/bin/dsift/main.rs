use std::process::ExitCode;

mod cli;
mod commands;
mod display;
mod io;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(match &cli.command {
        cli::Command::Clash(args) => args.common.quiet,
        cli::Command::Split(args) => args.common.quiet,
        cli::Command::Tables(args) => args.common.quiet,
        cli::Command::Fraglib(args) => args.common.quiet,
        cli::Command::Report(args) => args.common.quiet,
    });

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
