mod cli;
mod commands;

use cli::{CheckParams, GenParams, ListParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("gen", m)) => {
            let params = GenParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
