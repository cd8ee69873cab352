//! safeloader - firmware image tool for TP-Link SafeLoader devices
//!
//! Builds factory and sysupgrade images for devices whose stock bootloader
//! speaks the SafeLoader container format, and inspects, extracts or
//! converts existing vendor images. All format knowledge lives in the
//! `safeloader-core` crate; this binary only handles the CLI, files and
//! the environment.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.verbose {
        0 => {}
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(image) = cli.info.as_deref() {
        commands::info::run(image)
    } else if cli.extract.is_some() || cli.dir.is_some() {
        let image = cli
            .extract
            .as_deref()
            .ok_or("no factory/OEM image given via -x <file>; -d is only valid with -x")?;
        let dir = cli
            .dir
            .as_deref()
            .ok_or("can not extract an image without an output directory; use -d <dir>")?;
        commands::extract::run(image, dir)
    } else if let Some(image) = cli.convert.as_deref() {
        let output = cli
            .output
            .as_deref()
            .ok_or("can not convert an image without an output file; use -o <file>")?;
        commands::convert::run(image, output)
    } else {
        let board = cli.board.as_deref().ok_or("no board has been specified")?;
        let kernel = cli
            .kernel
            .as_deref()
            .ok_or("no kernel image has been specified")?;
        let rootfs = cli
            .rootfs
            .as_deref()
            .ok_or("no rootfs image has been specified")?;
        let output = cli
            .output
            .as_deref()
            .ok_or("no output filename has been specified")?;

        commands::build::run(commands::build::Args {
            board,
            kernel,
            rootfs,
            output,
            revision: cli.revision.as_deref(),
            add_jffs2_eof: cli.jffs2,
            sysupgrade: cli.sysupgrade,
        })
    }
}
