// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Arguments shared by the default invocation and `convert`
fn convert_args() -> Vec<Arg> {
    vec![
        Arg::new("root")
            .default_value(".")
            .help("Directory to convert recursively"),
        Arg::new("suffix")
            .short('s')
            .long("suffix")
            .value_name("SUFFIX")
            .default_value(".py")
            .help("File name suffix of files to convert"),
        Arg::new("dry_run")
            .short('n')
            .long("dry-run")
            .action(ArgAction::SetTrue)
            .help("Show which files would change without writing them"),
        Arg::new("keep_going")
            .short('k')
            .long("keep-going")
            .action(ArgAction::SetTrue)
            .help("Continue past files that cannot be read or written"),
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Send all notices to info-level logs instead of stdout (shown with RUST_LOG=info)"),
    ]
}

fn build_cli() -> Command {
    Command::new("printconv")
        .version(env!("CARGO_PKG_VERSION"))
        .author("printconv contributors")
        .about("Convert statement-style print lines into call-style print()")
        .args_conflicts_with_subcommands(true)
        .args(convert_args())
        .subcommand(
            Command::new("convert")
                .about("Convert a directory tree (the default when no subcommand is given)")
                .args(convert_args()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell to generate completions for"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("printconv.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
