use clap::{arg,crate_version,Arg,Command,ValueHint};

const GRAMMARS: [&str;2] = ["rgbasm","rgbasm_identifier"];

fn lib_arg() -> Arg {
    Arg::new("lib").long("lib").value_name("PATH").help("path to a compiled grammar library")
        .long_help("bypass the search paths and load the artifact from this shared library")
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn grammar_arg() -> Arg {
    Arg::new("grammar").short('g').long("grammar").value_name("NAME").help("grammar artifact")
        .value_parser(GRAMMARS)
        .required(false)
        .default_value("rgbasm")
}

pub fn build_cli() -> Command {
    let long_help = "gbkit is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
check the grammar loads:  `gbkit check -g rgbasm`
check an explicit build:  `gbkit check -g rgbasm --lib ./librgbasm.so`
handle metadata:          `gbkit describe -g rgbasm_identifier`
update hardware symbols:  `cat hardware.inc | gbkit hardware -f highlights.scm`";

    let mut main_cmd = Command::new("gbkit")
        .about("Verifies and maintains Game Boy assembly grammar artifacts.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("check")
        .arg(grammar_arg())
        .arg(lib_arg())
        .about("verify a compiled grammar artifact loads"));
    main_cmd = main_cmd.subcommand(Command::new("describe")
        .arg(grammar_arg())
        .arg(lib_arg())
        .about("write language handle metadata to stdout as JSON"));
    main_cmd = main_cmd.subcommand(Command::new("paths")
        .about("write grammar search paths to stdout"));
    main_cmd = main_cmd.subcommand(Command::new("hardware")
        .arg(arg!(-f --file <PATH> "support file with script-generated markers").required(true).value_hint(ValueHint::FilePath))
        .about("read hardware.inc from stdin, write updated support file to stdout"));
    main_cmd
}
