use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "frameml")]
#[command(about = "FrameML prompt script runner")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Validate one script or every script under a directory
    Check(CheckArgs),
    /// Execute a script and print its transcript
    Run(RunArgs),
    /// Run a script against a testcase, or all testcases of a document
    Test(TestArgs),
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct CheckArgs {
    #[arg(long = "script")]
    pub(crate) script: Option<String>,
    #[arg(long = "scripts-dir")]
    pub(crate) scripts_dir: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    #[arg(long = "script")]
    pub(crate) script: String,
    /// Initial variable as KEY=VALUE; repeatable
    #[arg(long = "var")]
    pub(crate) vars: Vec<String>,
    /// JSON array of canned responses; without it every prompt is answered
    /// with its first word
    #[arg(long = "responses")]
    pub(crate) responses: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct TestArgs {
    #[arg(long = "script")]
    pub(crate) script: String,
    #[arg(long = "case")]
    pub(crate) case: Option<String>,
}
