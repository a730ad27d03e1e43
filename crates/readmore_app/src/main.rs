use clap::Parser;

mod platform;

fn main() -> anyhow::Result<()> {
    let args = platform::config::Args::parse();
    platform::run_app(args.into_config())
}
