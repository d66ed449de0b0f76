fn main() -> anyhow::Result<()> {
    fiendres::cli::run_cli()
}
